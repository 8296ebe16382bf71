use actix_web::web;

use crate::handlers::{auth, contact, projects, system::admin_health_check};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(auth::login)
            .service(admin_health_check)
            .service(
                web::resource("/projects")
                    .route(web::get().to(projects::admin_get_projects))
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::put().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project))
            )
            .service(
                web::resource("/contact-messages")
                    .route(web::get().to(contact::admin_get_contact_messages))
            )
    );
}
