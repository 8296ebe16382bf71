use actix_web::{post, web, HttpResponse, Responder};

use crate::{entities::admin::AdminLoginRequest, errors::AuthError, AppState};

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    data: web::Json<AdminLoginRequest>,
) -> Result<impl Responder, AuthError> {
    let response = state.auth_handler.login(data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
