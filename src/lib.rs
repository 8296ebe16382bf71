mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod seed;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::auth;

use auth::jwt::JwtService;
use repositories::memory::{MemoryAdminRepo, MemoryContactRepo, MemoryProjectRepo};
use use_cases::{auth::AuthHandler, contact::ContactHandler, projects::ProjectsHandler};

pub type AppProjectsHandler = ProjectsHandler<MemoryProjectRepo>;
pub type AppContactHandler = ContactHandler<MemoryContactRepo>;
pub type AppAuthHandler = AuthHandler<MemoryAdminRepo, JwtService>;

pub struct AppState {
    pub projects_handler: AppProjectsHandler,
    pub contact_handler: AppContactHandler,
    pub auth_handler: AppAuthHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let jwt_service = JwtService::new(config);

        AppState {
            projects_handler: ProjectsHandler::new(MemoryProjectRepo::new()),
            contact_handler: ContactHandler::new(MemoryContactRepo::new()),
            auth_handler: AuthHandler::new(MemoryAdminRepo::new(), jwt_service),
        }
    }
}
