use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::admin::AdminUser,
    errors::AppError,
    repositories::memory::MemoryAdminRepo,
};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError>;
    async fn create_admin(&self, admin: &AdminUser) -> Result<Uuid, AppError>;
}

impl MemoryAdminRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for MemoryAdminRepo {
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError> {
        Ok(self.records.get(username).map(|entry| entry.value().clone()))
    }

    async fn create_admin(&self, admin: &AdminUser) -> Result<Uuid, AppError> {
        if self.records.contains_key(&admin.username) {
            return Err(AppError::Conflict("Admin with this username already exists".to_string()));
        }
        self.records.insert(admin.username.clone(), admin.clone());
        Ok(admin.id)
    }
}
