use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::entities::admin::{AdminLoginRequest, AdminUser};
use crate::entities::token::LoginResponse;
use crate::errors::{AppError, AuthError};
use crate::repositories::admin::AdminRepository;
use crate::repositories::token::TokenService;

pub struct AuthHandler<R, T>
where
    R: AdminRepository,
    T: TokenService,
{
    pub admin_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: AdminRepository,
    T: TokenService,
{
    pub fn new(admin_repo: R, token_service: T) -> Self {
        AuthHandler {
            admin_repo,
            token_service,
        }
    }

    /// Exchanges admin credentials for a bearer token. Unknown username and
    /// wrong password collapse into the same `WrongCredentials` signal so the
    /// response never reveals which half failed.
    pub async fn login(&self, request: AdminLoginRequest) -> Result<LoginResponse, AuthError> {
        request.validate()?;

        let admin = self.admin_repo.get_admin_by_username(&request.username)
            .await
            .map_err(|_e| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &admin.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.token_service.create_jwt(&admin.username)
            .map_err(|e| {
                tracing::warn!("Failed to create JWT: {}", e);
                AuthError::TokenCreation
            })?;

        tracing::info!("Admin logged in successfully");
        Ok(LoginResponse::new(access_token, self.token_service.expires_in_secs()))
    }

    /// Inserts the configured admin identity if it does not exist yet.
    /// Returns true when a new record was created.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if self.admin_repo.get_admin_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let password_hash = hash_password(password)?;
        let admin = AdminUser::new(username, password_hash);
        self.admin_repo.create_admin(&admin).await?;

        Ok(true)
    }
}
