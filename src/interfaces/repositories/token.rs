use jsonwebtoken::TokenData;

use crate::{entities::token::Claims, errors::AuthError};

pub trait TokenService: Send + Sync {
    fn create_jwt(&self, username: &str) -> Result<String, AuthError>;
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;
    fn expires_in_secs(&self) -> i64;
}
