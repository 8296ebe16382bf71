use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};

use crate::entities::token::Claims;
use crate::repositories::token::TokenService;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn create_jwt(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.access_expiration).timestamp() as usize;

        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp() as usize,
            exp,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(AuthError::from)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }

    pub fn expires_in_secs(&self) -> i64 {
        self.access_expiration.num_seconds()
    }
}

impl TokenService for JwtService {
    fn create_jwt(&self, username: &str) -> Result<String, AuthError> {
        self.create_jwt(username)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_jwt(token)
    }

    fn expires_in_secs(&self) -> i64 {
        self.expires_in_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;

    fn test_config(expiration_minutes: i64) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            worker_count: 1,
            cors_allowed_origins: vec!["*".to_string()],
            jwt_secret: "jwt_test_secret_long_enough_for_hs512_0123456789".to_string(),
            jwt_expiration_minutes: expiration_minutes,
            admin_username: "admin".to_string(),
            admin_password: "test-password".to_string(),
            seed_demo_data: false,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let service = JwtService::new(&test_config(15));
        let token = service.create_jwt("admin").unwrap();

        let decoded = service.decode_jwt(&token).unwrap();
        assert_eq!(decoded.claims.sub, "admin");
        assert!(decoded.claims.exp > decoded.claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        // -5 minutes puts exp beyond the validation leeway.
        let service = JwtService::new(&test_config(-5));
        let token = service.create_jwt("admin").unwrap();

        match service.decode_jwt(&token) {
            Err(AuthError::TokenExpired) => {}
            other => panic!("expected TokenExpired, got {:?}", other.map(|d| d.claims)),
        }
    }

    #[test]
    fn garbage_token_is_invalid() {
        let service = JwtService::new(&test_config(15));
        match service.decode_jwt("not-a-token") {
            Err(AuthError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {:?}", other.map(|d| d.claims)),
        }
    }
}
