//! Bearer token issuing and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT claims embedded in access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub user_id: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn is_access(&self) -> bool {
        self.token_type == ACCESS_TOKEN_TYPE
    }
}

/// Issue an access token for a user.
pub fn generate_access_token(
    user_id: Uuid,
    username: &str,
    jwt_secret: &str,
    expiry_secs: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: username.to_string(),
        user_id: user_id.to_string(),
        token_type: ACCESS_TOKEN_TYPE.to_string(),
        exp: (now + Duration::seconds(expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))
}

/// Validate a JWT and return the claims.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let validation = Validation::default();

    jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_generation_and_validation() {
        let id = Uuid::new_v4();
        let secret = "test-secret-key-for-jwt";
        let token = generate_access_token(id, "alice", secret, 900).unwrap();

        let claims = validate_token(&token, secret).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.user_id, id.to_string());
        assert!(claims.is_access());
    }

    #[test]
    fn invalid_token_rejected() {
        let result = validate_token("garbage.token.here", "secret");
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = generate_access_token(Uuid::nil(), "alice", "one", 900).unwrap();
        assert!(validate_token(&token, "two").is_err());
    }

    #[test]
    fn expired_token_rejected() {
        // Well beyond the default 60s leeway.
        let token = generate_access_token(Uuid::nil(), "alice", "test-secret", -3600).unwrap();
        assert!(validate_token(&token, "test-secret").is_err());
    }
}
