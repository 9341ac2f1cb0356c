//! JWT token issuance and verification
//! Tokens are stateless: a signed assertion of (subject, role) with a
//! fixed 24 hour validity window. Expiry is the only lifecycle
//! termination; there is no server-side revocation.

use crate::{config::AppConfig, error::AppError, models::auth::Role};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed token validity window: 24 hours.
pub const TOKEN_TTL_SECS: i64 = 86_400;

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (principal ID)
    pub sub: String,

    /// Principal role (member or admin)
    pub role: Role,

    /// Issued at (unix seconds)
    pub iat: i64,

    /// Expiration (unix seconds)
    pub exp: i64,
}

/// JWT service holding the process-wide signing keys
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create the service from config. The secret is read once here
    /// and lives in the keys for the rest of the process lifetime.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // HS256 needs a reasonably long secret
        if secret.len() < 32 {
            return Err(AppError::Config(
                "JWT secret too short (min 32 chars)".to_string(),
            ));
        }

        Ok(Self::from_secret(secret))
    }

    /// Create the service from a raw secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for a verified principal
    pub fn issue(&self, subject_id: &Uuid, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(TOKEN_TTL_SECS);

        let claims = Claims {
            sub: subject_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal(format!("Failed to encode token: {}", e))
        })
    }

    /// Validate a presented token and return its claims.
    /// An expired signature is reported distinctly from every other
    /// decode failure.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                tracing::debug!("Token expired");
                Err(AppError::ExpiredToken)
            }
            Err(e) => {
                tracing::debug!("Token validation failed: {:?}", e);
                Err(AppError::InvalidToken)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_32_characters_long!";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = JwtService::from_secret(TEST_SECRET);
        let subject_id = Uuid::new_v4();

        let token = service.issue(&subject_id, Role::Member).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, subject_id.to_string());
        assert_eq!(claims.role, Role::Member);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = JwtService::from_secret(TEST_SECRET);
        assert!(matches!(
            service.verify("not_a_token"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = JwtService::from_secret(TEST_SECRET);
        let verifier = JwtService::from_secret("another_secret_key_32_characters!!!");

        let token = issuer.issue(&Uuid::new_v4(), Role::Admin).unwrap();
        assert!(matches!(
            verifier.verify(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_reported_as_expired() {
        let service = JwtService::from_secret(TEST_SECRET);
        let now = Utc::now();

        // Minted 25 hours ago, expired one hour ago
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: Role::Member,
            iat: (now - Duration::hours(25)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AppError::ExpiredToken)
        ));
    }
}
