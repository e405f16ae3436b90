//! Bearer token issue/verify (HS256).
//!
//! The token is stateless: it embeds `{username, id}` plus `iat`/`exp` and is
//! verified per request. There is no server-side session or revocation list;
//! deleted users are caught by the middleware's user lookup, not here.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt};
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;

// Errors returned by token verification + strict claim validation.
#[derive(Debug)]
pub enum TokenError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
    InvalidUserId,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
            Self::InvalidUserId => write!(f, "invalid 'id' (expected UUID)"),
        }
    }
}

impl StdError for TokenError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Wire claims. `id` stays a string in the token; it is promoted to `Uuid`
/// during verification.
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    username: String,
    id: String,
    iat: i64,
    exp: i64,
}

/// 検証済み・アプリ側で使う型
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub user_id: Uuid,
    pub username: String,
}

/// HS256 token service.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: u64, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    /// Issue a signed token embedding `{username, id}`.
    pub fn issue(&self, username: &str, user_id: Uuid) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            username: username.to_string(),
            id: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_seconds as i64,
        };

        let header = Header::new(Algorithm::HS256);
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign token");
            AppError::Internal
        })
    }

    /// Verify signature/expiry, then promote claims into an
    /// application-friendly type.
    ///
    /// `jsonwebtoken::Validation` already checks:
    /// - signature
    /// - `exp` (with the configured leeway)
    ///
    /// This method additionally checks that `username` is non-empty and that
    /// `id` is a UUID.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        let data =
            jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        if claims.username.trim().is_empty() {
            return Err(TokenError::EmptyClaim("username"));
        }

        let user_id = Uuid::parse_str(&claims.id).map_err(|_| TokenError::InvalidUserId)?;

        Ok(VerifiedToken {
            user_id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_verify_roundtrip_preserves_claims() {
        let svc = TokenService::new("secret", 3600, 0);
        let user_id = Uuid::new_v4();

        let token = svc.issue("root", user_id).unwrap();
        let verified = svc.verify(&token).unwrap();

        assert_eq!(verified.username, "root");
        assert_eq!(verified.user_id, user_id);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let svc = TokenService::new("secret", 3600, 0);
        let other = TokenService::new("other-secret", 3600, 0);

        let token = other.issue("root", Uuid::new_v4()).unwrap();
        assert!(matches!(svc.verify(&token), Err(TokenError::Jwt(_))));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let svc = TokenService::new("secret", 3600, 0);
        assert!(svc.verify("not.a.jwt").is_err());
        assert!(svc.verify("").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = TokenService::new("secret", 3600, 0);

        // Craft an already-expired token with the same key.
        let now = chrono::Utc::now().timestamp();
        let claims = serde_json::json!({
            "username": "root",
            "id": Uuid::new_v4().to_string(),
            "iat": now - 7200,
            "exp": now - 3600,
        });
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(svc.verify(&token), Err(TokenError::Jwt(_))));
    }

    #[test]
    fn non_uuid_id_claim_is_rejected() {
        let svc = TokenService::new("secret", 3600, 0);

        let now = chrono::Utc::now().timestamp();
        let claims = serde_json::json!({
            "username": "root",
            "id": "42",
            "iat": now,
            "exp": now + 3600,
        });
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(svc.verify(&token), Err(TokenError::InvalidUserId)));
    }
}
