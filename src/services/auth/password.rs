//! Password digest creation/verification (bcrypt).
//!
//! The raw password only ever exists in the request that carried it; handlers
//! pass it straight through here and persist the digest.

use bcrypt::{DEFAULT_COST, hash, verify};
use tracing::error;

use crate::error::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(|e| {
        error!(error = %e, "failed to hash password");
        AppError::Internal
    })
}

/// Check a password against a stored digest.
///
/// A digest that fails to parse is a server fault (corrupt row), not a bad
/// credential, so it surfaces as `Internal` rather than `false`.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    verify(password, digest).map_err(|e| {
        error!(error = %e, "failed to verify password digest");
        AppError::Internal
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_verifies_and_never_stores_plaintext() {
        let digest = hash_password("sekret").unwrap();

        assert_ne!(digest, "sekret");
        assert!(!digest.contains("sekret"));
        assert!(verify_password("sekret", &digest).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let digest = hash_password("sekret").unwrap();
        assert!(!verify_password("wrong", &digest).unwrap());
    }

    #[test]
    fn corrupt_digest_is_a_server_fault() {
        assert!(verify_password("sekret", "not-a-bcrypt-digest").is_err());
    }
}
