// src/auth/password.rs

use bcrypt::{BcryptError, hash, verify};

use super::models::PasswordDigest;
use crate::error::{AppError, AppResult};

/// Salted adaptive hashing. The digest carries its own cost, so changing
/// the cost never invalidates stored digests.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Fresh random salt on every call
    pub fn hash(&self, plaintext: &str) -> AppResult<PasswordDigest> {
        if plaintext.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        hash(plaintext, self.cost)
            .map(PasswordDigest::from_stored)
            .map_err(|e: BcryptError| match e {
                BcryptError::CostNotAllowed(_) => AppError::validation(format!("Invalid hash cost: {}", e)),
                other => AppError::internal(format!("Failed to hash password: {}", other)),
            })
    }

    /// `Ok(false)` on mismatch; `Format` only when the digest itself is not a bcrypt digest
    pub fn verify(&self, plaintext: &str, digest: &PasswordDigest) -> AppResult<bool> {
        verify(plaintext, digest.as_str()).map_err(|e: BcryptError| match e {
            BcryptError::InvalidCost(_)
            | BcryptError::InvalidPrefix(_)
            | BcryptError::InvalidHash(_)
            | BcryptError::InvalidSaltLen(_)
            | BcryptError::InvalidBase64(_) => AppError::format(format!("password digest: {}", e)),
            other => AppError::internal(format!("Failed to verify password: {}", other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let digest = hasher().hash("hunter22").unwrap();
        assert!(digest.as_str().starts_with("$2"));
        assert!(hasher().verify("hunter22", &digest).unwrap());
        assert!(!hasher().verify("hunter23", &digest).unwrap());
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let a = hasher().hash("same-password").unwrap();
        let b = hasher().hash("same-password").unwrap();
        assert_ne!(a, b);
        assert!(hasher().verify("same-password", &a).unwrap());
        assert!(hasher().verify("same-password", &b).unwrap());
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = hasher().hash("").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_malformed_digest_is_format_error() {
        let digest = PasswordDigest::from_stored("not-a-bcrypt-digest".to_string());
        let err = hasher().verify("anything", &digest).unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn test_digest_from_other_cost_still_verifies() {
        let digest = PasswordHasher::new(5).hash("portable").unwrap();
        assert!(hasher().verify("portable", &digest).unwrap());
    }
}
