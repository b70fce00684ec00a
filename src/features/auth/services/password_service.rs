use pbkdf2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use pbkdf2::{Params, Pbkdf2};
use rand::Rng;

use crate::core::error::{AppError, Result};

const SALT_LEN: usize = 16;
const OUTPUT_LEN: usize = 32;

/// PBKDF2-SHA256 password hashing, stored as PHC strings
/// (`$pbkdf2-sha256$i=<rounds>,l=32$<salt>$<hash>`).
///
/// The round count is read back from the stored hash on verification, so
/// raising `PASSWORD_HASH_ROUNDS` only affects newly hashed passwords.
#[derive(Debug, Clone)]
pub struct PasswordService {
    rounds: u32,
}

impl PasswordService {
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }

    pub fn hash(&self, password: &str) -> Result<String> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| AppError::Internal(format!("Failed to encode salt: {}", e)))?;

        let params = Params {
            rounds: self.rounds,
            output_length: OUTPUT_LEN,
        };

        let hash = Pbkdf2
            .hash_password_customized(password.as_bytes(), None, None, params, &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Returns `Ok(false)` on mismatch, `Err` only when the stored hash is unreadable
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;

        match Pbkdf2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AppError::Internal(format!(
                "Failed to verify password: {}",
                e
            ))),
        }
    }

    /// Hash on the blocking pool
    pub async fn hash_blocking(&self, password: String) -> Result<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    /// Verify on the blocking pool
    pub async fn verify_blocking(&self, password: String, stored_hash: String) -> Result<bool> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        PasswordService::new(1_000)
    }

    #[test]
    fn test_hash_is_phc_string() {
        let hash = service().hash("correct horse battery").unwrap();
        assert!(hash.starts_with("$pbkdf2-sha256$i=1000,l=32$"));
    }

    #[test]
    fn test_verify_roundtrip() {
        let svc = service();
        let hash = svc.hash("correct horse battery").unwrap();

        assert!(svc.verify("correct horse battery", &hash).unwrap());
        assert!(!svc.verify("wrong horse battery", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salt() {
        let svc = service();
        let a = svc.hash("same-password").unwrap();
        let b = svc.hash("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_uses_rounds_from_stored_hash() {
        let old = PasswordService::new(1_000);
        let hash = old.hash("legacy-password").unwrap();

        let current = PasswordService::new(5_000);
        assert!(current.verify("legacy-password", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(service().verify("anything", "not-a-phc-string").is_err());
    }

    #[tokio::test]
    async fn test_blocking_variants() {
        let svc = service();
        let hash = svc.hash_blocking("s3cret-pass".to_string()).await.unwrap();
        assert!(svc
            .verify_blocking("s3cret-pass".to_string(), hash)
            .await
            .unwrap());
    }
}
