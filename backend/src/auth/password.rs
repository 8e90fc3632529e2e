//! Password hashing
//!
//! New hashes are Argon2id. Accounts migrated from the previous deployment
//! still carry bcrypt hashes (`$2a$`, `$2b$`, `$2y$`), which are verified
//! with bcrypt and never produced.
//!
//! Both algorithms are CPU-intensive; async callers use the `_async`
//! variants, which run on the blocking pool.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::OnceLock;

/// Hash compared against when the username does not exist
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with Argon2id (blocking)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking)
    ///
    /// A wrong password is `Ok(false)`; only an unparseable hash is an error.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        if is_bcrypt_hash(hash) {
            return bcrypt::verify(password, hash)
                .map_err(|e| anyhow::anyhow!("Invalid bcrypt hash: {}", e));
        }

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Spend the cost of one verification and report failure.
    ///
    /// Used when there is no stored hash so unknown usernames take as long
    /// as wrong passwords.
    pub async fn verify_missing_async(password: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || {
            let hash = dummy_hash()?;
            Self::verify(&password, hash).map(|_| false)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

fn dummy_hash() -> Result<&'static str> {
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }
    let hash = PasswordService::hash("lifestyle-hub-unknown-user")?;
    Ok(DUMMY_HASH.get_or_init(|| hash))
}

fn is_bcrypt_hash(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2y$"].iter().any(|p| hash.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hash = PasswordService::hash(password).unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(PasswordService::verify(password, &hash).unwrap());
        assert!(!PasswordService::verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "test_password";
        let hash1 = PasswordService::hash(password).unwrap();
        let hash2 = PasswordService::hash(password).unwrap();

        assert_ne!(hash1, hash2);
        assert!(PasswordService::verify(password, &hash1).unwrap());
        assert!(PasswordService::verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_legacy_bcrypt_hash_verifies() {
        // Low cost keeps the test fast
        let legacy = bcrypt::hash("legacy-pass", 4).unwrap();

        assert!(PasswordService::verify("legacy-pass", &legacy).unwrap());
        assert!(!PasswordService::verify("other-pass", &legacy).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_error() {
        assert!(PasswordService::verify("anything", "not-a-hash").is_err());
    }

    #[test]
    fn test_bcrypt_prefix_detection() {
        assert!(is_bcrypt_hash("$2b$12$abc"));
        assert!(is_bcrypt_hash("$2y$10$abc"));
        assert!(!is_bcrypt_hash("$argon2id$v=19$..."));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = "async_test_password".to_string();
        let hash = PasswordService::hash_async(password.clone()).await.unwrap();

        assert!(PasswordService::verify_async(password, hash.clone()).await.unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_missing_never_succeeds() {
        assert!(!PasswordService::verify_missing_async("lifestyle-hub-unknown-user".to_string())
            .await
            .unwrap());
        // Second call reuses the cached hash
        assert!(!PasswordService::verify_missing_async("anything".to_string())
            .await
            .unwrap());
        assert!(dummy_hash().unwrap().starts_with("$argon2id$"));
    }
}
