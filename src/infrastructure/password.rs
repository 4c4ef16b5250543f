use crate::domain::password::PasswordHasher;
use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Argon2 implementation of the password hashing seam.
#[derive(Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        Ok(hash)
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid password hash: {}", e))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash_password("testpassword123").unwrap();

        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_password() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash_password("testpassword123").unwrap();

        assert!(hasher.verify_password("testpassword123", &hash).unwrap());
        assert!(!hasher.verify_password("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hasher = Argon2Hasher::new();
        let hash1 = hasher.hash_password("testpassword123").unwrap();
        let hash2 = hasher.hash_password("testpassword123").unwrap();

        // Different salts produce different hashes
        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password("testpassword123", &hash2).unwrap());
    }
}
