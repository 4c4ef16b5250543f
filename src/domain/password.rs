use anyhow::Result;

/// Password hashing and verification seam.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;
}
