//! Password hashing using bcrypt
//!
//! Provides salted hashing and verification with a configurable work factor.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. Request handlers go through the
//! `_async` variants, which move the work onto the blocking thread pool.

use anyhow::Result;

/// Password hashing service
///
/// Cheap to clone; it only carries the bcrypt cost factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Create a service hashing at `cost` (bcrypt accepts 4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The configured work factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// The digest comparison inside `bcrypt::verify` is constant-time.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(10)
    }
}
