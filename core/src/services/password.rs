//! Credential verifier: one-way password hashing and verification.
//!
//! bcrypt embeds a per-hash salt, so hashing the same plaintext twice
//! yields different digests while `verify_password` still matches both.

use bcrypt::{hash, verify};

use crate::errors::{DomainError, DomainResult};

/// Default bcrypt cost factor
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a plaintext password with the given bcrypt cost
pub fn hash_password(plaintext: &str, cost: u32) -> DomainResult<String> {
    hash(plaintext, cost).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verify a plaintext password against a stored digest
pub fn verify_password(plaintext: &str, digest: &str) -> DomainResult<bool> {
    verify(plaintext, digest).map_err(|e| DomainError::Internal {
        message: format!("Password verification failed: {}", e),
    })
}
