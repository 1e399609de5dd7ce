//! Verification service configuration.

use crate::services::password;

use super::code_generator::DEFAULT_CODE_LENGTH;

/// Default verification code lifetime (15 minutes)
pub const DEFAULT_CODE_EXPIRY_MINUTES: i64 = 15;

/// Configuration for the verification lifecycle service
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Number of digits in a verification code
    pub code_length: usize,

    /// Minutes until a freshly issued code expires
    pub code_expiry_minutes: i64,

    /// bcrypt cost factor used when hashing passwords
    pub bcrypt_cost: u32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            code_expiry_minutes: DEFAULT_CODE_EXPIRY_MINUTES,
            bcrypt_cost: password::DEFAULT_COST,
        }
    }
}
