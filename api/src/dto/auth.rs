//! Authentication DTOs with request validation rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request body for POST /api/v1/auth/register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address, unique per account
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Plaintext password, hashed before storage
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Optional display name
    pub full_name: Option<String>,
}

/// Request body for POST /api/v1/auth/verify-email
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Verification code, decimal digits only
    ///
    /// The configured code length is enforced by the exact-match check in
    /// the verification service, not here, so a non-default length does
    /// not reject valid codes at the boundary.
    #[validate(custom = "validate_code_digits")]
    pub code: String,
}

fn validate_code_digits(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("code_digits");
        error.message = Some("Code must contain only digits".into());
        return Err(error);
    }
    Ok(())
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/resend-code
#[derive(Debug, Deserialize, Validate)]
pub struct ResendCodeRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Public view of an account returned after registration
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_verified: bool,
}

/// Generic confirmation message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
