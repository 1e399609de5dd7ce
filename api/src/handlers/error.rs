//! Mapping from domain errors to HTTP responses.
//!
//! Each domain error variant owns exactly one status code and stable error
//! code. Server-side failures are logged in full but reported to clients
//! with a generic message.

use actix_web::HttpResponse;
use serde::Serialize;
use validator::ValidationErrors;

use acct_core::errors::{AuthError, DomainError, TokenError};

/// Standard error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorResponse {
    fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Convert a domain error into an HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Token(token) => token_error_response(token),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            &format!("{} not found", resource),
        )),
        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            internal_error_response()
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error_response()
        }
    }
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::EmailAlreadyRegistered => HttpResponse::Conflict().json(ErrorResponse::new(
            "EMAIL_ALREADY_REGISTERED",
            "An account with this email already exists",
        )),
        AuthError::AccountNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
            "ACCOUNT_NOT_FOUND",
            "No account found for this email",
        )),
        AuthError::AlreadyVerified => HttpResponse::BadRequest().json(ErrorResponse::new(
            "ALREADY_VERIFIED",
            "This account is already verified",
        )),
        AuthError::InvalidVerificationCode => HttpResponse::BadRequest().json(
            ErrorResponse::new("INVALID_VERIFICATION_CODE", "Invalid verification code"),
        ),
        AuthError::VerificationCodeExpired => HttpResponse::BadRequest().json(
            ErrorResponse::new("VERIFICATION_CODE_EXPIRED", "Verification code has expired"),
        ),
        // Unknown email and wrong password produce the same response
        AuthError::InvalidCredentials => HttpResponse::Unauthorized()
            .insert_header(("WWW-Authenticate", "Bearer"))
            .json(ErrorResponse::new(
                "INVALID_CREDENTIALS",
                "Invalid email or password",
            )),
        AuthError::EmailNotVerified => HttpResponse::Forbidden().json(ErrorResponse::new(
            "EMAIL_NOT_VERIFIED",
            "Email address has not been verified",
        )),
        AuthError::NotificationFailure => {
            log::error!("Verification mail delivery failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "NOTIFICATION_FAILURE",
                "Failed to send verification email",
            ))
        }
    }
}

fn token_error_response(error: &TokenError) -> HttpResponse {
    match error {
        TokenError::TokenExpired | TokenError::InvalidToken => HttpResponse::Unauthorized()
            .insert_header(("WWW-Authenticate", "Bearer"))
            .json(ErrorResponse::new("INVALID_TOKEN", "Invalid or expired token")),
        TokenError::TokenGenerationFailed => {
            log::error!("Token generation failed: {}", error);
            internal_error_response()
        }
    }
}

/// Convert validator errors into a 400 response listing the failed fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let detail: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", &detail.join("; ")))
}

fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "INTERNAL_ERROR",
        "An internal error occurred",
    ))
}
