use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{MessageResponse, ResendCodeRequest};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

use acct_core::repositories::AccountRepository;
use acct_core::services::verification::MailerTrait;

/// Handler for POST /api/v1/auth/resend-code
///
/// Generates a fresh verification code for an unverified account and sends
/// it. The previous code stops working as soon as the new one is stored.
///
/// # Responses
/// - `200 OK`: new code sent
/// - `400 Bad Request`: account already verified
/// - `404 Not Found`: no account for this email
/// - `500 Internal Server Error`: mail delivery failed (the new code is
///   still the live one)
pub async fn resend_code<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<ResendCodeRequest>,
) -> HttpResponse
where
    U: AccountRepository + 'static,
    M: MailerTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.verification_service.resend_code(&request.email).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "Verification code sent".to_string(),
        }),
        Err(error) => {
            log::warn!("Resend failed for {}: {}", request.email, error);
            domain_error_response(&error)
        }
    }
}
