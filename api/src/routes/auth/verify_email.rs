use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{MessageResponse, VerifyEmailRequest};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

use acct_core::repositories::AccountRepository;
use acct_core::services::verification::MailerTrait;

/// Handler for POST /api/v1/auth/verify-email
///
/// Marks the account as verified when the submitted code matches the live
/// code and has not expired.
///
/// # Responses
/// - `200 OK`: email verified
/// - `400 Bad Request`: already verified, wrong code, or expired code
/// - `404 Not Found`: no account for this email
pub async fn verify_email<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<VerifyEmailRequest>,
) -> HttpResponse
where
    U: AccountRepository + 'static,
    M: MailerTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .verification_service
        .verify_email(&request.email, &request.code)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "Email verified successfully".to_string(),
        }),
        Err(error) => {
            log::warn!("Verification failed for {}: {}", request.email, error);
            domain_error_response(&error)
        }
    }
}
