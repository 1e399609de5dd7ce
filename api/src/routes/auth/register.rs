use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AccountResponse, RegisterRequest};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

use acct_core::repositories::AccountRepository;
use acct_core::services::verification::MailerTrait;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account with an unverified email and sends a verification
/// code to the given address. Re-registering an unverified email replaces
/// the stored credentials and issues a fresh code; a verified email
/// conflicts.
///
/// # Responses
/// - `201 Created`: account created, verification code sent
/// - `400 Bad Request`: invalid email or password
/// - `409 Conflict`: email already registered and verified
/// - `500 Internal Server Error`: verification mail could not be sent
///   (the account is still created; use resend-code to retry)
pub async fn register<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: AccountRepository + 'static,
    M: MailerTrait + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for register request: {:?}", errors);
        return validation_error_response(&errors);
    }

    log::info!("Processing registration for email: {}", request.email);

    match state
        .verification_service
        .register(&request.email, &request.password, request.full_name.clone())
        .await
    {
        Ok(account) => HttpResponse::Created().json(AccountResponse {
            id: account.id.to_string(),
            email: account.email,
            full_name: account.full_name,
            is_verified: account.is_verified,
        }),
        Err(error) => {
            log::warn!("Registration failed for {}: {}", request.email, error);
            domain_error_response(&error)
        }
    }
}
