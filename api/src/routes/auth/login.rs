use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::LoginRequest;
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

use acct_core::repositories::AccountRepository;
use acct_core::services::verification::MailerTrait;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates with email and password and returns a bearer access token.
///
/// # Responses
/// - `200 OK`: `{ "access_token": "...", "token_type": "bearer" }`
/// - `401 Unauthorized`: unknown email or wrong password, with a
///   `WWW-Authenticate: Bearer` header
/// - `403 Forbidden`: credentials valid but email not verified
pub async fn login<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: AccountRepository + 'static,
    M: MailerTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(auth),
        Err(error) => {
            log::warn!("Login failed for {}: {}", request.email, error);
            domain_error_response(&error)
        }
    }
}
