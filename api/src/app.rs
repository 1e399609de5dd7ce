//! Application factory
//!
//! Builds the Actix-web application with middleware, routes, and shared
//! state. Generic over the repository and mailer so integration tests can
//! run against in-memory implementations.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    login::login, register::register, resend_code::resend_code, verify_email::verify_email,
    AppState,
};

use acct_core::repositories::AccountRepository;
use acct_core::services::verification::MailerTrait;

/// Create and configure the application with all dependencies
pub fn create_app<U, M>(
    app_state: web::Data<AppState<U, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: AccountRepository + 'static,
    M: MailerTrait + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, M>))
                    .route("/verify-email", web::post().to(verify_email::<U, M>))
                    .route("/login", web::post().to(login::<U, M>))
                    .route("/resend-code", web::post().to(resend_code::<U, M>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "account-service-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
