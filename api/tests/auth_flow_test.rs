//! End-to-end tests for the authentication endpoints.
//!
//! Runs the full Actix application against the in-memory repository and
//! mock mailer, exercising every documented status code.

use actix_web::{http::StatusCode, test, web};
use std::sync::Arc;

use acct_api::app::create_app;
use acct_api::routes::auth::AppState;

use acct_core::repositories::{AccountRepository, MockAccountRepository};
use acct_core::services::auth::AuthService;
use acct_core::services::token::{TokenConfig, TokenService};
use acct_core::services::verification::{VerificationConfig, VerificationService};

use acct_infra::mail::MockMailer;

const TEST_SECRET: &str = "integration-test-secret";

struct TestContext {
    state: web::Data<AppState<MockAccountRepository, MockMailer>>,
    repo: Arc<MockAccountRepository>,
    mailer: Arc<MockMailer>,
    token_service: Arc<TokenService>,
}

fn test_context() -> TestContext {
    test_context_with(VerificationConfig {
        bcrypt_cost: 4,
        ..Default::default()
    })
}

fn test_context_with(config: VerificationConfig) -> TestContext {
    let repo = Arc::new(MockAccountRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let token_service = Arc::new(TokenService::new(TokenConfig::new(TEST_SECRET)));

    let verification_service = Arc::new(VerificationService::new(
        repo.clone(),
        mailer.clone(),
        config,
    ));
    let auth_service = Arc::new(AuthService::new(repo.clone(), token_service.clone()));

    TestContext {
        state: web::Data::new(AppState {
            verification_service,
            auth_service,
        }),
        repo,
        mailer,
        token_service,
    }
}

fn register_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "s3cure-password",
        "full_name": "Test User",
    })
}

/// Flip the first digit so the result is a valid-length but wrong code
fn wrong_code(code: &str) -> String {
    let replacement = if code.starts_with('0') { '1' } else { '0' };
    format!("{}{}", replacement, &code[1..])
}

#[actix_web::test]
async fn test_register_creates_unverified_account_and_sends_code() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "user@example.com");
    assert_eq!(body["is_verified"], false);

    let code = ctx.mailer.last_code_for("user@example.com").unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    let stored = ctx
        .repo
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.is_verified);
    assert_eq!(stored.verification_code.as_deref(), Some(code.as_str()));
}

#[actix_web::test]
async fn test_register_rejects_invalid_payload() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "email": "not-an-email",
            "password": "s3cure-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "short",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(ctx.repo.count().await, 0);
}

#[actix_web::test]
async fn test_register_verified_email_conflicts() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let code = ctx.mailer.last_code_for("user@example.com").unwrap();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_ALREADY_REGISTERED");
}

#[actix_web::test]
async fn test_register_unverified_email_reissues_code() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
    let first_id = ctx
        .repo
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap()
        .id;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    // Same account record, two codes delivered
    let stored = ctx
        .repo
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, first_id);
    assert_eq!(ctx.repo.count().await, 1);
    assert_eq!(ctx.mailer.message_count(), 2);
}

#[actix_web::test]
async fn test_register_mail_failure_persists_pending_account() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    ctx.mailer.set_simulate_failure(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOTIFICATION_FAILURE");

    // Account and its code survive the delivery failure
    let stored = ctx
        .repo
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.verification_code.is_some());

    // Resend repairs the state once delivery works again
    ctx.mailer.set_simulate_failure(false);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-code")
        .set_json(serde_json::json!({ "email": "user@example.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let code = ctx.mailer.last_code_for("user@example.com").unwrap();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_verify_email_then_repeat_is_rejected() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;
    let code = ctx.mailer.last_code_for("user@example.com").unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let stored = ctx
        .repo
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_verified);
    assert!(stored.verification_code.is_none());
    assert!(stored.code_expires_at.is_none());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_VERIFIED");
}

#[actix_web::test]
async fn test_verify_email_wrong_code() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;
    let code = ctx.mailer.last_code_for("user@example.com").unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "code": wrong_code(&code),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_VERIFICATION_CODE");
}

#[actix_web::test]
async fn test_verify_email_rejects_non_digit_code() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": "12a456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_verify_email_accepts_configured_code_length() {
    // Codes longer than the default six digits must pass request
    // validation and verify end to end.
    let ctx = test_context_with(VerificationConfig {
        code_length: 8,
        bcrypt_cost: 4,
        ..Default::default()
    });
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let code = ctx.mailer.last_code_for("user@example.com").unwrap();
    assert_eq!(code.len(), 8);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_verify_email_unknown_account() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "nobody@example.com", "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_verify_email_expired_code() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;
    let code = ctx.mailer.last_code_for("user@example.com").unwrap();

    // Push the expiry into the past
    let mut stored = ctx
        .repo
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    stored.code_expires_at = Some(chrono::Utc::now() - chrono::Duration::seconds(1));
    ctx.repo.update(stored).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VERIFICATION_CODE_EXPIRED");
}

#[actix_web::test]
async fn test_login_requires_verified_email() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "s3cure-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_NOT_VERIFIED");
}

#[actix_web::test]
async fn test_login_returns_verifiable_bearer_token() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;
    let code = ctx.mailer.last_code_for("user@example.com").unwrap();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "s3cure-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");

    let claims = ctx
        .token_service
        .verify_access_token(body["access_token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, "user@example.com");
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials_uniformly() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    // Wrong password and unknown email produce the same response
    for (email, password) in [
        ("user@example.com", "wrong-password"),
        ("nobody@example.com", "s3cure-password"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "email": email, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers()
                .get("WWW-Authenticate")
                .and_then(|v| v.to_str().ok()),
            Some("Bearer")
        );
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_CREDENTIALS");
    }
}

#[actix_web::test]
async fn test_resend_code_invalidates_previous_code() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;
    let old_code = ctx.mailer.last_code_for("user@example.com").unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-code")
        .set_json(serde_json::json!({ "email": "user@example.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let new_code = ctx.mailer.last_code_for("user@example.com").unwrap();
    let stored = ctx
        .repo
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.verification_code.as_deref(), Some(new_code.as_str()));

    // The old code only works if resend happened to generate it again
    if old_code != new_code {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/verify-email")
            .set_json(serde_json::json!({ "email": "user@example.com", "code": old_code }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": new_code }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_resend_code_guards() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-code")
        .set_json(serde_json::json!({ "email": "nobody@example.com" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("user@example.com"))
        .to_request();
    test::call_service(&app, req).await;
    let code = ctx.mailer.last_code_for("user@example.com").unwrap();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "code": code }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-code")
        .set_json(serde_json::json!({ "email": "user@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_VERIFIED");
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/v2/nothing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
