use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use acct_api::app::create_app;
use acct_api::config::AppConfig;
use acct_api::routes::auth::AppState;

use acct_core::services::auth::AuthService;
use acct_core::services::token::TokenService;
use acct_core::services::verification::VerificationService;

use acct_infra::database::{create_pool, DatabaseConfig, MySqlAccountRepository};
use acct_infra::mail::Mailer;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting account service API");

    let config = AppConfig::from_env()?;
    if config.token.is_using_default_secret() {
        warn!("JWT_SECRET not set, using development default");
    }

    // Database
    let db_config = DatabaseConfig::from_env()?;
    let pool = create_pool(&db_config).await?;
    let account_repository = Arc::new(MySqlAccountRepository::new(pool));

    // Mail delivery
    let mailer = Arc::new(Mailer::from_env()?);

    // Services
    let token_service = Arc::new(TokenService::new(config.token.clone()));
    let verification_service = Arc::new(VerificationService::new(
        account_repository.clone(),
        mailer,
        config.verification.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(account_repository, token_service));

    let app_state = web::Data::new(AppState {
        verification_service,
        auth_service,
    });

    let bind_address = config.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
