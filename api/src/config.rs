//! Server configuration loaded from environment variables.

use anyhow::Context;
use std::env;

use acct_core::domain::entities::token::ACCESS_TOKEN_EXPIRY_MINUTES;
use acct_core::services::token::TokenConfig;
use acct_core::services::verification::VerificationConfig;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Token issuance settings
    pub token: TokenConfig,
    /// Verification code settings
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// `SERVER_HOST` and `SERVER_PORT` default to `127.0.0.1:8080`.
    /// `JWT_SECRET` falls back to the development default; the caller is
    /// expected to warn when that happens.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid port number")?;

        let mut token = match env::var("JWT_SECRET") {
            Ok(secret) => TokenConfig::new(secret),
            Err(_) => TokenConfig::default(),
        };
        token.access_token_expiry_minutes = env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(ACCESS_TOKEN_EXPIRY_MINUTES);
        if let Ok(issuer) = env::var("JWT_ISSUER") {
            token.issuer = issuer;
        }

        let mut verification = VerificationConfig::default();
        if let Some(length) = env::var("VERIFICATION_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            verification.code_length = length;
        }
        if let Some(minutes) = env::var("VERIFICATION_CODE_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            verification.code_expiry_minutes = minutes;
        }
        if let Some(cost) = env::var("BCRYPT_COST").ok().and_then(|v| v.parse().ok()) {
            verification.bcrypt_cost = cost;
        }

        Ok(Self {
            host,
            port,
            token,
            verification,
        })
    }

    /// Address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
