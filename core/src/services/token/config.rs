//! Token service configuration.

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_MINUTES;

const DEFAULT_SECRET: &str = "dev-secret-change-in-production";

/// Configuration for JWT signing and validation
///
/// The secret is process-wide and loaded once at startup; rotating it
/// invalidates all outstanding tokens.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Issuer claim value
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_SECRET.to_string(),
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            issuer: "account-service".to_string(),
        }
    }
}

impl TokenConfig {
    /// Create a configuration with the given secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Check whether the development fallback secret is still in use
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}
