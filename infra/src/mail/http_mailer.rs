//! HTTP mail-provider implementation of the mailer collaborator.
//!
//! Sends verification emails through a JSON mail-provider API
//! (Resend/SendGrid-style: bearer-key auth, one POST per message).
//! There is deliberately no retry: a failed or hung delivery only affects
//! the request that triggered it, and the resend endpoint recovers.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use acct_core::services::verification::MailerTrait;

use crate::InfrastructureError;

/// Mail provider configuration
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Provider send endpoint
    pub api_url: String,
    /// Provider API key
    pub api_key: String,
    /// From address for all verification mail
    pub from_address: String,
    /// Timeout for provider requests in seconds
    pub request_timeout_secs: u64,
}

impl MailerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_url = std::env::var("MAIL_API_URL")
            .map_err(|_| InfrastructureError::Config("MAIL_API_URL not set".to_string()))?;
        let api_key = std::env::var("MAIL_API_KEY")
            .map_err(|_| InfrastructureError::Config("MAIL_API_KEY not set".to_string()))?;
        let from_address = std::env::var("MAIL_FROM")
            .map_err(|_| InfrastructureError::Config("MAIL_FROM not set".to_string()))?;

        Ok(Self {
            api_url,
            api_key,
            from_address,
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Mailer delivering through an HTTP mail-provider API
pub struct HttpMailer {
    client: reqwest::Client,
    config: MailerConfig,
}

impl HttpMailer {
    /// Create a new HTTP mailer
    pub fn new(config: MailerConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build client: {}", e)))?;

        info!(from = %config.from_address, "HTTP mailer initialized");
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MailerConfig::from_env()?)
    }
}

#[async_trait]
impl MailerTrait for HttpMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let body = serde_json::json!({
            "from": self.config.from_address,
            "to": [email],
            "subject": "Verification Code",
            "html": format!(
                "Your verification code is {}, code will be expired in 15 minutes.",
                code
            ),
        });

        debug!(to = email, "sending verification mail");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("mail provider request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("mail provider returned {}: {}", status, detail));
        }

        // Providers return a message id in the response body; fall back to
        // a local id if the shape is unexpected.
        let message_id = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("id").and_then(|id| id.as_str().map(String::from)))
            .unwrap_or_else(|| format!("local-{}", uuid::Uuid::new_v4()));

        info!(to = email, message_id, "verification mail accepted by provider");
        Ok(message_id)
    }
}
