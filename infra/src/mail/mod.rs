//! Outbound mail delivery implementations.

pub mod http_mailer;
pub mod mock_mailer;

pub use http_mailer::{HttpMailer, MailerConfig};
pub use mock_mailer::MockMailer;

use async_trait::async_trait;

use acct_core::services::verification::MailerTrait;

/// Runtime-selected mailer
///
/// `from_env` picks the HTTP provider when `MAIL_API_URL` is configured and
/// falls back to the logging mock otherwise, so development environments
/// work without provider credentials.
pub enum Mailer {
    Http(HttpMailer),
    Mock(MockMailer),
}

impl Mailer {
    /// Select and build a mailer from environment variables
    pub fn from_env() -> Result<Self, crate::InfrastructureError> {
        if std::env::var("MAIL_API_URL").is_ok() {
            Ok(Self::Http(HttpMailer::from_env()?))
        } else {
            tracing::warn!("MAIL_API_URL not set, using mock mailer");
            Ok(Self::Mock(MockMailer::new()))
        }
    }
}

#[async_trait]
impl MailerTrait for Mailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            Self::Http(mailer) => mailer.send_verification_code(email, code).await,
            Self::Mock(mailer) => mailer.send_verification_code(email, code).await,
        }
    }
}
