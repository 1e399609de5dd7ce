//! Collaborator traits for outbound notification.

use async_trait::async_trait;

/// Trait for the outbound mail collaborator
///
/// Implementations deliver a verification code to a single recipient and
/// return a provider message id on success. Delivery failures are reported
/// as plain strings; the caller decides how they surface.
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send a verification code to an email address
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}
