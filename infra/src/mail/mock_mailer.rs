//! Mock mailer for development and testing.
//!
//! Logs verification codes instead of sending mail, records every message
//! so tests can assert on deliveries, and can be switched into a failing
//! mode to exercise delivery-failure paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use acct_core::services::verification::MailerTrait;

/// Mock mailer that logs instead of sending
pub struct MockMailer {
    /// Number of messages accepted
    message_count: AtomicU64,
    /// When true, every send fails
    simulate_failure: AtomicBool,
    /// Record of (recipient, code) pairs
    sent_messages: Mutex<Vec<(String, String)>>,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            message_count: AtomicU64::new(0),
            simulate_failure: AtomicBool::new(false),
            sent_messages: Mutex::new(Vec::new()),
        }
    }

    /// Toggle failure simulation
    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of messages accepted so far
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Last code sent to the given address, if any
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent_messages
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err("simulated mail delivery failure".to_string());
        }

        info!(to = email, code, "[MOCK MAIL] verification code");

        self.sent_messages
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        self.message_count.fetch_add(1, Ordering::SeqCst);

        Ok(format!("mock-{}", Uuid::new_v4()))
    }
}
