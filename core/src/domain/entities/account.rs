//! Account entity representing a registered user of the service.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered (possibly not yet verified) user
///
/// An account moves through two states: unverified, during which a pending
/// verification code and its expiry may be set, and verified, after which
/// the code fields are always cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Email address, unique across all accounts (case-sensitive as stored)
    pub email: String,

    /// One-way password digest (bcrypt)
    pub password_hash: String,

    /// Optional display name
    pub full_name: Option<String>,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Pending verification code, only present while unverified
    pub verification_code: Option<String>,

    /// Expiry of the pending verification code, set together with the code
    pub code_expires_at: Option<DateTime<Utc>>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified account without a pending code
    pub fn new(email: String, password_hash: String, full_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            full_name,
            is_verified: false,
            verification_code: None,
            code_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a fresh verification code and its expiry
    ///
    /// Code and expiry are always written together so the invariant
    /// "non-null code implies non-null expiry" holds by construction.
    pub fn issue_code(&mut self, code: String, expires_at: DateTime<Utc>) {
        self.verification_code = Some(code);
        self.code_expires_at = Some(expires_at);
        self.updated_at = Utc::now();
    }

    /// Marks the account as verified and clears the pending code
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.verification_code = None;
        self.code_expires_at = None;
        self.updated_at = Utc::now();
    }

    /// Checks whether a submitted code exactly matches the pending code
    ///
    /// Uses a constant-time comparison to avoid leaking match position
    /// through timing. Returns `false` when no code is pending.
    pub fn code_matches(&self, submitted: &str) -> bool {
        match &self.verification_code {
            Some(code) => {
                code.len() == submitted.len()
                    && constant_time_eq(code.as_bytes(), submitted.as_bytes())
            }
            None => false,
        }
    }

    /// Checks whether the pending code has expired at the given instant
    ///
    /// The boundary instant itself is still valid; only strictly after
    /// the expiry does the code count as expired. An account without a
    /// pending expiry is treated as expired.
    pub fn is_code_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.code_expires_at {
            Some(expires_at) => now > expires_at,
            None => true,
        }
    }

    /// Checks whether the pending code has expired
    pub fn is_code_expired(&self) -> bool {
        self.is_code_expired_at(Utc::now())
    }

    /// Checks whether a verification code is pending
    pub fn has_pending_code(&self) -> bool {
        self.verification_code.is_some()
    }
}
