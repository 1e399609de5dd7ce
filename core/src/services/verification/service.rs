//! Verification lifecycle service implementation.

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password;

use super::code_generator::generate_code;
use super::config::VerificationConfig;
use super::traits::MailerTrait;

/// Service orchestrating registration, code issuance, verification, and resend
///
/// State machine per account: `Unverified (no code)` →
/// `Unverified (pending code, expiry)` → `Verified`. Verified accounts
/// never carry a code.
pub struct VerificationService<U: AccountRepository, M: MailerTrait> {
    /// Account repository for persistence
    account_repository: Arc<U>,
    /// Outbound mail collaborator
    mailer: Arc<M>,
    /// Service configuration
    config: VerificationConfig,
}

impl<U: AccountRepository, M: MailerTrait> VerificationService<U, M> {
    /// Create a new verification service
    pub fn new(account_repository: Arc<U>, mailer: Arc<M>, config: VerificationConfig) -> Self {
        Self {
            account_repository,
            mailer,
            config,
        }
    }

    /// Register a new account and send it a verification code
    ///
    /// An existing verified account is a conflict. An existing unverified
    /// account is reused: password and name are replaced and a fresh code
    /// is issued, so re-registering behaves like a resend. A create that
    /// loses a race to another registration surfaces the store's
    /// uniqueness violation as a conflict.
    ///
    /// The account is persisted before delivery is attempted; if delivery
    /// fails the pending account (and its live code) remain, and the error
    /// is `NotificationFailure`. Resend repairs that state.
    pub async fn register(
        &self,
        email: &str,
        password_plain: &str,
        full_name: Option<String>,
    ) -> DomainResult<Account> {
        let password_hash = password::hash_password(password_plain, self.config.bcrypt_cost)?;
        let code = generate_code(self.config.code_length);
        let expires_at = Utc::now() + Duration::minutes(self.config.code_expiry_minutes);

        let account = match self.account_repository.find_by_email(email).await? {
            Some(existing) if existing.is_verified => {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
            Some(mut existing) => {
                existing.password_hash = password_hash;
                existing.full_name = full_name;
                existing.issue_code(code.clone(), expires_at);
                self.account_repository.update(existing).await?
            }
            None => {
                let mut account = Account::new(email.to_string(), password_hash, full_name);
                account.issue_code(code.clone(), expires_at);
                self.account_repository.create(account).await?
            }
        };

        tracing::info!(
            email,
            account_id = %account.id,
            event = "verification_code_issued",
            expires_at = %expires_at,
            "issued verification code for registration"
        );

        self.deliver_code(email, &code).await?;

        Ok(account)
    }

    /// Verify a submitted code for an account
    ///
    /// Checks run in order: account exists, not already verified, code
    /// matches exactly, code not expired. The expiry comparison is strict:
    /// the boundary instant is still valid. On success the account flips
    /// to verified and the code fields are cleared.
    pub async fn verify_email(&self, email: &str, submitted_code: &str) -> DomainResult<()> {
        let mut account = self
            .account_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if account.is_verified {
            return Err(AuthError::AlreadyVerified.into());
        }
        if !account.code_matches(submitted_code) {
            tracing::warn!(
                email,
                event = "verification_code_mismatch",
                "submitted verification code does not match"
            );
            return Err(AuthError::InvalidVerificationCode.into());
        }
        if account.is_code_expired_at(Utc::now()) {
            return Err(AuthError::VerificationCodeExpired.into());
        }

        account.verify();
        self.account_repository.update(account).await?;

        tracing::info!(email, event = "email_verified", "account verified");
        Ok(())
    }

    /// Regenerate and resend the verification code for an unverified account
    ///
    /// The new code replaces the previous one before delivery is attempted;
    /// if delivery then fails the new code stays live even though the user
    /// never saw it, and the error is `NotificationFailure`.
    pub async fn resend_code(&self, email: &str) -> DomainResult<()> {
        let mut account = self
            .account_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if account.is_verified {
            return Err(AuthError::AlreadyVerified.into());
        }

        let code = generate_code(self.config.code_length);
        let expires_at = Utc::now() + Duration::minutes(self.config.code_expiry_minutes);
        account.issue_code(code.clone(), expires_at);
        self.account_repository.update(account).await?;

        tracing::info!(
            email,
            event = "verification_code_reissued",
            expires_at = %expires_at,
            "reissued verification code"
        );

        self.deliver_code(email, &code).await
    }

    async fn deliver_code(&self, email: &str, code: &str) -> DomainResult<()> {
        match self.mailer.send_verification_code(email, code).await {
            Ok(message_id) => {
                tracing::info!(
                    email,
                    message_id,
                    event = "verification_mail_sent",
                    "delivered verification code"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    email,
                    error = %e,
                    event = "verification_mail_failed",
                    "failed to deliver verification code"
                );
                Err(AuthError::NotificationFailure.into())
            }
        }
    }
}
