//! Session authenticator implementation.

use std::sync::Arc;

use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password;
use crate::services::token::TokenService;

/// Service authenticating credentials and issuing session tokens
pub struct AuthService<U: AccountRepository> {
    /// Account repository for lookups
    account_repository: Arc<U>,
    /// Token service for bearer token issuance
    token_service: Arc<TokenService>,
}

impl<U: AccountRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(account_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            account_repository,
            token_service,
        }
    }

    /// Authenticate an email/password pair and issue a bearer token
    ///
    /// An unknown email and a wrong password both return
    /// `InvalidCredentials` so a caller cannot probe which addresses have
    /// accounts. A correct password on an unverified account returns
    /// `EmailNotVerified` instead of a token.
    pub async fn login(&self, email: &str, password_plain: &str) -> DomainResult<AuthResponse> {
        let account = match self.account_repository.find_by_email(email).await? {
            Some(account) => account,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !password::verify_password(password_plain, &account.password_hash)? {
            tracing::warn!(email, event = "login_failed", "password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !account.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let access_token = self.token_service.generate_access_token(&account.email)?;
        tracing::info!(email, event = "login_succeeded", "issued session token");

        Ok(AuthResponse::bearer(access_token))
    }
}
