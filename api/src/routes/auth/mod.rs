//! Authentication route handlers
//!
//! This module contains all account lifecycle endpoints:
//! - Registration
//! - Email verification (and code resend)
//! - Login

pub mod login;
pub mod register;
pub mod resend_code;
pub mod verify_email;

use std::sync::Arc;

use acct_core::repositories::AccountRepository;
use acct_core::services::auth::AuthService;
use acct_core::services::verification::{MailerTrait, VerificationService};

/// Application state that holds shared services
pub struct AppState<U, M>
where
    U: AccountRepository,
    M: MailerTrait,
{
    pub verification_service: Arc<VerificationService<U, M>>,
    pub auth_service: Arc<AuthService<U>>,
}
