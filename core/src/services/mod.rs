//! Business services.

pub mod auth;
pub mod password;
pub mod token;
pub mod verification;

pub use auth::AuthService;
pub use token::{TokenConfig, TokenService};
pub use verification::{MailerTrait, VerificationConfig, VerificationService};
