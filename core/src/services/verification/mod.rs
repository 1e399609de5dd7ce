//! Verification lifecycle: registration, code issuance, verification, resend.

pub mod code_generator;
pub mod config;
pub mod service;
pub mod traits;

#[cfg(test)]
mod tests;

pub use code_generator::generate_code;
pub use config::VerificationConfig;
pub use service::VerificationService;
pub use traits::MailerTrait;
