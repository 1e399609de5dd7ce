//! # Account Service Core
//!
//! Core business logic and domain layer for the account service.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types. It performs no I/O of its own: the
//! account store and the outbound mailer are reached through traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
