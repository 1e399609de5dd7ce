//! # Account Service Infrastructure
//!
//! Concrete implementations of the core crate's collaborator interfaces:
//! the MySQL account store and the outbound mail delivery services.

pub mod database;
pub mod mail;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Mail delivery error: {0}")]
    Mail(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
