//! Route handlers.

pub mod auth;
