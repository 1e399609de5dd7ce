//! Session authentication: credential checks and token issuance on login.

pub mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
