//! HTTP layer for the account service.
//!
//! Exposes the registration, verification and login endpoints over
//! Actix-web, translating domain errors into HTTP responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
