//! Database connection setup and repository implementations.

pub mod connection;
pub mod mysql;

pub use connection::{create_pool, DatabaseConfig};
pub use mysql::MySqlAccountRepository;
