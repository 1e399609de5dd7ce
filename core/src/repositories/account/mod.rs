//! Account repository interface and in-memory implementation.

mod mock;
mod repository;

pub use mock::MockAccountRepository;
pub use repository::AccountRepository;
