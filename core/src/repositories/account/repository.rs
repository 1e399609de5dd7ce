//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between the
//! domain layer and whatever store backs it.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Implementations must enforce email uniqueness at persistence time:
/// two concurrent `create` calls for the same email may both pass a prior
/// existence check, and exactly one of them must fail with
/// `AuthError::EmailAlreadyRegistered`. The store's own uniqueness
/// constraint is the source of truth, not any earlier lookup.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given email
    /// * `Err(DomainError)` - Store error
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - The
    ///   email is already taken (uniqueness violation)
    /// * `Err(DomainError)` - Other store error
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account
    /// * `Err(DomainError::NotFound)` - No account with this id exists
    /// * `Err(DomainError)` - Other store error
    async fn update(&self, account: Account) -> Result<Account, DomainError>;
}
