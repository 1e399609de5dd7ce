//! MySQL implementation of the AccountRepository trait.
//!
//! The `accounts` table carries a unique index on `email`; a duplicate-key
//! error from an insert is translated to `EmailAlreadyRegistered`, which
//! makes the database the arbiter of registration races.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use acct_core::domain::entities::account::Account;
use acct_core::errors::{AuthError, DomainError};
use acct_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get full_name: {}", e),
                })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            verification_code: row
                .try_get("verification_code")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get verification_code: {}", e),
                })?,
            code_expires_at: row
                .try_get::<Option<DateTime<Utc>>, _>("code_expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get code_expires_at: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    /// Map an insert error, promoting unique-key violations to a conflict
    fn map_insert_error(e: sqlx::Error) -> DomainError {
        match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::Auth(AuthError::EmailAlreadyRegistered)
            }
            _ => DomainError::Database {
                message: format!("Failed to create account: {}", e),
            },
        }
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, full_name,
                   is_verified, verification_code, code_expires_at,
                   created_at, updated_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, password_hash, full_name,
                is_verified, verification_code, code_expires_at,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.full_name)
            .bind(account.is_verified)
            .bind(&account.verification_code)
            .bind(account.code_expires_at)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts
            SET email = ?, password_hash = ?, full_name = ?,
                is_verified = ?, verification_code = ?, code_expires_at = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.full_name)
            .bind(account.is_verified)
            .bind(&account.verification_code)
            .bind(account.code_expires_at)
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update account: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        Ok(account)
    }
}
