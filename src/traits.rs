//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the debt ledger
///
/// This trait allows the ledger core to work with any storage backend
/// (in-memory, PostgreSQL, SQLite, etc.) by implementing these methods.
/// The balance graph is addressed by directed edges: the pair
/// `(creditor_id, debtor_id)` holds how much the debtor owes the creditor.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Save a user to storage
    async fn save_user(&mut self, user: &User) -> LedgerResult<()>;

    /// Get a user by id
    async fn get_user(&self, user_id: i64) -> LedgerResult<Option<User>>;

    /// List all users in registration order
    async fn list_users(&self) -> LedgerResult<Vec<User>>;

    /// Number of registered users
    async fn user_count(&self) -> LedgerResult<usize>;

    /// Current balance on the edge, 0.0 when no entry exists
    async fn get_balance(&self, creditor_id: i64, debtor_id: i64) -> LedgerResult<f64>;

    /// Insert or overwrite a balance edge
    ///
    /// Callers are responsible for never storing a zero or negative amount;
    /// settled edges go through [`LedgerStore::remove_balance`] instead.
    async fn set_balance(
        &mut self,
        creditor_id: i64,
        debtor_id: i64,
        amount: f64,
    ) -> LedgerResult<()>;

    /// Remove a balance edge entirely; no-op when no entry exists
    async fn remove_balance(&mut self, creditor_id: i64, debtor_id: i64) -> LedgerResult<()>;

    /// All strictly positive balances owed to a creditor, sorted by debtor id
    async fn balances_owed_to(&self, creditor_id: i64) -> LedgerResult<Vec<OwedEntry>>;
}

/// Trait for implementing custom user validation rules
pub trait UserValidator: Send + Sync {
    /// Validate a user before registration
    fn validate_user(&self, user: &User) -> LedgerResult<()>;
}

/// Default user validator with basic rules
pub struct DefaultUserValidator;

impl UserValidator for DefaultUserValidator {
    fn validate_user(&self, user: &User) -> LedgerResult<()> {
        if user.id <= 0 {
            return Err(LedgerError::InvalidInput(
                "User id must be a positive integer".to_string(),
            ));
        }

        if user.name.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "User name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
