//! Main ledger facade that coordinates users and expenses

use crate::ledger::{ExpenseManager, UserManager};
use crate::traits::*;
use crate::types::*;

/// Main ledger system that orchestrates all debt-tracking operations
pub struct Ledger<S: LedgerStore> {
    user_manager: UserManager<S>,
    expense_manager: ExpenseManager<S>,
}

impl<S: LedgerStore + Clone> Ledger<S> {
    /// Create a new ledger with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            user_manager: UserManager::new(storage.clone()),
            expense_manager: ExpenseManager::new(storage),
        }
    }

    /// Create a new ledger with a custom user validator
    pub fn with_validator(storage: S, validator: Box<dyn UserValidator>) -> Self {
        Self {
            user_manager: UserManager::with_validator(storage.clone(), validator),
            expense_manager: ExpenseManager::new(storage),
        }
    }

    // User operations
    /// Register a new user
    pub async fn register_user(&mut self, id: i64, name: String) -> LedgerResult<User> {
        self.user_manager.register_user(id, name).await
    }

    /// Get a user by id
    pub async fn get_user(&self, user_id: i64) -> LedgerResult<Option<User>> {
        self.user_manager.get_user(user_id).await
    }

    /// List all users in registration order
    pub async fn list_users(&self) -> LedgerResult<Vec<User>> {
        self.user_manager.list_users().await
    }

    // Expense operations
    /// Split an expense equally across every registered user
    pub async fn split_equal(
        &mut self,
        paid_by_user_id: i64,
        total_amount: f64,
    ) -> LedgerResult<()> {
        self.expense_manager
            .split_equal(paid_by_user_id, total_amount)
            .await
    }

    /// Split an expense across users by arbitrary percentages
    pub async fn split_arbitrary(
        &mut self,
        paid_by_user_id: i64,
        total_amount: f64,
        splits: &[SplitShare],
    ) -> LedgerResult<()> {
        self.expense_manager
            .split_arbitrary(paid_by_user_id, total_amount, splits)
            .await
    }

    /// Record directly that one user owes another an additional amount
    pub async fn add_owed(
        &mut self,
        from_user_id: i64,
        to_user_id: i64,
        amount: f64,
    ) -> LedgerResult<()> {
        self.expense_manager
            .add_owed(from_user_id, to_user_id, amount)
            .await
    }

    /// Record a payment that reduces a specific directed debt
    pub async fn record_payment(
        &mut self,
        from_user_id: i64,
        to_user_id: i64,
        amount: f64,
    ) -> LedgerResult<()> {
        self.expense_manager
            .record_payment(from_user_id, to_user_id, amount)
            .await
    }

    /// Settle a specific directed debt entirely
    pub async fn settle_payment(&mut self, from_user_id: i64, to_user_id: i64) -> LedgerResult<()> {
        self.expense_manager
            .settle_payment(from_user_id, to_user_id)
            .await
    }

    // Query operations
    /// All outstanding debts owed to a user, sorted by debtor id
    pub async fn get_owed_to(&self, user_id: i64) -> LedgerResult<Vec<OwedEntry>> {
        self.expense_manager.owed_to(user_id).await
    }

    /// Total amount owed to a user across all debtors
    pub async fn total_owed_to(&self, user_id: i64) -> LedgerResult<f64> {
        self.expense_manager.total_owed_to(user_id).await
    }
}
