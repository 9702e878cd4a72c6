//! Expense splitting, payment recording, and settlement

use tracing::debug;

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::validate_positive_amount;

/// Expense manager for handling balance-graph mutations and queries
pub struct ExpenseManager<S: LedgerStore> {
    storage: S,
}

impl<S: LedgerStore> ExpenseManager<S> {
    /// Create a new expense manager
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Fail with `UserNotFound` unless the id is registered
    async fn require_user(&self, user_id: i64) -> LedgerResult<()> {
        if self.storage.get_user(user_id).await?.is_none() {
            return Err(LedgerError::UserNotFound(user_id));
        }
        Ok(())
    }

    /// Merge an increment into a directed edge.
    ///
    /// Results under [`EPSILON`] are removed instead of stored, so the graph
    /// never holds zero or near-zero entries.
    async fn add_to_balance(
        &mut self,
        creditor_id: i64,
        debtor_id: i64,
        amount: f64,
    ) -> LedgerResult<()> {
        let updated = self.storage.get_balance(creditor_id, debtor_id).await? + amount;
        if updated.abs() < EPSILON {
            self.storage.remove_balance(creditor_id, debtor_id).await
        } else {
            self.storage
                .set_balance(creditor_id, debtor_id, updated)
                .await
        }
    }

    /// Split an expense equally across every registered user.
    ///
    /// The denominator counts all registered users, payer included; the
    /// payer's own share is never charged to anyone, so the ledger gains
    /// `share * (n - 1)` rather than the full total.
    pub async fn split_equal(
        &mut self,
        paid_by_user_id: i64,
        total_amount: f64,
    ) -> LedgerResult<()> {
        validate_positive_amount(total_amount)?;

        let users = self.storage.list_users().await?;
        if users.is_empty() {
            return Err(LedgerError::NoUsers);
        }
        if !users.iter().any(|u| u.id == paid_by_user_id) {
            return Err(LedgerError::UserNotFound(paid_by_user_id));
        }

        let share = total_amount / users.len() as f64;
        for user in users.iter().filter(|u| u.id != paid_by_user_id) {
            self.add_to_balance(paid_by_user_id, user.id, share).await?;
        }
        debug!(paid_by_user_id, total_amount, share, "split expense equally");

        Ok(())
    }

    /// Split an expense across users by arbitrary percentages.
    ///
    /// Every referenced user is checked before the graph is touched, so the
    /// split either fully applies or leaves the ledger unchanged. Entries
    /// naming the payer are skipped (no self-debt). Whether the percentages
    /// sum to 100 is the calling layer's contract, not checked here.
    pub async fn split_arbitrary(
        &mut self,
        paid_by_user_id: i64,
        total_amount: f64,
        splits: &[SplitShare],
    ) -> LedgerResult<()> {
        validate_positive_amount(total_amount)?;
        self.require_user(paid_by_user_id).await?;
        for split in splits {
            self.require_user(split.user_id).await?;
        }

        for split in splits {
            if split.user_id == paid_by_user_id {
                continue;
            }
            let amount = split.percentage / 100.0 * total_amount;
            self.add_to_balance(paid_by_user_id, split.user_id, amount)
                .await?;
        }
        debug!(
            paid_by_user_id,
            total_amount,
            shares = splits.len(),
            "split expense by percentage"
        );

        Ok(())
    }

    /// Record directly that `from_user_id` owes `to_user_id` an additional
    /// amount
    pub async fn add_owed(
        &mut self,
        from_user_id: i64,
        to_user_id: i64,
        amount: f64,
    ) -> LedgerResult<()> {
        validate_positive_amount(amount)?;
        self.require_user(from_user_id).await?;
        self.require_user(to_user_id).await?;

        self.add_to_balance(to_user_id, from_user_id, amount).await?;
        debug!(from_user_id, to_user_id, amount, "recorded owed amount");

        Ok(())
    }

    /// Record a payment from `from_user_id` toward what they owe
    /// `to_user_id`.
    ///
    /// The edge is clamped at zero: overpayment never flips the debt or
    /// credits the reverse direction, and the reverse edge is left
    /// untouched. A balance ending under [`EPSILON`] is removed.
    pub async fn record_payment(
        &mut self,
        from_user_id: i64,
        to_user_id: i64,
        amount: f64,
    ) -> LedgerResult<()> {
        validate_positive_amount(amount)?;
        self.require_user(from_user_id).await?;
        self.require_user(to_user_id).await?;

        let current = self.storage.get_balance(to_user_id, from_user_id).await?;
        let updated = (current - amount).max(0.0);
        if updated.abs() < EPSILON {
            self.storage
                .remove_balance(to_user_id, from_user_id)
                .await?;
        } else {
            self.storage
                .set_balance(to_user_id, from_user_id, updated)
                .await?;
        }
        debug!(from_user_id, to_user_id, amount, "recorded payment");

        Ok(())
    }

    /// Settle the debt `from_user_id` owes `to_user_id` entirely.
    ///
    /// Unconditional: clears the edge at any magnitude and is a no-op when
    /// nothing is owed, with no existence checks.
    pub async fn settle_payment(&mut self, from_user_id: i64, to_user_id: i64) -> LedgerResult<()> {
        self.storage
            .remove_balance(to_user_id, from_user_id)
            .await?;
        debug!(from_user_id, to_user_id, "settled payment");

        Ok(())
    }

    /// All outstanding debts owed to a user, sorted by debtor id
    pub async fn owed_to(&self, user_id: i64) -> LedgerResult<Vec<OwedEntry>> {
        self.require_user(user_id).await?;
        self.storage.balances_owed_to(user_id).await
    }

    /// Total amount owed to a user across all debtors
    pub async fn total_owed_to(&self, user_id: i64) -> LedgerResult<f64> {
        Ok(self
            .owed_to(user_id)
            .await?
            .iter()
            .map(|entry| entry.amount)
            .sum())
    }
}
