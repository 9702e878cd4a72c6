//! Request handlers mapping external operations onto the ledger core
//!
//! This layer is the request/response boundary an external caller (UI,
//! HTTP framing, CLI) talks to. It validates required fields and the
//! percentage-sum contract before delegating to [`Ledger`]; every
//! validation failure surfaces as [`LedgerError::InvalidInput`] with no
//! mutation having been attempted.

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::traits::LedgerStore;
use crate::types::*;
use crate::utils::validation::{
    validate_positive_amount, validate_split_percentages, validate_user_id, validate_user_name,
};

/// Request to register a new user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Request to split an expense equally across all users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitEqualRequest {
    pub paid_by_user_id: Option<i64>,
    pub total_amount: Option<f64>,
}

/// One entry of an arbitrary split as supplied by the caller.
///
/// Entries with a missing user id or percentage are dropped by the handler
/// before validation rather than rejected outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPart {
    pub user_id: Option<i64>,
    pub percentage: Option<f64>,
}

/// Request to split an expense by arbitrary percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitArbitraryRequest {
    pub paid_by_user_id: Option<i64>,
    pub total_amount: Option<f64>,
    pub splits: Option<Vec<SplitPart>>,
}

/// Request to record a direct owed amount between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOwedRequest {
    pub from_user_id: Option<i64>,
    pub to_user_id: Option<i64>,
    pub amount: Option<f64>,
}

/// Request to record a payment against a directed debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub from_user_id: Option<i64>,
    pub to_user_id: Option<i64>,
    pub amount: Option<f64>,
}

/// Request to settle a directed debt entirely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleRequest {
    pub from_user_id: Option<i64>,
    pub to_user_id: Option<i64>,
}

/// Request handler bridging external callers to the ledger core
pub struct RequestHandler<S: LedgerStore> {
    ledger: Ledger<S>,
}

impl<S: LedgerStore + Clone> RequestHandler<S> {
    /// Create a handler over a fresh ledger backed by the given storage
    pub fn new(storage: S) -> Self {
        Self {
            ledger: Ledger::new(storage),
        }
    }

    /// Wrap an existing ledger
    pub fn with_ledger(ledger: Ledger<S>) -> Self {
        Self { ledger }
    }

    /// Access the underlying ledger
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    fn require<T>(value: Option<T>, field: &str) -> LedgerResult<T> {
        value.ok_or_else(|| LedgerError::InvalidInput(format!("{field} is required")))
    }

    /// Register a new user
    pub async fn create_user(&mut self, request: CreateUserRequest) -> LedgerResult<User> {
        let id = Self::require(request.id, "id")?;
        let name = Self::require(request.name, "name")?;
        validate_user_id(id)?;
        validate_user_name(&name)?;

        self.ledger.register_user(id, name).await
    }

    /// List all registered users in registration order
    pub async fn list_users(&self) -> LedgerResult<Vec<User>> {
        self.ledger.list_users().await
    }

    /// All outstanding debts owed to a user
    pub async fn get_owed(&self, user_id: i64) -> LedgerResult<Vec<OwedEntry>> {
        self.ledger.get_owed_to(user_id).await
    }

    /// Total amount owed to a user across all debtors
    pub async fn get_total_owed(&self, user_id: i64) -> LedgerResult<f64> {
        self.ledger.total_owed_to(user_id).await
    }

    /// Split an expense equally across every registered user
    pub async fn split_equal(&mut self, request: SplitEqualRequest) -> LedgerResult<()> {
        let paid_by_user_id = Self::require(request.paid_by_user_id, "paidByUserId")?;
        let total_amount = Self::require(request.total_amount, "totalAmount")?;
        validate_positive_amount(total_amount)?;

        self.ledger.split_equal(paid_by_user_id, total_amount).await
    }

    /// Split an expense across users by arbitrary percentages.
    ///
    /// Split entries missing a user id or percentage are dropped; the
    /// remaining entries must be non-empty and their percentages must sum
    /// to 100 within the allowed tolerance.
    pub async fn split_arbitrary(&mut self, request: SplitArbitraryRequest) -> LedgerResult<()> {
        let paid_by_user_id = Self::require(request.paid_by_user_id, "paidByUserId")?;
        let total_amount = Self::require(request.total_amount, "totalAmount")?;
        let parts = Self::require(request.splits, "splits")?;
        validate_positive_amount(total_amount)?;

        let valid_splits: Vec<SplitShare> = parts
            .into_iter()
            .filter_map(|part| match (part.user_id, part.percentage) {
                (Some(user_id), Some(percentage)) => Some(SplitShare::new(user_id, percentage)),
                _ => None,
            })
            .collect();
        validate_split_percentages(&valid_splits)?;

        self.ledger
            .split_arbitrary(paid_by_user_id, total_amount, &valid_splits)
            .await
    }

    /// Record a direct owed amount between two users
    pub async fn add_owed(&mut self, request: AddOwedRequest) -> LedgerResult<()> {
        let from_user_id = Self::require(request.from_user_id, "fromUserId")?;
        let to_user_id = Self::require(request.to_user_id, "toUserId")?;
        let amount = Self::require(request.amount, "amount")?;
        validate_positive_amount(amount)?;

        self.ledger.add_owed(from_user_id, to_user_id, amount).await
    }

    /// Record a payment that reduces a directed debt
    pub async fn record_payment(&mut self, request: PaymentRequest) -> LedgerResult<()> {
        let from_user_id = Self::require(request.from_user_id, "fromUserId")?;
        let to_user_id = Self::require(request.to_user_id, "toUserId")?;
        let amount = Self::require(request.amount, "amount")?;
        validate_positive_amount(amount)?;

        self.ledger
            .record_payment(from_user_id, to_user_id, amount)
            .await
    }

    /// Settle a directed debt entirely
    pub async fn settle_payment(&mut self, request: SettleRequest) -> LedgerResult<()> {
        let from_user_id = Self::require(request.from_user_id, "fromUserId")?;
        let to_user_id = Self::require(request.to_user_id, "toUserId")?;

        self.ledger.settle_payment(from_user_id, to_user_id).await
    }
}
