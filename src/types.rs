//! Core types and data structures for the debt ledger

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Threshold below which a balance counts as settled.
///
/// Entries whose value drops under this are removed from the graph rather
/// than kept as near-zero residue.
pub const EPSILON: f64 = 0.01;

/// A registered participant in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied identifier, positive and unique
    pub id: i64,
    /// Display name, stored trimmed
    pub name: String,
    /// When the user was registered
    pub registered_at: NaiveDateTime,
}

impl User {
    /// Create a new user with a trimmed name
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            registered_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// One outstanding debt owed to a creditor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwedEntry {
    /// The user who owes
    pub debtor_id: i64,
    /// How much they owe, always strictly positive
    pub amount: f64,
}

/// One participant's share of an arbitrarily split expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitShare {
    /// The user charged with this share
    pub user_id: i64,
    /// Share of the total, in percent within `[0, 100]`
    pub percentage: f64,
}

impl SplitShare {
    pub fn new(user_id: i64, percentage: f64) -> Self {
        Self {
            user_id,
            percentage,
        }
    }
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("User with id {0} already exists")]
    DuplicateUser(i64),
    #[error("User not found: {0}")]
    UserNotFound(i64),
    #[error("No users are registered")]
    NoUsers,
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
