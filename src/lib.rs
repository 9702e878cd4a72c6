//! # Splitledger Core
//!
//! A shared-expense ledger library tracking who owes whom money among a set
//! of registered participants.
//!
//! ## Features
//!
//! - **User registry**: caller-supplied integer ids, registration-order listing
//! - **Expense splitting**: equal splits across all users, or arbitrary
//!   percentage splits across chosen users
//! - **Payments**: partial payments that pay a directed debt down, and
//!   unconditional settlement that clears it outright
//! - **Balance queries**: per-creditor outstanding debts and totals
//! - **Storage abstraction**: backend-agnostic design with a trait-based store
//! - **Request handling**: a validating boundary layer for external callers
//!
//! ## Quick Start
//!
//! ```rust
//! use splitledger_core::{Ledger, MemoryStore};
//!
//! # async fn demo() -> splitledger_core::LedgerResult<()> {
//! let mut ledger = Ledger::new(MemoryStore::new());
//! ledger.register_user(1, "Alice".to_string()).await?;
//! ledger.register_user(2, "Bob".to_string()).await?;
//! ledger.split_equal(1, 90.0).await?;
//! let owed = ledger.get_owed_to(1).await?;
//! assert_eq!(owed.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod handlers;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use handlers::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;
pub use utils::memory_store::MemoryStore;
