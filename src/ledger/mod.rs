//! Ledger module containing user management and expense processing

pub mod core;
pub mod expense;
pub mod users;

pub use self::core::*;
pub use expense::*;
pub use users::*;
