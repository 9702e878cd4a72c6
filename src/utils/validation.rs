//! Validation utilities

use crate::traits::*;
use crate::types::*;

/// Tolerance allowed when checking that split percentages sum to 100
pub const PERCENT_SUM_TOLERANCE: f64 = 0.01;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: f64) -> LedgerResult<()> {
    if amount <= 0.0 {
        Err(LedgerError::InvalidInput(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a user id is valid
pub fn validate_user_id(user_id: i64) -> LedgerResult<()> {
    if user_id <= 0 {
        return Err(LedgerError::InvalidInput(
            "User id must be a positive integer".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a user name is valid
pub fn validate_user_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::InvalidInput(
            "User name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(LedgerError::InvalidInput(
            "User name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a list of split shares before an arbitrary split
///
/// The list must be non-empty, every percentage must lie in `[0, 100]`, and
/// the percentages must sum to 100 within [`PERCENT_SUM_TOLERANCE`].
pub fn validate_split_percentages(splits: &[SplitShare]) -> LedgerResult<()> {
    if splits.is_empty() {
        return Err(LedgerError::InvalidInput(
            "At least one split is required".to_string(),
        ));
    }

    for split in splits {
        if !(0.0..=100.0).contains(&split.percentage) {
            return Err(LedgerError::InvalidInput(format!(
                "Split percentage for user {} must be between 0 and 100",
                split.user_id
            )));
        }
    }

    let total: f64 = splits.iter().map(|s| s.percentage).sum();
    if (total - 100.0).abs() > PERCENT_SUM_TOLERANCE {
        return Err(LedgerError::InvalidInput(format!(
            "Split percentages must sum to 100 (current: {total:.2})"
        )));
    }

    Ok(())
}

/// Strict user validator layering length limits over the default rules
pub struct StrictUserValidator;

impl UserValidator for StrictUserValidator {
    fn validate_user(&self, user: &User) -> LedgerResult<()> {
        validate_user_id(user.id)?;
        validate_user_name(&user.name)?;

        Ok(())
    }
}
