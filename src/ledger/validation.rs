//! Argument validation for ledger operations.
//!
//! Required fields are checked here rather than left to fail inside the
//! store, so callers get a field-specific message.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::storage::{ExpenseFilter, NewExpense};

use super::ExpenseDraft;

/// Date format used for storage and for every date argument.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a draft and fill in defaults.
///
/// - `amount` must be present and finite (negative values are allowed).
/// - `category` must be present and not blank.
/// - `description` defaults to the empty string.
/// - `date` defaults to `today` when absent or empty.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first offending field.
pub fn validate_draft(draft: ExpenseDraft, today: NaiveDate) -> Result<NewExpense, ValidationError> {
    let amount = draft.amount.ok_or_else(|| ValidationError::missing("amount"))?;
    if !amount.is_finite() {
        return Err(ValidationError::invalid("amount", "must be a finite number"));
    }

    let category = draft
        .category
        .ok_or_else(|| ValidationError::missing("category"))?;
    if is_blank(&category) {
        return Err(ValidationError::missing("category"));
    }

    let date = match draft.date.filter(|d| !d.is_empty()) {
        Some(date) => validate_date("date", date)?,
        None => today.format(DATE_FORMAT).to_string(),
    };

    Ok(NewExpense {
        amount,
        category,
        description: draft.description.unwrap_or_default(),
        date,
    })
}

/// Validate filter dates and drop empty values.
///
/// Empty strings mean "not supplied" for every field. A blank category is
/// treated the same way, matching the check in [`validate_draft`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] if a supplied date is not `YYYY-MM-DD`.
pub fn validate_filter(filter: ExpenseFilter) -> Result<ExpenseFilter, ValidationError> {
    let start_date = filter
        .start_date
        .filter(|d| !d.is_empty())
        .map(|d| validate_date("start_date", d))
        .transpose()?;
    let end_date = filter
        .end_date
        .filter(|d| !d.is_empty())
        .map(|d| validate_date("end_date", d))
        .transpose()?;
    let category = filter.category.filter(|c| !is_blank(c));

    Ok(ExpenseFilter {
        start_date,
        end_date,
        category,
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Accept only canonical `YYYY-MM-DD` dates.
///
/// Dates are compared as text in the store, so a value like `2024-1-5`
/// would parse but sort incorrectly; it is rejected.
fn validate_date(field: &str, value: String) -> Result<String, ValidationError> {
    let parsed = NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|e| ValidationError::invalid(field, format!("expected YYYY-MM-DD ({e})")))?;

    if parsed.format(DATE_FORMAT).to_string() != value {
        return Err(ValidationError::invalid(field, "expected YYYY-MM-DD"));
    }

    Ok(value)
}
