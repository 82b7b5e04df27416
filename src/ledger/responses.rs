//! Response shapes returned by the ledger tools.
//!
//! Success and failure share no fields except through the `status`
//! discriminator, so every response enum is `#[serde(untagged)]` and
//! serializes as exactly one of its variants.

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::LedgerError;
use crate::storage::{Expense, ExpenseSummary};

/// Outcome discriminator carried by `add_expense` and by every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// The operation completed.
    Success,
    /// The operation failed; see `message`.
    Error,
}

/// Uniform failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ErrorResponse {
    /// Always [`ResponseStatus::Error`].
    pub status: ResponseStatus,
    /// Human-readable error description.
    pub message: String,
}

impl ErrorResponse {
    /// Create an error response with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}

impl From<LedgerError> for ErrorResponse {
    fn from(err: LedgerError) -> Self {
        Self::new(err.to_string())
    }
}

/// Successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ExpenseAdded {
    /// Always [`ResponseStatus::Success`].
    pub status: ResponseStatus,
    /// Id assigned to the new expense.
    pub id: i64,
    /// Confirmation, e.g. `Added 12.5 in food on 2024-01-02`.
    pub message: String,
}

/// Response from `add_expense`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum AddExpenseResponse {
    /// Expense recorded.
    Added(ExpenseAdded),
    /// Nothing was recorded.
    Failed(ErrorResponse),
}

/// Response from `list_expenses`.
///
/// Both variants serialize as a JSON array so sequence consumers can
/// handle them uniformly; a failure is a one-element array.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum ListExpensesResponse {
    /// Matching expenses, newest first.
    Expenses(Vec<Expense>),
    /// The error wrapped in a single-element sequence.
    Failed([ErrorResponse; 1]),
}

/// Response from `get_summary`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum GetSummaryResponse {
    /// `{total, by_category}`.
    Summary(ExpenseSummary),
    /// `{status: "error", message}`.
    Failed(ErrorResponse),
}

impl AddExpenseResponse {
    /// Whether the response carries an error status.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl ListExpensesResponse {
    /// Whether the response carries an error status.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl GetSummaryResponse {
    /// Whether the response carries an error status.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_added_serializes_with_success_status() {
        let response = AddExpenseResponse::Added(ExpenseAdded {
            status: ResponseStatus::Success,
            id: 1,
            message: "Added 12.5 in food on 2024-01-02".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "success", "id": 1, "message": "Added 12.5 in food on 2024-01-02"})
        );
        assert!(!response.is_error());
    }

    #[test]
    fn test_error_response_from_ledger_error() {
        let err: LedgerError = ValidationError::missing("amount").into();
        let response = AddExpenseResponse::Failed(err.into());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "error", "message": "Missing required field: amount"})
        );
        assert!(response.is_error());
    }

    #[test]
    fn test_list_failure_is_single_element_array() {
        let response = ListExpensesResponse::Failed([ErrorResponse::new("database is locked")]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!([{"status": "error", "message": "database is locked"}])
        );
        assert!(response.is_error());
    }

    #[test]
    fn test_empty_list_is_empty_array() {
        let response = ListExpensesResponse::Expenses(vec![]);
        assert_eq!(serde_json::to_value(&response).unwrap(), json!([]));
    }

    #[test]
    fn test_summary_failure_has_no_total() {
        let response = GetSummaryResponse::Failed(ErrorResponse::new("boom"));
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("total").is_none());
        assert_eq!(value["status"], "error");
    }

    #[test]
    fn test_response_schemas_generate() {
        let _ = schemars::schema_for!(AddExpenseResponse);
        let _ = schemars::schema_for!(ListExpensesResponse);
        let _ = schemars::schema_for!(GetSummaryResponse);
    }
}
