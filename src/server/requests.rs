//! Request types for the expense tools.
//!
//! These are the wire-level argument shapes advertised to MCP clients via
//! JSON Schema. They convert into the ledger's own input types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ledger::ExpenseDraft;
use crate::storage::ExpenseFilter;

/// Request for `add_expense`.
///
/// `amount` and `category` are required by the ledger; they are optional
/// here so a missing value comes back as a `{status: "error"}` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AddExpenseRequest {
    /// Amount spent (required). Negative values are accepted.
    pub amount: Option<f64>,
    /// Expense category, e.g. "food" (required).
    pub category: Option<String>,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Date as YYYY-MM-DD; defaults to today.
    #[serde(default)]
    pub date: Option<String>,
}

impl From<AddExpenseRequest> for ExpenseDraft {
    fn from(req: AddExpenseRequest) -> Self {
        Self {
            amount: req.amount,
            category: req.category,
            description: req.description,
            date: req.date,
        }
    }
}

/// Request for `list_expenses` and `get_summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseFilterRequest {
    /// Inclusive start date, YYYY-MM-DD.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Inclusive end date, YYYY-MM-DD.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Only include this category.
    #[serde(default)]
    pub category: Option<String>,
}

impl From<ExpenseFilterRequest> for ExpenseFilter {
    fn from(req: ExpenseFilterRequest) -> Self {
        Self {
            start_date: req.start_date,
            end_date: req.end_date,
            category: req.category,
        }
    }
}
