//! Ledger operations behind the MCP tools.
//!
//! [`Ledger`] validates arguments, fills defaults, delegates to an
//! [`ExpenseStore`], and folds every failure into the uniform
//! `{status: "error", message}` response. No operation returns a raw error
//! to the tool layer and none retries.

mod responses;
mod validation;

pub use responses::{
    AddExpenseResponse, ErrorResponse, ExpenseAdded, GetSummaryResponse, ListExpensesResponse,
    ResponseStatus,
};
pub use validation::{validate_draft, validate_filter, DATE_FORMAT};

use std::sync::Arc;

use crate::error::LedgerError;
use crate::storage::{Expense, ExpenseFilter, ExpenseSummary};
use crate::traits::{Clock, ExpenseStore, LocalClock};

/// Unvalidated arguments for recording an expense.
///
/// Required fields are optional here so that a missing value is reported
/// as a validation error instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    /// Amount spent (required).
    pub amount: Option<f64>,
    /// Category (required).
    pub category: Option<String>,
    /// Description, defaults to `""`.
    pub description: Option<String>,
    /// `YYYY-MM-DD`, defaults to today.
    pub date: Option<String>,
}

impl ExpenseDraft {
    /// Draft with the two required fields set.
    #[must_use]
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Set description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Expense ledger service.
#[derive(Clone)]
pub struct Ledger {
    store: Arc<dyn ExpenseStore>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Create a ledger over a store, using the local clock for default dates.
    #[must_use]
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self::with_clock(store, Arc::new(LocalClock))
    }

    /// Create a ledger with an explicit clock.
    #[must_use]
    pub fn with_clock(store: Arc<dyn ExpenseStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate and insert an expense, returning the response for `add_expense`.
    pub async fn add_expense(&self, draft: ExpenseDraft) -> AddExpenseResponse {
        match self.record(draft).await {
            Ok(added) => AddExpenseResponse::Added(added),
            Err(e) => {
                tracing::warn!(error = %e, "add_expense failed");
                AddExpenseResponse::Failed(e.into())
            }
        }
    }

    /// List expenses, returning the response for `list_expenses`.
    pub async fn list_expenses(&self, filter: ExpenseFilter) -> ListExpensesResponse {
        match self.expenses(filter).await {
            Ok(expenses) => ListExpensesResponse::Expenses(expenses),
            Err(e) => {
                tracing::warn!(error = %e, "list_expenses failed");
                ListExpensesResponse::Failed([e.into()])
            }
        }
    }

    /// Summarize expenses, returning the response for `get_summary`.
    pub async fn get_summary(&self, filter: ExpenseFilter) -> GetSummaryResponse {
        match self.summary(filter).await {
            Ok(summary) => GetSummaryResponse::Summary(summary),
            Err(e) => {
                tracing::warn!(error = %e, "get_summary failed");
                GetSummaryResponse::Failed(e.into())
            }
        }
    }

    /// Validate and insert an expense.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Validation`] for bad arguments and
    /// [`LedgerError::Storage`] if the insert fails.
    pub async fn record(&self, draft: ExpenseDraft) -> Result<ExpenseAdded, LedgerError> {
        let expense = validate_draft(draft, self.clock.today())?;
        let id = self.store.insert_expense(&expense).await?;

        tracing::info!(id, category = %expense.category, date = %expense.date, "Expense recorded");

        Ok(ExpenseAdded {
            status: ResponseStatus::Success,
            id,
            message: format!(
                "Added {} in {} on {}",
                format_amount(expense.amount),
                expense.category,
                expense.date
            ),
        })
    }

    /// Fetch expenses matching a filter.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if a date is malformed or the query fails.
    pub async fn expenses(&self, filter: ExpenseFilter) -> Result<Vec<Expense>, LedgerError> {
        let filter = validate_filter(filter)?;
        let expenses = self.store.list_expenses(&filter).await?;
        tracing::debug!(count = expenses.len(), ?filter, "Expenses listed");
        Ok(expenses)
    }

    /// Aggregate expenses matching a filter.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if a date is malformed or the query fails.
    pub async fn summary(&self, filter: ExpenseFilter) -> Result<ExpenseSummary, LedgerError> {
        let filter = validate_filter(filter)?;
        let summary = self.store.summarize(&filter).await?;
        tracing::debug!(
            total = summary.total,
            categories = summary.by_category.len(),
            "Summary computed"
        );
        Ok(summary)
    }
}

/// Render an amount as a float literal: `10.0`, `12.5`, `1e+16`, `1e-05`.
///
/// Exponents carry an explicit sign and at least two digits.
fn format_amount(amount: f64) -> String {
    let repr = format!("{amount:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger").finish_non_exhaustive()
    }
}
