//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`ExpenseStore`]: Persistence abstraction used by the ledger
//! - [`Clock`]: Source of "today" for defaulted expense dates
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use mcp_expenses::traits::{Clock, LocalClock};
//!
//! let today = LocalClock.today();
//! println!("Today is {}", today.format("%Y-%m-%d"));
//! ```

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::error::StorageError;
use crate::storage::{Expense, ExpenseFilter, ExpenseSummary, NewExpense};

/// Expense persistence trait for mocking.
///
/// Implementations own connection handling: every call acquires whatever
/// connection it needs and releases it before returning, on success or failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Insert an expense and return the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails. No row is
    /// added in that case.
    async fn insert_expense(&self, expense: &NewExpense) -> Result<i64, StorageError>;

    /// List expenses matching a filter, ordered by date then id, descending.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, StorageError>;

    /// Sum matching expenses overall and per category.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn summarize(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, StorageError>;
}

/// Clock abstraction for testing.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// The current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
