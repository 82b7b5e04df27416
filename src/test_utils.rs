//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - Mock stores that fail every call
//! - A clock pinned to a fixed date
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;

use crate::error::StorageError;
use crate::traits::{MockClock, MockExpenseStore};

/// Create a mock store whose every operation fails with `message`.
///
/// # Example
///
/// ```ignore
/// let store = mock_store_failing("database is locked");
/// assert!(store.insert_expense(&expense).await.is_err());
/// ```
#[must_use]
pub fn mock_store_failing(message: &str) -> MockExpenseStore {
    let error = StorageError::QueryFailed {
        query: "mock".to_string(),
        message: message.to_string(),
    };

    let mut mock = MockExpenseStore::new();
    let insert_error = error.clone();
    mock.expect_insert_expense()
        .returning(move |_| Err(insert_error.clone()));
    let list_error = error.clone();
    mock.expect_list_expenses()
        .returning(move |_| Err(list_error.clone()));
    mock.expect_summarize().returning(move |_| Err(error.clone()));
    mock
}

/// Create a clock that always reports the given date.
#[must_use]
pub fn fixed_clock(year: i32, month: u32, day: u32) -> MockClock {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
    let mut clock = MockClock::new();
    clock.expect_today().return_const(date);
    clock
}
