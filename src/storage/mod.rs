//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Filtered statement construction for list and summary queries
//! - Expense persistence and row mapping
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! The database runs in WAL mode so readers proceed while a writer commits.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `query`: Parameterized statement builder
//! - `expense`: Insert, list, and summary operations
//! - `trait_impl`: `ExpenseStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use mcp_expenses::storage::{ExpenseFilter, NewExpense, SqliteStorage};
//!
//! let storage = SqliteStorage::new("./data/expenses.db").await?;
//! let id = storage.save_expense(&NewExpense::new(12.5, "food", "2024-01-02")).await?;
//! let summary = storage.load_summary(&ExpenseFilter::all()).await?;
//! ```

mod core;
mod expense;
pub mod query;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use query::{BuiltQuery, MAX_DATE, MIN_DATE};
pub use types::{CategoryTotal, Expense, ExpenseFilter, ExpenseSummary, NewExpense};
