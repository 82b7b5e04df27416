//! `ExpenseStore` implementation for `SqliteStorage`.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::ExpenseStore;

use super::core::SqliteStorage;
use super::types::{Expense, ExpenseFilter, ExpenseSummary, NewExpense};

#[async_trait]
impl ExpenseStore for SqliteStorage {
    async fn insert_expense(&self, expense: &NewExpense) -> Result<i64, StorageError> {
        self.save_expense(expense).await
    }

    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, StorageError> {
        self.load_expenses(filter).await
    }

    async fn summarize(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, StorageError> {
        self.load_summary(filter).await
    }
}
