//! Expense storage operations.

#![allow(clippy::missing_errors_doc)]

use sqlx::Row;

use crate::error::StorageError;

use super::core::SqliteStorage;
use super::query::{breakdown_query, list_query, total_query};
use super::types::{CategoryTotal, Expense, ExpenseFilter, ExpenseSummary, NewExpense};

impl SqliteStorage {
    /// Insert an expense and return its assigned id.
    ///
    /// The insert runs in its own transaction; if the insert fails the
    /// transaction is rolled back when dropped and no row is added.
    pub async fn save_expense(&self, expense: &NewExpense) -> Result<i64, StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::query_error("BEGIN", format!("{e}")))?;

        let result = sqlx::query(
            "INSERT INTO expenses (amount, category, description, date) VALUES (?, ?, ?, ?)",
        )
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(&expense.date)
        .execute(&mut *tx)
        .await
        .map_err(|e| Self::query_error("INSERT expenses", format!("{e}")))?;

        tx.commit()
            .await
            .map_err(|e| Self::query_error("COMMIT", format!("{e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Get expenses matching a filter, newest first.
    pub async fn load_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, StorageError> {
        let query = list_query(filter);
        let rows = query
            .as_query()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT expenses", format!("{e}")))?;

        let mut expenses = Vec::with_capacity(rows.len());
        for row in &rows {
            expenses.push(Self::row_to_expense(row)?);
        }

        Ok(expenses)
    }

    /// Compute the total and per-category breakdown for a filter.
    ///
    /// Both statements read inside one transaction so the breakdown is taken
    /// from the same snapshot as the total. Nothing is written, so the
    /// transaction is rolled back when dropped.
    pub async fn load_summary(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::query_error("BEGIN", format!("{e}")))?;

        let total_row = total_query(filter)
            .as_query()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| Self::query_error("SELECT SUM expenses", format!("{e}")))?;
        let total: f64 = total_row
            .try_get("total")
            .map_err(|e| Self::query_error("SELECT SUM expenses", format!("{e}")))?;

        let breakdown_rows = breakdown_query(filter)
            .as_query()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| Self::query_error("SELECT SUM expenses GROUP BY", format!("{e}")))?;

        let mut by_category = Vec::with_capacity(breakdown_rows.len());
        for row in &breakdown_rows {
            by_category.push(Self::row_to_category_total(row)?);
        }

        Ok(ExpenseSummary { total, by_category })
    }

    /// Convert a database row to an `Expense`.
    fn row_to_expense(row: &sqlx::sqlite::SqliteRow) -> Result<Expense, StorageError> {
        let decode = |e: sqlx::Error| Self::query_error("SELECT expenses", format!("{e}"));

        Ok(Expense {
            id: row.try_get("id").map_err(decode)?,
            amount: row.try_get("amount").map_err(decode)?,
            category: row.try_get("category").map_err(decode)?,
            description: row.try_get("description").map_err(decode)?,
            date: row.try_get("date").map_err(decode)?,
        })
    }

    /// Convert a breakdown row to a `CategoryTotal`.
    fn row_to_category_total(row: &sqlx::sqlite::SqliteRow) -> Result<CategoryTotal, StorageError> {
        let decode =
            |e: sqlx::Error| Self::query_error("SELECT SUM expenses GROUP BY", format!("{e}"));

        Ok(CategoryTotal {
            category: row.try_get("category").map_err(decode)?,
            total: row.try_get("total").map_err(decode)?,
        })
    }
}
