//! Statement construction for filtered expense queries.
//!
//! Every statement produced here carries the same predicate:
//!
//! ```text
//! date BETWEEN ? AND ? [AND category = ?]
//! ```
//!
//! The date range is always present so that an omitted bound degrades to an
//! open range rather than a different statement shape. All predicate values
//! travel as bound parameters; only fixed SQL fragments are concatenated.

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

use super::types::ExpenseFilter;

/// Lower bound used when `start_date` is omitted.
pub const MIN_DATE: &str = "1900-01-01";

/// Upper bound used when `end_date` is omitted.
pub const MAX_DATE: &str = "2100-12-31";

const EXPENSE_COLUMNS: &str = "id, amount, category, description, date";

/// A SQL statement together with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    /// Statement text with `?` placeholders.
    pub sql: String,
    /// Values for the placeholders, in order.
    pub params: Vec<String>,
}

impl BuiltQuery {
    /// Bind the parameters onto a sqlx query.
    pub(crate) fn as_query(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        self.params
            .iter()
            .fold(sqlx::query(&self.sql), |query, param| query.bind(param.as_str()))
    }
}

/// Build the ordered `SELECT` for `list_expenses`.
///
/// Newest first; rows sharing a date are ordered by descending id so the most
/// recently recorded one leads.
#[must_use]
pub fn list_query(filter: &ExpenseFilter) -> BuiltQuery {
    let (predicate, params) = predicate(filter);
    BuiltQuery {
        sql: format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses WHERE {predicate} ORDER BY date DESC, id DESC"
        ),
        params,
    }
}

/// Build the total-sum statement for `get_summary`.
///
/// `COALESCE` turns the `NULL` sum of an empty match set into `0.0`.
#[must_use]
pub fn total_query(filter: &ExpenseFilter) -> BuiltQuery {
    let (predicate, params) = predicate(filter);
    BuiltQuery {
        sql: format!(
            "SELECT COALESCE(SUM(amount), 0.0) AS total FROM expenses WHERE {predicate}"
        ),
        params,
    }
}

/// Build the per-category statement for `get_summary`, largest sum first.
#[must_use]
pub fn breakdown_query(filter: &ExpenseFilter) -> BuiltQuery {
    let (predicate, params) = predicate(filter);
    BuiltQuery {
        sql: format!(
            "SELECT category, SUM(amount) AS total FROM expenses WHERE {predicate} \
             GROUP BY category ORDER BY total DESC"
        ),
        params,
    }
}

/// Shared `WHERE` clause and its parameters.
fn predicate(filter: &ExpenseFilter) -> (String, Vec<String>) {
    let start = non_empty(filter.start_date.as_deref()).unwrap_or(MIN_DATE);
    let end = non_empty(filter.end_date.as_deref()).unwrap_or(MAX_DATE);

    let mut clause = String::from("date BETWEEN ? AND ?");
    let mut params = vec![start.to_string(), end.to_string()];

    if let Some(category) = non_empty(filter.category.as_deref()) {
        clause.push_str(" AND category = ?");
        params.push(category.to_string());
    }

    (clause, params)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_list_query_defaults_to_open_range() {
        let query = list_query(&ExpenseFilter::all());
        assert_eq!(
            query.sql,
            "SELECT id, amount, category, description, date FROM expenses \
             WHERE date BETWEEN ? AND ? ORDER BY date DESC, id DESC"
        );
        assert_eq!(query.params, vec![MIN_DATE, MAX_DATE]);
    }

    #[test]
    fn test_list_query_with_category() {
        let filter = ExpenseFilter::all()
            .between("2024-02-01", "2024-02-28")
            .in_category("food");
        let query = list_query(&filter);
        assert!(query
            .sql
            .contains("WHERE date BETWEEN ? AND ? AND category = ? ORDER BY"));
        assert_eq!(query.params, vec!["2024-02-01", "2024-02-28", "food"]);
    }

    #[test]
    fn test_empty_strings_count_as_omitted() {
        let filter = ExpenseFilter {
            start_date: Some(String::new()),
            end_date: Some(String::new()),
            category: Some(String::new()),
        };
        let query = total_query(&filter);
        assert!(!query.sql.contains("category = ?"));
        assert_eq!(query.params, vec![MIN_DATE, MAX_DATE]);
    }

    #[test]
    fn test_total_query_coalesces_to_zero() {
        let query = total_query(&ExpenseFilter::all().in_category("rent"));
        assert_eq!(
            query.sql,
            "SELECT COALESCE(SUM(amount), 0.0) AS total FROM expenses \
             WHERE date BETWEEN ? AND ? AND category = ?"
        );
    }

    #[test]
    fn test_breakdown_query_groups_and_orders() {
        let query = breakdown_query(&ExpenseFilter::all());
        assert!(query.sql.starts_with("SELECT category, SUM(amount) AS total"));
        assert!(query.sql.ends_with("GROUP BY category ORDER BY total DESC"));
    }

    #[test]
    fn test_summary_statements_share_predicate_params() {
        let filter = ExpenseFilter::all()
            .between("2024-01-01", "2024-12-31")
            .in_category("travel");
        assert_eq!(total_query(&filter).params, breakdown_query(&filter).params);
    }

    proptest! {
        #[test]
        fn prop_values_are_never_interpolated(category in "[a-z' ;-]{1,24}", start in "[0-9-]{1,10}") {
            let filter = ExpenseFilter {
                start_date: Some(start.clone()),
                end_date: None,
                category: Some(category.clone()),
            };
            for query in [list_query(&filter), total_query(&filter), breakdown_query(&filter)] {
                let placeholders = query.sql.matches('?').count();
                prop_assert_eq!(placeholders, query.params.len());
                prop_assert_eq!(&query.params[0], &start);
                prop_assert_eq!(&query.params[2], &category);
            }
        }
    }
}
