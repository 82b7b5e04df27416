//! Storage types for database operations.
//!
//! This module defines the types read from and written to the `expenses` table:
//! - [`Expense`]: A stored ledger entry
//! - [`NewExpense`]: A validated entry waiting for its id
//! - [`ExpenseFilter`]: Optional date range and category narrowing
//! - [`ExpenseSummary`]: Total and per-category breakdown

use schemars::JsonSchema;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Expense stored in database.
///
/// Serialized with named fields; callers must not rely on field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Expense {
    /// Identifier assigned by the store.
    pub id: i64,
    /// Amount spent. Sign is not constrained.
    pub amount: f64,
    /// Free-form category.
    pub category: String,
    /// Free-form description, empty when not supplied.
    pub description: String,
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
}

/// Expense ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// Amount spent.
    pub amount: f64,
    /// Category.
    pub category: String,
    /// Description.
    pub description: String,
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
}

impl NewExpense {
    /// Create a new expense with an empty description.
    #[must_use]
    pub fn new(amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            description: String::new(),
            date: date.into(),
        }
    }

    /// Set description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Filter predicate for list and summary queries.
///
/// Every field is optional. Absent dates fall back to an open range and an
/// absent category matches all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Filter matching every expense.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to an inclusive date range.
    #[must_use]
    pub fn between(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Restrict to a single category.
    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Summed amount for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Sum of `amount` for the category.
    pub total: f64,
}

/// Aggregate summary over a filter.
///
/// `by_category` serializes as a JSON object whose keys keep the
/// descending-amount order produced by the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct ExpenseSummary {
    /// Sum of all matching amounts, `0.0` when nothing matches.
    pub total: f64,
    /// Per-category sums, largest first.
    #[serde(serialize_with = "serialize_breakdown")]
    #[schemars(with = "std::collections::BTreeMap<String, f64>")]
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Sum of the breakdown entries.
    #[must_use]
    pub fn breakdown_total(&self) -> f64 {
        self.by_category.iter().map(|c| c.total).sum()
    }

    /// Look up the total for a category.
    #[must_use]
    pub fn category_total(&self, category: &str) -> Option<f64> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}

fn serialize_breakdown<S>(breakdown: &[CategoryTotal], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(breakdown.len()))?;
    for entry in breakdown {
        map.serialize_entry(&entry.category, &entry.total)?;
    }
    map.end()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expense_serializes_named_fields() {
        let expense = Expense {
            id: 7,
            amount: 12.5,
            category: "food".to_string(),
            description: "lunch".to_string(),
            date: "2024-01-02".to_string(),
        };
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "amount": 12.5,
                "category": "food",
                "description": "lunch",
                "date": "2024-01-02"
            })
        );
    }

    #[test]
    fn test_new_expense_builder() {
        let expense = NewExpense::new(3.0, "coffee", "2024-03-01").with_description("flat white");
        assert_eq!(expense.category, "coffee");
        assert_eq!(expense.description, "flat white");
        assert_eq!(expense.date, "2024-03-01");
    }

    #[test]
    fn test_filter_builders() {
        let filter = ExpenseFilter::all()
            .between("2024-01-01", "2024-01-31")
            .in_category("rent");
        assert_eq!(filter.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(filter.end_date.as_deref(), Some("2024-01-31"));
        assert_eq!(filter.category.as_deref(), Some("rent"));
        assert_eq!(ExpenseFilter::all(), ExpenseFilter::default());
    }

    #[test]
    fn test_summary_breakdown_keeps_query_order() {
        let summary = ExpenseSummary {
            total: 35.0,
            by_category: vec![
                CategoryTotal {
                    category: "transport".to_string(),
                    total: 30.0,
                },
                CategoryTotal {
                    category: "food".to_string(),
                    total: 5.0,
                },
            ],
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"total":35.0,"by_category":{"transport":30.0,"food":5.0}}"#
        );
        assert_eq!(summary.breakdown_total(), 35.0);
        assert_eq!(summary.category_total("food"), Some(5.0));
        assert_eq!(summary.category_total("rent"), None);
    }

    #[test]
    fn test_empty_summary_serializes_to_zero_and_empty_map() {
        let value = serde_json::to_value(ExpenseSummary::default()).unwrap();
        assert_eq!(value, serde_json::json!({"total": 0.0, "by_category": {}}));
    }

    #[test]
    fn test_summary_schema_describes_map() {
        let schema = schemars::schema_for!(ExpenseSummary);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("by_category"));
        assert!(json.contains("additionalProperties"));
    }
}
