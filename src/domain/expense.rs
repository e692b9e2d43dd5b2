use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type ExpenseId = Uuid;

/// A single spending event. Expenses are immutable once created: fields are
/// only reachable through accessors, and corrections mean remove-and-record.
///
/// Validation happens before construction, see [`super::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    /// Calendar date of the spending, no time component
    date: NaiveDate,
    /// Amount in cents
    amount_cents: Cents,
    /// Free-text category name; not a link to any `Category`
    category: String,
    description: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        amount_cents: Cents,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount_cents,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
