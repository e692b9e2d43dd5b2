use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Expense, ExpenseId};

pub type CategoryId = Uuid;

/// A named grouping of expenses.
///
/// A category keeps its own expense list, independent of the ledger's flat list.
/// Names are free text and need not be unique; the id is what tells two
/// same-named categories apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    expenses: Vec<Expense>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expenses: Vec::new(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expenses assigned to this category, in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Append an expense. Duplicates are allowed.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the first expense with the given id.
    /// Returns the removed expense, or `None` if it was not assigned here.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id() == id)?;
        Some(self.expenses.remove(position))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
