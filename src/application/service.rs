use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    Category, CategoryId, Cents, Expense, ExpenseId, category_total, monthly_count,
    monthly_total, validation,
};

use super::{AppError, CategoryReport, MonthlyReport};

/// In-memory ledger owning every expense and category for the session.
/// This is the primary interface for any client (console adapter, tests).
///
/// Two parallel views are kept: the flat expense list, and each category's own
/// expense list. Neither is derived from the other, and nothing cascades
/// between them.
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    categories: Vec<Category>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Expense operations
    // ========================

    /// Append an expense to the flat list. Always succeeds.
    pub fn add_expense(&mut self, expense: Expense) {
        debug!(id = %expense.id(), amount = expense.amount_cents(), "expense added");
        self.expenses.push(expense);
    }

    /// Remove the first expense with the given id from the flat list.
    /// Missing ids are a no-op and return `None`.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id() == id)?;
        debug!(%id, "expense removed");
        Some(self.expenses.remove(position))
    }

    /// All expenses, in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Validate and record a new expense, checking the date against the system clock.
    pub fn record_expense(
        &mut self,
        date: NaiveDate,
        amount_cents: Cents,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Expense, AppError> {
        self.record_checked(
            date,
            amount_cents,
            category,
            description,
            validation::is_valid_date,
            validation::today,
        )
    }

    /// Validate and record a new expense against an explicit "today".
    pub fn record_expense_as_of(
        &mut self,
        date: NaiveDate,
        amount_cents: Cents,
        category: impl Into<String>,
        description: impl Into<String>,
        today: NaiveDate,
    ) -> Result<&Expense, AppError> {
        self.record_checked(
            date,
            amount_cents,
            category,
            description,
            |d| validation::is_valid_date_as_of(d, today),
            || today,
        )
    }

    /// Nothing is constructed or stored unless both the amount and the date pass.
    fn record_checked(
        &mut self,
        date: NaiveDate,
        amount_cents: Cents,
        category: impl Into<String>,
        description: impl Into<String>,
        date_is_valid: impl FnOnce(NaiveDate) -> bool,
        today: impl FnOnce() -> NaiveDate,
    ) -> Result<&Expense, AppError> {
        if !validation::is_valid_amount(amount_cents) {
            debug!(amount = amount_cents, "expense rejected: non-positive amount");
            return Err(AppError::InvalidAmount(amount_cents));
        }
        if !date_is_valid(date) {
            let today = today();
            debug!(%date, %today, "expense rejected: future date");
            return Err(AppError::FutureDate { date, today });
        }

        self.add_expense(Expense::new(date, amount_cents, category, description));
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn ensure_has_expenses(&self) -> Result<(), AppError> {
        if self.expenses.is_empty() {
            return Err(AppError::NoExpenses);
        }
        Ok(())
    }

    // ========================
    // Category operations
    // ========================

    /// Append a category. Duplicate names are allowed.
    pub fn add_category(&mut self, category: Category) {
        debug!(id = %category.id(), name = category.name(), "category added");
        self.categories.push(category);
    }

    /// Remove the category with the given id. Matching is by identity, never by name.
    pub fn remove_category(&mut self, id: CategoryId) -> Option<Category> {
        let position = self.categories.iter().position(|c| c.id() == id)?;
        let removed = self.categories.remove(position);
        debug!(%id, name = removed.name(), "category removed");
        Some(removed)
    }

    /// All categories, in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Create a category with the given name and append it.
    pub fn create_category(&mut self, name: impl Into<String>) -> &Category {
        self.add_category(Category::new(name));
        &self.categories[self.categories.len() - 1]
    }

    /// Look up a category by its current position.
    ///
    /// Positions shift whenever the list changes, so callers must not hold on to
    /// an index across mutations.
    pub fn category_at(&self, index: i64) -> Result<&Category, AppError> {
        let position = self.checked_position(index)?;
        Ok(&self.categories[position])
    }

    /// Mutable lookup by position, used to assign expenses to a category's own list.
    pub fn category_at_mut(&mut self, index: i64) -> Result<&mut Category, AppError> {
        let position = self.checked_position(index)?;
        Ok(&mut self.categories[position])
    }

    /// Remove the category at the given position.
    /// Expenses that carry its name are left untouched.
    pub fn remove_category_at(&mut self, index: i64) -> Result<Category, AppError> {
        let position = self.checked_position(index)?;
        let removed = self.categories.remove(position);
        debug!(index, id = %removed.id(), name = removed.name(), "category removed");
        Ok(removed)
    }

    pub fn ensure_has_categories(&self) -> Result<(), AppError> {
        if self.categories.is_empty() {
            return Err(AppError::NoCategories);
        }
        Ok(())
    }

    fn checked_position(&self, index: i64) -> Result<usize, AppError> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.categories.len())
            .ok_or(AppError::CategoryIndexOutOfRange {
                index,
                len: self.categories.len(),
            })
    }

    // ========================
    // Reports
    // ========================

    /// Total of the flat expense list for one calendar month.
    pub fn monthly_report(&self, year: i64, month: i64) -> MonthlyReport {
        MonthlyReport {
            year,
            month,
            total: monthly_total(&self.expenses, year, month),
            count: monthly_count(&self.expenses, year, month),
        }
    }

    /// Total of the selected category's own expense list.
    pub fn category_report(&self, index: i64) -> Result<CategoryReport, AppError> {
        let category = self.category_at(index)?;
        Ok(CategoryReport {
            category_id: category.id(),
            category: category.name().to_string(),
            total: category_total(category),
            count: category.expenses().len(),
        })
    }
}
