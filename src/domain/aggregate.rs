use chrono::Datelike;

use super::{Category, Cents, Expense};

/// Sum the amounts of every expense dated in the given year and month.
/// Month is 1-based. Out-of-range values simply match nothing.
pub fn monthly_total(expenses: &[Expense], year: i64, month: i64) -> Cents {
    in_month(expenses, year, month)
        .map(Expense::amount_cents)
        .sum()
}

/// Number of expenses dated in the given year and month.
pub fn monthly_count(expenses: &[Expense], year: i64, month: i64) -> usize {
    in_month(expenses, year, month).count()
}

/// Sum the amounts of a category's own expense list.
///
/// This reads `Category::expenses`, not the ledger's flat list, so expenses that
/// only carry the category's name as text do not count here.
pub fn category_total(category: &Category) -> Cents {
    category.expenses().iter().map(Expense::amount_cents).sum()
}

fn in_month(expenses: &[Expense], year: i64, month: i64) -> impl Iterator<Item = &Expense> {
    expenses.iter().filter(move |e| {
        let date = e.date();
        i64::from(date.year()) == year && i64::from(date.month()) == month
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn make_expense(date: &str, amount: Cents) -> Expense {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Expense::new(date, amount, "misc", "")
    }

    #[test]
    fn test_monthly_total_empty() {
        assert_eq!(monthly_total(&[], 2024, 3), 0);
    }

    #[test]
    fn test_monthly_total_filters_by_year_and_month() {
        let expenses = vec![
            make_expense("2024-03-01", 1000),
            make_expense("2024-03-15", 500),
            make_expense("2024-04-01", 10000),
            make_expense("2023-03-10", 700), // Same month, other year
        ];

        assert_eq!(monthly_total(&expenses, 2024, 3), 1500);
        assert_eq!(monthly_count(&expenses, 2024, 3), 2);
        assert_eq!(monthly_total(&expenses, 2024, 4), 10000);
        assert_eq!(monthly_total(&expenses, 2023, 3), 700);
    }

    #[test]
    fn test_monthly_total_out_of_range_month() {
        let expenses = vec![make_expense("2024-03-01", 1000)];

        assert_eq!(monthly_total(&expenses, 2024, 0), 0);
        assert_eq!(monthly_total(&expenses, 2024, 13), 0);
        assert_eq!(monthly_total(&expenses, 2024, -3), 0);
    }

    #[test]
    fn test_category_total() {
        let mut category = Category::new("Food");
        category.add_expense(make_expense("2024-03-01", 750));
        category.add_expense(make_expense("2024-05-20", 250));

        assert_eq!(category_total(&category), 1000);
    }

    #[test]
    fn test_category_total_empty() {
        assert_eq!(category_total(&Category::new("Empty")), 0);
    }
}
