// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use chrono::{Days, NaiveDate};
use expense_tracker::application::ExpenseLedger;
use expense_tracker::cli::{Console, OutputFormat, Session};
use expense_tracker::domain::{Cents, Expense, validation};

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Tomorrow's date from the system clock, always rejected by validation
pub fn tomorrow() -> NaiveDate {
    validation::today() + Days::new(1)
}

pub fn expense(date: &str, amount: Cents, category: &str) -> Expense {
    Expense::new(parse_date(date), amount, category, format!("{} expense", category))
}

/// Captured result of a scripted console session
pub struct SessionOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run the interactive menu against `ledger`, feeding it `input` line by line.
pub fn run_session(
    ledger: &mut ExpenseLedger,
    input: &str,
    format: OutputFormat,
) -> Result<SessionOutput> {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    {
        let console = Console::new(Cursor::new(input.as_bytes()), &mut stdout, &mut stderr);
        Session::new(ledger, console, format).run()?;
    }
    Ok(SessionOutput {
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}

/// Test fixture: the three expenses used by most monthly report tests
pub struct StandardExpenses;

impl StandardExpenses {
    /// 2024-03-01 10.00, 2024-03-15 5.00, 2024-04-01 100.00
    pub fn create(ledger: &mut ExpenseLedger) {
        ledger.add_expense(expense("2024-03-01", 1000, "groceries"));
        ledger.add_expense(expense("2024-03-15", 500, "dining"));
        ledger.add_expense(expense("2024-04-01", 10000, "rent"));
    }
}
