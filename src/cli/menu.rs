use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::application::{AppError, ExpenseLedger};
use crate::domain::{Expense, format_cents};

use super::OutputFormat;
use super::console::{Console, ConsoleError};

/// One interactive run of the expense tracker over a caller-owned ledger.
pub struct Session<'a, R, W, E> {
    ledger: &'a mut ExpenseLedger,
    console: Console<R, W, E>,
    format: OutputFormat,
}

impl<'a, R: BufRead, W: Write, E: Write> Session<'a, R, W, E> {
    pub fn new(
        ledger: &'a mut ExpenseLedger,
        console: Console<R, W, E>,
        format: OutputFormat,
    ) -> Self {
        Self {
            ledger,
            console,
            format,
        }
    }

    /// Drive the main menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        self.console.message("Welcome to the Expense Tracker!")?;

        match self.main_loop() {
            Ok(()) => {}
            Err(ConsoleError::InputClosed) => {
                // Nothing left to read; treat like choosing Exit
                self.console.message("")?;
                info!("input closed, ending session");
            }
            Err(e) => return Err(e),
        }

        self.console
            .message("Thank you for using the Expense Tracker. Goodbye!")?;
        Ok(())
    }

    fn main_loop(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.display_main_menu()?;
            let choice = self.console.read_int("Enter your choice")?;
            debug!(choice, "main menu");

            match choice {
                1 => self.record_expense()?,
                2 => self.manage_categories()?,
                3 => self.view_expenses()?,
                4 => self.generate_reports()?,
                5 => return Ok(()),
                _ => self.console.error("Invalid choice. Please try again.")?,
            }
        }
    }

    fn display_main_menu(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nMAIN MENU")?;
        self.console.message("1. Record Expense")?;
        self.console.message("2. Manage Categories")?;
        self.console.message("3. View Expenses")?;
        self.console.message("4. Generate Reports")?;
        self.console.message("5. Exit")
    }

    // ========================
    // Expenses
    // ========================

    fn record_expense(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nRECORD EXPENSE")?;

        let date = self.console.read_date("Enter the date (YYYY-MM-DD)")?;
        let amount = self.console.read_amount("Enter the amount")?;
        let category = self.console.read_string("Enter the category")?;
        let description = self.console.read_string("Enter the description")?;

        let recorded = self
            .ledger
            .record_expense(date, amount, category, description)
            .map(|expense| expense.id());
        match recorded {
            Ok(id) => {
                info!(%id, "expense recorded");
                self.console.message("Expense recorded successfully.")
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn view_expenses(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nVIEW EXPENSES")?;

        if let Err(e) = self.ledger.ensure_has_expenses() {
            return self.report_error(&e);
        }

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.ledger.expenses())?;
                self.console.message(&json)
            }
            OutputFormat::Text => {
                self.console.message("\nEXPENSES")?;
                let lines: Vec<String> = self
                    .ledger
                    .expenses()
                    .iter()
                    .flat_map(expense_lines)
                    .collect();
                for line in lines {
                    self.console.message(&line)?;
                }
                Ok(())
            }
        }
    }

    // ========================
    // Categories
    // ========================

    fn manage_categories(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nMANAGE CATEGORIES")?;
        self.console.message("1. Create Category")?;
        self.console.message("2. Delete Category")?;

        let choice = self.console.read_int("Enter your choice")?;
        debug!(choice, "manage categories menu");

        match choice {
            1 => self.create_category(),
            2 => self.delete_category(),
            _ => self.console.error("Invalid choice. Please try again."),
        }
    }

    fn create_category(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nCREATE CATEGORY")?;
        let name = self.console.read_string("Enter the category name")?;

        self.ledger.create_category(name);
        self.console.message("Category created successfully.")
    }

    fn delete_category(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nDELETE CATEGORY")?;

        if let Err(e) = self.ledger.ensure_has_categories() {
            return self.report_error(&e);
        }
        self.display_categories()?;

        let index = self
            .console
            .read_int("Enter the index of the category to delete")?;

        match self.ledger.remove_category_at(index) {
            Ok(_) => self.console.message("Category deleted successfully."),
            Err(e) => self.report_error(&e),
        }
    }

    fn display_categories(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nCATEGORIES")?;
        let lines: Vec<String> = self
            .ledger
            .categories()
            .iter()
            .enumerate()
            .map(|(i, category)| format!("{}. {}", i, category))
            .collect();
        for line in lines {
            self.console.message(&line)?;
        }
        Ok(())
    }

    // ========================
    // Reports
    // ========================

    fn generate_reports(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nGENERATE REPORTS")?;
        self.console.message("1. Monthly Expense Report")?;
        self.console.message("2. Category-wise Expense Report")?;

        let choice = self.console.read_int("Enter your choice")?;
        debug!(choice, "reports menu");

        match choice {
            1 => self.monthly_report(),
            2 => self.category_report(),
            _ => self.console.error("Invalid choice. Please try again."),
        }
    }

    fn monthly_report(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nMONTHLY EXPENSE REPORT")?;
        let year = self.console.read_int("Enter the year")?;
        let month = self.console.read_int("Enter the month (1-12)")?;

        let report = self.ledger.monthly_report(year, month);
        match self.format {
            OutputFormat::Json => self.print_json(&report),
            OutputFormat::Text => self.console.message(&format!(
                "Total Expenses for {}/{}: {}",
                report.month,
                report.year,
                format_cents(report.total)
            )),
        }
    }

    fn category_report(&mut self) -> Result<(), ConsoleError> {
        self.console.message("\nCATEGORY-WISE EXPENSE REPORT")?;

        if let Err(e) = self.ledger.ensure_has_categories() {
            return self.report_error(&e);
        }
        self.display_categories()?;

        let index = self.console.read_int("Enter the index of the category")?;

        let report = match self.ledger.category_report(index) {
            Ok(report) => report,
            Err(e) => return self.report_error(&e),
        };
        match self.format {
            OutputFormat::Json => self.print_json(&report),
            OutputFormat::Text => self.console.message(&format!(
                "Total Expenses for {}: {}",
                report.category,
                format_cents(report.total)
            )),
        }
    }

    fn print_json<T: Serialize>(&mut self, value: &T) -> Result<(), ConsoleError> {
        let json = serde_json::to_string_pretty(value)?;
        self.console.message(&json)
    }

    fn report_error(&mut self, error: &AppError) -> Result<(), ConsoleError> {
        debug!(%error, "operation rejected");
        self.console.error(user_message(error))
    }
}

/// The line shown to the user for a rejected operation.
fn user_message(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidAmount(_) | AppError::FutureDate { .. } => {
            "Invalid expense details. Please try again."
        }
        AppError::CategoryIndexOutOfRange { .. } => "Invalid category index. Please try again.",
        AppError::NoCategories => "No categories found.",
        AppError::NoExpenses => "No expenses found.",
    }
}

fn expense_lines(expense: &Expense) -> [String; 5] {
    [
        format!("Date: {}", expense.date().format("%Y-%m-%d")),
        format!("Amount: {}", format_cents(expense.amount_cents())),
        format!("Category: {}", expense.category()),
        format!("Description: {}", expense.description()),
        "-".repeat(23),
    ]
}
