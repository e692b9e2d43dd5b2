use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::Cents;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid amount: {0} cents (must be positive)")]
    InvalidAmount(Cents),

    #[error("Date {date} is in the future (today is {today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    #[error("Category index {index} is out of range (0..{len})")]
    CategoryIndexOutOfRange { index: i64, len: usize },

    #[error("No categories found")]
    NoCategories,

    #[error("No expenses found")]
    NoExpenses,
}
