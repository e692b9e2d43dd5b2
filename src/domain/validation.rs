use chrono::{Local, NaiveDate};

use super::Cents;

/// True iff the amount is strictly positive. Zero is rejected.
pub fn is_valid_amount(amount_cents: Cents) -> bool {
    amount_cents > 0
}

/// True iff `date` is not after today's local date.
pub fn is_valid_date(date: NaiveDate) -> bool {
    is_valid_date_as_of(date, today())
}

/// Same check as [`is_valid_date`] against an explicit "today".
pub fn is_valid_date_as_of(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

/// Current date from the system clock, in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
