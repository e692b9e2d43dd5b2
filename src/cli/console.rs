use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Cents, parse_cents};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    InputClosed,

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Line-oriented console over arbitrary streams.
///
/// Normal messages go to `out`, errors to `err`. Typed reads keep asking until
/// the answer parses; end of input surfaces as `ConsoleError::InputClosed`.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    pub fn message(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.out.flush()?;
        writeln!(self.err, "{}", message)?;
        Ok(())
    }

    pub fn read_string(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.prompt(prompt)?;
        self.read_line()
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        self.read_parsed(prompt, |s| i64::from_str(s.trim()).ok())
    }

    pub fn read_amount(&mut self, prompt: &str) -> Result<Cents, ConsoleError> {
        self.read_parsed(prompt, |s| parse_cents(s).ok())
    }

    /// Read a `YYYY-MM-DD` date.
    pub fn read_date(&mut self, prompt: &str) -> Result<NaiveDate, ConsoleError> {
        self.read_parsed(prompt, parse_iso_date)
    }

    fn read_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ConsoleError> {
        self.prompt(prompt)?;
        loop {
            let line = self.read_line()?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            self.prompt(&format!("Invalid input. {}", prompt))?;
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<(), ConsoleError> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Strict `YYYY-MM-DD`: four-digit year, zero-padded month and day.
fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    let shape_ok = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    fn stdout(console: &Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>) -> String {
        String::from_utf8(console.out.clone()).unwrap()
    }

    #[test]
    fn test_read_int_retries_until_valid() {
        let mut c = console("abc\n4.5\n 7 \n");

        assert_eq!(c.read_int("Enter your choice").unwrap(), 7);
        assert_eq!(
            stdout(&c),
            "Enter your choice: Invalid input. Enter your choice: Invalid input. Enter your choice: "
        );
    }

    #[test]
    fn test_read_string_keeps_inner_whitespace() {
        let mut c = console("  Eating out \r\n");
        assert_eq!(c.read_string("Name").unwrap(), "  Eating out ");
    }

    #[test]
    fn test_read_amount_accepts_negative_text() {
        // Sign checks belong to validation, not parsing
        let mut c = console("-5\n");
        assert_eq!(c.read_amount("Amount").unwrap(), -500);
    }

    #[test]
    fn test_read_date() {
        let mut c = console("2024-13-01\nyesterday\n2024-3-5\n02024-3-5\n2023-02-29\n2024-02-29\n");
        assert_eq!(
            c.read_date("Date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(stdout(&c).matches("Invalid input. Date: ").count(), 5);
    }

    #[test]
    fn test_parse_iso_date_requires_padding() {
        assert_eq!(
            parse_iso_date(" 2024-03-05 "),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_iso_date("2024-3-5"), None);
        assert_eq!(parse_iso_date("2024-03-5"), None);
        assert_eq!(parse_iso_date("2024/03/05"), None);
        assert_eq!(parse_iso_date("+2024-03-05"), None);
    }

    #[test]
    fn test_end_of_input() {
        let mut c = console("nope\n");
        assert!(matches!(
            c.read_int("Choice"),
            Err(ConsoleError::InputClosed)
        ));
    }

    #[test]
    fn test_errors_go_to_error_stream() {
        let mut c = console("");
        c.message("hello").unwrap();
        c.error("boom").unwrap();

        assert_eq!(stdout(&c), "hello\n");
        assert_eq!(String::from_utf8(c.err.clone()).unwrap(), "boom\n");
    }
}
