mod console;
mod menu;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::application::ExpenseLedger;

pub use console::{Console, ConsoleError};
pub use menu::Session;

/// Expense Tracker - record expenses, organize categories, run simple reports
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "An interactive, in-memory expense tracker for the console")]
#[command(version)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for expense listings and reports
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Run an interactive session on the process's standard streams.
    pub fn run(self) -> Result<()> {
        init_logging(self.verbose)?;

        let mut ledger = ExpenseLedger::new();
        let stdin = io::stdin();
        let console = Console::new(stdin.lock(), io::stdout().lock(), io::stderr());

        Session::new(&mut ledger, console, self.format)
            .run()
            .context("Console session failed")?;
        Ok(())
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["expense-tracker"]);
        assert!(!cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["expense-tracker", "-v", "--format", "json"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
