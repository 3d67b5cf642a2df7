//! Terminal output formatting
//!
//! Handlers never print directly; they go through [`OutputFormatter`] so
//! that `--json` and `--no-color` behave uniformly across commands.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output for humans or machines
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether machine-readable JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("✓ {message}");
        } else {
            println!("{} {message}", "✓".green().bold());
        }
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a warning line
    pub fn warning(&self, message: &str) {
        if self.no_color {
            println!("warning: {message}");
        } else {
            println!("{} {message}", "warning:".yellow().bold());
        }
    }

    /// Print an error line to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("error: {message}");
        } else {
            eprintln!("{} {message}", "error:".red().bold());
        }
    }

    /// Print a value as pretty JSON to stdout
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
