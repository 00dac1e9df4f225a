//! Importance-gated console output.
//!
//! A [`Printer`] decides, from its [`PrinterConfig`], whether a message of a
//! given [`Importance`] is shown, and optionally prefixes it with the current
//! local time. Verbose mode shows everything and wins over quiet mode.

use anyhow::{Result, bail};
use chrono::Local;

use crate::config::PrinterConfig;

/// How important a message is, which decides whether it survives `quiet`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Importance {
    /// Only shown in verbose mode
    Verbose = 0,
    /// Shown unless quiet mode is on
    #[default]
    Normal = 1,
    /// Always shown
    Always = 2,
}

impl TryFrom<u8> for Importance {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Verbose),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Always),
            other => bail!("Invalid importance level {other}, expected 0, 1 or 2"),
        }
    }
}

/// Console printer holding the output configuration for a run.
#[derive(Clone, Debug, Default)]
pub struct Printer {
    config: PrinterConfig,
}

impl Printer {
    /// Create a printer from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured date format is invalid.
    pub fn new(config: PrinterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this printer was built with.
    #[must_use]
    pub const fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Whether a message of the given importance would be printed.
    #[must_use]
    pub const fn should_emit(&self, importance: Importance) -> bool {
        if self.config.verbose {
            return true;
        }

        match importance {
            Importance::Verbose => false,
            Importance::Normal => !self.config.quiet,
            Importance::Always => true,
        }
    }

    /// The exact line [`emit`](Self::emit) would print, or `None` if the
    /// message is filtered out.
    #[must_use]
    pub fn format_line(&self, content: &str, importance: Importance) -> Option<String> {
        if !self.should_emit(importance) {
            return None;
        }

        if self.config.date {
            let prefix = Local::now().format(&self.config.date_format);
            Some(format!("{prefix}{content}"))
        } else {
            Some(content.to_string())
        }
    }

    /// Print a message to stdout if its importance passes the filter.
    pub fn emit(&self, content: &str, importance: Importance) {
        if let Some(line) = self.format_line(content, importance) {
            println!("{line}");
        }
    }

    /// Print a message that only matters in verbose mode.
    pub fn verbose(&self, content: &str) {
        self.emit(content, Importance::Verbose);
    }

    /// Print a normal progress message.
    pub fn info(&self, content: &str) {
        self.emit(content, Importance::Normal);
    }

    /// Print a message that must be shown even in quiet mode.
    pub fn always(&self, content: &str) {
        self.emit(content, Importance::Always);
    }
}
