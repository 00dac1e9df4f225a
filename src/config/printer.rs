//! Console output configuration.
//!
//! This module defines the options that decide which messages reach the
//! console and whether they carry a timestamp prefix.

use anyhow::{Result, bail};
use chrono::format::{Item, StrftimeItems};

/// Timestamp pattern used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "[%Y-%m-%d %H:%M:%S] ";

/// Configuration for console output behavior.
///
/// Built once at startup and handed to a [`Printer`](crate::printer::Printer).
/// `verbose` overrides `quiet`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PrinterConfig {
    /// Print every message, including verbose-only ones
    pub verbose: bool,

    /// Suppress normal messages; only high-importance ones are shown
    pub quiet: bool,

    /// Prefix each line with the current local time
    pub date: bool,

    /// chrono `strftime` pattern for the prefix, including any separator
    pub date_format: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            date: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PrinterConfig {
    /// Check that `date_format` only uses specifiers chrono understands.
    ///
    /// # Errors
    ///
    /// Returns an error naming the pattern if it contains an invalid specifier.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!("Invalid date format: {:?}", self.date_format);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrinterConfig::default();

        assert!(!config.verbose);
        assert!(!config.quiet);
        assert!(!config.date);
        assert_eq!(config.date_format, "[%Y-%m-%d %H:%M:%S] ");
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(PrinterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_specifier() {
        let config = PrinterConfig {
            date_format: "%Y-%m-%d %".to_string(),
            ..PrinterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
