//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and subcommands
//! using the [clap](https://docs.rs/clap/) library.
//!
//! [`Cli::printer_config`] accepts a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use backup_report::config::{DEFAULT_DATE_FORMAT, FileConfig, PrinterConfig};

/// Command-line arguments controlling console output.
#[derive(Parser)]
struct OutputArgs {
    /// Print every message, including detailed progress
    ///
    /// Overrides --quiet.
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Only print messages that must always be shown
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Prefix each line with the current local time
    #[arg(long, global = true)]
    date: bool,

    /// strftime pattern for the --date prefix, including any separator
    #[arg(long, global = true)]
    date_format: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the size of one or more files or directories
    Size {
        /// Paths to measure
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Format a number of seconds as elapsed time
    Duration {
        /// Elapsed seconds
        seconds: u64,
    },

    /// Print text with password arguments redacted
    Redact {
        /// Text to scrub; multiple arguments are joined with spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Print a tab-separated tool line without its leading timestamp
    StripTimestamp {
        /// Line containing at least one tab
        line: String,
    },

    /// Compare a source path with its backup copy and print a summary table
    Compare {
        /// Original file or directory
        source: PathBuf,

        /// Backup destination
        destination: PathBuf,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub(crate) enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "backup-report")]
#[command(about = "Report helpers for backup scripts: sizes, durations, redaction and summaries")]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    /// Resolve printer configuration from CLI args and config file.
    ///
    /// Boolean flags are set if given on the command line or in the config
    /// file. The date format comes from the CLI, then the config file, then
    /// [`DEFAULT_DATE_FORMAT`].
    #[must_use]
    pub(crate) fn printer_config(&self, config: &FileConfig) -> PrinterConfig {
        let file = &config.output;

        PrinterConfig {
            verbose: self.output.verbose || file.verbose.unwrap_or(false),
            quiet: self.output.quiet || file.quiet.unwrap_or(false),
            date: self.output.date || file.date.unwrap_or(false),
            date_format: self
                .output
                .date_format
                .clone()
                .or_else(|| file.date_format.clone())
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
        }
    }
}
