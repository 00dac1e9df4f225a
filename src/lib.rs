//! # backup-report
//!
//! Console reporting helpers for backup runs.
//!
//! The orchestration that copies files and dumps databases lives elsewhere;
//! this crate covers what it prints:
//!
//! - [`printer`]: importance-gated output with an optional timestamp prefix
//! - [`report`]: titled, aligned summary tables for file and database backups
//! - [`redact`]: password scrubbing and timestamp stripping for tool output
//! - [`utils`]: size and duration formatting, on-disk size measurement

pub mod config;
pub mod printer;
pub mod redact;
pub mod report;
pub mod utils;

pub use config::{FileConfig, PrinterConfig};
pub use printer::{Importance, Printer};
pub use report::{Align, ResultTable, TableLayout};
