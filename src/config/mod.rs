//! Configuration for console output.
//!
//! [`PrinterConfig`] is the resolved configuration handed to the printer;
//! [`FileConfig`] is the optional on-disk layer it can be built from.

pub mod file;
pub mod printer;

pub use file::FileConfig;
pub use printer::{DEFAULT_DATE_FORMAT, PrinterConfig};
