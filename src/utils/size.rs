//! Size formatting and measurement utilities.
//!
//! This module turns byte counts into human-readable strings (decimal units,
//! base 1000) and measures how much space a file or directory tree occupies
//! on disk.

use std::path::Path;

use anyhow::Result;
use walkdir::WalkDir;

/// Decimal units tried in order before falling through to [`OVERFLOW_UNIT`].
const UNITS: [&str; 8] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB"];

/// Label used once a value is too large for every entry in [`UNITS`].
const OVERFLOW_UNIT: &str = "YiB";

/// Returned by [`size_of`] for a directory whose files add up to zero bytes.
pub const EMPTY: &str = "empty";

/// Format a byte count as a human-readable string with two decimals.
///
/// The value is divided by 1000 until its magnitude drops below 1000, and
/// the unit reached at that point is used. Values beyond zettabytes are
/// reported in `YiB`. Only the magnitude is used for the threshold, so
/// negative inputs keep their sign.
///
/// # Examples
///
/// ```
/// # use backup_report::utils::format_size;
/// assert_eq!(format_size(0.0), "0.00 B");
/// assert_eq!(format_size(1_500.0), "1.50 KB");
/// assert_eq!(format_size(-2_000_000.0), "-2.00 MB");
/// ```
#[must_use]
pub fn format_size(bytes: f64) -> String {
    let mut value = bytes;

    for unit in UNITS {
        if value.abs() < 1000.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1000.0;
    }

    format!("{value:.2} {OVERFLOW_UNIT}")
}

/// Format an unsigned byte count, as reported by file metadata.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes as f64)
}

/// Calculate the size of a path in bytes.
///
/// A regular file reports its own length. Anything else is walked as a
/// directory tree with `walkdir`, summing the length of every regular file.
/// Symbolic links are neither counted nor followed.
///
/// # Errors
///
/// Returns the underlying I/O error if the path does not exist or any entry
/// below it cannot be read (e.g. permission denied).
pub fn calculate_path_size(path: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_file() {
        return Ok(metadata.len());
    }

    let mut total = 0u64;

    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }

    Ok(total)
}

/// Human-readable size of a file or directory tree.
///
/// Returns [`EMPTY`] when a directory contains no bytes at all.
///
/// # Errors
///
/// Propagates filesystem errors from [`calculate_path_size`].
pub fn size_of(path: &Path) -> Result<String> {
    if path.is_file() {
        return Ok(format_bytes(std::fs::metadata(path)?.len()));
    }

    let total = calculate_path_size(path)?;
    if total == 0 {
        return Ok(EMPTY.to_string());
    }

    Ok(format_bytes(total))
}
