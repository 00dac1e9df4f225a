//! Utility functions and helpers.
//!
//! This module contains the pure formatting helpers used throughout the
//! application, along with on-disk size measurement.

pub mod duration;
pub mod size;

pub use duration::format_duration;
pub use size::{calculate_path_size, format_bytes, format_size, size_of};
