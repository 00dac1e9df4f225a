//! Scrubbing helpers for text that ends up in the console.
//!
//! Backup runs log the command lines of external dump tools and relay their
//! error output. These helpers remove credentials and tool-specific noise
//! before anything is printed.

use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use regex::Regex;

/// Placeholder written in place of a password value.
pub const REDACTED: &str = "REDACTED";

#[allow(clippy::unwrap_used)]
static PASSWORD_ARG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--password=.*? ").unwrap());

/// Replace the value of every `--password=<value> ` argument with [`REDACTED`].
///
/// The value runs up to the next space. A password at the very end of the
/// text, with no trailing space, is not matched.
///
/// # Examples
///
/// ```
/// # use backup_report::redact::secure;
/// assert_eq!(
///     secure("mysqldump --password=hunter2 --all-databases"),
///     "mysqldump --password=REDACTED --all-databases"
/// );
/// ```
#[must_use]
pub fn secure(content: &str) -> String {
    PASSWORD_ARG
        .replace_all(content, format!("--password={REDACTED} ").as_str())
        .into_owned()
}

/// Drop the leading timestamp field from a tab-separated log line.
///
/// Database tools such as `mongodump` prefix each error line with a
/// timestamp followed by a tab; everything after the first tab is returned.
///
/// # Errors
///
/// Returns an error if the line contains no tab character.
pub fn strip_timestamp(content: &str) -> Result<&str> {
    content
        .split_once('\t')
        .map(|(_, rest)| rest)
        .ok_or_else(|| anyhow!("No timestamp separator (tab) in line: {content}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_single_password() {
        assert_eq!(
            secure("run --password=secret123 --verbose"),
            "run --password=REDACTED --verbose"
        );
    }

    #[test]
    fn test_secure_multiple_passwords() {
        assert_eq!(
            secure("a --password=one b --password=two c"),
            "a --password=REDACTED b --password=REDACTED c"
        );
    }

    #[test]
    fn test_secure_without_password_is_unchanged() {
        let line = "docker exec db pg_dumpall -U postgres";
        assert_eq!(secure(line), line);
    }

    #[test]
    fn test_secure_empty_password() {
        assert_eq!(secure("x --password= y"), "x --password=REDACTED y");
    }

    #[test]
    fn test_secure_trailing_password_is_not_matched() {
        assert_eq!(secure("dump --password=last"), "dump --password=last");
    }

    #[test]
    fn test_strip_timestamp() {
        assert_eq!(
            strip_timestamp("2024-01-01\terror: disk full").unwrap(),
            "error: disk full"
        );
    }

    #[test]
    fn test_strip_timestamp_keeps_later_tabs() {
        assert_eq!(strip_timestamp("ts\tpart\tmore").unwrap(), "part\tmore");
    }

    #[test]
    fn test_strip_timestamp_empty_rest() {
        assert_eq!(strip_timestamp("ts\t").unwrap(), "");
    }

    #[test]
    fn test_strip_timestamp_without_tab_errors() {
        assert!(strip_timestamp("no separator here").is_err());
    }
}
