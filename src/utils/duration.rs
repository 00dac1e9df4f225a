//! Elapsed-time formatting.

/// Units used to break a duration down, largest first.
const TIME_UNITS: [(&str, u64); 4] = [
    ("day", 60 * 60 * 24),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Format a number of seconds as an English "elapsed time" sentence.
///
/// Each unit is only mentioned when the remaining seconds reach it, and
/// values above one are pluralised. Zero seconds is reported as
/// `"elapsed time: 0 second"`.
///
/// # Examples
///
/// ```
/// # use backup_report::utils::format_duration;
/// assert_eq!(format_duration(61), "elapsed time: 1 minute and 1 second");
/// assert_eq!(format_duration(7200), "elapsed time: 2 hours");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let mut remaining = seconds;
    let mut parts = Vec::new();

    for (unit, unit_seconds) in TIME_UNITS {
        if remaining >= unit_seconds {
            let value = remaining / unit_seconds;
            remaining %= unit_seconds;
            parts.push(format_unit(value, unit));
        }
    }

    if parts.is_empty() {
        parts.push(format_unit(0, "second"));
    }

    let sentence = match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {last}", rest.join(", ")),
        _ => parts.concat(),
    };

    format!("elapsed time: {sentence}")
}

fn format_unit(value: u64, unit: &str) -> String {
    let suffix = if value > 1 { "s" } else { "" };
    format!("{value} {unit}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seconds() {
        assert_eq!(format_duration(0), "elapsed time: 0 second");
    }

    #[test]
    fn test_single_units() {
        assert_eq!(format_duration(1), "elapsed time: 1 second");
        assert_eq!(format_duration(59), "elapsed time: 59 seconds");
        assert_eq!(format_duration(60), "elapsed time: 1 minute");
        assert_eq!(format_duration(3600), "elapsed time: 1 hour");
        assert_eq!(format_duration(172_800), "elapsed time: 2 days");
    }

    #[test]
    fn test_two_units_joined_with_and() {
        assert_eq!(format_duration(61), "elapsed time: 1 minute and 1 second");
        assert_eq!(format_duration(125), "elapsed time: 2 minutes and 5 seconds");
    }

    #[test]
    fn test_all_units() {
        assert_eq!(
            format_duration(90061),
            "elapsed time: 1 day, 1 hour, 1 minute and 1 second"
        );
        assert_eq!(
            format_duration(2 * 86_400 + 3 * 3600 + 4 * 60 + 5),
            "elapsed time: 2 days, 3 hours, 4 minutes and 5 seconds"
        );
    }

    #[test]
    fn test_zero_units_in_the_middle_are_skipped() {
        assert_eq!(format_duration(86_401), "elapsed time: 1 day and 1 second");
        assert_eq!(format_duration(3660), "elapsed time: 1 hour and 1 minute");
    }
}
