//! Formatting utilities for sizes and durations.

use std::time::Duration;

/// Format a byte count as kilobytes with two decimals.
///
/// # Examples
///
/// ```
/// use vuecat_cli::ui::format_kilobytes;
///
/// assert_eq!(format_kilobytes(0), "0.00kb");
/// assert_eq!(format_kilobytes(1280), "1.25kb");
/// ```
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2}kb", bytes as f64 / 1024.0)
}

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vuecat_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_kilobytes(0), "0.00kb");
        assert_eq!(format_kilobytes(18), "0.02kb");
        assert_eq!(format_kilobytes(1024), "1.00kb");
        assert_eq!(format_kilobytes(1_048_576), "1024.00kb");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }
}
