//! Clock readout formatting.

use std::time::Duration;

/// Render an elapsed duration as `MM:SS.D`: two-digit minutes, two-digit
/// seconds, one decimal-second digit, all truncated rather than rounded.
///
/// ```
/// use std::time::Duration;
/// use commander_clock::clock::format_clock;
///
/// assert_eq!(format_clock(Duration::from_millis(75_370)), "01:15.3");
/// ```
#[must_use]
pub fn format_clock(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let tenths = u64::from(elapsed.subsec_millis()) / 100;
    format!("{:02}:{:02}.{}", minutes, seconds, tenths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_clock(Duration::ZERO), "00:00.0");
    }

    #[test]
    fn test_minutes_seconds_tenths() {
        assert_eq!(format_clock(Duration::from_millis(75_300)), "01:15.3");
    }

    #[test]
    fn test_just_under_an_hour() {
        assert_eq!(format_clock(Duration::from_millis(3_599_900)), "59:59.9");
    }

    #[test]
    fn test_truncates_rather_than_rounds() {
        assert_eq!(format_clock(Duration::from_millis(999)), "00:00.9");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "00:59.9");
    }

    #[test]
    fn test_minutes_overflow_two_digits() {
        // Two-digit minutes are a formatting convention, not a cap.
        assert_eq!(format_clock(Duration::from_secs(60 * 100)), "100:00.0");
    }
}
