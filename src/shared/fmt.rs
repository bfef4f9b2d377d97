//! Display formatting for totals and durations.

use chrono::TimeDelta;
use rust_decimal::Decimal;

/// Currency suffix shown in the UI and written to the history log.
pub const CURRENCY_SUFFIX: &str = "€";

/// Format a fare total for display: two fraction digits plus currency suffix.
pub fn format_total(total: &Decimal) -> String {
    format!("{:.2} {}", total.round_dp(2), CURRENCY_SUFFIX)
}

/// Format a trip duration as `H:MM:SS`, truncating fractional seconds.
///
/// Hours are unpadded. Negative durations clamp to zero.
pub fn format_duration(duration: &TimeDelta) -> String {
    let total_secs = duration.num_seconds().max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_total_two_fraction_digits() {
        assert_eq!(format_total(&Decimal::ZERO), "0.00 €");
        assert_eq!(format_total(&dec("0.15")), "0.15 €");
        assert_eq!(format_total(&dec("12.5")), "12.50 €");
    }

    #[test]
    fn test_format_total_rounds_excess_precision() {
        assert_eq!(format_total(&dec("0.123")), "0.12 €");
        assert_eq!(format_total(&dec("0.999")), "1.00 €");
    }

    #[test]
    fn test_format_duration_h_mm_ss() {
        assert_eq!(format_duration(&TimeDelta::seconds(0)), "0:00:00");
        assert_eq!(format_duration(&TimeDelta::seconds(330)), "0:05:30");
        assert_eq!(format_duration(&TimeDelta::seconds(3661)), "1:01:01");
        assert_eq!(format_duration(&TimeDelta::seconds(36_000 + 123)), "10:02:03");
    }

    #[test]
    fn test_format_duration_truncates_fractional_seconds() {
        assert_eq!(format_duration(&TimeDelta::milliseconds(1900)), "0:00:01");
    }

    #[test]
    fn test_format_duration_clamps_negative() {
        assert_eq!(format_duration(&TimeDelta::seconds(-5)), "0:00:00");
    }
}
