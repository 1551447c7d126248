//! Canonical `yyyy-MM-dd HH:mm:ssZ` rendering of instants.

use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDateTime, Utc};

use super::errors::DateTokenError;

/// `chrono` format string of the canonical representation.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";

/// Years `%Y` renders as exactly four digits. Outside this range chrono adds
/// a sign and extra digits.
pub const CANONICAL_YEARS: RangeInclusive<i32> = 0..=9999;

/// Format an instant as `2024-01-31 00:00:00Z`.
#[must_use]
pub fn format_date_utc(instant: &DateTime<Utc>) -> String {
    instant.format(CANONICAL_FORMAT).to_string()
}

/// Parse the canonical representation back into an instant.
///
/// Only the exact shape produced by [`format_date_utc`] is accepted.
pub fn parse_date_utc(value: &str) -> Result<DateTime<Utc>, DateTokenError> {
    NaiveDateTime::parse_from_str(value, CANONICAL_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| DateTokenError::invalid_format(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_midnight() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date_utc(&instant), "2024-01-01 00:00:00Z");
    }

    #[test]
    fn formats_time_components_and_padding() {
        let instant = Utc.with_ymd_and_hms(987, 11, 5, 13, 4, 9).unwrap();
        assert_eq!(format_date_utc(&instant), "0987-11-05 13:04:09Z");
    }

    #[test]
    fn canonical_years_are_four_digits() {
        let first = Utc.with_ymd_and_hms(*CANONICAL_YEARS.start(), 1, 1, 0, 0, 0).unwrap();
        let last = Utc.with_ymd_and_hms(*CANONICAL_YEARS.end(), 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_date_utc(&first), "0000-01-01 00:00:00Z");
        assert_eq!(format_date_utc(&last), "9999-12-31 00:00:00Z");
    }

    #[test]
    fn parses_canonical_shape() {
        let parsed = parse_date_utc("2025-11-12 13:45:12Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 11, 12, 13, 45, 12).unwrap());
    }

    #[test]
    fn rejects_other_shapes() {
        for value in ["2025-11-12T13:45:12Z", "2025-11-12 13:45:12", "2025-11-12", "nope"] {
            assert!(
                matches!(parse_date_utc(value), Err(DateTokenError::InvalidFormat(_))),
                "{value} should be rejected"
            );
        }
    }
}
