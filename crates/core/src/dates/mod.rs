//! Date token engine.
//!
//! Resolves bracketed date tokens into UTC instants:
//! - `[TODAY]`, `[TOMORROW+1MONTH]`, `[YESTERDAY-1YEAR+3DAY]`
//! - `[START-JANUARY-2024]`, `[END-FEBRUARY-2024]`
//! - `[START-JANUARY-2024<->END-JANUARY-2024]` (range of two month boundaries)

pub mod errors;
pub mod format;
pub mod grammar;
pub mod math;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::token;

pub use errors::{DateTokenError, INVALID_TOKEN_FORMAT};
pub use format::{format_date_utc, parse_date_utc};
pub use grammar::{Adjustment, Anchor, DateToken, DateUnit, MonthEdge};

/// Separator between the two halves of a range token.
pub const RANGE_SEPARATOR: &str = "<->";

/// Start and end of a range token. `start <= end` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateRange {
    #[serde(serialize_with = "serialize_canonical")]
    pub start: DateTime<Utc>,
    #[serde(serialize_with = "serialize_canonical")]
    pub end: DateTime<Utc>,
}

fn serialize_canonical<S: serde::Serializer>(
    instant: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date_utc(instant))
}

/// Parse a date token without resolving it.
pub fn parse_date_expr(token: &str) -> Result<DateToken, DateTokenError> {
    debug!(token, "parsing date token");
    let body = token::body(token).ok_or_else(|| DateTokenError::invalid_format(token))?;
    DateToken::parse(body, token)
}

/// Parse and resolve a date token against `clock`.
///
/// ```
/// use chrono::NaiveDate;
/// use tokenparser_core::clock::FixedClock;
/// use tokenparser_core::dates::{format_date_utc, parse_date_token};
///
/// let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// let instant = parse_date_token("[TODAY+1MONTH]", &clock).unwrap();
/// assert_eq!(format_date_utc(&instant), "2024-02-29 00:00:00Z");
/// ```
pub fn parse_date_token(
    token: &str,
    clock: &impl Clock,
) -> Result<DateTime<Utc>, DateTokenError> {
    let parsed = parse_date_expr(token)?;
    let instant = parsed.resolve(clock.today())?;
    debug!(token, %instant, "resolved date token");
    Ok(instant)
}

/// Parse a `[START|END-MONTH-YEAR<->START|END-MONTH-YEAR]` range token.
///
/// Every failure is reported as [`DateTokenError::InvalidFormat`] carrying the
/// whole token.
pub fn parse_date_range_token(token: &str) -> Result<DateRange, DateTokenError> {
    debug!(token, "parsing date range token");
    let invalid = || DateTokenError::invalid_format(token);

    let body = token::body(token).ok_or_else(invalid)?;
    let halves: Vec<&str> = body.split(RANGE_SEPARATOR).collect();
    let [start, end] = halves.as_slice() else {
        debug!(token, parts = halves.len(), "range token does not have two halves");
        return Err(invalid());
    };

    let resolve_half = |half: &str| {
        grammar::parse_month_boundary(half, token)
            // month boundaries do not depend on the clock
            .and_then(|parsed| parsed.resolve(chrono::NaiveDate::MIN))
            .map_err(|e| {
                debug!(token, half, error = %e, "range half rejected");
                invalid()
            })
    };

    Ok(DateRange { start: resolve_half(*start)?, end: resolve_half(*end)? })
}

/// Whether `token` is a valid single date token.
#[must_use]
pub fn is_date_token(token: &str) -> bool {
    parse_date_expr(token).is_ok()
}

/// Whether `token` is a valid range token.
#[must_use]
pub fn is_date_range_token(token: &str) -> bool {
    parse_date_range_token(token).is_ok()
}
