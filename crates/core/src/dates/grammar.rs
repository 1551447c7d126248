//! Date token grammar.
//!
//! Two body shapes are accepted:
//! - `TODAY`, `TOMORROW+1MONTH`, `YESTERDAY-1YEAR+3DAY` (anchor followed by
//!   zero or more signed adjustment clauses, no separators)
//! - `START-JANUARY-2024`, `END-february-2024` (first or last day of a month)
//!
//! Parsing only builds a [`DateToken`]; nothing is computed until
//! [`DateToken::resolve`] is called.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use super::errors::DateTokenError;
use super::format::CANONICAL_YEARS;
use super::math;

/// Base date of a relative token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Today,
    Tomorrow,
    Yesterday,
}

impl Anchor {
    const ALL: [(&'static str, Anchor); 3] = [
        ("TODAY", Anchor::Today),
        ("TOMORROW", Anchor::Tomorrow),
        ("YESTERDAY", Anchor::Yesterday),
    ];

    fn day_offset(self) -> i64 {
        match self {
            Anchor::Today => 0,
            Anchor::Tomorrow => 1,
            Anchor::Yesterday => -1,
        }
    }
}

/// Unit of an adjustment clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Year,
    Month,
    Day,
}

impl DateUnit {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "YEAR" => Some(DateUnit::Year),
            "MONTH" => Some(DateUnit::Month),
            "DAY" => Some(DateUnit::Day),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            DateUnit::Year => "YEAR",
            DateUnit::Month => "MONTH",
            DateUnit::Day => "DAY",
        }
    }
}

/// A signed adjustment such as `+1MONTH` or `-3DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub amount: i64,
    pub unit: DateUnit,
}

impl Adjustment {
    fn apply(self, date: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            DateUnit::Year => math::add_years(date, self.amount),
            DateUnit::Month => math::add_months(date, self.amount),
            DateUnit::Day => math::add_days(date, self.amount),
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}{}", self.amount, self.unit.as_str())
    }
}

/// Which end of a month a `START`/`END` token selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthEdge {
    Start,
    End,
}

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Month number (1-12) for a full English month name, case-insensitive.
fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .and_then(|idx| u32::try_from(idx + 1).ok())
}

/// A fully parsed date token body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// Anchor plus adjustments, applied left to right.
    Relative { anchor: Anchor, adjustments: Vec<Adjustment> },
    /// First or last day of a calendar month.
    MonthBoundary { edge: MonthEdge, month: u32, year: i32 },
}

impl DateToken {
    /// Parse a token body (brackets already stripped).
    ///
    /// `token` is the original token and only used in error messages.
    pub fn parse(body: &str, token: &str) -> Result<DateToken, DateTokenError> {
        if let Some(relative) = parse_relative(body, token) {
            debug!(token, "using relative date grammar");
            return relative;
        }
        debug!(token, "using month boundary grammar");
        parse_month_boundary(body, token)
    }

    /// Resolve against `today`, producing midnight UTC of the target date.
    pub fn resolve(&self, today: NaiveDate) -> Result<DateTime<Utc>, DateTokenError> {
        let date = match self {
            DateToken::Relative { anchor, adjustments } => {
                let mut date = math::add_days(today, anchor.day_offset()).ok_or_else(
                    || DateTokenError::OutOfRange(format!("{anchor:?} from {today}")),
                )?;
                for adjustment in adjustments {
                    date = adjustment.apply(date).ok_or_else(|| {
                        DateTokenError::OutOfRange(format!("{adjustment} from {date}"))
                    })?;
                    debug!(%adjustment, %date, "applied adjustment");
                }
                // only the final date has to be printable
                if !CANONICAL_YEARS.contains(&date.year()) {
                    return Err(DateTokenError::OutOfRange(format!(
                        "{date} is outside years 0000-9999"
                    )));
                }
                date
            }
            DateToken::MonthBoundary { edge, month, year } => {
                let (first, last) = math::month_bounds(*year, *month)
                    .ok_or_else(|| DateTokenError::InvalidYear(year.to_string()))?;
                match edge {
                    MonthEdge::Start => first,
                    MonthEdge::End => last,
                }
            }
        };
        Ok(date.and_time(NaiveTime::MIN).and_utc())
    }
}

/// Parse the anchor form.
///
/// Returns `None` when the body does not start with an anchor keyword, so the
/// caller can fall through to the month boundary form. Once an anchor is seen
/// the body is committed to this grammar.
fn parse_relative(body: &str, token: &str) -> Option<Result<DateToken, DateTokenError>> {
    let (anchor, mut rest) = Anchor::ALL
        .iter()
        .find_map(|(kw, anchor)| body.strip_prefix(kw).map(|rest| (*anchor, rest)))?;

    let mut adjustments = Vec::new();
    while !rest.is_empty() {
        match parse_clause(rest, token) {
            Ok((adjustment, remaining)) => {
                adjustments.push(adjustment);
                rest = remaining;
            }
            Err(e) => return Some(Err(e)),
        }
    }

    Some(Ok(DateToken::Relative { anchor, adjustments }))
}

/// Parse one `SIGN INTEGER UNIT` clause from the front of `input`.
fn parse_clause<'a>(
    input: &'a str,
    token: &str,
) -> Result<(Adjustment, &'a str), DateTokenError> {
    let negative = match input.as_bytes().first() {
        Some(b'+') => false,
        Some(b'-') => true,
        _ => return Err(DateTokenError::invalid_format(token)),
    };
    let input = &input[1..];

    let (digits, input) = split_while(input, |c| c.is_ascii_digit());
    if digits.is_empty() {
        return Err(DateTokenError::invalid_format(token));
    }

    let (unit_str, input) = split_while(input, |c| c.is_ascii_alphabetic());
    if unit_str.is_empty() {
        return Err(DateTokenError::invalid_format(token));
    }
    let unit = DateUnit::parse(unit_str)
        .ok_or_else(|| DateTokenError::InvalidUnit(unit_str.to_string()))?;

    let magnitude: i64 = digits
        .parse()
        .map_err(|_| DateTokenError::OutOfRange(format!("{digits}{unit_str}")))?;
    let amount = if negative { -magnitude } else { magnitude };

    Ok((Adjustment { amount, unit }, input))
}

/// Parse the `(START|END)-MONTHNAME-YEAR` form.
pub(crate) fn parse_month_boundary(
    body: &str,
    token: &str,
) -> Result<DateToken, DateTokenError> {
    let parts: Vec<&str> = body.split('-').collect();
    let [edge, month, year] = parts.as_slice() else {
        return Err(DateTokenError::invalid_format(token));
    };

    let edge = match *edge {
        "START" => MonthEdge::Start,
        "END" => MonthEdge::End,
        _ => return Err(DateTokenError::invalid_format(token)),
    };

    if month.is_empty() || !month.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(DateTokenError::invalid_format(token));
    }
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(DateTokenError::invalid_format(token));
    }

    let month_num =
        month_number(month).ok_or_else(|| DateTokenError::InvalidMonth((*month).to_string()))?;

    let year_num: i32 = year
        .parse()
        .map_err(|_| DateTokenError::InvalidYear((*year).to_string()))?;
    if year_num < 1
        || !CANONICAL_YEARS.contains(&year_num)
        || math::month_bounds(year_num, month_num).is_none()
    {
        return Err(DateTokenError::InvalidYear((*year).to_string()));
    }

    Ok(DateToken::MonthBoundary { edge, month: month_num, year: year_num })
}

fn split_while(input: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = input.find(|c: char| !pred(c)).unwrap_or(input.len());
    input.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(body: &str) -> Result<DateToken, DateTokenError> {
        DateToken::parse(body, &format!("[{body}]"))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_bare_anchor() {
        let token = parse("TODAY").unwrap();
        assert_eq!(token, DateToken::Relative { anchor: Anchor::Today, adjustments: vec![] });
    }

    #[test]
    fn test_parse_adjustments_in_order() {
        let token = parse("TOMORROW+1MONTH-3DAY+2YEAR").unwrap();
        assert_eq!(
            token,
            DateToken::Relative {
                anchor: Anchor::Tomorrow,
                adjustments: vec![
                    Adjustment { amount: 1, unit: DateUnit::Month },
                    Adjustment { amount: -3, unit: DateUnit::Day },
                    Adjustment { amount: 2, unit: DateUnit::Year },
                ],
            }
        );
    }

    #[test]
    fn test_parse_month_boundary_case_insensitive() {
        let token = parse("END-february-2024").unwrap();
        assert_eq!(
            token,
            DateToken::MonthBoundary { edge: MonthEdge::End, month: 2, year: 2024 }
        );
    }

    #[rstest]
    #[case("TODAY+1WEEK", DateTokenError::InvalidUnit("WEEK".into()))]
    #[case("TODAY-2day", DateTokenError::InvalidUnit("day".into()))]
    #[case("YESTERDAY+1DAYS", DateTokenError::InvalidUnit("DAYS".into()))]
    #[case("START-SMARCH-2024", DateTokenError::InvalidMonth("SMARCH".into()))]
    #[case("END-JAN-2024", DateTokenError::InvalidMonth("JAN".into()))]
    #[case("START-MAY-0", DateTokenError::InvalidYear("0".into()))]
    #[case("START-MAY-0000", DateTokenError::InvalidYear("0000".into()))]
    #[case("START-MAY-99999999999", DateTokenError::InvalidYear("99999999999".into()))]
    #[case("END-DECEMBER-300000", DateTokenError::InvalidYear("300000".into()))]
    #[case("START-JANUARY-10000", DateTokenError::InvalidYear("10000".into()))]
    fn test_parse_specific_errors(#[case] body: &str, #[case] expected: DateTokenError) {
        assert_eq!(parse(body).unwrap_err(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("today")]
    #[case("NOW")]
    #[case("TODAY+")]
    #[case("TODAY+DAY")]
    #[case("TODAY+1")]
    #[case("TODAY1DAY")]
    #[case("TODAY +1DAY")]
    #[case("TODAY+1DAY-")]
    #[case("TODAY*1DAY")]
    #[case("TODAYX")]
    #[case("START-JANUARY")]
    #[case("START-JANUARY-2024-1")]
    #[case("MIDDLE-JANUARY-2024")]
    #[case("start-JANUARY-2024")]
    #[case("START--2024")]
    #[case("START-JAN UARY-2024")]
    #[case("START-JANUARY-20x4")]
    #[case("START-JANUARY-")]
    #[case("START-JANUARY--2024")]
    fn test_parse_rejects_malformed(#[case] body: &str) {
        assert!(
            matches!(parse(body), Err(DateTokenError::InvalidFormat(_))),
            "expected InvalidFormat for {body:?}, got {:?}",
            parse(body)
        );
    }

    #[test]
    fn test_huge_amount_is_out_of_range() {
        let err = parse("TODAY+99999999999999999999DAY").unwrap_err();
        assert!(matches!(err, DateTokenError::OutOfRange(_)));
    }

    #[test]
    fn test_resolve_anchors() {
        let today = ymd(2024, 3, 1);
        let resolve = |body: &str| parse(body).unwrap().resolve(today).unwrap().date_naive();
        assert_eq!(resolve("TODAY"), today);
        assert_eq!(resolve("TOMORROW"), ymd(2024, 3, 2));
        assert_eq!(resolve("YESTERDAY"), ymd(2024, 2, 29));
    }

    #[test]
    fn test_resolve_is_midnight() {
        let resolved = parse("TODAY+1DAY").unwrap().resolve(ymd(2024, 6, 15)).unwrap();
        assert_eq!(resolved.to_rfc3339(), "2024-06-16T00:00:00+00:00");
    }

    #[test]
    fn test_resolve_order_matters_with_clamping() {
        let jan31 = ymd(2023, 1, 31);
        let month_then_day =
            parse("TODAY+1MONTH+1DAY").unwrap().resolve(jan31).unwrap().date_naive();
        let day_then_month =
            parse("TODAY+1DAY+1MONTH").unwrap().resolve(jan31).unwrap().date_naive();
        assert_eq!(month_then_day, ymd(2023, 3, 1));
        assert_eq!(day_then_month, ymd(2023, 3, 1));

        let stepwise =
            parse("TODAY+1MONTH+1MONTH").unwrap().resolve(jan31).unwrap().date_naive();
        let direct = parse("TODAY+2MONTH").unwrap().resolve(jan31).unwrap().date_naive();
        assert_eq!(stepwise, ymd(2023, 3, 28));
        assert_eq!(direct, ymd(2023, 3, 31));
        assert_ne!(stepwise, direct);
    }

    #[test]
    fn test_resolve_year_on_leap_day_clamps() {
        let leap_day = ymd(2024, 2, 29);
        let resolved = parse("TODAY+1YEAR").unwrap().resolve(leap_day).unwrap();
        assert_eq!(resolved.date_naive(), ymd(2025, 2, 28));
    }

    #[test]
    fn test_resolve_month_boundaries() {
        let today = ymd(2000, 1, 1);
        let start = parse("START-JANUARY-2024").unwrap().resolve(today).unwrap();
        let end = parse("END-FEBRUARY-2024").unwrap().resolve(today).unwrap();
        let end_non_leap = parse("END-FEBRUARY-2023").unwrap().resolve(today).unwrap();
        assert_eq!(start.date_naive(), ymd(2024, 1, 1));
        assert_eq!(end.date_naive(), ymd(2024, 2, 29));
        assert_eq!(end_non_leap.date_naive(), ymd(2023, 2, 28));
    }

    #[test]
    fn test_resolve_out_of_range() {
        let err = parse("TODAY+300000YEAR").unwrap().resolve(ymd(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, DateTokenError::OutOfRange(_)));
    }

    #[rstest]
    #[case("TODAY+8000YEAR", ymd(2026, 10, 19))]
    #[case("TODAY-2100YEAR", ymd(2026, 10, 19))]
    #[case("TOMORROW", ymd(9999, 12, 31))]
    #[case("YESTERDAY", ymd(0, 1, 1))]
    #[case("TODAY+1DAY", ymd(9999, 12, 31))]
    fn test_resolve_outside_four_digit_years(#[case] body: &str, #[case] today: NaiveDate) {
        let err = parse(body).unwrap().resolve(today).unwrap_err();
        assert!(matches!(err, DateTokenError::OutOfRange(_)), "{body}: {err:?}");
    }

    #[rstest]
    #[case("TODAY", ymd(9999, 12, 31), ymd(9999, 12, 31))]
    #[case("TODAY", ymd(0, 1, 1), ymd(0, 1, 1))]
    #[case("TODAY+7973YEAR", ymd(2026, 1, 1), ymd(9999, 1, 1))]
    #[case("TODAY+8000YEAR-8000YEAR", ymd(2026, 10, 19), ymd(2026, 10, 19))]
    fn test_resolve_four_digit_year_edges(
        #[case] body: &str,
        #[case] today: NaiveDate,
        #[case] expected: NaiveDate,
    ) {
        let resolved = parse(body).unwrap().resolve(today).unwrap();
        assert_eq!(resolved.date_naive(), expected);
    }

    #[test]
    fn test_month_boundary_last_four_digit_year() {
        let end = parse("END-DECEMBER-9999").unwrap().resolve(ymd(2000, 1, 1)).unwrap();
        assert_eq!(end.date_naive(), ymd(9999, 12, 31));
    }

    #[test]
    fn test_adjustment_display() {
        assert_eq!(Adjustment { amount: 3, unit: DateUnit::Month }.to_string(), "+3MONTH");
        assert_eq!(Adjustment { amount: -1, unit: DateUnit::Day }.to_string(), "-1DAY");
    }
}
