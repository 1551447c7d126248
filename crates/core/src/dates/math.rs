//! Calendar arithmetic used when resolving date tokens.
//!
//! Every function returns `None` instead of panicking when the result would
//! leave the range `chrono` can represent.

use chrono::{Datelike, Days, NaiveDate};

/// Shift `date` by a signed number of calendar days.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Shift `date` by a signed number of months.
///
/// The destination `(year, month)` is computed over a zero-based month count
/// and the day of month is clamped to the destination month's length, so
/// Jan 31 + 1 month is Feb 28 (or Feb 29 in a leap year).
#[must_use]
pub fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let year = i64::from(date.year());
    let month0 = i64::from(date.month0());

    let total_months = year.checked_mul(12)?.checked_add(month0)?.checked_add(months)?;
    let new_year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let new_month = u32::try_from(total_months.rem_euclid(12)).ok()? + 1;

    let new_day = date.day().min(days_in_month(new_year, new_month));

    NaiveDate::from_ymd_opt(new_year, new_month, new_day)
}

/// Shift `date` by a signed number of years.
///
/// Clamps like [`add_months`]: Feb 29 + 1 year is Feb 28.
#[must_use]
pub fn add_years(date: NaiveDate, years: i64) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// Number of days in `month` (1-12) of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// First and last day of `month` in `year`.
#[must_use]
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    Some((first, last))
}
