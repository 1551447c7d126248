#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Token parsing for test data.
//!
//! Two token families are understood:
//! - date tokens such as `[TODAY+1DAY]`, `[END-FEBRUARY-2024]` and ranges
//!   `[START-JANUARY-2024<->END-JANUARY-2024]`
//! - dynamic string tokens such as `[ALPHA-NUMERIC-12-LINES-3]`
//!
//! [`contract`] wraps both in the JSON response shape front ends emit.

pub mod clock;
pub mod config;
pub mod contract;
pub mod dates;
pub mod strings;
pub mod token;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::{
    DateRange, DateTokenError, format_date_utc, is_date_range_token, is_date_token,
    parse_date_range_token, parse_date_token, parse_date_utc,
};
pub use strings::{DynamicStringError, generate_dynamic_string, is_dynamic_string_token};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
