//! Error types for date token parsing and resolution.

use thiserror::Error;

/// Message every malformed token is reported with.
pub const INVALID_TOKEN_FORMAT: &str = "Invalid string token format";

/// Errors produced by the date token engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateTokenError {
    /// The token does not match any date grammar.
    #[error("Invalid string token format: {0}")]
    InvalidFormat(String),

    /// The month segment of a `START`/`END` token is not an English month name.
    #[error("{0} : UNRECOGNISED - Invalid month")]
    InvalidMonth(String),

    /// The year of a `START`/`END` token is zero or beyond the supported calendar.
    #[error("{0} : UNRECOGNISED - Invalid year")]
    InvalidYear(String),

    /// An adjustment clause names a unit other than `YEAR`, `MONTH` or `DAY`.
    #[error("{0} : UNRECOGNISED - Invalid date section")]
    InvalidUnit(String),

    /// Date arithmetic left the representable calendar.
    #[error("date out of range: {0}")]
    OutOfRange(String),
}

impl DateTokenError {
    pub(crate) fn invalid_format(token: &str) -> Self {
        Self::InvalidFormat(token.to_string())
    }
}
