//! Response contract shared by every front end.
//!
//! Success renders as `{"ParsedToken": <value>}` (status 200) and failure as
//! `{"Error": "<message>"}` (status 400). Error messages always start with
//! [`INVALID_TOKEN_FORMAT`].

use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::dates::{self, DateRange, INVALID_TOKEN_FORMAT};
use crate::strings::{self, RandomSource};

/// Reason reported for a blank token.
pub const TOKEN_REQUIRED: &str = "token is required";

/// Number of token characters echoed in log events.
const TOKEN_PREVIEW_LEN: usize = 50;

/// Value carried by a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    Text(String),
    Range(DateRange),
}

/// Outcome of one parse request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParserResponse {
    #[serde(rename = "ParsedToken")]
    Parsed(ParsedValue),
    #[serde(rename = "Error")]
    Error(String),
}

impl ParserResponse {
    fn failure(reason: &str) -> Self {
        ParserResponse::Error(contract_message(reason))
    }

    /// HTTP-style status code for this response.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            ParserResponse::Parsed(_) => 200,
            ParserResponse::Error(_) => 400,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ParserResponse::Parsed(_))
    }

    /// Compact JSON rendering.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Prefix `reason` with [`INVALID_TOKEN_FORMAT`] unless it already carries it.
#[must_use]
pub fn contract_message(reason: &str) -> String {
    let reason = reason.trim();
    if reason.is_empty() {
        INVALID_TOKEN_FORMAT.to_string()
    } else if reason.starts_with(INVALID_TOKEN_FORMAT) {
        reason.to_string()
    } else {
        format!("{INVALID_TOKEN_FORMAT}: {reason}")
    }
}

fn preview(token: &str) -> &str {
    match token.char_indices().nth(TOKEN_PREVIEW_LEN) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}

/// Resolve a date token into a contract response.
pub fn date_token_response(token: &str, clock: &impl Clock) -> ParserResponse {
    if token.trim().is_empty() {
        return ParserResponse::failure(TOKEN_REQUIRED);
    }
    match dates::parse_date_token(token, clock) {
        Ok(instant) => {
            debug!(token = preview(token), "date token parsed");
            ParserResponse::Parsed(ParsedValue::Text(dates::format_date_utc(&instant)))
        }
        Err(e) => {
            debug!(token = preview(token), error = %e, "date token rejected");
            ParserResponse::failure(&e.to_string())
        }
    }
}

/// Resolve a range token into a contract response.
pub fn date_range_response(token: &str) -> ParserResponse {
    if token.trim().is_empty() {
        return ParserResponse::failure(TOKEN_REQUIRED);
    }
    match dates::parse_date_range_token(token) {
        Ok(range) => ParserResponse::Parsed(ParsedValue::Range(range)),
        Err(e) => {
            debug!(token = preview(token), error = %e, "range token rejected");
            ParserResponse::failure(&e.to_string())
        }
    }
}

/// Generate a dynamic string token into a contract response.
pub fn dynamic_string_response(token: &str, rng: &mut impl RandomSource) -> ParserResponse {
    if token.trim().is_empty() {
        return ParserResponse::failure(TOKEN_REQUIRED);
    }
    match strings::generate_dynamic_string(token, rng) {
        Ok(text) => {
            debug!(token = preview(token), "dynamic string generated");
            ParserResponse::Parsed(ParsedValue::Text(text))
        }
        Err(e) => {
            debug!(token = preview(token), error = %e, "dynamic string token rejected");
            ParserResponse::failure(&e.to_string())
        }
    }
}
