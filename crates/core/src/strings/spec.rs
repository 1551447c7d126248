//! Dynamic string token grammar: `TYPES-LENGTH(-LINES-N)`.
//!
//! Examples:
//! - `[ALPHA-5]` one line of five letters
//! - `[ALPHA-NUMERIC-12-LINES-3]` three lines of twelve alphanumerics
//! - `[PUNCTUATION-ALL]` the whole punctuation pool, verbatim

use tracing::debug;

use super::errors::DynamicStringError;
use super::generate::LINE_SEPARATOR;
use super::pool::{self, CharClass};
use crate::token;

/// Literal selecting the whole pool instead of a character count.
pub const ALL: &str = "ALL";
/// Keyword introducing the line count.
pub const LINES: &str = "LINES";
/// Upper bound on generated output, line separators included (1 MiB of ASCII).
pub const MAX_OUTPUT_LEN: usize = 1 << 20;

/// Requested characters per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// This many randomly drawn characters.
    Chars(usize),
    /// The assembled pool, verbatim.
    All,
}

/// A validated generation request.
///
/// Constructed only through [`parse_and_validate`], which guarantees a
/// non-empty pool, a positive length, a positive line count and an output of
/// at most [`MAX_OUTPUT_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicStringSpec {
    classes: Vec<CharClass>,
    pool: Vec<char>,
    length: Length,
    line_count: usize,
}

impl DynamicStringSpec {
    /// Classes in the order they appeared in the token.
    #[must_use]
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// Assembled pool, duplicates included.
    #[must_use]
    pub fn pool(&self) -> &[char] {
        &self.pool
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

/// Parse a dynamic string token and validate every part of it.
pub fn parse_and_validate(token: &str) -> Result<DynamicStringSpec, DynamicStringError> {
    debug!(token, "parsing dynamic string token");
    let invalid = || DynamicStringError::InvalidFormat(token.to_string());

    let body = token::body(token).ok_or_else(invalid)?;
    let segments: Vec<&str> = body.split('-').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(invalid());
    }

    let length_at = segments.iter().position(|s| is_length_literal(s)).ok_or_else(invalid)?;
    let (type_names, rest) = segments.split_at(length_at);
    if type_names.is_empty() {
        return Err(invalid());
    }

    let classes = type_names
        .iter()
        .map(|name| {
            CharClass::parse(name).ok_or_else(|| DynamicStringError::InvalidTokenType {
                kind: (*name).to_string(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let length = parse_length(rest[0], token)?;

    let line_count = match &rest[1..] {
        [] => 1,
        [keyword, count] if *keyword == LINES && is_digits(count) => {
            parse_line_count(count, token)?
        }
        _ => return Err(invalid()),
    };

    let pool: Vec<char> = pool::assemble(&classes).chars().collect();
    if pool.is_empty() {
        return Err(DynamicStringError::EmptyPool(token.to_string()));
    }

    check_output_len(pool.len(), length, line_count, token)?;

    let names: Vec<&str> = classes.iter().copied().map(CharClass::name).collect();
    debug!(
        token,
        classes = ?names,
        pool = pool.len(),
        ?length,
        line_count,
        "validated dynamic string token"
    );

    Ok(DynamicStringSpec { classes, pool, length, line_count })
}

/// Whether `token` is a valid dynamic string token.
#[must_use]
pub fn is_dynamic_string_token(token: &str) -> bool {
    parse_and_validate(token).is_ok()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_length_literal(s: &str) -> bool {
    s == ALL || is_digits(s)
}

fn parse_length(s: &str, token: &str) -> Result<Length, DynamicStringError> {
    if s == ALL {
        return Ok(Length::All);
    }
    let invalid = || DynamicStringError::InvalidLength(token.to_string());
    if s.starts_with('0') {
        return Err(invalid());
    }
    s.parse().map(Length::Chars).map_err(|_| invalid())
}

/// Reject requests whose output would exceed [`MAX_OUTPUT_LEN`].
///
/// A single line over the cap is a length problem; otherwise the line count is
/// to blame.
fn check_output_len(
    pool_len: usize,
    length: Length,
    line_count: usize,
    token: &str,
) -> Result<(), DynamicStringError> {
    let line_len = match length {
        Length::All => pool_len,
        Length::Chars(n) => n,
    };
    if line_len > MAX_OUTPUT_LEN {
        return Err(DynamicStringError::InvalidLength(token.to_string()));
    }

    let separators = (line_count - 1).checked_mul(LINE_SEPARATOR.len());
    let total = line_len
        .checked_mul(line_count)
        .zip(separators)
        .and_then(|(chars, separators)| chars.checked_add(separators));
    match total {
        Some(total) if total <= MAX_OUTPUT_LEN => Ok(()),
        _ => Err(DynamicStringError::InvalidLineCount(token.to_string())),
    }
}

fn parse_line_count(s: &str, token: &str) -> Result<usize, DynamicStringError> {
    match s.parse::<usize>() {
        Ok(0) | Err(_) => Err(DynamicStringError::InvalidLineCount(token.to_string())),
        Ok(n) => Ok(n),
    }
}
