//! Bracket handling shared by every token grammar.
//!
//! All tokens are written as `[BODY]`. The grammars in [`crate::dates`] and
//! [`crate::strings`] only ever see the body.

/// Opening delimiter of every token.
pub const OPEN: char = '[';
/// Closing delimiter of every token.
pub const CLOSE: char = ']';

/// Strip the surrounding brackets from a token.
///
/// Returns `None` unless the whole string is wrapped in exactly one pair of
/// brackets. A body containing further brackets is rejected, so a body is
/// never itself a token.
#[must_use]
pub fn body(token: &str) -> Option<&str> {
    let inner = token.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
    if inner.contains([OPEN, CLOSE]) {
        return None;
    }
    Some(inner)
}
