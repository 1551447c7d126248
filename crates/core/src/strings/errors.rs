//! Error types for dynamic string tokens.

use thiserror::Error;

/// Errors produced while validating a dynamic string token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DynamicStringError {
    /// The token does not have the `TYPES-LENGTH(-LINES-N)` shape.
    #[error("Invalid string token format: {0}")]
    InvalidFormat(String),

    /// A segment in the types position is not a known character class.
    #[error("Invalid character type '{kind}' in token: {token}")]
    InvalidTokenType { kind: String, token: String },

    /// The length is zero, has a leading zero, or a single line would exceed
    /// the output cap.
    #[error("Invalid length in token: {0}")]
    InvalidLength(String),

    /// The line count is zero or the lines together would exceed the output cap.
    #[error("Invalid line count in token: {0}")]
    InvalidLineCount(String),

    /// The requested classes assembled into an empty pool.
    #[error("No valid character types found in token: {0}")]
    EmptyPool(String),
}
