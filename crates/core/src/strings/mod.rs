//! Dynamic string token engine.
//!
//! A token such as `[ALPHA-NUMERIC-12-LINES-3]` names character classes, a
//! per-line length (or `ALL` for the whole pool) and an optional line count.
//! [`parse_and_validate`] checks it, [`generate`] renders it.

pub mod errors;
pub mod generate;
pub mod pool;
pub mod spec;

pub use errors::DynamicStringError;
pub use generate::{LINE_SEPARATOR, RandomSource, generate};
pub use pool::CharClass;
pub use spec::{
    DynamicStringSpec, Length, MAX_OUTPUT_LEN, is_dynamic_string_token, parse_and_validate,
};

/// Validate `token` and generate its text in one step.
///
/// ```
/// use tokenparser_core::strings::generate_dynamic_string;
///
/// let text = generate_dynamic_string("[NUMERIC-ALL-LINES-2]", &mut rand::rng()).unwrap();
/// assert_eq!(text, "0123456789\r\n0123456789");
/// ```
pub fn generate_dynamic_string(
    token: &str,
    rng: &mut impl RandomSource,
) -> Result<String, DynamicStringError> {
    let spec = parse_and_validate(token)?;
    Ok(generate(&spec, rng))
}
