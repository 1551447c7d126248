//! Character classes and the pools they contribute.

/// `A`-`Z` followed by `a`-`z`.
pub const ALPHA_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const NUMERIC_CHARS: &str = "0123456789";
pub const PUNCTUATION_CHARS: &str = ".,!?;:";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// A named character class usable in the types position of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Alpha,
    Numeric,
    Punctuation,
    Special,
}

impl CharClass {
    /// Look up a class by its token name. Names are matched verbatim.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ALPHA" => Some(CharClass::Alpha),
            "NUMERIC" => Some(CharClass::Numeric),
            "PUNCTUATION" => Some(CharClass::Punctuation),
            "SPECIAL" => Some(CharClass::Special),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Alpha => "ALPHA",
            CharClass::Numeric => "NUMERIC",
            CharClass::Punctuation => "PUNCTUATION",
            CharClass::Special => "SPECIAL",
        }
    }

    #[must_use]
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Alpha => ALPHA_CHARS,
            CharClass::Numeric => NUMERIC_CHARS,
            CharClass::Punctuation => PUNCTUATION_CHARS,
            CharClass::Special => SPECIAL_CHARS,
        }
    }
}

/// Concatenate the pools of `classes` in order.
///
/// Repeated classes and characters shared between classes are kept, so they
/// weigh more when sampling.
#[must_use]
pub fn assemble(classes: &[CharClass]) -> String {
    classes.iter().copied().map(CharClass::chars).collect()
}
