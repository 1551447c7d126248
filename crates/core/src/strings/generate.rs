//! Text generation from a validated [`DynamicStringSpec`].

use tracing::debug;

use super::spec::{DynamicStringSpec, Length};

/// Separator placed between generated lines.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Uniform integer source used to sample pool characters.
pub trait RandomSource {
    /// A uniformly distributed index in `0..upper`. `upper` is never zero.
    fn index(&mut self, upper: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Produce the text described by `spec`.
///
/// With [`Length::All`] every line is the pool verbatim; otherwise each line
/// holds `n` characters drawn with replacement from the pool. Lines are joined
/// with CRLF and there is no trailing separator.
pub fn generate(spec: &DynamicStringSpec, rng: &mut impl RandomSource) -> String {
    let pool = spec.pool();

    let lines: Vec<String> = (0..spec.line_count())
        .map(|_| match spec.length() {
            Length::All => pool.iter().collect(),
            Length::Chars(n) => (0..n).map(|_| pool[rng.index(pool.len())]).collect(),
        })
        .collect();

    debug!(lines = lines.len(), "generated dynamic string");
    lines.join(LINE_SEPARATOR)
}
