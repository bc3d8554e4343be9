//! Whitespace tokenizer implementation.

/// Splits text on runs of Unicode whitespace.
///
/// Terms are kept verbatim: punctuation stays attached and case is preserved.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Iterate over the terms of `text` without allocating.
    pub fn terms(text: &str) -> impl Iterator<Item = &str> {
        text.split_whitespace()
    }
}
