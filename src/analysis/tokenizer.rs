//! Tokenizer implementations for text analysis.
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on runs of whitespace (index terms)
//! - [`regex::RegexTokenizer`] - Extracts regex matches (default `\w+`)
//!
//! # Examples
//!
//! ```
//! use termidx::analysis::tokenizer::Tokenizer;
//! use termidx::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod regex;
pub mod whitespace;

/// Trait for tokenizers that turn text into a token stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;
}
