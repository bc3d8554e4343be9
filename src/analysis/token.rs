//! Token types for text analysis.
//!
//! ```
//! use termidx::analysis::token::Token;
//!
//! let token = Token::new("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use serde::{Deserialize, Serialize};

/// A single unit of text produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the source text
    pub start_offset: usize,

    /// The byte offset where this token ends in the source text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text, position, and byte offsets.
    pub fn new<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }
}

/// A boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
