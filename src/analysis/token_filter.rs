//! Token filters that transform token streams.
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Terms
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod lowercase;
pub mod stop;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;
}
