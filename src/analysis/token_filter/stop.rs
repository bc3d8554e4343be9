//! Stop filter implementation.
//!
//! Removes tokens whose text belongs to a caller-supplied stop word set.
//!
//! ```
//! use std::collections::HashSet;
//! use std::sync::Arc;
//!
//! use termidx::analysis::token::Token;
//! use termidx::analysis::token_filter::Filter;
//! use termidx::analysis::token_filter::stop::StopFilter;
//!
//! let words: HashSet<String> = ["the", "a"].into_iter().map(String::from).collect();
//! let filter = StopFilter::new(Arc::new(words));
//! let tokens = vec![Token::new("the", 0, 0, 3), Token::new("quick", 1, 4, 9)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// Matching is exact: the set is compared against the token text as it
/// arrives, so place a [`super::lowercase::LowercaseFilter`] in front when
/// the stop list is lowercase.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter over an existing word set.
    pub fn new(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter { stop_words }
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn tokens() -> TokenStream {
        Box::new(
            ["how", "to", "learn", "python"]
                .into_iter()
                .enumerate()
                .map(|(position, text)| Token::new(text, position, 0, text.len())),
        )
    }

    fn stop_filter(words: &[&str]) -> StopFilter {
        StopFilter::new(Arc::new(words.iter().map(|w| w.to_string()).collect()))
    }

    #[test]
    fn test_stop_filter_removes() {
        let filter = stop_filter(&["how", "to"]);
        let result: Vec<String> = filter.filter(tokens()).unwrap().map(|t| t.text).collect();

        assert_eq!(result, vec!["learn", "python"]);
    }

    #[test]
    fn test_matching_is_exact() {
        let filter = stop_filter(&["How"]);
        assert_eq!(filter.filter(tokens()).unwrap().count(), 4);
    }

    #[test]
    fn test_empty_stop_list() {
        let filter = stop_filter(&[]);
        assert_eq!(filter.filter(tokens()).unwrap().count(), 4);
    }
}
