//! Text analysis for termidx.
//!
//! Turns raw text into a stream of [`token::Token`]s. The inverted index uses
//! [`tokenizer::whitespace::WhitespaceTokenizer`] so that a term is exactly a
//! maximal run of non-whitespace characters. The analytics tool combines a
//! [`tokenizer::regex::RegexTokenizer`] with lowercase and stop word filters.

pub mod token;
pub mod token_filter;
pub mod tokenizer;
