//! # termidx
//!
//! Builds a term-to-document inverted index from a tab-separated corpus,
//! persists it in a compact big-endian binary format and answers
//! conjunctive term queries against it.
//!
//! ## Features
//!
//! - Whitespace and regex tokenizers with lowercase and stop word filters
//! - Deterministic, atomically written index files
//! - Conjunctive (AND) queries over exact terms
//! - Top scoring title words per period for question post dumps

pub mod analysis;
pub mod analytics;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod storage;
pub mod util;

pub mod prelude {
    pub use crate::document::{DocId, Document};
    pub use crate::error::{Result, TermidxError};
    pub use crate::index::{IndexBuilder, InvertedIndex, PostingSet, build_inverted_index};
    pub use crate::query::{ConjunctionQuery, Query};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
