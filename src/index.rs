//! The term → document inverted index.
//!
//! [`builder::IndexBuilder`] produces an [`inverted_index::InvertedIndex`]
//! from an id → text mapping in a single pass. The index is immutable once
//! built; queries borrow it read-only.

pub mod builder;
pub mod inverted_index;

pub use builder::{IndexBuilder, build_inverted_index};
pub use inverted_index::{IndexStats, InvertedIndex, PostingSet};
