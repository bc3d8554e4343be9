//! Query system for the inverted index.
//!
//! Queries are pure functions of an index borrowed read-only. The only
//! combinator is conjunction: a document matches when it contains every
//! query term.

pub mod conjunction;

use std::fmt::Debug;

use crate::document::DocId;
use crate::index::{InvertedIndex, PostingSet};

pub use conjunction::ConjunctionQuery;

/// A query that can be evaluated against an [`InvertedIndex`].
pub trait Query: Debug {
    /// Compute the set of matching documents.
    fn execute(&self, index: &InvertedIndex) -> PostingSet;
}

impl InvertedIndex {
    /// Documents containing all of the given terms.
    ///
    /// Duplicate terms and term order are irrelevant. An empty term list, or
    /// any term missing from the index, yields the empty set.
    pub fn query<S: AsRef<str>>(&self, terms: &[S]) -> PostingSet {
        ConjunctionQuery::new(terms.iter().map(AsRef::as_ref)).execute(self)
    }
}

/// Render matching ids as a comma-separated line in ascending order.
///
/// No match renders as the empty string.
pub fn format_hits<'a, I>(hits: I) -> String
where
    I: IntoIterator<Item = &'a DocId>,
{
    hits.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hits() {
        assert_eq!(format_hits(&PostingSet::from([123, 6])), "6,123");
        assert_eq!(format_hits(&PostingSet::from([37])), "37");
        assert_eq!(format_hits(&PostingSet::new()), "");
    }
}
