//! Conjunctive (AND) query over a set of terms.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::index::{InvertedIndex, PostingSet};
use crate::query::Query;

/// A query matching documents that contain every one of its terms.
///
/// The terms form a set, so order and repetition in the input do not
/// matter. If any term is not a key of the index the result is empty; this
/// is checked before intersecting anything.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConjunctionQuery {
    terms: BTreeSet<String>,
}

impl ConjunctionQuery {
    /// Create a query from any sequence of terms.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConjunctionQuery {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a query line: terms are separated by whitespace.
    pub fn parse(line: &str) -> Self {
        Self::new(line.split_whitespace())
    }

    /// The distinct query terms in ascending order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

}

impl fmt::Debug for ConjunctionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.terms.iter()).finish()
    }
}

impl Query for ConjunctionQuery {
    fn execute(&self, index: &InvertedIndex) -> PostingSet {
        debug!("query inverted index with request {self:?}");

        let mut postings = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match index.postings(term) {
                Some(docs) => postings.push(docs),
                None => return PostingSet::new(),
            }
        }

        // Smallest set seeds the accumulator.
        postings.sort_by_key(|docs| docs.len());
        let Some((first, rest)) = postings.split_first() else {
            return PostingSet::new();
        };

        let mut result = (*first).clone();
        for docs in rest {
            if result.is_empty() {
                break;
            }
            result.retain(|id| docs.contains(id));
        }
        result
    }
}
