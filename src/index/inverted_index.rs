//! In-memory inverted index.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::DocId;

/// The set of documents containing one term.
pub type PostingSet = BTreeSet<DocId>;

/// Statistics about an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct terms.
    pub term_count: usize,

    /// Number of distinct documents referenced by any posting set.
    pub document_count: usize,

    /// Total number of (term, document) pairs.
    pub posting_count: usize,
}

/// A mapping from term to the set of documents containing it.
///
/// Terms are unique keys and every retained posting set is non-empty. Both
/// levels are ordered, so iteration (and therefore the persisted encoding)
/// is deterministic and equality compares posting sets as sets.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndex {
    postings: BTreeMap<String, PostingSet>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Record that `term` occurs in document `doc_id`.
    ///
    /// Repeated insertions of the same pair are absorbed by the posting set.
    pub(crate) fn insert(&mut self, term: &str, doc_id: DocId) {
        match self.postings.get_mut(term) {
            Some(docs) => {
                docs.insert(doc_id);
            }
            None => {
                self.postings
                    .insert(term.to_string(), PostingSet::from([doc_id]));
            }
        }
    }

    /// Insert a complete posting set for a term, replacing any previous one.
    ///
    /// Empty sets are ignored so the non-empty invariant holds.
    pub(crate) fn insert_postings(&mut self, term: String, docs: PostingSet) -> Option<PostingSet> {
        if docs.is_empty() {
            return None;
        }
        self.postings.insert(term, docs)
    }

    /// Posting set of a term, if the term is indexed.
    pub fn postings(&self, term: &str) -> Option<&PostingSet> {
        self.postings.get(term)
    }

    /// Whether the term is a key of the index.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// (term, posting set) pairs in ascending term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingSet)> {
        self.postings.iter().map(|(term, docs)| (term.as_str(), docs))
    }

    /// Compute index statistics.
    pub fn stats(&self) -> IndexStats {
        let mut documents = BTreeSet::new();
        let mut posting_count = 0;

        for docs in self.postings.values() {
            posting_count += docs.len();
            documents.extend(docs.iter().copied());
        }

        IndexStats {
            term_count: self.postings.len(),
            document_count: documents.len(),
            posting_count,
        }
    }
}

impl fmt::Debug for InvertedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.postings.iter()).finish()
    }
}

impl FromIterator<(String, PostingSet)> for InvertedIndex {
    fn from_iter<I: IntoIterator<Item = (String, PostingSet)>>(iter: I) -> Self {
        let mut index = InvertedIndex::new();
        for (term, docs) in iter {
            match index.postings.get_mut(&term) {
                Some(existing) => existing.extend(docs),
                None => {
                    index.insert_postings(term, docs);
                }
            }
        }
        index
    }
}

impl<'a> IntoIterator for &'a InvertedIndex {
    type Item = (&'a String, &'a PostingSet);
    type IntoIter = std::collections::btree_map::Iter<'a, String, PostingSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedupes() {
        let mut index = InvertedIndex::new();
        index.insert("be", 5);
        index.insert("be", 5);
        index.insert("be", 2);

        assert_eq!(index.postings("be"), Some(&PostingSet::from([2, 5])));
        assert_eq!(index.term_count(), 1);
    }

    #[test]
    fn test_empty_postings_not_retained() {
        let mut index = InvertedIndex::new();
        assert!(index.insert_postings("ghost".to_string(), PostingSet::new()).is_none());
        assert!(!index.contains_term("ghost"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_stats() {
        let index: InvertedIndex = [
            ("a".to_string(), PostingSet::from([1, 2])),
            ("b".to_string(), PostingSet::from([2, 3])),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            index.stats(),
            IndexStats {
                term_count: 2,
                document_count: 3,
                posting_count: 4,
            }
        );
    }

    #[test]
    fn test_from_iter_merges_repeated_terms() {
        let index: InvertedIndex = [
            ("a".to_string(), PostingSet::from([1])),
            ("a".to_string(), PostingSet::from([4])),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.postings("a"), Some(&PostingSet::from([1, 4])));
    }

    #[test]
    fn test_terms_ordered() {
        let mut index = InvertedIndex::new();
        index.insert("zeta", 1);
        index.insert("alpha", 1);
        index.insert("Beta", 1);

        let terms: Vec<&str> = index.iter().map(|(term, _)| term).collect();
        assert_eq!(terms, vec!["Beta", "alpha", "zeta"]);
    }
}
