//! Single-pass index construction.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::document::DocId;
use crate::index::inverted_index::InvertedIndex;

/// Builds an [`InvertedIndex`] from documents.
///
/// Terms are the whitespace-separated pieces of each text, kept verbatim.
/// Building is a total function: every document contributes its terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexBuilder;

impl IndexBuilder {
    /// Create a builder.
    pub fn new() -> Self {
        IndexBuilder
    }

    /// Build an index from an id → text mapping.
    ///
    /// Empty text contributes nothing and a term repeated within one
    /// document records the id once.
    pub fn build(&self, documents: &BTreeMap<DocId, String>) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for (&id, text) in documents {
            let mut count = 0usize;
            for term in WhitespaceTokenizer::terms(text) {
                index.insert(term, id);
                count += 1;
            }
            debug!("document {id}: {count} terms");
        }
        info!("inverted index created with {} terms", index.term_count());
        index
    }
}

/// Build an index from an id → text mapping with whitespace tokenization.
pub fn build_inverted_index(documents: &BTreeMap<DocId, String>) -> InvertedIndex {
    IndexBuilder::new().build(documents)
}
