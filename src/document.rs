//! Documents and corpus loading.
//!
//! A corpus is a UTF-8 text file with one document per line:
//!
//! ```text
//! 123	some words A_word and nothing
//! 2	some word B_word in this dataset
//! ```
//!
//! The identifier and the text are separated by the first tab character.

use serde::{Deserialize, Serialize};

pub mod loader;

/// Document identifier.
///
/// The persisted index stores ids as 16-bit values, so ids above
/// `u16::MAX` load and index fine but are rejected when the index is dumped.
pub type DocId = u32;

/// A single document of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: DocId,

    /// Raw document text
    pub text: String,
}

impl Document {
    /// Create a new document.
    pub fn new<S: Into<String>>(id: DocId, text: S) -> Self {
        Document {
            id,
            text: text.into(),
        }
    }
}
