//! Error types for termidx.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TermidxError`] enum. Each variant corresponds to one stage of the
//! pipeline: loading the corpus, encoding or decoding the persisted index,
//! and parsing queries.
//!
//! # Examples
//!
//! ```
//! use termidx::error::{Result, TermidxError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TermidxError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for termidx operations.
#[derive(Error, Debug)]
pub enum TermidxError {
    /// I/O errors (file operations, stdio)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Source corpus could not be loaded (missing file, malformed line)
    #[error("Load error: {0}")]
    Load(String),

    /// A value does not fit its fixed-width field in the index format
    #[error("Encode error: {0}")]
    Encode(String),

    /// The persisted index is truncated or structurally inconsistent
    #[error("Decode error: {0}")]
    Decode(String),

    /// Malformed query input
    #[error("Query error: {0}")]
    Query(String),

    /// Analysis-related errors (tokenizer configuration)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TermidxError.
pub type Result<T> = std::result::Result<T, TermidxError>;

impl TermidxError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        TermidxError::Load(msg.into())
    }

    /// Create a new encode error.
    pub fn encode<S: Into<String>>(msg: S) -> Self {
        TermidxError::Encode(msg.into())
    }

    /// Create a new decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        TermidxError::Decode(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        TermidxError::Query(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermidxError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TermidxError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Returns true for errors raised while writing the index format.
    pub fn is_encode(&self) -> bool {
        matches!(self, TermidxError::Encode(_))
    }

    /// Returns true for errors raised while reading the index format.
    pub fn is_decode(&self) -> bool {
        matches!(self, TermidxError::Decode(_))
    }
}
