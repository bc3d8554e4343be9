//! Persistence for the inverted index.
//!
//! - [`structured`]: big-endian fixed-width primitives with capacity checks
//! - [`codec`]: the index wire format
//! - [`file`]: atomic dump to and load from the filesystem
//!
//! # Format
//!
//! ```text
//! i32                    term_count
//! repeated term_count times:
//!   u16                  term_byte_length
//!   [u8; term_byte_length]  term (UTF-8)
//!   u16                  posting_count
//!   [u16; posting_count] document ids
//! ```
//!
//! Terms are written in ascending byte order and ids ascending within each
//! posting list, so equal indexes always encode to identical bytes.

pub mod codec;
pub mod file;
pub mod structured;

pub use codec::IndexCodec;
pub use file::IndexFile;
