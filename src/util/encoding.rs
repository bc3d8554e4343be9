//! Text decoding for input files in legacy encodings.
//!
//! Query files may be UTF-8 or windows-1251 and stop word lists are often
//! koi8-r, so readers decode through [`encoding_rs`] instead of assuming UTF-8.

use std::io::Read;

use encoding_rs::Encoding;
use log::warn;

use crate::error::{Result, TermidxError};

/// Look up an encoding by its WHATWG label (`utf-8`, `cp1251`, `koi8-r`, ...).
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| TermidxError::invalid_argument(format!("unknown encoding {label:?}")))
}

/// Decode bytes with the given encoding.
///
/// A leading byte order mark overrides the encoding. Malformed sequences are
/// replaced with U+FFFD and reported as a warning.
pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!("input contained bytes that are not valid {}", actual.name());
    }
    text.into_owned()
}

/// Read a whole stream and decode it with the given encoding.
pub fn read_to_string<R: Read>(mut reader: R, encoding: &'static Encoding) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_bytes(&bytes, encoding))
}
