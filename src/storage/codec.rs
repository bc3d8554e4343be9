//! Binary codec for [`InvertedIndex`].

use std::io::{Cursor, Read, Write};

use log::debug;

use crate::document::DocId;
use crate::error::{Result, TermidxError};
use crate::index::{InvertedIndex, PostingSet};
use crate::storage::structured::{StructReader, StructWriter, checked_u16};

/// Encodes and decodes the persisted index format.
///
/// Every fixed-width field is checked before the term it belongs to is
/// written, so an oversized term, posting list or document id fails with
/// an encode error naming that term.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexCodec;

impl IndexCodec {
    /// Encode an index into a writer. Returns the number of bytes written.
    pub fn encode<W: Write>(index: &InvertedIndex, writer: W) -> Result<u64> {
        let mut writer = StructWriter::new(writer);
        writer.write_i32_len(index.term_count(), "term count")?;

        for (term, docs) in index.iter() {
            let term_len = checked_u16(term.len(), "term byte length").map_err(|e| {
                TermidxError::encode(format!("term {}: {e}", preview(term)))
            })?;
            let doc_count = checked_u16(docs.len(), "posting count")
                .map_err(|e| TermidxError::encode(format!("term {}: {e}", preview(term))))?;
            let ids = narrow_ids(term, docs)?;

            writer.write_u16(term_len)?;
            writer.write_raw(term.as_bytes())?;
            writer.write_u16(doc_count)?;
            writer.write_u16s(&ids)?;
        }

        let written = writer.position();
        writer.into_inner()?;
        debug!("encoded {} terms into {written} bytes", index.term_count());
        Ok(written)
    }

    /// Encode an index into a byte vector.
    pub fn encode_to_vec(index: &InvertedIndex) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        Self::encode(index, &mut bytes)?;
        Ok(bytes)
    }

    /// Decode an index from a reader.
    ///
    /// The stream must contain exactly one encoded index: trailing bytes,
    /// a negative term count, a repeated term or an empty posting list are
    /// rejected as decode errors.
    pub fn decode<R: Read>(reader: R) -> Result<InvertedIndex> {
        let mut reader = StructReader::new(reader);

        let term_count = reader.read_i32()?;
        if term_count < 0 {
            return Err(TermidxError::decode(format!(
                "negative term count {term_count}"
            )));
        }

        let mut index = InvertedIndex::new();
        for _ in 0..term_count {
            let term_len = reader.read_u16()? as usize;
            let term = reader.read_string(term_len)?;

            let doc_count = reader.read_u16()? as usize;
            if doc_count == 0 {
                return Err(TermidxError::decode(format!(
                    "term {} has an empty posting list",
                    preview(&term)
                )));
            }
            let docs: PostingSet = reader
                .read_u16s(doc_count)?
                .into_iter()
                .map(DocId::from)
                .collect();

            if index.contains_term(&term) {
                return Err(TermidxError::decode(format!(
                    "term {} appears more than once",
                    preview(&term)
                )));
            }
            index.insert_postings(term, docs);
        }

        if !reader.is_eof()? {
            return Err(TermidxError::decode(format!(
                "unexpected trailing data after {} bytes",
                reader.position()
            )));
        }

        debug!("decoded {} terms from {} bytes", index.term_count(), reader.position());
        Ok(index)
    }

    /// Decode an index from a byte slice.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<InvertedIndex> {
        Self::decode(Cursor::new(bytes))
    }
}

fn narrow_ids(term: &str, docs: &PostingSet) -> Result<Vec<u16>> {
    docs.iter()
        .map(|&id| {
            u16::try_from(id).map_err(|_| {
                TermidxError::encode(format!(
                    "term {}: document id {id} exceeds the 16-bit field limit of {}",
                    preview(term),
                    u16::MAX
                ))
            })
        })
        .collect()
}

/// Shorten a term for error messages.
fn preview(term: &str) -> String {
    const MAX_CHARS: usize = 32;
    if term.chars().count() <= MAX_CHARS {
        format!("{term:?}")
    } else {
        let head: String = term.chars().take(MAX_CHARS).collect();
        format!("{head:?}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_inverted_index;
    use std::collections::BTreeMap;

    fn index_of(entries: Vec<(&str, Vec<DocId>)>) -> InvertedIndex {
        entries
            .into_iter()
            .map(|(term, ids)| (term.to_string(), ids.into_iter().collect::<PostingSet>()))
            .collect()
    }

    #[test]
    fn test_exact_bytes() {
        let index = index_of(vec![("b", vec![2, 1]), ("a", vec![300])]);
        let bytes = IndexCodec::encode_to_vec(&index).unwrap();

        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 2,
            0, 1, b'a', 0, 1, 0x01, 0x2c,
            0, 1, b'b', 0, 2, 0, 1, 0, 2,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_empty_index() {
        let bytes = IndexCodec::encode_to_vec(&InvertedIndex::new()).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert!(IndexCodec::decode_from_slice(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let documents: BTreeMap<DocId, String> = [
            (123, "some words A_word and nothing"),
            (2, "some word B_word in this dataset"),
            (5, "famous_phrases to be or not to be"),
            (37, "all words such as A_word and B_word are here"),
            (65535, "граница слова ünïcödé 😀"),
        ]
        .into_iter()
        .map(|(id, text)| (id, text.to_string()))
        .collect();
        let index = build_inverted_index(&documents);

        let bytes = IndexCodec::encode_to_vec(&index).unwrap();
        let decoded = IndexCodec::decode_from_slice(&bytes).unwrap();

        assert_eq!(decoded, index);
        assert_eq!(IndexCodec::encode_to_vec(&decoded).unwrap(), bytes);
    }

    #[test]
    fn test_posting_count_boundary() {
        let full: PostingSet = (0..=u16::MAX as DocId).take(65535).collect();
        let index: InvertedIndex = [("x".to_string(), full)].into_iter().collect();
        let bytes = IndexCodec::encode_to_vec(&index).unwrap();
        assert_eq!(IndexCodec::decode_from_slice(&bytes).unwrap(), index);

        let over: PostingSet = (0..=u16::MAX as DocId).collect();
        assert_eq!(over.len(), 65536);
        let index: InvertedIndex = [("x".to_string(), over)].into_iter().collect();
        assert!(IndexCodec::encode_to_vec(&index).unwrap_err().is_encode());
    }

    #[test]
    fn test_term_length_boundary() {
        let index = index_of(vec![("a".repeat(65535).as_str(), vec![1])]);
        assert!(IndexCodec::encode_to_vec(&index).is_ok());

        let index = index_of(vec![("a".repeat(65536).as_str(), vec![1])]);
        let error = IndexCodec::encode_to_vec(&index).unwrap_err();
        assert!(error.is_encode());
        assert!(error.to_string().contains("term byte length"));
    }

    #[test]
    fn test_document_id_overflow() {
        let index = index_of(vec![("ok", vec![65535]), ("big", vec![65536])]);
        let error = IndexCodec::encode_to_vec(&index).unwrap_err();
        assert!(error.is_encode());
        assert!(error.to_string().contains("65536"));
    }

    #[test]
    fn test_truncated_stream() {
        let index = index_of(vec![("alpha", vec![1, 2, 3]), ("beta", vec![4])]);
        let bytes = IndexCodec::encode_to_vec(&index).unwrap();

        for cut in 0..bytes.len() {
            let result = IndexCodec::decode_from_slice(&bytes[..cut]);
            assert!(result.unwrap_err().is_decode(), "cut at {cut}");
        }
    }

    #[test]
    fn test_trailing_bytes() {
        let mut bytes = IndexCodec::encode_to_vec(&index_of(vec![("a", vec![1])])).unwrap();
        bytes.push(0);
        assert!(IndexCodec::decode_from_slice(&bytes).unwrap_err().is_decode());
    }

    #[test]
    fn test_negative_term_count() {
        let bytes = (-1i32).to_be_bytes();
        assert!(IndexCodec::decode_from_slice(&bytes).unwrap_err().is_decode());
    }

    #[test]
    fn test_declared_length_exceeds_stream() {
        let bytes = vec![0, 0, 0, 1, 0, 10, b'a', b'b'];
        assert!(IndexCodec::decode_from_slice(&bytes).unwrap_err().is_decode());
    }

    #[test]
    fn test_duplicate_term_rejected() {
        let bytes = vec![0, 0, 0, 2, 0, 1, b'a', 0, 1, 0, 1, 0, 1, b'a', 0, 1, 0, 2];
        assert!(IndexCodec::decode_from_slice(&bytes).unwrap_err().is_decode());
    }

    #[test]
    fn test_empty_posting_list_rejected() {
        let bytes = vec![0, 0, 0, 1, 0, 1, b'a', 0, 0];
        assert!(IndexCodec::decode_from_slice(&bytes).unwrap_err().is_decode());
    }

    #[test]
    fn test_duplicate_ids_in_stream_collapse() {
        let bytes = vec![0, 0, 0, 1, 0, 1, b'a', 0, 2, 0, 7, 0, 7];
        let index = IndexCodec::decode_from_slice(&bytes).unwrap();
        assert_eq!(index.postings("a"), Some(&PostingSet::from([7])));
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("abc"), "\"abc\"");
        assert!(preview(&"x".repeat(100)).ends_with("..."));
    }
}
