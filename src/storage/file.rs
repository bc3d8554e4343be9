//! File persistence for the inverted index.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error::{Result, TermidxError};
use crate::index::InvertedIndex;
use crate::storage::codec::IndexCodec;

/// Buffer size for index file I/O.
const BUFFER_SIZE: usize = 64 * 1024;

/// Dumps and loads an [`InvertedIndex`] to and from a single file.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexFile;

impl IndexFile {
    /// Write the index to `path` atomically.
    ///
    /// The encoding goes to a temporary file in the destination directory,
    /// which replaces `path` only once it is complete. If encoding fails the
    /// temporary file is removed and `path` is left as it was.
    pub fn dump<P: AsRef<Path>>(index: &InvertedIndex, path: P) -> Result<u64> {
        let path = path.as_ref();
        info!("dump inverted index to {}", path.display());

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(directory)?;
        let mut writer = BufWriter::with_capacity(BUFFER_SIZE, temp);
        let written = IndexCodec::encode(index, &mut writer)?;

        let temp = writer
            .into_inner()
            .map_err(|e| TermidxError::Io(e.into_error()))?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| TermidxError::Io(e.error))?;

        info!("wrote {written} bytes to {}", path.display());
        Ok(written)
    }

    /// Read an index from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<InvertedIndex> {
        let path = path.as_ref();
        info!("load inverted index from {}", path.display());

        let file = File::open(path)?;
        let index = IndexCodec::decode(BufReader::with_capacity(BUFFER_SIZE, file))?;

        info!("loaded {} terms", index.term_count());
        Ok(index)
    }
}

impl InvertedIndex {
    /// Persist this index to `path`. See [`IndexFile::dump`].
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        IndexFile::dump(self, path)
    }

    /// Load an index persisted with [`InvertedIndex::dump`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<InvertedIndex> {
        IndexFile::load(path)
    }
}
