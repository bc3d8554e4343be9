//! Tab-separated corpus loader.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::document::{DocId, Document};
use crate::error::{Result, TermidxError};

/// Loads `<id>\t<text>` lines into an id → text mapping.
///
/// Each line is trimmed before splitting, blank lines are skipped and a
/// repeated id replaces the earlier text.
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        DocumentLoader
    }

    /// Load documents from a file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<BTreeMap<DocId, String>> {
        let path = path.as_ref();
        info!("loading documents from {}", path.display());

        let file = File::open(path).map_err(|e| {
            TermidxError::load(format!("cannot open dataset {}: {e}", path.display()))
        })?;

        let documents = self.load_reader(BufReader::new(file))?;
        info!("loaded {} documents", documents.len());
        Ok(documents)
    }

    /// Load documents from any buffered reader.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<BTreeMap<DocId, String>> {
        let mut documents = BTreeMap::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(document) = Self::parse_line(&line, line_num + 1)? else {
                debug!("skipping blank line {}", line_num + 1);
                continue;
            };

            if documents.insert(document.id, document.text).is_some() {
                warn!(
                    "document {} on line {} replaces an earlier document with the same id",
                    document.id,
                    line_num + 1
                );
            }
        }

        Ok(documents)
    }

    /// Parse one corpus line. Returns `None` for blank lines.
    pub fn parse_line(line: &str, line_num: usize) -> Result<Option<Document>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (id, text) = line.split_once('\t').ok_or_else(|| {
            TermidxError::load(format!("line {line_num}: missing tab separator"))
        })?;

        let id = id.trim().parse::<DocId>().map_err(|e| {
            TermidxError::load(format!("line {line_num}: invalid document id {id:?}: {e}"))
        })?;

        Ok(Some(Document::new(id, text)))
    }
}

/// Load a tab-separated corpus with the default loader.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<BTreeMap<DocId, String>> {
    DocumentLoader::new().load_path(path)
}
