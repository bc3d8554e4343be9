//! Run configuration for the command line driver.
//!
//! Each command receives one of these structs, built once from parsed
//! arguments; nothing reads default paths from global state.

use std::path::PathBuf;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::analytics::PeriodQuery;
use crate::error::Result;
use crate::query::ConjunctionQuery;
use crate::util::encoding::encoding_for_label;

/// Default corpus path for `build`.
pub const DEFAULT_DATASET_PATH: &str = "./resources/tiny_wikipedia_sample";

/// Default index path for `build` and `query`.
pub const DEFAULT_INDEX_PATH: &str = "inverted.index";

/// Default question posts path for `analytics`.
pub const DEFAULT_QUESTIONS_PATH: &str = "./questions.jsonl";

/// Default stop words path for `analytics`.
pub const DEFAULT_STOP_WORDS_PATH: &str = "./stop_words.txt";

/// Default stop words encoding for `analytics`.
pub const DEFAULT_STOP_WORDS_ENCODING: &str = "utf-8";

/// Configuration of an index build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Tab-separated corpus to index.
    pub dataset_path: PathBuf,

    /// Destination of the persisted index.
    pub index_path: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
        }
    }
}

/// Encoding of a query file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    #[default]
    Utf8,
    Cp1251,
}

impl QueryEncoding {
    /// The decoder for this encoding.
    pub fn encoding(self) -> &'static Encoding {
        match self {
            QueryEncoding::Utf8 => encoding_rs::UTF_8,
            QueryEncoding::Cp1251 => encoding_rs::WINDOWS_1251,
        }
    }
}

/// Where queries come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    /// Queries given on the command line.
    Inline(Vec<ConjunctionQuery>),

    /// One query per line of a file.
    File {
        path: PathBuf,
        encoding: QueryEncoding,
    },

    /// One query per line of standard input.
    Stdin { encoding: QueryEncoding },
}

impl Default for QuerySource {
    fn default() -> Self {
        QuerySource::Stdin {
            encoding: QueryEncoding::Utf8,
        }
    }
}

/// Output format of query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitFormat {
    /// Comma-separated ids, one line per query
    #[default]
    Plain,
    /// One JSON object per query
    Json,
}

/// Configuration of a query run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Persisted index to query.
    pub index_path: PathBuf,

    /// Query input.
    pub source: QuerySource,

    /// Result format.
    pub format: HitFormat,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            source: QuerySource::default(),
            format: HitFormat::default(),
        }
    }
}

/// Where period queries come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSource {
    /// Queries given on the command line.
    Inline(Vec<PeriodQuery>),

    /// One `start,end,top` query per line of a file.
    File(PathBuf),
}

/// Configuration of an analytics run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Question posts in JSON Lines.
    pub questions_path: PathBuf,

    /// Stop word list, one word per line.
    pub stop_words_path: PathBuf,

    /// Encoding label of the stop word list.
    pub stop_words_encoding: String,

    /// Period queries to answer.
    pub queries: PeriodSource,
}

impl AnalyticsConfig {
    /// The decoder for the stop word list.
    pub fn stop_words_encoding(&self) -> Result<&'static Encoding> {
        encoding_for_label(&self.stop_words_encoding)
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
            stop_words_encoding: DEFAULT_STOP_WORDS_ENCODING.to_string(),
            queries: PeriodSource::Inline(Vec::new()),
        }
    }
}
