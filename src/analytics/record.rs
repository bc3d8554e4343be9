//! Scored records and their sources.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};
use encoding_rs::Encoding;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::{Result, TermidxError};
use crate::util::encoding::read_to_string;

/// Post type of a question.
pub const QUESTION_POST_TYPE: u8 = 1;

/// Terms of one record with its score and period key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Distinct terms of the record.
    pub terms: BTreeSet<String>,

    /// Score added to every term of the record.
    pub score: i64,

    /// Period key (year).
    pub period: i32,
}

impl Record {
    /// Create a record, collapsing repeated terms.
    pub fn new<I, S>(terms: I, score: i64, period: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Record {
            terms: terms.into_iter().map(Into::into).collect(),
            score,
            period,
        }
    }
}

/// A post as it appears in the JSON Lines input.
///
/// Field names also accept the PascalCase attribute names of the
/// StackOverflow dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(alias = "PostTypeId", default = "default_post_type")]
    pub post_type_id: u8,

    #[serde(alias = "CreationDate")]
    pub creation_date: NaiveDateTime,

    #[serde(alias = "Score")]
    pub score: i64,

    #[serde(alias = "Title")]
    pub title: String,
}

fn default_post_type() -> u8 {
    QUESTION_POST_TYPE
}

impl QuestionRecord {
    /// Whether the post is a question.
    pub fn is_question(&self) -> bool {
        self.post_type_id == QUESTION_POST_TYPE
    }

    /// Period key of the post: its creation year.
    pub fn period(&self) -> i32 {
        self.creation_date.year()
    }
}

/// A stop word list.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// Create a stop word list from words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWords {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Load a word-per-line file in the given encoding.
    pub fn load_path<P: AsRef<Path>>(path: P, encoding: &'static Encoding) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TermidxError::load(format!("cannot open stop words {}: {e}", path.display()))
        })?;
        let text = read_to_string(file, encoding)?;
        let stop_words = Self::parse(&text);
        info!("loaded {} stop words from {}", stop_words.len(), path.display());
        Ok(stop_words)
    }

    /// Parse a word-per-line list. Blank lines are ignored.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines().map(str::trim).filter(|w| !w.is_empty()))
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// A stop filter over this list.
    pub fn filter(&self) -> StopFilter {
        StopFilter::new(Arc::clone(&self.words))
    }
}

/// Extracts terms from a title: `\w+` words, lowercased, stop words removed.
pub struct TitleAnalyzer {
    tokenizer: RegexTokenizer,
    lowercase: LowercaseFilter,
    stop: StopFilter,
}

impl TitleAnalyzer {
    /// Create an analyzer with the given stop words.
    pub fn new(stop_words: &StopWords) -> Result<Self> {
        Ok(TitleAnalyzer {
            tokenizer: RegexTokenizer::new()?,
            lowercase: LowercaseFilter::new(),
            stop: stop_words.filter(),
        })
    }

    /// Analyze a title.
    ///
    /// Returns `None` when the title has no words at all; a title whose words
    /// are all stop words yields an empty term list.
    pub fn analyze(&self, title: &str) -> Result<Option<Vec<String>>> {
        let words: Vec<_> = self
            .lowercase
            .filter(self.tokenizer.tokenize(title)?)?
            .collect();
        if words.is_empty() {
            return Ok(None);
        }

        let terms = self
            .stop
            .filter(Box::new(words.into_iter()))?
            .map(|token| token.text)
            .collect();
        Ok(Some(terms))
    }

    /// Turn a post into a record. Non-questions and wordless titles are dropped.
    pub fn to_record(&self, question: &QuestionRecord) -> Result<Option<Record>> {
        if !question.is_question() {
            return Ok(None);
        }
        Ok(self
            .analyze(&question.title)?
            .map(|terms| Record::new(terms, question.score, question.period())))
    }
}

/// Reads question posts from JSON Lines.
pub struct RecordLoader {
    analyzer: TitleAnalyzer,
}

impl RecordLoader {
    /// Create a loader with the given stop words.
    pub fn new(stop_words: &StopWords) -> Result<Self> {
        Ok(RecordLoader {
            analyzer: TitleAnalyzer::new(stop_words)?,
        })
    }

    /// Load records from a JSON Lines file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TermidxError::load(format!("cannot open questions {}: {e}", path.display()))
        })?;
        let records = self.load_reader(BufReader::new(file))?;
        info!("process questions dataset, ready to serve queries");
        Ok(records)
    }

    /// Load records from JSON Lines.
    ///
    /// Lines that do not parse as a post are skipped with a warning.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let question: QuestionRecord = match serde_json::from_str(&line) {
                Ok(question) => question,
                Err(e) => {
                    warn!("skipping line {}: {e}", line_num + 1);
                    continue;
                }
            };

            match self.analyzer.to_record(&question)? {
                Some(record) => records.push(record),
                None => debug!("line {}: not a question with a title", line_num + 1),
            }
        }

        Ok(records)
    }
}
