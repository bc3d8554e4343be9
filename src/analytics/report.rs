//! Period queries and top term reports.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analytics::record::Record;
use crate::error::{Result, TermidxError};

/// An inclusive period range and the number of terms to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodQuery {
    pub start: i32,
    pub end: i32,
    pub top: usize,
}

impl PeriodQuery {
    /// Create a new period query.
    pub fn new(start: i32, end: i32, top: usize) -> Self {
        PeriodQuery { start, end, top }
    }

    /// Whether a period key falls into the range.
    pub fn contains(&self, period: i32) -> bool {
        self.start <= period && period <= self.end
    }
}

impl FromStr for PeriodQuery {
    type Err = TermidxError;

    /// Parse `start,end,top`, e.g. `2019,2020,3`.
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let [start, end, top] = fields.as_slice() else {
            return Err(TermidxError::query(format!(
                "period query {s:?} must have the form start,end,top"
            )));
        };

        let parse_err = |field: &str, e: String| {
            TermidxError::query(format!("period query {s:?}: invalid {field}: {e}"))
        };
        Ok(PeriodQuery::new(
            start.parse::<i32>().map_err(|e| parse_err("start", e.to_string()))?,
            end.parse::<i32>().map_err(|e| parse_err("end", e.to_string()))?,
            top.parse::<usize>().map_err(|e| parse_err("top", e.to_string()))?,
        ))
    }
}

impl fmt::Display for PeriodQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.start, self.end, self.top)
    }
}

/// Highest-scoring terms of a period.
///
/// Serializes as `{"start":2019,"end":2019,"top":[["seo",15],["better",10]]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTermsReport {
    pub start: i32,
    pub end: i32,
    pub top: Vec<(String, i64)>,
}

impl TopTermsReport {
    /// Render the report as a single JSON line.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Answers period queries over a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct TermAnalytics {
    records: Vec<Record>,
}

impl TermAnalytics {
    /// Create analytics over the given records.
    pub fn new(records: Vec<Record>) -> Self {
        TermAnalytics { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Top terms of a period.
    ///
    /// Every distinct term of a record in the period gains the record's score
    /// once. Terms are ordered by total score descending, ties by term
    /// ascending, and cut to `query.top`.
    pub fn top_terms(&self, query: &PeriodQuery) -> TopTermsReport {
        debug!("got query \"{query}\"");

        let mut scores: HashMap<&str, i64> = HashMap::new();
        for record in self.records.iter().filter(|r| query.contains(r.period)) {
            for term in &record.terms {
                let score = scores.entry(term.as_str()).or_insert(0);
                *score = score.saturating_add(record.score);
            }
        }

        let mut top: Vec<(String, i64)> = scores
            .into_iter()
            .map(|(term, score)| (term.to_string(), score))
            .collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top.truncate(query.top);

        if top.len() < query.top {
            warn!(
                "not enough data to answer, found {} words out of {} for period \"{},{}\"",
                top.len(),
                query.top,
                query.start,
                query.end
            );
        }

        TopTermsReport {
            start: query.start,
            end: query.end,
            top,
        }
    }
}
