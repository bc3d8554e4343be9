//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analytics::TopTermsReport;
use crate::config::HitFormat;
use crate::document::DocId;
use crate::error::Result;
use crate::index::PostingSet;
use crate::query::{ConjunctionQuery, format_hits};

/// Result structure for one answered query in JSON output.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryHits {
    pub query: Vec<String>,
    pub hits: Vec<DocId>,
}

impl QueryHits {
    pub fn new(query: &ConjunctionQuery, hits: &PostingSet) -> Self {
        QueryHits {
            query: query.terms().map(str::to_string).collect(),
            hits: hits.iter().copied().collect(),
        }
    }
}

/// Write the answer to a single query as one line.
///
/// In plain format an empty result is written as an empty line so that
/// answers stay aligned with the queries.
pub fn write_hits<W: Write>(
    out: &mut W,
    format: HitFormat,
    query: &ConjunctionQuery,
    hits: &PostingSet,
) -> Result<()> {
    match format {
        HitFormat::Plain => writeln!(out, "{}", format_hits(hits))?,
        HitFormat::Json => {
            let line = serde_json::to_string(&QueryHits::new(query, hits))?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Write a top terms report as one JSON line.
pub fn write_report<W: Write>(out: &mut W, report: &TopTermsReport) -> Result<()> {
    writeln!(out, "{}", report.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hits() {
        let mut out = Vec::new();
        let query = ConjunctionQuery::parse("two");
        write_hits(&mut out, HitFormat::Plain, &query, &PostingSet::from([123, 6])).unwrap();
        write_hits(&mut out, HitFormat::Plain, &query, &PostingSet::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "6,123\n\n");
    }

    #[test]
    fn test_json_hits() {
        let mut out = Vec::new();
        let query = ConjunctionQuery::parse("word two");
        write_hits(&mut out, HitFormat::Json, &query, &PostingSet::from([6])).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"query\":[\"two\",\"word\"],\"hits\":[6]}\n"
        );
    }

    #[test]
    fn test_report_line() {
        let mut out = Vec::new();
        let report = TopTermsReport {
            start: 2019,
            end: 2019,
            top: vec![("seo".to_string(), 15), ("better".to_string(), 10)],
        };
        write_report(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"start\":2019,\"end\":2019,\"top\":[[\"seo\",15],[\"better\",10]]}\n"
        );
    }
}
