//! Per-period top term analytics over scored records.
//!
//! Each [`record::Record`] is a set of terms with a numeric score and a
//! period key (a year). For a [`report::PeriodQuery`] the analytics sum, per
//! term, the scores of the records in the period that contain the term, and
//! report the highest-scoring terms.
//!
//! Records come from question posts in JSON Lines form:
//!
//! ```text
//! {"post_type_id": 1, "creation_date": "2019-10-15T00:44:56.847", "score": 10, "title": "Is SEO better better better done with repetition?"}
//! ```

pub mod record;
pub mod report;

pub use record::{QuestionRecord, Record, RecordLoader, StopWords, TitleAnalyzer};
pub use report::{PeriodQuery, TermAnalytics, TopTermsReport};
