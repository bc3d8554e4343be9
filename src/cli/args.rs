//! Command line argument parsing for termidx using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{
    ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::analytics::PeriodQuery;
use crate::config::{
    AnalyticsConfig, BuildConfig, DEFAULT_DATASET_PATH, DEFAULT_INDEX_PATH,
    DEFAULT_QUESTIONS_PATH, DEFAULT_STOP_WORDS_ENCODING, DEFAULT_STOP_WORDS_PATH, HitFormat,
    PeriodSource, QueryConfig, QueryEncoding, QuerySource,
};
use crate::query::ConjunctionQuery;

/// termidx - build, dump, load and query an inverted index
#[derive(Parser, Debug, Clone)]
#[command(name = "termidx")]
#[command(about = "Build, dump, load and query an inverted index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TermidxArgs {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TermidxArgs {
    /// Parse the process arguments, keeping each `--query` occurrence as
    /// its own group of terms. Exits with a usage message on error.
    pub fn parse_grouped() -> Self {
        match Self::try_parse_grouped_from(std::env::args_os()) {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Parse arguments, keeping each `--query` occurrence as its own group.
    pub fn try_parse_grouped_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(itr)?;
        let mut args = Self::from_arg_matches(&matches)?;
        if let (Command::Query(query), Some(("query", sub))) =
            (&mut args.command, matches.subcommand())
        {
            query.query_groups = query_groups(sub);
        }
        Ok(args)
    }

    /// Log level implied by the verbosity flags.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build an inverted index and save it in binary format
    Build(BuildArgs),

    /// Query a saved inverted index
    Query(QueryArgs),

    /// Report top scoring title words per period
    Analytics(AnalyticsArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Tab-separated dataset to load
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATASET_PATH)]
    pub dataset: PathBuf,

    /// Where to store the inverted index
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INDEX_PATH)]
    pub output: PathBuf,
}

impl From<BuildArgs> for BuildConfig {
    fn from(args: BuildArgs) -> Self {
        BuildConfig {
            dataset_path: args.dataset,
            index_path: args.output,
        }
    }
}

/// Arguments for querying an index
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Inverted index to read
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INDEX_PATH)]
    pub index: PathBuf,

    /// A query given as its terms; repeat for several queries
    #[arg(long, value_name = "TERM", num_args = 1.., action = ArgAction::Append)]
    pub query: Vec<String>,

    /// Terms of each `--query` occurrence, filled by
    /// [`TermidxArgs::try_parse_grouped_from`]
    #[arg(skip)]
    pub query_groups: Vec<Vec<String>>,

    /// UTF-8 file with one query per line
    #[arg(long, value_name = "PATH", conflicts_with_all = ["query", "query_file_cp1251"])]
    pub query_file_utf8: Option<PathBuf>,

    /// windows-1251 file with one query per line
    #[arg(long, value_name = "PATH", conflicts_with = "query")]
    pub query_file_cp1251: Option<PathBuf>,

    /// Result format
    #[arg(short, long, default_value = "plain")]
    pub format: HitFormatArg,
}

/// Result formats available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitFormatArg {
    /// Comma-separated document ids
    Plain,
    /// JSON object per query
    Json,
}

impl From<HitFormatArg> for HitFormat {
    fn from(format: HitFormatArg) -> Self {
        match format {
            HitFormatArg::Plain => HitFormat::Plain,
            HitFormatArg::Json => HitFormat::Json,
        }
    }
}

impl QueryArgs {
    /// The query source selected by the arguments.
    ///
    /// Without inline queries or a query file, queries are read from stdin.
    /// Inline terms without occurrence groups form a single query.
    pub fn source(&self) -> QuerySource {
        if !self.query_groups.is_empty() {
            QuerySource::Inline(self.query_groups.iter().map(ConjunctionQuery::new).collect())
        } else if !self.query.is_empty() {
            QuerySource::Inline(vec![ConjunctionQuery::new(&self.query)])
        } else if let Some(path) = &self.query_file_utf8 {
            QuerySource::File {
                path: path.clone(),
                encoding: QueryEncoding::Utf8,
            }
        } else if let Some(path) = &self.query_file_cp1251 {
            QuerySource::File {
                path: path.clone(),
                encoding: QueryEncoding::Cp1251,
            }
        } else {
            QuerySource::Stdin {
                encoding: QueryEncoding::Utf8,
            }
        }
    }
}

/// Terms of every `--query` occurrence, in command line order.
fn query_groups(matches: &ArgMatches) -> Vec<Vec<String>> {
    matches
        .get_occurrences::<String>("query")
        .map(|occurrences| {
            occurrences
                .map(|values| values.cloned().collect())
                .collect()
        })
        .unwrap_or_default()
}

impl From<QueryArgs> for QueryConfig {
    fn from(args: QueryArgs) -> Self {
        QueryConfig {
            source: args.source(),
            format: args.format.into(),
            index_path: args.index,
        }
    }
}

/// Arguments for the analytics report
#[derive(Parser, Debug, Clone)]
pub struct AnalyticsArgs {
    /// Question posts in JSON Lines
    #[arg(long, value_name = "PATH", default_value = DEFAULT_QUESTIONS_PATH)]
    pub questions: PathBuf,

    /// Stop words, one per line
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STOP_WORDS_PATH)]
    pub stop_words: PathBuf,

    /// Encoding of the stop words file (e.g. utf-8, koi8-r)
    #[arg(long, value_name = "LABEL", default_value = DEFAULT_STOP_WORDS_ENCODING)]
    pub stop_words_encoding: String,

    /// Period query as start,end,top; repeat for several queries
    #[arg(long, value_name = "START,END,TOP", required_unless_present = "queries")]
    pub period: Vec<PeriodQuery>,

    /// File with one start,end,top query per line
    #[arg(long, value_name = "PATH", conflicts_with = "period")]
    pub queries: Option<PathBuf>,
}

impl From<AnalyticsArgs> for AnalyticsConfig {
    fn from(args: AnalyticsArgs) -> Self {
        let queries = match args.queries {
            Some(path) => PeriodSource::File(path),
            None => PeriodSource::Inline(args.period),
        };
        AnalyticsConfig {
            questions_path: args.questions,
            stop_words_path: args.stop_words,
            stop_words_encoding: args.stop_words_encoding,
            queries,
        }
    }
}
