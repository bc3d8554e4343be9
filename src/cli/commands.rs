//! Command implementations for termidx CLI.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::analytics::{PeriodQuery, RecordLoader, StopWords, TermAnalytics};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{
    AnalyticsConfig, BuildConfig, HitFormat, PeriodSource, QueryConfig, QuerySource,
};
use crate::document::loader::load_documents;
use crate::error::{Result, TermidxError};
use crate::index::{InvertedIndex, build_inverted_index};
use crate::query::{ConjunctionQuery, Query};
use crate::util::encoding::read_to_string;

/// Execute a CLI command, writing command output to `out`.
pub fn execute_command<W: Write>(args: TermidxArgs, out: &mut W) -> Result<()> {
    match args.command {
        Command::Build(build_args) => run_build(&BuildConfig::from(build_args)).map(|_| ()),
        Command::Query(query_args) => run_query(&QueryConfig::from(query_args), out),
        Command::Analytics(analytics_args) => {
            run_analytics(&AnalyticsConfig::from(analytics_args), out)
        }
    }
}

/// Load the corpus, build the index and dump it.
///
/// Returns the built index.
pub fn run_build(config: &BuildConfig) -> Result<InvertedIndex> {
    let start = Instant::now();
    info!("loading documents from {}", config.dataset_path.display());
    let documents = load_documents(&config.dataset_path)?;

    let index = build_inverted_index(&documents);
    if index.is_empty() {
        warn!("{} contains no terms", config.dataset_path.display());
    }
    let stats = index.stats();
    info!(
        "built inverted index over {} documents: {} terms, {} postings",
        documents.len(),
        stats.term_count,
        stats.posting_count
    );

    let bytes = index.dump(&config.index_path)?;
    info!(
        "stored inverted index to {} ({} bytes) in {:?}",
        config.index_path.display(),
        bytes,
        start.elapsed()
    );
    Ok(index)
}

/// Load the index and answer every query of the configured source.
pub fn run_query<W: Write>(config: &QueryConfig, out: &mut W) -> Result<()> {
    info!("loading inverted index from {}", config.index_path.display());
    let index = InvertedIndex::load(&config.index_path)?;
    debug!("loaded inverted index: {:?}", index.stats());

    let queries = match &config.source {
        QuerySource::Inline(queries) => queries.clone(),
        QuerySource::File { path, encoding } => {
            let file = File::open(path).map_err(|e| {
                TermidxError::load(format!("cannot open query file {}: {e}", path.display()))
            })?;
            parse_query_lines(&read_to_string(file, encoding.encoding())?)
        }
        QuerySource::Stdin { encoding } => {
            parse_query_lines(&read_to_string(io::stdin().lock(), encoding.encoding())?)
        }
    };

    answer_queries(&index, &queries, config.format, out)
}

/// One query per line. Blank lines are kept so answers line up with input.
fn parse_query_lines(text: &str) -> Vec<ConjunctionQuery> {
    text.lines().map(ConjunctionQuery::parse).collect()
}

/// Answer each query in order, one output line per query.
pub fn answer_queries<W: Write>(
    index: &InvertedIndex,
    queries: &[ConjunctionQuery],
    format: HitFormat,
    out: &mut W,
) -> Result<()> {
    for query in queries {
        let hits = query.execute(index);
        write_hits(out, format, query, &hits)?;
    }
    out.flush()?;
    Ok(())
}

/// Load question posts and answer every period query.
pub fn run_analytics<W: Write>(config: &AnalyticsConfig, out: &mut W) -> Result<()> {
    let stop_words = StopWords::load_path(&config.stop_words_path, config.stop_words_encoding()?)?;
    info!("loaded {} stop words", stop_words.len());

    let records = RecordLoader::new(&stop_words)?.load_path(&config.questions_path)?;
    let analytics = TermAnalytics::new(records);
    if analytics.is_empty() {
        warn!("no questions found in {}", config.questions_path.display());
    } else {
        info!(
            "loaded {} question records from {}",
            analytics.len(),
            config.questions_path.display()
        );
    }

    let queries = match &config.queries {
        PeriodSource::Inline(queries) => queries.clone(),
        PeriodSource::File(path) => load_period_queries(path)?,
    };
    if queries.is_empty() {
        return Err(TermidxError::invalid_argument("no period queries given"));
    }

    for query in &queries {
        write_report(out, &analytics.top_terms(query))?;
    }
    out.flush()?;
    Ok(())
}

/// Read `start,end,top` queries, one per line, skipping blank lines.
pub fn load_period_queries<P: AsRef<Path>>(path: P) -> Result<Vec<PeriodQuery>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        TermidxError::load(format!("cannot read queries {}: {e}", path.display()))
    })?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.parse::<PeriodQuery>())
        .collect()
}
