//! Integration tests for the command line driver

use tempfile::TempDir;
use termidx::cli::{TermidxArgs, execute_command};

const DATASET: &str = "123\tsome words A_word and nothing\n\
                       2\tsome words B_word in this dataset\n\
                       5\tfamous_phrases to be or not to be\n\
                       37\tall words such as A_word and B_word are here\n";

fn run(args: &[&str]) -> termidx::error::Result<String> {
    let argv = std::iter::once("termidx").chain(args.iter().copied());
    let args = TermidxArgs::try_parse_grouped_from(argv).unwrap();
    let mut out = Vec::new();
    execute_command(args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_build_and_query() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = temp_dir.path().join("dataset");
    let index = temp_dir.path().join("inverted.index");
    std::fs::write(&dataset, DATASET).unwrap();
    let dataset = dataset.to_str().unwrap();
    let index = index.to_str().unwrap();

    // build writes nothing to stdout
    let output = run(&["build", "--dataset", dataset, "--output", index]).unwrap();
    assert!(output.is_empty());

    let output = run(&[
        "query", "--index", index, "--query", "A_word", "--query", "B_word", "A_word", "--query",
        "absent",
    ])
    .unwrap();
    assert_eq!(output, "37,123\n37\n\n");
}

#[test]
fn test_query_file_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = temp_dir.path().join("dataset");
    let index = temp_dir.path().join("inverted.index");
    let queries = temp_dir.path().join("queries.txt");
    std::fs::write(&dataset, DATASET).unwrap();
    std::fs::write(&queries, "words\n\nbe to\nsome words B_word\n").unwrap();

    run(&[
        "build",
        "-d",
        dataset.to_str().unwrap(),
        "-o",
        index.to_str().unwrap(),
    ])
    .unwrap();

    let output = run(&[
        "query",
        "-i",
        index.to_str().unwrap(),
        "--query-file-utf8",
        queries.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(output, "2,37,123\n\n5\n2\n");
}

#[test]
fn test_query_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = temp_dir.path().join("dataset");
    let index = temp_dir.path().join("inverted.index");
    std::fs::write(&dataset, DATASET).unwrap();
    let index = index.to_str().unwrap();

    run(&["build", "-d", dataset.to_str().unwrap(), "-o", index]).unwrap();
    let output = run(&["query", "-i", index, "--format", "json", "--query", "be"]).unwrap();
    assert_eq!(output, "{\"query\":[\"be\"],\"hits\":[5]}\n");
}

#[test]
fn test_build_reports_malformed_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = temp_dir.path().join("dataset");
    let index = temp_dir.path().join("inverted.index");
    std::fs::write(&dataset, "1\tok\nnot a record\n").unwrap();

    let error = run(&[
        "build",
        "-d",
        dataset.to_str().unwrap(),
        "-o",
        index.to_str().unwrap(),
    ])
    .unwrap_err();
    assert!(error.to_string().contains("line 2"));
    assert!(!index.exists());
}

#[test]
fn test_analytics_command() {
    let temp_dir = TempDir::new().unwrap();
    let questions = temp_dir.path().join("questions.jsonl");
    let stop_words = temp_dir.path().join("stop_words.txt");
    std::fs::write(&stop_words, "is\nthe\nof\n").unwrap();
    std::fs::write(
        &questions,
        concat!(
            r#"{"PostTypeId":1,"CreationDate":"2019-03-01T10:00:00","Score":10,"Title":"Is SEO better"}"#,
            "\n",
            r#"{"PostTypeId":1,"CreationDate":"2020-05-01T10:00:00","Score":5,"Title":"SEO of the year"}"#,
            "\n",
        ),
    )
    .unwrap();

    let output = run(&[
        "analytics",
        "--questions",
        questions.to_str().unwrap(),
        "--stop-words",
        stop_words.to_str().unwrap(),
        "--period",
        "2019,2019,2",
        "--period",
        "2019,2020,1",
    ])
    .unwrap();
    assert_eq!(
        output,
        "{\"start\":2019,\"end\":2019,\"top\":[[\"better\",10],[\"seo\",10]]}\n\
         {\"start\":2019,\"end\":2020,\"top\":[[\"seo\",15]]}\n"
    );
}
