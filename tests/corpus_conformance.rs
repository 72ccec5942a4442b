//! Corpus-based conformance tests.
//!
//! Runs every vector in `tests/corpus/values.json`. Set `RUST_LOG=debug`
//! to see why a vector was rejected.

use scalar_json::conformance::{CorpusRunner, TestResult};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Path to the corpus file relative to the crate root.
const CORPUS_PATH: &str = "tests/corpus/values.json";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn load_runner() -> CorpusRunner {
    let corpus_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH);
    CorpusRunner::load(&corpus_path).expect("Failed to load corpus")
}

#[test]
fn test_full_corpus() {
    init_tracing();
    let runner = load_runner();
    println!("Loaded corpus with {} vectors", runner.vector_count());

    let results = runner.run_all();

    println!("\n=== Corpus Conformance Results ===");
    println!("{}", results.summary());

    for (id, result) in results.failures() {
        if let TestResult::Fail { expected, actual } = result {
            println!("  {} - expected: {}, actual: {}", id, expected, actual);
        }
    }
    for (id, result) in results.error_details() {
        if let TestResult::Error { message } = result {
            println!("  {} - {}", id, message);
        }
    }

    assert!(
        results.all_passed(),
        "Corpus conformance failed: {}",
        results.summary()
    );
    assert_eq!(results.total(), runner.vector_count());
}

#[test]
fn test_corpus_manifest() {
    let runner = load_runner();
    let manifest = runner.manifest();

    assert_eq!(manifest.format_version, "scalar-corpus-v1");
    assert_eq!(manifest.version, "1");
    assert!(!manifest.description.is_empty());
}

#[test]
fn test_corpus_covers_every_status() {
    let runner = load_runner();
    let results = runner.run_all();

    for prefix in ["lit-", "num-", "bound-", "empty-", "inv-", "root-", "big-", "lim-"] {
        let count = results
            .details
            .iter()
            .filter(|(id, _)| id.starts_with(prefix))
            .count();
        assert!(count > 0, "no vectors with prefix {prefix}");
    }
}
