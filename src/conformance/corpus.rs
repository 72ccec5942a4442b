//! Corpus loading and execution.
//!
//! # Format
//!
//! ```json
//! {
//!   "manifest": { "format_version": "scalar-corpus-v1", "version": "1" },
//!   "vectors": [
//!     { "id": "num-001", "input": "1.5",
//!       "expected": { "status": "Ok", "type": "Number", "number": 1.5 } },
//!     { "id": "lim-001", "input": "12345", "limits": { "max_number_length": 3 },
//!       "expected": { "status": "NumberTooLong" } }
//!   ]
//! }
//! ```
//!
//! Expected numbers are compared bit for bit, so `-0.0` and `0.0` differ.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{ConformanceError, ConformanceResult};
use crate::error::ParseStatus;
use crate::json::{parse_into_with_limits, JsonType, JsonValue, Limits};

/// Written into the output value before each run so a missing reset shows up.
const SENTINEL: JsonValue = JsonValue::Number(-1.0);

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Input buffer.
    pub input: String,
    /// Limits to parse with; unbounded when absent.
    #[serde(default)]
    pub limits: Option<Limits>,
    /// Expected outcome.
    pub expected: Expected,
}

/// Expected outcome of a vector.
#[derive(Debug, Deserialize)]
pub struct Expected {
    /// Status code.
    pub status: ParseStatus,
    /// Value type, only meaningful when `status` is `Ok`.
    #[serde(rename = "type", default)]
    pub json_type: Option<JsonType>,
    /// Numeric value, only meaningful for `Number` results.
    #[serde(default)]
    pub number: Option<f64>,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the parser.
        actual: String,
    },
    /// The vector itself is inconsistent.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of malformed vectors.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors
    }

    /// Returns true if no test failed or errored.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} errors (total: {})",
            self.passed,
            self.failed,
            self.errors,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }

    /// Get errors only.
    pub fn error_details(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConformanceError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Load corpus from JSON text.
    pub fn from_json_str(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| ConformanceError::InvalidCorpus(e.to_string()))?;
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = run_vector(vector);
            if !result.is_pass() {
                tracing::debug!(id = %vector.id, ?result, "vector did not pass");
            }
            results.record(&vector.id, result);
        }

        tracing::debug!(summary = %results.summary(), "corpus run complete");
        results
    }
}

/// Run a single test vector.
pub fn run_vector(vector: &TestVector) -> TestResult {
    let expected = &vector.expected;
    if !expected.status.is_ok() && (expected.json_type.is_some() || expected.number.is_some()) {
        return TestResult::Error {
            message: format!("{} expects a value on a failing status", vector.id),
        };
    }

    let limits = vector.limits.unwrap_or_default();
    let input = vector.input.as_bytes();

    let mut first = SENTINEL;
    let status = parse_into_with_limits(&mut first, input, limits);
    let mut second = SENTINEL;
    let again = parse_into_with_limits(&mut second, input, limits);

    if again != status || !same_value(&first, &second) {
        return TestResult::Fail {
            expected: format!("repeatable: {}", describe(status, &first)),
            actual: format!("second run: {}", describe(again, &second)),
        };
    }

    if status != expected.status {
        return TestResult::Fail {
            expected: expected.status.to_string(),
            actual: describe(status, &first),
        };
    }

    if !status.is_ok() {
        if !first.is_null() {
            return TestResult::Fail {
                expected: format!("{} with Null output", status),
                actual: describe(status, &first),
            };
        }
        return TestResult::Pass;
    }

    if let Some(json_type) = expected.json_type {
        if json_type != first.json_type() {
            return TestResult::Fail {
                expected: format!("{:?}", json_type),
                actual: format!("{:?}", first.json_type()),
            };
        }
    }

    if let Some(n) = expected.number {
        match first.as_f64() {
            Some(actual) if actual.to_bits() == n.to_bits() => {}
            _ => {
                return TestResult::Fail {
                    expected: format!("Number({:?})", n),
                    actual: describe(status, &first),
                }
            }
        }
    }

    TestResult::Pass
}

fn same_value(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Number(x), JsonValue::Number(y)) => x.to_bits() == y.to_bits(),
        _ => a == b,
    }
}

fn describe(status: ParseStatus, value: &JsonValue) -> String {
    format!("{} ({:?})", status, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CORPUS: &str = r#"{
        "manifest": { "format_version": "scalar-corpus-v1", "version": "1" },
        "vectors": [
            { "id": "ok-true", "input": " true ", "expected": { "status": "Ok", "type": "True" } },
            { "id": "ok-num", "input": "-0.0", "expected": { "status": "Ok", "type": "Number", "number": -0.0 } },
            { "id": "err-empty", "input": "", "expected": { "status": "ExpectValue" } },
            { "id": "lim", "input": "12345", "limits": { "max_number_length": 3 },
              "expected": { "status": "NumberTooLong" } },
            { "id": "wrong", "input": "1", "expected": { "status": "Ok", "number": 2.0 } },
            { "id": "bad-vector", "input": "x", "expected": { "status": "InvalidValue", "number": 1.0 } }
        ]
    }"#;

    #[test]
    fn test_run_small_corpus() {
        let runner = CorpusRunner::from_json_str(SMALL_CORPUS).unwrap();
        assert_eq!(runner.vector_count(), 6);
        assert_eq!(runner.manifest().format_version, "scalar-corpus-v1");
        assert!(runner.manifest().description.is_empty());

        let results = runner.run_all();
        assert_eq!(results.passed, 4);
        assert_eq!(results.failed, 1);
        assert_eq!(results.errors, 1);
        assert!(!results.all_passed());
        assert_eq!(results.failures()[0].0, "wrong");
        assert_eq!(results.error_details()[0].0, "bad-vector");
    }

    #[test]
    fn test_negative_zero_is_distinct() {
        let vector = TestVector {
            id: "neg-zero".to_string(),
            input: "-0".to_string(),
            limits: None,
            expected: Expected {
                status: ParseStatus::Ok,
                json_type: Some(JsonType::Number),
                number: Some(0.0),
            },
        };
        assert!(run_vector(&vector).is_fail());
    }

    #[test]
    fn test_invalid_corpus_rejected() {
        let result = CorpusRunner::from_json_str(r#"{"vectors": []}"#);
        assert!(matches!(result, Err(ConformanceError::InvalidCorpus(_))));

        let result = CorpusRunner::load("/nonexistent/corpus.json");
        assert!(matches!(result, Err(ConformanceError::IoError(_))));
    }

    #[test]
    fn test_corpus_results() {
        let mut results = CorpusResults::new();
        results.record("test1", TestResult::Pass);
        results.record(
            "test2",
            TestResult::Fail {
                expected: "a".to_string(),
                actual: "b".to_string(),
            },
        );
        assert_eq!(results.total(), 2);
        assert_eq!(results.summary(), "1 passed, 1 failed, 0 errors (total: 2)");
    }
}
