//! Corpus-driven conformance checking.
//!
//! A corpus is a JSON file of test vectors, each naming an input buffer and
//! the status, type and number the parser must produce for it. The runner
//! also checks two properties every vector must satisfy regardless of its
//! expectation: parsing twice gives the same result, and a failed parse
//! leaves the output value `Null`.

pub mod corpus;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, Expected, TestResult, TestVector};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug)]
pub enum ConformanceError {
    /// Failed to read the corpus file
    IoError(String),
    /// Corpus file is not a valid corpus document
    InvalidCorpus(String),
}

impl std::fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
            Self::InvalidCorpus(msg) => write!(f, "Invalid corpus: {}", msg),
        }
    }
}

impl std::error::Error for ConformanceError {}
