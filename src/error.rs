//! Error handling for the scalar JSON parser.
//!
//! Every failure maps to a stable numeric status code so callers that only
//! look at the code see the same contract as callers that match on the enum.
//!
//! | Code | Status            |
//! |------|-------------------|
//! | 0    | `Ok`              |
//! | 1    | `ExpectValue`     |
//! | 2    | `InvalidValue`    |
//! | 3    | `RootNotSingular` |
//! | 4    | `NumberTooBig`    |
//! | 5    | `InputTooLarge`   |
//! | 6    | `NumberTooLong`   |

use serde::Deserialize;
use thiserror::Error;

/// Reasons a parse can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ErrorCode {
    /// Input was empty or held only whitespace (code 1)
    #[error("ExpectValue")]
    ExpectValue,

    /// Malformed literal or number (code 2)
    #[error("InvalidValue")]
    InvalidValue,

    /// Extra non-whitespace after the value, or a leading zero followed by
    /// a digit or `x` (code 3)
    #[error("RootNotSingular")]
    RootNotSingular,

    /// Number magnitude overflows `f64` (code 4)
    #[error("NumberTooBig")]
    NumberTooBig,

    /// Input larger than the configured limit (code 5)
    #[error("InputTooLarge({0}, {1})")]
    InputTooLarge(/* size */ u64, /* limit */ u64),

    /// Number lexeme longer than the configured limit (code 6)
    #[error("NumberTooLong({0}, {1})")]
    NumberTooLong(/* length */ u64, /* limit */ u64),
}

impl ErrorCode {
    /// Get the numeric status code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::ExpectValue => 1,
            ErrorCode::InvalidValue => 2,
            ErrorCode::RootNotSingular => 3,
            ErrorCode::NumberTooBig => 4,
            ErrorCode::InputTooLarge(_, _) => 5,
            ErrorCode::NumberTooLong(_, _) => 6,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        self.status().name()
    }

    /// The payload-free status for this error.
    pub fn status(&self) -> ParseStatus {
        match self {
            ErrorCode::ExpectValue => ParseStatus::ExpectValue,
            ErrorCode::InvalidValue => ParseStatus::InvalidValue,
            ErrorCode::RootNotSingular => ParseStatus::RootNotSingular,
            ErrorCode::NumberTooBig => ParseStatus::NumberTooBig,
            ErrorCode::InputTooLarge(_, _) => ParseStatus::InputTooLarge,
            ErrorCode::NumberTooLong(_, _) => ParseStatus::NumberTooLong,
        }
    }
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ErrorCode>;

/// Status code returned by [`crate::json::parse_into`].
///
/// Deserializes from the variant name, which is how conformance vectors
/// spell their expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ParseStatus {
    /// Parse succeeded
    Ok,
    /// See [`ErrorCode::ExpectValue`]
    ExpectValue,
    /// See [`ErrorCode::InvalidValue`]
    InvalidValue,
    /// See [`ErrorCode::RootNotSingular`]
    RootNotSingular,
    /// See [`ErrorCode::NumberTooBig`]
    NumberTooBig,
    /// See [`ErrorCode::InputTooLarge`]
    InputTooLarge,
    /// See [`ErrorCode::NumberTooLong`]
    NumberTooLong,
}

impl ParseStatus {
    /// Get the numeric status code.
    pub fn code(self) -> u32 {
        match self {
            ParseStatus::Ok => 0,
            ParseStatus::ExpectValue => 1,
            ParseStatus::InvalidValue => 2,
            ParseStatus::RootNotSingular => 3,
            ParseStatus::NumberTooBig => 4,
            ParseStatus::InputTooLarge => 5,
            ParseStatus::NumberTooLong => 6,
        }
    }

    /// Get the status name as a string.
    pub fn name(self) -> &'static str {
        match self {
            ParseStatus::Ok => "Ok",
            ParseStatus::ExpectValue => "ExpectValue",
            ParseStatus::InvalidValue => "InvalidValue",
            ParseStatus::RootNotSingular => "RootNotSingular",
            ParseStatus::NumberTooBig => "NumberTooBig",
            ParseStatus::InputTooLarge => "InputTooLarge",
            ParseStatus::NumberTooLong => "NumberTooLong",
        }
    }

    /// Returns true if this is the success status.
    pub fn is_ok(self) -> bool {
        self == ParseStatus::Ok
    }
}

impl std::fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&ErrorCode> for ParseStatus {
    fn from(err: &ErrorCode) -> Self {
        err.status()
    }
}

impl<T> From<&ParseResult<T>> for ParseStatus {
    fn from(result: &ParseResult<T>) -> Self {
        match result {
            Ok(_) => ParseStatus::Ok,
            Err(e) => e.status(),
        }
    }
}
