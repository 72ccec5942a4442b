//! Scalar JSON - a strict parser for single JSON scalar documents.
//!
//! A document must hold exactly one value, and that value must be `null`,
//! `true`, `false` or a number. Numbers are validated against the JSON
//! grammar by hand before any float conversion happens, so spellings a
//! general float parser accepts (`+1`, `.5`, `1.`, `inf`, `NaN`, hex) are
//! rejected.
//!
//! # Architecture
//!
//! - [`json`] - Cursor, grammar validators, dispatcher and value model
//! - [`error`] - Error codes and status codes
//! - [`conformance`] - Corpus-driven conformance runner
//!
//! # Example
//!
//! ```
//! use scalar_json::{parse, ErrorCode, JsonValue};
//!
//! assert_eq!(parse(b"  null "), Ok(JsonValue::Null));
//! assert_eq!(parse(b"1.0e309"), Err(ErrorCode::NumberTooBig));
//! assert_eq!(parse(b"true false"), Err(ErrorCode::RootNotSingular));
//! ```

// Malformed input must surface as an error code, never a panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{ErrorCode, ParseResult, ParseStatus};
pub use json::{parse, parse_into, parse_with_limits, JsonType, JsonValue, Limits};
