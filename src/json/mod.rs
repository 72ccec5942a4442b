//! Strict parsing of JSON scalars.
//!
//! # Architecture
//!
//! - [`cursor`] - Byte cursor with lookahead and whitespace skipping
//! - [`lexer`] - Literal and number grammar validators
//! - [`parser`] - Top-level dispatcher and entry points
//! - [`types`] - Parsed value model
//! - [`limits`] - Optional resource limits
//!
//! # Example
//!
//! ```
//! use scalar_json::json::{parse, parse_into, JsonType, JsonValue};
//! use scalar_json::{ErrorCode, ParseStatus};
//!
//! assert_eq!(parse(b" -1.25e2 "), Ok(JsonValue::Number(-125.0)));
//! assert_eq!(parse(b"0123"), Err(ErrorCode::RootNotSingular));
//!
//! let mut value = JsonValue::default();
//! assert_eq!(parse_into(&mut value, b"true"), ParseStatus::Ok);
//! assert_eq!(value.json_type(), JsonType::True);
//! ```

pub mod cursor;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod types;

pub use limits::Limits;
pub use parser::{parse, parse_into, parse_into_with_limits, parse_with_limits, Parser};
pub use types::{JsonType, JsonValue};
