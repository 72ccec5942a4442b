//! Top-level dispatcher and parse entry points.
//!
//! A document is optional whitespace, exactly one value, optional
//! whitespace, end of input. The first non-whitespace byte picks the
//! production: `t`, `f` and `n` are keywords, end of input means there is
//! no value at all, and everything else is handed to the number grammar.

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::lexer::{read_literal, read_number, Literal};
use super::limits::Limits;
use super::types::JsonValue;
use crate::error::{ErrorCode, ParseResult, ParseStatus};

/// Single-shot parser over one input buffer.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    limits: Limits,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> ParseResult<Self> {
        if input.len() as u64 > limits.max_input_size {
            return Err(ErrorCode::InputTooLarge(
                input.len() as u64,
                limits.max_input_size,
            ));
        }

        Ok(Self {
            cursor: Cursor::new(input),
            limits,
        })
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse the input and return the root value.
    pub fn parse(&mut self) -> ParseResult<JsonValue> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            debug!(position = self.position(), "trailing content after root value");
            return Err(ErrorCode::RootNotSingular);
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> ParseResult<JsonValue> {
        let literal = match self.cursor.peek() {
            None => {
                debug!("no value in input");
                return Err(ErrorCode::ExpectValue);
            }
            Some(b't') => Literal::True,
            Some(b'f') => Literal::False,
            Some(b'n') => Literal::Null,
            Some(_) => {
                trace!(position = self.position(), "dispatch number");
                return read_number(&mut self.cursor, &self.limits);
            }
        };

        trace!(position = self.position(), ?literal, "dispatch literal");
        read_literal(&mut self.cursor, literal)
    }
}

/// Parse a buffer holding one JSON scalar, without limits.
pub fn parse(input: &[u8]) -> ParseResult<JsonValue> {
    parse_with_limits(input, Limits::default())
}

/// Parse a buffer holding one JSON scalar, with custom limits.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
pub fn parse_with_limits(input: &[u8], limits: Limits) -> ParseResult<JsonValue> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse()
}

/// Parse into an existing value and report a status code.
///
/// `value` is reset to `Null` first and only overwritten on success, so a
/// caller never sees a partially parsed value after a failure.
pub fn parse_into(value: &mut JsonValue, input: &[u8]) -> ParseStatus {
    parse_into_with_limits(value, input, Limits::default())
}

/// [`parse_into`] with custom limits.
pub fn parse_into_with_limits(value: &mut JsonValue, input: &[u8], limits: Limits) -> ParseStatus {
    *value = JsonValue::Null;
    match parse_with_limits(input, limits) {
        Ok(parsed) => {
            *value = parsed;
            ParseStatus::Ok
        }
        Err(e) => e.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::types::JsonType;

    #[test]
    fn test_parse_literals() {
        assert_eq!(parse(b"null"), Ok(JsonValue::Null));
        assert_eq!(parse(b"true"), Ok(JsonValue::True));
        assert_eq!(parse(b"false"), Ok(JsonValue::False));
        assert_eq!(parse(b" \t\r\n true \n"), Ok(JsonValue::True));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse(b"42"), Ok(JsonValue::Number(42.0)));
        assert_eq!(parse(b" -1.5E3 "), Ok(JsonValue::Number(-1500.0)));
        assert_eq!(parse(b"0"), Ok(JsonValue::Number(0.0)));
    }

    #[test]
    fn test_expect_value() {
        assert_eq!(parse(b""), Err(ErrorCode::ExpectValue));
        assert_eq!(parse(b" \t\n\r"), Err(ErrorCode::ExpectValue));
    }

    #[test]
    fn test_trailing_content_rejected() {
        assert_eq!(parse(b"null x"), Err(ErrorCode::RootNotSingular));
        assert_eq!(parse(b"true false"), Err(ErrorCode::RootNotSingular));
        assert_eq!(parse(b"1 2"), Err(ErrorCode::RootNotSingular));
        assert_eq!(parse(b"null\0"), Err(ErrorCode::RootNotSingular));
    }

    #[test]
    fn test_dispatch_routes_unknown_bytes_to_number() {
        assert_eq!(parse(b"?"), Err(ErrorCode::InvalidValue));
        assert_eq!(parse(b"\"a\""), Err(ErrorCode::InvalidValue));
        assert_eq!(parse(b"[1]"), Err(ErrorCode::InvalidValue));
    }

    #[test]
    fn test_parser_position_after_parse() {
        let mut parser = Parser::new(b"  12  ", Limits::default()).unwrap();
        assert_eq!(parser.parse(), Ok(JsonValue::Number(12.0)));
        assert_eq!(parser.position(), 6);
    }

    #[test]
    fn test_input_size_limit() {
        let limits = Limits {
            max_input_size: 4,
            ..Limits::unbounded()
        };
        assert_eq!(parse_with_limits(b"null", limits), Ok(JsonValue::Null));
        assert_eq!(
            parse_with_limits(b"false", limits),
            Err(ErrorCode::InputTooLarge(5, 4))
        );
    }

    #[test]
    fn test_parse_into_resets_on_failure() {
        let mut value = JsonValue::True;
        assert_eq!(parse_into(&mut value, b"1e"), ParseStatus::InvalidValue);
        assert_eq!(value.json_type(), JsonType::Null);

        let mut value = JsonValue::Number(7.0);
        assert_eq!(parse_into(&mut value, b"false x"), ParseStatus::RootNotSingular);
        assert!(value.is_null());
    }

    #[test]
    fn test_parse_into_overwrites_on_success() {
        let mut value = JsonValue::False;
        assert_eq!(parse_into(&mut value, b"2.5"), ParseStatus::Ok);
        assert_eq!(value.number(), 2.5);
    }
}
