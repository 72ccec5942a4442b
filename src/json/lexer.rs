//! Lexeme validators for literals and numbers.
//!
//! Both validators walk a copy of the caller's cursor and write it back only
//! when the whole lexeme is valid, so a failed check never consumes input.
//!
//! The number grammar is checked here byte by byte. The standard library's
//! float parser also accepts `inf`, `NaN`, `+1`, `.5` and `1.`, none of
//! which are JSON, so it only ever sees a lexeme this walk has accepted.

use tracing::debug;

use super::cursor::Cursor;
use super::limits::Limits;
use super::types::JsonValue;
use crate::error::{ErrorCode, ParseResult};

/// Keyword literals selected by their first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
}

impl Literal {
    /// Canonical spelling.
    pub fn spelling(self) -> &'static [u8] {
        match self {
            Literal::Null => b"null",
            Literal::True => b"true",
            Literal::False => b"false",
        }
    }

    fn value(self) -> JsonValue {
        match self {
            Literal::Null => JsonValue::Null,
            Literal::True => JsonValue::True,
            Literal::False => JsonValue::False,
        }
    }
}

/// Read a keyword whose first byte the dispatcher has already matched.
pub fn read_literal(cursor: &mut Cursor<'_>, literal: Literal) -> ParseResult<JsonValue> {
    let spelling = literal.spelling();
    let mut probe = *cursor;
    probe.expect(spelling[0]);

    for &b in &spelling[1..] {
        if probe.peek() != Some(b) {
            debug!(
                position = probe.position(),
                literal = ?literal,
                "literal mismatch"
            );
            return Err(ErrorCode::InvalidValue);
        }
        probe.bump();
    }

    *cursor = probe;
    Ok(literal.value())
}

/// Read a number lexeme and convert it to `f64`.
pub fn read_number(cursor: &mut Cursor<'_>, limits: &Limits) -> ParseResult<JsonValue> {
    let start = *cursor;
    let end = scan_number(start)?;
    let lexeme = end.lexeme_since(&start);

    if lexeme.len() as u64 > limits.max_number_length {
        return Err(ErrorCode::NumberTooLong(
            lexeme.len() as u64,
            limits.max_number_length,
        ));
    }

    let n = convert(lexeme)?;
    *cursor = end;
    Ok(JsonValue::Number(n))
}

/// Walk the number grammar and return the cursor just past the lexeme.
///
/// ```text
/// number = [ "-" ] int [ frac ] [ exp ]
/// int    = "0" / digit1-9 *digit
/// frac   = "." 1*digit
/// exp    = ("e" / "E") [ "+" / "-" ] 1*digit
/// ```
fn scan_number(mut probe: Cursor<'_>) -> ParseResult<Cursor<'_>> {
    if is_non_finite(&probe) {
        return Err(invalid(&probe, "non-finite literal"));
    }
    if probe.peek() == Some(b'+') {
        return Err(invalid(&probe, "leading plus sign"));
    }
    if probe.peek() == Some(b'-') {
        probe.bump();
    }

    // Integer part
    match probe.peek() {
        Some(b'0') => {
            probe.bump();
            if let Some(b'0'..=b'9' | b'x' | b'X') = probe.peek() {
                debug!(position = probe.position(), "leading zero");
                return Err(ErrorCode::RootNotSingular);
            }
        }
        Some(b'1'..=b'9') => {
            probe.bump();
            skip_digits(&mut probe);
        }
        _ => return Err(invalid(&probe, "missing integer part")),
    }

    // Fraction
    if probe.peek() == Some(b'.') {
        probe.bump();
        if !is_digit(probe.peek()) {
            return Err(invalid(&probe, "no digit after decimal point"));
        }
        skip_digits(&mut probe);
    }

    // Exponent
    if let Some(b'e' | b'E') = probe.peek() {
        probe.bump();
        if let Some(b'+' | b'-') = probe.peek() {
            probe.bump();
        }
        if !is_digit(probe.peek()) {
            return Err(invalid(&probe, "no digit in exponent"));
        }
        skip_digits(&mut probe);
    }

    Ok(probe)
}

fn convert(lexeme: &[u8]) -> ParseResult<f64> {
    let text = std::str::from_utf8(lexeme).map_err(|_| ErrorCode::InvalidValue)?;
    let n: f64 = text.parse().map_err(|_| ErrorCode::InvalidValue)?;
    if n.is_infinite() {
        debug!(lexeme = text, "number overflows f64");
        return Err(ErrorCode::NumberTooBig);
    }
    Ok(n)
}

fn is_non_finite(cursor: &Cursor<'_>) -> bool {
    let skip = usize::from(cursor.peek() == Some(b'-'));
    let word = [
        cursor.peek_at(skip),
        cursor.peek_at(skip + 1),
        cursor.peek_at(skip + 2),
    ];
    let lower = word.map(|b| b.map(|b| b.to_ascii_lowercase()));
    lower == [Some(b'n'), Some(b'a'), Some(b'n')] || lower == [Some(b'i'), Some(b'n'), Some(b'f')]
}

#[inline]
fn is_digit(b: Option<u8>) -> bool {
    matches!(b, Some(b'0'..=b'9'))
}

fn skip_digits(cursor: &mut Cursor<'_>) {
    while is_digit(cursor.peek()) {
        cursor.bump();
    }
}

fn invalid(cursor: &Cursor<'_>, reason: &'static str) -> ErrorCode {
    debug!(position = cursor.position(), reason, "invalid number");
    ErrorCode::InvalidValue
}
