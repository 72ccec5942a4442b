//! JSON value types for the scalar parser.
//!
//! The grammar only admits `null`, `true`, `false` and numbers, so a value
//! is a small `Copy` record: one tag, one `f64` payload slot that only the
//! `Number` variant carries.

use serde::Deserialize;
use std::str::FromStr;

use super::parser::parse;
use crate::error::ErrorCode;

/// Type tag of a parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum JsonType {
    /// JSON null literal
    Null,
    /// JSON false literal
    False,
    /// JSON true literal
    True,
    /// JSON number
    Number,
}

/// A parsed JSON scalar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null literal
    #[default]
    Null,
    /// JSON false literal
    False,
    /// JSON true literal
    True,
    /// JSON number converted to the nearest `f64`
    Number(f64),
}

impl JsonValue {
    /// Returns the type tag of this value.
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::False => JsonType::False,
            JsonValue::True => JsonType::True,
            JsonValue::Number(_) => JsonType::Number,
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is `true` or `false`.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::True | JsonValue::False)
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns the boolean value if this is `true` or `false`, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::True => Some(true),
            JsonValue::False => Some(false),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a `Number`. Reading a number from any
    /// other variant is a caller bug, not an input error; use
    /// [`JsonValue::as_f64`] when the type is not already known.
    pub fn number(&self) -> f64 {
        assert!(
            self.is_number(),
            "number() called on a JSON {} value",
            self.type_name()
        );
        self.as_f64().unwrap_or_default()
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::False | JsonValue::True => "boolean",
            JsonValue::Number(_) => "number",
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        if b {
            JsonValue::True
        } else {
            JsonValue::False
        }
    }
}

impl FromStr for JsonValue {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes())
    }
}
