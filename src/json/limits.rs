//! Resource limits for parsing.
//!
//! The grammar is tiny, but callers that parse untrusted buffers may want
//! to refuse huge inputs or absurdly long digit runs before doing any
//! float conversion work. Limits are off by default.

use serde::Deserialize;

/// Limits applied by [`crate::json::parse_with_limits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum total input size in bytes (`InputTooLarge`)
    pub max_input_size: u64,
    /// Maximum length of a single number lexeme in bytes (`NumberTooLong`)
    pub max_number_length: u64,
}

impl Limits {
    /// No limits; every buffer is scanned in full.
    pub const fn unbounded() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_number_length: u64::MAX,
        }
    }

    /// Limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_number_length: 1024,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::unbounded()
    }
}
