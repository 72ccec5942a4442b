//! Byte cursor over the input buffer.
//!
//! End-of-input is reported as `None`, which never compares equal to any
//! byte, so grammar checks can match on `peek()` without bounds checks.
//! The cursor is `Copy`: validators walk a local copy and only write it
//! back once a whole lexeme is known to be valid.

/// Read position over a borrowed input buffer.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the current byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek `offset` bytes past the current one.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Advance by one byte. No-op at end of input.
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Consume a byte the caller has already matched.
    #[inline]
    pub fn expect(&mut self, byte: u8) {
        debug_assert_eq!(
            self.peek(),
            Some(byte),
            "expected {:?} at position {}",
            byte as char,
            self.pos
        );
        self.bump();
    }

    /// Skip space, tab, newline and carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Bytes between `start` and this cursor.
    ///
    /// `start` must be an earlier copy of the same cursor.
    pub fn lexeme_since(&self, start: &Cursor<'a>) -> &'a [u8] {
        debug_assert!(start.pos <= self.pos, "cursor moved backward");
        &self.input[start.pos..self.pos]
    }
}
