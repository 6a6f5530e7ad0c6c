//! Character cursor over the source text.
//!
//! The cursor sits on a *current* character and tracks the [`Position`] of
//! that character. [`Cursor::advance`] consumes it, updating line and column
//! according to what was consumed. Past the end, `current()` is `None`;
//! reading there never faults.
//!
//! # Contract
//!
//! Sources must be shorter than `u32::MAX` bytes, since positions are
//! stored as `u32`.

use mono_ir::{Position, Span};

/// Cursor over a borrowed source.
///
/// The cursor is [`Copy`], so cloning it is a cheap snapshot of the whole
/// scanning state. Use [`Cursor::snapshot`] when only the position is
/// needed.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Position of `current`.
    pos: Position,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        Cursor {
            source,
            pos: Position::START,
            current: source.chars().next(),
        }
    }

    /// The character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Consume the current character and return the new current one.
    ///
    /// At end of input this is a no-op returning `None`.
    pub fn advance(&mut self) -> Option<char> {
        if let Some(ch) = self.current {
            self.pos = self.pos.advance_over(ch);
            self.current = self.rest().chars().next();
        }
        self.current
    }

    /// Consume the current character if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The character one past the current one, without moving.
    #[inline]
    pub fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// The character `n` places ahead; `peek_nth(0)` is `current()`.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Immutable copy of the current position.
    #[inline]
    pub fn snapshot(&self) -> Position {
        self.pos
    }

    /// Span from `start` up to (not including) the current character.
    #[inline]
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.pos)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Source text between two positions taken from this cursor.
    ///
    /// Returns `""` if the positions do not form a valid range.
    pub fn slice(&self, start: Position, end: Position) -> &'a str {
        self.source
            .get(start.offset as usize..end.offset as usize)
            .unwrap_or("")
    }

    /// Unconsumed text, starting at the current character.
    #[inline]
    fn rest(&self) -> &'a str {
        self.source.get(self.pos.offset as usize..).unwrap_or("")
    }
}
