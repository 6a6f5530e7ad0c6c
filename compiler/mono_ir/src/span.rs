//! Source positions and half-open spans.
//!
//! A [`Position`] carries the byte offset used for slicing together with the
//! line and column used for reporting. Both are tracked eagerly by the
//! scanner's cursor, so rendering a diagnostic never has to rescan the
//! source to find where it is.

use std::fmt;
use std::ops::Range;

/// A point in the source text.
///
/// - `offset`: byte offset from the start of the source
/// - `line`: 0-based line number
/// - `column`: 0-based column, counted in characters
///
/// `Position` is `Copy`; a snapshot never aliases the cursor it came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of any source.
    pub const START: Position = Position {
        offset: 0,
        line: 0,
        column: 0,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// The position just past `ch`, assuming `ch` sits at `self`.
    ///
    /// Consuming a newline moves to column 0 of the next line; any other
    /// character moves one column right.
    #[inline]
    #[must_use]
    pub fn advance_over(self, ch: char) -> Position {
        // Source lengths are bounded by `u32` at cursor construction.
        #[allow(clippy::cast_possible_truncation)]
        let width = ch.len_utf8() as u32;
        if ch == '\n' {
            Position {
                offset: self.offset + width,
                line: self.line + 1,
                column: 0,
            }
        } else {
            Position {
                offset: self.offset + width,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Position {
    /// Human form, 1-based: `line:column`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Half-open `[start, end)` region of source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub const fn point(pos: Position) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.offset - self.start.offset
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Whether `offset` falls inside the span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }

    /// Byte range for slicing the source.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
