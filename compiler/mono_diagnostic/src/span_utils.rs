//! Line lookup helpers for diagnostic rendering.
//!
//! Positions already carry line and column, so the only thing rendering
//! needs from the source is the text of a given line. [`LineOffsetTable`]
//! records where each line starts so that lookup is a slice, not a scan.

/// Pre-computed line start offsets.
///
/// Lines are 0-based, matching [`mono_ir::Position::line`].
///
/// # Example
///
/// ```
/// use mono_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.line_from_offset(0), 0);
/// assert_eq!(table.line_from_offset(6), 1);
/// assert_eq!(table.line_text(source, 2), "line3");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// offsets[0] = 0; offsets[n] = byte after the n-th `\n`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build the table in one pass over the source.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                #[allow(clippy::cast_possible_truncation)]
                offsets.push((i + 1) as u32);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 0-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        #[allow(clippy::cast_possible_truncation)]
        let line = idx as u32;
        line
    }

    /// Byte offset where `line` starts, or `None` past the last line.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        self.offsets.get(line as usize).copied()
    }

    /// Text of `line` without its terminating newline (and without a
    /// trailing `\r`). Out-of-range lines yield `""`.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let Some(start) = self.line_start_offset(line) else {
            return "";
        };
        let start = start as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize - 1);
        let text = source.get(start..end).unwrap_or("");
        text.strip_suffix('\r').unwrap_or(text)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
