//! Caret excerpts of the source lines a span touches.

use mono_ir::Span;

use crate::span_utils::LineOffsetTable;

/// Marker drawn under the offending columns.
pub const MARKER: char = '^';

/// Render the lines covered by `span` with a marker line under each.
///
/// ```text
/// x = 12.3.4
///     ^^^^^^
/// ```
///
/// Every touched line is printed followed by a line of spaces up to the
/// first covered column and one marker per covered column. Zero-width spans
/// still get a single marker. A span ending at column 0 of a later line does
/// not cover that line, so it is left out.
pub fn render_excerpt(source: &str, span: Span) -> String {
    let table = LineOffsetTable::build(source);
    render_excerpt_with(&table, source, span)
}

/// Same as [`render_excerpt`], reusing a prebuilt line table.
pub fn render_excerpt_with(table: &LineOffsetTable, source: &str, span: Span) -> String {
    let first = span.start.line;
    let mut last = span.end.line.max(first);
    if last > first && span.end.column == 0 {
        last -= 1;
    }

    let mut out = String::new();
    for line in first..=last {
        let text = table.line_text(source, line);
        let line_width = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);

        let col_start = if line == first { span.start.column } else { 0 };
        let col_end = if line == span.end.line {
            span.end.column
        } else {
            line_width
        };
        let markers = col_end.saturating_sub(col_start).max(1);

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(text);
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(col_start as usize));
        out.extend(std::iter::repeat(MARKER).take(markers as usize));
    }
    out
}
