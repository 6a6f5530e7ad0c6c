//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::snippet::render_excerpt;
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Recover the writer (used by tests to inspect output).
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        // Header: Title: message
        self.write_colored(diagnostic.title(), Self::severity_color(diagnostic.severity))?;
        writeln!(self.writer, ": {}", diagnostic.message)?;
        writeln!(self.writer)?;

        let excerpt = render_excerpt(source, diagnostic.span);
        // Excerpt lines alternate: source text, then its marker line.
        for (i, line) in excerpt.split('\n').enumerate() {
            if self.colors && i % 2 == 1 {
                self.write_colored(line, colors::ERROR)?;
                writeln!(self.writer)?;
            } else {
                writeln!(self.writer, "{line}")?;
            }
        }

        for note in &diagnostic.notes {
            write!(self.writer, "  = ")?;
            self.write_colored("note", colors::NOTE)?;
            writeln!(self.writer, ": {note}")?;
        }

        for suggestion in &diagnostic.suggestions {
            write!(self.writer, "  = ")?;
            self.write_colored("help", colors::HELP)?;
            writeln!(self.writer, ": {suggestion}")?;
        }

        writeln!(self.writer)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn emit_summary(&mut self, error_count: usize) -> io::Result<()> {
        if error_count == 0 {
            return Ok(());
        }
        self.write_colored("error", colors::ERROR)?;
        writeln!(
            self.writer,
            ": {error_count} lexical error{} found",
            plural_s(error_count)
        )
    }
}
