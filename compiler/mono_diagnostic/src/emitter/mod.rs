//! Diagnostic Emitters
//!
//! Writes rendered diagnostics to an output stream. Only the terminal
//! emitter exists today; the trait keeps the CLI independent of it.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use std::io;

use crate::Diagnostic;

/// Trait for emitting diagnostics against the source they refer to.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic, source: &str) -> io::Result<()>;

    /// Emit multiple diagnostics in order, stopping at the first write error.
    fn emit_all(&mut self, diagnostics: &[Diagnostic], source: &str) -> io::Result<()> {
        for diag in diagnostics {
            self.emit(diag, source)?;
        }
        Ok(())
    }

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;

    /// Emit a one-line count of what was reported.
    fn emit_summary(&mut self, error_count: usize) -> io::Result<()>;
}
