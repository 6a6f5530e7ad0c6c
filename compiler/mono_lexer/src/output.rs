//! The result of one scan.

use mono_diagnostic::Diagnostic;
use mono_ir::TokenList;

use crate::{LexError, ScanMode};

/// Tokens and errors from scanning one source.
///
/// `tokens` always ends with a single `Eof` token. `errors` is always
/// present and empty for a clean scan; errors are in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutput {
    pub source_name: String,
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
    pub mode: ScanMode,
}

impl ScanOutput {
    /// No lexical errors were found.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// An error asked the host to stop (see [`LexError::is_fatal`]).
    ///
    /// The scan itself has still run to the end of input.
    pub fn halt_requested(&self) -> bool {
        self.errors.iter().any(LexError::is_fatal)
    }

    /// The errors as renderable diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors
            .iter()
            .cloned()
            .map(LexError::into_diagnostic)
            .collect()
    }

    /// Every error rendered against `source`, separated by blank lines.
    pub fn render_errors(&self, source: &str) -> String {
        self.errors
            .iter()
            .map(|err| err.render(source))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
