//! Scanner for the Mono language.
//!
//! Turns source text into a [`TokenList`] plus every lexical error found.
//! Scanning never stops early: a malformed lexeme produces a [`LexError`]
//! in place of its token and the scanner carries on, so one pass reports
//! all problems in the input.
//!
//! ```
//! use mono_ir::TokenKind;
//!
//! let output = mono_lexer::scan("demo.mono", "x = 1");
//! assert!(output.is_clean());
//! assert_eq!(
//!     output.tokens.kinds(),
//!     vec![TokenKind::Identifier, TokenKind::Assignment, TokenKind::Integer, TokenKind::Eof]
//! );
//! ```
//!
//! # Architecture
//!
//! - [`cursor`]: character cursor with line/column tracking
//! - [`char_class`]: character classes driving dispatch
//! - `scanner`: the dispatch loop and one recognizer per token family
//! - [`keywords`]: word table and identifier classification
//!
//! Scanning a source is single-threaded and owns all of its state; separate
//! scans share nothing.

pub mod char_class;
mod config;
pub mod cursor;
pub mod keywords;
mod lex_error;
mod output;
mod scanner;

use mono_ir::TokenList;

pub use config::{ScanConfig, ScanMode, STDIN_SOURCE};
pub use lex_error::{LexError, LexErrorKind};
pub use output::ScanOutput;
pub use scanner::Lexed;

/// Scan `source_text`, choosing the mode from `source_name`
/// (see [`ScanConfig::for_source`]).
pub fn scan(source_name: &str, source_text: &str) -> ScanOutput {
    scan_with(ScanConfig::for_source(source_name), source_name, source_text)
}

/// Scan `source_text` with an explicit configuration.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(source = %source_name, bytes = source_text.len(), mode = ?config.mode)
)]
pub fn scan_with(config: ScanConfig, source_name: &str, source_text: &str) -> ScanOutput {
    let mut scanner = scanner::Scanner::new(source_text, config.mode);
    // Rough guess: one token per four bytes.
    let mut tokens = TokenList::with_capacity(source_text.len() / 4 + 1);
    let mut errors = Vec::new();

    while let Some(lexed) = scanner.next_lexed() {
        match lexed {
            Ok(token) => {
                tracing::trace!(kind = %token.kind, span = %token.span, "token");
                tokens.push(token);
            }
            Err(err) => {
                tracing::debug!(code = %err.code(), span = %err.span, "{err}");
                errors.push(err);
            }
        }
    }
    tokens.push(scanner.eof_token());

    tracing::debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        "scan finished"
    );

    ScanOutput {
        source_name: source_name.to_owned(),
        tokens,
        errors,
        mode: config.mode,
    }
}
