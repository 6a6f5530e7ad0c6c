//! Lexical error values.
//!
//! A recognizer that cannot produce a token returns a [`LexError`] in its
//! place. Errors carry:
//! - `span`: the whole malformed lexeme, so one bad token yields one error
//! - `kind`: the error category (its `Display` is the title)
//! - `message`: the detail line, usually quoting the offending text
//! - `suggestions`: optional fixes
//!
//! Errors are never used for control flow; the scanner collects them and
//! keeps going.

use mono_diagnostic::{Diagnostic, ErrorCode};
use mono_ir::Span;

/// What kind of lexical error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Character outside every lexeme class.
    #[error("Illegal Character")]
    IllegalCharacter,
    /// Identifier starting with a digit or containing an untracked symbol.
    #[error("Illegal Identifier")]
    IllegalIdentifier,
    /// Number containing letters, untracked symbols or `__`.
    #[error("Illegal Number")]
    IllegalNumber,
    /// Float with more than one decimal point.
    #[error("Lexical Error")]
    LexicalError,
    #[error("Invalid Decimal")]
    InvalidDecimal,
    /// `!`, `&`, `&&`, `|` or `||`.
    #[error("Invalid Symbol")]
    InvalidRelationalSymbol,
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated multi-line string literal")]
    UnterminatedDocstring,
    /// Reserved word used as a bare statement.
    #[error("Reserved Word Misuse")]
    ReservedWordMisuse,
}

impl LexErrorKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::IllegalCharacter => ErrorCode::E0001,
            LexErrorKind::IllegalIdentifier => ErrorCode::E0002,
            LexErrorKind::IllegalNumber => ErrorCode::E0003,
            LexErrorKind::LexicalError => ErrorCode::E0004,
            LexErrorKind::InvalidDecimal => ErrorCode::E0005,
            LexErrorKind::InvalidRelationalSymbol => ErrorCode::E0006,
            LexErrorKind::UnterminatedString => ErrorCode::E0007,
            LexErrorKind::UnterminatedDocstring => ErrorCode::E0008,
            LexErrorKind::ReservedWordMisuse => ErrorCode::E0009,
        }
    }
}

/// A lexical error with its location and detail message.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl LexError {
    fn new(kind: LexErrorKind, span: Span, message: String) -> Self {
        LexError {
            kind,
            span,
            message,
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// A character that cannot start any token.
    ///
    /// The message reports the position 1-based, as editors do.
    #[cold]
    pub fn illegal_character(span: Span, ch: char) -> Self {
        Self::new(
            LexErrorKind::IllegalCharacter,
            span,
            format!(
                "Illegal character '{ch}' at line {}, column {}",
                span.start.line + 1,
                span.start.column + 1
            ),
        )
    }

    #[cold]
    pub fn illegal_identifier(span: Span, lexeme: &str) -> Self {
        Self::new(
            LexErrorKind::IllegalIdentifier,
            span,
            format!("'{lexeme}' is not a valid identifier"),
        )
        .with_suggestion("identifiers start with a letter or `_` and contain only letters, digits and `_`")
    }

    #[cold]
    pub fn illegal_number(span: Span, lexeme: &str) -> Self {
        Self::new(
            LexErrorKind::IllegalNumber,
            span,
            format!("'{lexeme}' is not a valid number"),
        )
    }

    /// Integer literal that does not fit in `u64`.
    #[cold]
    pub fn int_overflow(span: Span, lexeme: &str) -> Self {
        Self::new(
            LexErrorKind::IllegalNumber,
            span,
            format!("'{lexeme}' is too large for an integer"),
        )
        .with_suggestion(format!("use a smaller value (maximum is {})", u64::MAX))
    }

    #[cold]
    pub fn malformed_float(span: Span, lexeme: &str) -> Self {
        Self::new(
            LexErrorKind::LexicalError,
            span,
            format!("'{lexeme}' has more than one decimal point"),
        )
    }

    #[cold]
    pub fn invalid_decimal(span: Span, lexeme: &str) -> Self {
        Self::new(
            LexErrorKind::InvalidDecimal,
            span,
            format!("'{lexeme}' is not a valid decimal"),
        )
    }

    /// C-style logical operator; `replacement` is the Mono word to use.
    #[cold]
    pub fn invalid_symbol(span: Span, symbol: &str, replacement: &str) -> Self {
        Self::new(
            LexErrorKind::InvalidRelationalSymbol,
            span,
            format!("\"{symbol}\", Consider using \"{replacement}\" instead."),
        )
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self::new(
            LexErrorKind::UnterminatedString,
            span,
            "String is not properly closed".to_owned(),
        )
        .with_suggestion("add closing `\"`")
    }

    #[cold]
    pub fn unterminated_docstring(span: Span) -> Self {
        Self::new(
            LexErrorKind::UnterminatedDocstring,
            span,
            "Multi-line string is not properly closed".to_owned(),
        )
        .with_suggestion("add closing `\"\"\"`")
    }

    #[cold]
    pub fn reserved_word_misuse(span: Span, word: &str) -> Self {
        Self::new(
            LexErrorKind::ReservedWordMisuse,
            span,
            format!("'{word}' is a reserved word and cannot be used as a statement"),
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// The error name shown before the message.
    pub fn title(&self) -> &'static str {
        self.code().title()
    }

    /// Whether this error asks the host to stop.
    ///
    /// The scanner itself never stops; [`crate::ScanOutput::halt_requested`]
    /// surfaces this to the caller.
    pub fn is_fatal(&self) -> bool {
        self.kind == LexErrorKind::ReservedWordMisuse
    }

    /// Convert to a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let mut diagnostic = Diagnostic::error(self.code())
            .with_message(self.message)
            .with_span(self.span);
        for suggestion in self.suggestions {
            diagnostic = diagnostic.with_suggestion(suggestion);
        }
        diagnostic
    }

    /// `"<title>: <message>"`, a blank line, then the caret excerpt.
    pub fn render(&self, source: &str) -> String {
        self.clone().into_diagnostic().render(source)
    }
}
