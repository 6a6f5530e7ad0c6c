use std::fmt;

use mono_ir::Span;

use crate::snippet::render_excerpt;
use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A reportable problem with its source location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// Where it went wrong.
    pub span: Span,
    /// Additional context.
    pub notes: Vec<String>,
    /// Human-readable fixes.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            span: Span::default(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The error name shown before the message.
    pub fn title(&self) -> &'static str {
        self.code.title()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `"<title>: <message>"`, a blank line, then the caret excerpt.
    pub fn render(&self, source: &str) -> String {
        format!(
            "{}: {}\n\n{}",
            self.title(),
            self.message,
            render_excerpt(source, self.span)
        )
    }
}

impl fmt::Display for Diagnostic {
    /// Source-free form: `[E0001] Illegal Character: message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.title(), self.message)
    }
}

#[cfg(test)]
mod tests;
