//! Tokens produced by the scanner.

mod kind;
mod list;

use std::fmt;

use crate::Span;

pub use kind::TokenKind;
pub use list::TokenList;

/// Literal payload of a token.
///
/// Identifiers, words, operators and symbols carry their lexeme as `Text`.
/// Numeric literals carry the parsed value; string literals carry the
/// unescaped contents without quotes.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum TokenValue {
    #[default]
    None,
    Text(String),
    Int(u64),
    Float(f64),
}

impl TokenValue {
    pub fn text(text: impl Into<String>) -> Self {
        TokenValue::Text(text.into())
    }

    /// The text payload, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TokenValue::None)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Int(value) => write!(f, "{value}"),
            TokenValue::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// A classified lexeme with its source span.
///
/// Immutable once built; the scanner is the only producer.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Token { kind, value, span }
    }

    /// The exact source text this token was scanned from.
    ///
    /// Returns an empty string if the span does not fit `source` (a token
    /// paired with the wrong source).
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.range()).unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_none() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}:{}", self.kind, self.value)
        }
    }
}
