//! Shared data types for the Mono front end.
//!
//! Everything the scanner produces and every later consumer reads lives
//! here: source [`Position`]s, half-open [`Span`]s, and the [`Token`]
//! vocabulary. This crate contains no scanning logic.

mod span;
mod token;

pub use span::{Position, Span};
pub use token::{Token, TokenKind, TokenList, TokenValue};
