//! The dispatch loop.
//!
//! [`Scanner::next_lexed`] skips whitespace, looks at the current character
//! and hands off to one recognizer. Each recognizer consumes at least one
//! character and returns either a token or an error, never both.
//!
//! Dispatch order:
//!
//! | First char | Recognizer |
//! |---|---|
//! | space, `\t`, `\v`, `\r` | skipped |
//! | letter, `_` | [`identifier`](Scanner::identifier) |
//! | `+ - * / ~ ^ % = > < ! & \|` | [`operator`](Scanner::operator) |
//! | `#` | [`comment`](Scanner::comment) |
//! | digit, `.` + digit | [`number`](Scanner::number) |
//! | `"` | [`string`](Scanner::string) |
//! | special symbol | [`special_symbol`](Scanner::special_symbol) |
//! | anything else | illegal character |

mod identifier;
mod number;
mod operator;
mod string;
mod symbol;

use mono_ir::{Position, Span, Token, TokenKind, TokenValue};

use crate::char_class::{is_digit, is_letter, is_operator_start, is_special_symbol, is_whitespace};
use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::ScanMode;

/// Result of one recognizer: a token, or the error produced in its place.
pub type Lexed = Result<Token, LexError>;

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    mode: ScanMode,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str, mode: ScanMode) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            mode,
        }
    }

    /// Scan the next token or error. `None` once the source is exhausted.
    pub(crate) fn next_lexed(&mut self) -> Option<Lexed> {
        loop {
            let ch = self.cursor.current()?;
            if is_whitespace(ch) {
                self.cursor.advance();
                continue;
            }

            let start = self.cursor.snapshot();
            let lexed = if is_letter(ch) || ch == '_' {
                self.identifier(start)
            } else if is_operator_start(ch) {
                self.operator(start, ch)
            } else if ch == '#' {
                self.comment(start)
            } else if is_digit(ch) || (ch == '.' && self.cursor.peek_next().is_some_and(is_digit)) {
                self.number(start)
            } else if ch == '"' {
                self.string(start)
            } else if is_special_symbol(ch) {
                self.special_symbol(start, ch)
            } else {
                self.illegal_character(start, ch)
            };
            return Some(lexed);
        }
    }

    /// The zero-width end-of-input token at the cursor's final position.
    pub(crate) fn eof_token(&self) -> Token {
        Token::new(
            TokenKind::Eof,
            TokenValue::None,
            Span::point(self.cursor.snapshot()),
        )
    }

    /// Span and source text from `start` up to the cursor.
    fn consumed(&self, start: Position) -> (Span, &'a str) {
        let span = self.cursor.span_from(start);
        (span, self.cursor.slice(span.start, span.end))
    }

    /// A token whose value is its own lexeme.
    fn text_token(&self, kind: TokenKind, start: Position) -> Token {
        let (span, text) = self.consumed(start);
        Token::new(kind, TokenValue::text(text), span)
    }

    #[cold]
    fn illegal_character(&mut self, start: Position, ch: char) -> Lexed {
        self.cursor.advance();
        Err(LexError::illegal_character(self.cursor.span_from(start), ch))
    }
}

#[cfg(test)]
mod tests;
