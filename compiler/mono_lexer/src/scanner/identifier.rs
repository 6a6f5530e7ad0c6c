//! Identifiers, keywords and words.

use mono_ir::{Position, Token, TokenKind, TokenValue};

use crate::char_class::{continues_identifier, is_untracked, is_whitespace};
use crate::keywords::classify_identifier;
use crate::lex_error::LexError;
use crate::ScanMode;

use super::{Lexed, Scanner};

impl Scanner<'_> {
    /// Scan an identifier-shaped lexeme starting on a letter or `_`.
    ///
    /// Untracked symbols do not end the lexeme; they are swallowed so the
    /// whole run is reported as a single illegal identifier.
    pub(super) fn identifier(&mut self, start: Position) -> Lexed {
        let mut valid = true;
        while let Some(ch) = self.cursor.current() {
            if !continues_identifier(ch) {
                break;
            }
            if is_untracked(ch) {
                valid = false;
            }
            self.cursor.advance();
        }

        let (span, text) = self.consumed(start);
        if !valid {
            return Err(LexError::illegal_identifier(span, text));
        }

        let kind = classify_identifier(text);
        if kind == TokenKind::ReservedWord && self.mode == ScanMode::File && self.at_statement_end() {
            return Err(LexError::reserved_word_misuse(span, text));
        }
        Ok(Token::new(kind, TokenValue::text(text), span))
    }

    /// Whether the word just scanned stands alone: end of input or any
    /// whitespace, newline included.
    fn at_statement_end(&self) -> bool {
        self.cursor
            .current()
            .map_or(true, |ch| ch == '\n' || is_whitespace(ch))
    }
}
