//! Comments and single-character symbols.

use mono_ir::{Position, TokenKind};

use crate::lex_error::LexError;

use super::{Lexed, Scanner};

impl Scanner<'_> {
    /// `#` up to (not including) the end of the line.
    pub(super) fn comment(&mut self, start: Position) -> Lexed {
        while let Some(ch) = self.cursor.current() {
            if ch == '\n' {
                break;
            }
            self.cursor.advance();
        }
        Ok(self.text_token(TokenKind::Comment, start))
    }

    /// One special-symbol character. `\` and `'` have no token and are
    /// reported as illegal characters.
    pub(super) fn special_symbol(&mut self, start: Position, ch: char) -> Lexed {
        self.cursor.advance();
        let kind = match ch {
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '[' => TokenKind::LeftSquare,
            ']' => TokenKind::RightSquare,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftCurly,
            '}' => TokenKind::RightCurly,
            '\n' => TokenKind::Newline,
            _ => return Err(LexError::illegal_character(self.cursor.span_from(start), ch)),
        };
        Ok(self.text_token(kind, start))
    }
}
