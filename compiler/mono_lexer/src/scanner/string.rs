//! String and docstring literals.

use mono_ir::{Position, Token, TokenKind, TokenValue};

use crate::lex_error::LexError;

use super::{Lexed, Scanner};

const DOCSTRING_DELIMITER: &str = "\"\"\"";

impl Scanner<'_> {
    /// Scan a literal starting on `"`.
    ///
    /// `"""` opens a docstring; anything else is a single-line string.
    pub(super) fn string(&mut self, start: Position) -> Lexed {
        if self.cursor.peek_next() == Some('"') && self.cursor.peek_nth(2) == Some('"') {
            return self.docstring(start);
        }

        self.cursor.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.cursor.current() {
                None => return Err(LexError::unterminated_string(self.cursor.span_from(start))),
                Some('"') => {
                    self.cursor.advance();
                    break;
                }
                // Only `\"` and `\\` are escapes. Any other backslash is kept.
                Some('\\') => match self.cursor.advance() {
                    Some(escaped @ ('"' | '\\')) => {
                        value.push(escaped);
                        self.cursor.advance();
                    }
                    Some(other) => {
                        value.push('\\');
                        value.push(other);
                        self.cursor.advance();
                    }
                    None => value.push('\\'),
                },
                Some(ch) => {
                    value.push(ch);
                    self.cursor.advance();
                }
            }
        }

        Ok(Token::new(
            TokenKind::String,
            TokenValue::Text(value),
            self.cursor.span_from(start),
        ))
    }

    /// Scan a `"""`-delimited docstring. The value keeps both delimiters.
    fn docstring(&mut self, start: Position) -> Lexed {
        for _ in 0..3 {
            self.cursor.advance();
        }
        let mut value = String::from(DOCSTRING_DELIMITER);

        loop {
            match self.cursor.current() {
                None => {
                    return Err(LexError::unterminated_docstring(
                        self.cursor.span_from(start),
                    ))
                }
                Some('"') => {
                    let mut run = 0;
                    while run < 3 && self.cursor.eat('"') {
                        run += 1;
                    }
                    if run == 3 {
                        value.push_str(DOCSTRING_DELIMITER);
                        break;
                    }
                    // One or two quotes are content.
                    value.push_str(&DOCSTRING_DELIMITER[..run]);
                }
                Some(ch) => {
                    value.push(ch);
                    self.cursor.advance();
                }
            }
        }

        Ok(Token::new(
            TokenKind::Docstring,
            TokenValue::Text(value),
            self.cursor.span_from(start),
        ))
    }
}
