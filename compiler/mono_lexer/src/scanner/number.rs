//! Integer and float literals.
//!
//! The recognizer consumes everything that could belong to a number
//! (letters, digits, `_`, `.`, untracked symbols) up to the first other
//! character, tracking what it saw, and only then decides what the run is.
//! A malformed literal therefore yields one error spanning the whole run.

use mono_ir::{Position, Token, TokenKind, TokenValue};

use crate::char_class::{is_digit, is_letter, is_untracked};
use crate::lex_error::LexError;

use super::{Lexed, Scanner};

impl Scanner<'_> {
    /// Scan a number starting on a digit or on a `.` followed by a digit.
    pub(super) fn number(&mut self, start: Position) -> Lexed {
        // Digits and dots only; `_` separators are dropped.
        let mut digits = String::new();
        let mut dots = 0u32;
        let mut valid = true;
        let mut identifier_like = false;
        let mut first = true;

        while let Some(ch) = self.cursor.current() {
            if !(is_letter(ch) || is_digit(ch) || ch == '_' || ch == '.' || is_untracked(ch)) {
                break;
            }
            let next = self.cursor.peek_next();

            let doubled_underscore = ch == '_' && next == Some('_');
            if !valid || doubled_underscore || is_letter(ch) || is_untracked(ch) {
                valid = false;
            } else if ch == '.' {
                dots += 1;
                digits.push(ch);
            } else if ch != '_' {
                if first && next.is_some_and(is_letter) {
                    identifier_like = true;
                }
                digits.push(ch);
            }

            first = false;
            self.cursor.advance();
        }

        let (span, lexeme) = self.consumed(start);

        if dots == 0 && valid && !identifier_like {
            return match digits.parse::<u64>() {
                Ok(value) => Ok(Token::new(TokenKind::Integer, TokenValue::Int(value), span)),
                Err(_) => Err(LexError::int_overflow(span, lexeme)),
            };
        }
        if dots >= 2 && valid {
            return Err(LexError::malformed_float(span, lexeme));
        }
        if identifier_like {
            return Err(LexError::illegal_identifier(span, lexeme));
        }
        if !valid {
            return Err(LexError::illegal_number(span, lexeme));
        }
        if digits == "." {
            return Ok(Token::new(TokenKind::Dot, TokenValue::text("."), span));
        }
        match digits.parse::<f64>() {
            Ok(value) => Ok(Token::new(TokenKind::Float, TokenValue::Float(value), span)),
            Err(_) => Err(LexError::invalid_decimal(span, lexeme)),
        }
    }
}
