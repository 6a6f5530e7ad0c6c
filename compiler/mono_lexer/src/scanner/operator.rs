//! Arithmetic, assignment and relational operators.
//!
//! ```text
//! +  +=  ++        -  -=  --        *  *=
//! /  /=  //  //=   ^  ^=            %  %=
//! =  ==            >  >=            <  <=
//! !=
//! ```
//!
//! `!`, `&`, `&&`, `|` and `||` are rejected with a hint towards `not`,
//! `and` and `or`. `~` starts no operator at all.

use mono_ir::{Position, TokenKind};

use crate::lex_error::LexError;

use super::{Lexed, Scanner};

impl Scanner<'_> {
    pub(super) fn operator(&mut self, start: Position, first: char) -> Lexed {
        self.cursor.advance();
        let kind = match first {
            '+' => self.compound('+', TokenKind::Increment, TokenKind::PlusAssign, TokenKind::Plus),
            '-' => self.compound('-', TokenKind::Decrement, TokenKind::MinusAssign, TokenKind::Minus),
            '*' => self.or_assign(TokenKind::MultiplyAssign, TokenKind::Multiply),
            '/' => {
                if self.cursor.eat('/') {
                    self.or_assign(TokenKind::FloorDivideAssign, TokenKind::FloorDivide)
                } else {
                    self.or_assign(TokenKind::DivideAssign, TokenKind::Divide)
                }
            }
            '^' => self.or_assign(TokenKind::ExponentAssign, TokenKind::Exponent),
            '%' => self.or_assign(TokenKind::ModuloAssign, TokenKind::Modulo),
            '=' => self.or_assign(TokenKind::Equal, TokenKind::Assignment),
            '>' => self.or_assign(TokenKind::GreaterEqual, TokenKind::Greater),
            '<' => self.or_assign(TokenKind::LessEqual, TokenKind::Less),
            '!' => {
                if self.cursor.eat('=') {
                    TokenKind::NotEqual
                } else {
                    return self.invalid_symbol(start, "not");
                }
            }
            '&' => {
                self.cursor.eat('&');
                return self.invalid_symbol(start, "and");
            }
            '|' => {
                self.cursor.eat('|');
                return self.invalid_symbol(start, "or");
            }
            _ => return Err(LexError::illegal_character(self.cursor.span_from(start), first)),
        };
        Ok(self.text_token(kind, start))
    }

    /// `kind_eq` if an `=` follows, otherwise `kind`.
    fn or_assign(&mut self, kind_eq: TokenKind, kind: TokenKind) -> TokenKind {
        if self.cursor.eat('=') {
            kind_eq
        } else {
            kind
        }
    }

    /// `+`/`-` family: doubled, `=`-suffixed, or single.
    fn compound(
        &mut self,
        ch: char,
        doubled: TokenKind,
        assign: TokenKind,
        single: TokenKind,
    ) -> TokenKind {
        if self.cursor.eat('=') {
            assign
        } else if self.cursor.eat(ch) {
            doubled
        } else {
            single
        }
    }

    #[cold]
    fn invalid_symbol(&self, start: Position, replacement: &str) -> Lexed {
        let (span, symbol) = self.consumed(start);
        Err(LexError::invalid_symbol(span, symbol, replacement))
    }
}
