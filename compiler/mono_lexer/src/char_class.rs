//! Character classes used by the scanner.
//!
//! The classes are deliberately not exhaustive. Anything outside every
//! class is an illegal character. The *untracked* class overlaps `{` and
//! `}` with the special symbols: it is only consulted inside identifier and
//! number scanning, where such characters are folded into one invalid
//! lexeme instead of ending the token.

/// ASCII letter.
#[inline]
pub const fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Horizontal whitespace: space, tab, vertical tab, carriage return.
///
/// Newline is not whitespace; it scans as its own token.
#[inline]
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0B' | '\r')
}

/// First character of an operator (valid or not).
#[inline]
pub const fn is_operator_start(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '~' | '^' | '%' | '=' | '>' | '<' | '!' | '&' | '|'
    )
}

#[inline]
pub const fn is_special_symbol(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | '?' | ':' | ';' | '(' | ')' | '[' | ']' | '{' | '}' | '\\' | '"' | '\'' | '_' | '\n'
    )
}

/// Characters that may never appear inside an identifier or number.
#[inline]
pub const fn is_untracked(ch: char) -> bool {
    matches!(ch, '$' | '#' | '@' | '`' | '{' | '}')
}

/// May continue an identifier-shaped lexeme (valid or not).
#[inline]
pub const fn continues_identifier(ch: char) -> bool {
    is_letter(ch) || is_digit(ch) || ch == '_' || is_untracked(ch)
}
