//! Keyword resolution.
//!
//! Keywords are resolved after the whole identifier-shaped lexeme has been
//! accumulated. The lookup uses the lexeme's length as a first-pass filter
//! (words range from 2 to 7 chars), then matches against the words of that
//! length.
//!
//! # Word table
//!
//! | Kind | Words |
//! |---|---|
//! | `And` / `Or` / `Not` | `and`, `or`, `not` |
//! | `DataType` | `bool`, `int`, `float`, `str` |
//! | `Bool` | `true`, `false` |
//! | `Keyword` | `any`, `as`, `break`, `catch`, `elif`, `else`, `ensure`, `except`, `for`, `get`, `give`, `halt`, `hide`, `if`, `in`, `input`, `new`, `print`, `return`, `show`, `skip`, `this`, `throw`, `try`, `while` |
//! | `NoiseWord` | `do`, `end`, `start` |
//! | `ReservedWord` | `const`, `default`, `entity`, `exp`, `imp`, `import`, `none`, `null`, `package`, `sync`, `type` |
//!
//! Matching is case-sensitive: `AND` is a constant identifier, not `And`.

use mono_ir::TokenKind;

/// Look up a word by its exact text.
///
/// Returns `None` for anything that is not in the word table; the caller
/// then falls back to [`classify_identifier`].
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all words are 2-7 chars and start with a lowercase letter
    if !(2..=7).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "as" | "if" | "in" => Some(TokenKind::Keyword),
            "do" => Some(TokenKind::NoiseWord),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "not" => Some(TokenKind::Not),
            "int" | "str" => Some(TokenKind::DataType),
            "any" | "for" | "get" | "new" | "try" => Some(TokenKind::Keyword),
            "end" => Some(TokenKind::NoiseWord),
            "exp" | "imp" => Some(TokenKind::ReservedWord),
            _ => None,
        },
        4 => match text {
            "bool" => Some(TokenKind::DataType),
            "true" => Some(TokenKind::Bool),
            "elif" | "else" | "give" | "halt" | "hide" | "show" | "skip" | "this" => {
                Some(TokenKind::Keyword)
            }
            "none" | "null" | "sync" | "type" => Some(TokenKind::ReservedWord),
            _ => None,
        },
        5 => match text {
            "float" => Some(TokenKind::DataType),
            "false" => Some(TokenKind::Bool),
            "break" | "catch" | "input" | "print" | "throw" | "while" => Some(TokenKind::Keyword),
            "start" => Some(TokenKind::NoiseWord),
            "const" => Some(TokenKind::ReservedWord),
            _ => None,
        },
        6 => match text {
            "ensure" | "except" | "return" => Some(TokenKind::Keyword),
            "entity" | "import" => Some(TokenKind::ReservedWord),
            _ => None,
        },
        7 => match text {
            "default" | "package" => Some(TokenKind::ReservedWord),
            _ => None,
        },
        _ => None,
    }
}

/// Classify an identifier-shaped lexeme.
///
/// Table words keep their table kind. Anything else is an identifier,
/// refined by its spelling:
///
/// - `_MAX` (leading `_`, upper-case) → `PrivateConstIdentifier`
/// - `MAX` (upper-case) → `ConstIdentifier`
/// - `_count` (leading `_`) → `PrivateIdentifier`
/// - otherwise `Identifier`
///
/// "Upper-case" means at least one ASCII capital and no lowercase letter,
/// so `_` and `_1` are private identifiers, not constants.
pub fn classify_identifier(text: &str) -> TokenKind {
    if let Some(kind) = lookup(text) {
        return kind;
    }

    let private = text.starts_with('_');
    match (private, is_upper_case(text)) {
        (true, true) => TokenKind::PrivateConstIdentifier,
        (false, true) => TokenKind::ConstIdentifier,
        (true, false) => TokenKind::PrivateIdentifier,
        (false, false) => TokenKind::Identifier,
    }
}

fn is_upper_case(text: &str) -> bool {
    let mut has_upper = false;
    for byte in text.bytes() {
        if byte.is_ascii_lowercase() {
            return false;
        }
        has_upper |= byte.is_ascii_uppercase();
    }
    has_upper
}
