//! Token table rendering.
//!
//! ```text
//!                    TOKENS                LEXEMES
//! ________________________________
//!
//!                IDENTIFIER                x
//!                ASSIGNMENT                =
//!                   INTEGER                1
//!                       EOF
//! ```

use mono_ir::{Token, TokenKind, TokenValue};

/// Width the kind column is right-aligned to.
pub const KIND_WIDTH: usize = 25;

/// Between the kind column and the value.
const COLUMN_GAP: &str = "                ";

/// Separator under the header.
const HEADER_RULE_WIDTH: usize = 32;

/// Separator between the token table and the diagnostics in file mode.
pub const SECTION_RULE_WIDTH: usize = 35;

/// Header, separator, blank line, then one row per token.
pub fn render_token_table(tokens: &[Token]) -> String {
    let mut out = format!("{:>KIND_WIDTH$}{COLUMN_GAP}LEXEMES\n", "TOKENS");
    out.push_str(&"_".repeat(HEADER_RULE_WIDTH));
    out.push_str("\n\n");
    for token in tokens {
        out.push_str(&render_row(token));
        out.push('\n');
    }
    out
}

/// One table row: the kind right-aligned, then the value if there is one.
pub fn render_row(token: &Token) -> String {
    let kind = token.kind.name();
    if token.value.is_none() {
        return format!("{kind:>KIND_WIDTH$}");
    }
    format!("{kind:>KIND_WIDTH$}{COLUMN_GAP}{}", display_value(token))
}

fn display_value(token: &Token) -> String {
    match (&token.kind, &token.value) {
        (TokenKind::Newline, _) => "\\n".to_owned(),
        (_, TokenValue::Text(text)) => text.clone(),
        (_, value) => value.to_string(),
    }
}

/// The `_` line printed between the token table and diagnostics.
pub fn section_rule() -> String {
    "_".repeat(SECTION_RULE_WIDTH)
}
