use std::fmt;

/// Error codes for lexical diagnostics.
///
/// Format: E#### where the leading `0` marks the lexer phase. The
/// numbering is stable; new kinds are appended.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Character outside every lexeme class
    E0001,
    /// Identifier-shaped lexeme containing an invalid character, or starting with a digit
    E0002,
    /// Number literal containing letters, symbols or doubled underscores
    E0003,
    /// Float literal with more than one decimal point
    E0004,
    /// Decimal literal that could not be parsed
    E0005,
    /// `!`, `&`, `|`, `&&`, `||` used as operators
    E0006,
    /// String literal missing its closing quote
    E0007,
    /// Triple-quoted string missing its closing delimiter
    E0008,
    /// Reserved word used as a bare statement
    E0009,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
        }
    }

    /// The error name printed before the message in rendered output.
    pub const fn title(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "Illegal Character",
            ErrorCode::E0002 => "Illegal Identifier",
            ErrorCode::E0003 => "Illegal Number",
            ErrorCode::E0004 => "Lexical Error",
            ErrorCode::E0005 => "Invalid Decimal",
            ErrorCode::E0006 => "Invalid Symbol",
            ErrorCode::E0007 => "Unterminated string literal",
            ErrorCode::E0008 => "Unterminated multi-line string literal",
            ErrorCode::E0009 => "Reserved Word Misuse",
        }
    }

    /// One-line explanation of the code.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a character that cannot start or continue any token",
            ErrorCode::E0002 => "an identifier that starts with a digit or contains `$`, `#`, `@`, `` ` ``, `{` or `}`",
            ErrorCode::E0003 => "a number literal containing letters, invalid symbols or `__`",
            ErrorCode::E0004 => "a float literal with more than one decimal point",
            ErrorCode::E0005 => "a decimal literal that is not a valid float",
            ErrorCode::E0006 => "C-style logical operators; use `not`, `and`, `or`",
            ErrorCode::E0007 => "a string literal without a closing `\"`",
            ErrorCode::E0008 => "a docstring without a closing `\"\"\"`",
            ErrorCode::E0009 => "a reserved word used where a statement was expected",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
