//! Token kinds for Mono.

use std::fmt;

/// Classification of a scanned lexeme.
///
/// The enum is flat: keyword-like words share one kind per category
/// (`Keyword`, `ReservedWord`, `NoiseWord`, `DataType`, `Bool`) and carry
/// their text in the token's value, while operators and symbols each get
/// their own variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Identifiers
    Identifier,
    /// All upper-case: `MAX`
    ConstIdentifier,
    /// Leading underscore: `_count`
    PrivateIdentifier,
    /// Leading underscore, all upper-case: `_MAX`
    PrivateConstIdentifier,

    // Arithmetic and assignment
    Assignment,        // =
    Plus,              // +
    Minus,             // -
    Multiply,          // *
    Divide,            // /
    FloorDivide,       // //
    Exponent,          // ^
    Modulo,            // %
    PlusAssign,        // +=
    MinusAssign,       // -=
    MultiplyAssign,    // *=
    DivideAssign,      // /=
    FloorDivideAssign, // //=
    ExponentAssign,    // ^=
    ModuloAssign,      // %=
    Increment,         // ++
    Decrement,         // --

    // Relational
    Greater,      // >
    Less,         // <
    GreaterEqual, // >=
    LessEqual,    // <=
    Equal,        // ==
    NotEqual,     // !=

    // Logical (spelled as words)
    Not,
    And,
    Or,

    // Literals
    Integer,
    Float,
    String,
    /// Triple-quoted multi-line string, delimiters included in the value.
    Docstring,
    Bool,

    // Words
    DataType,
    Keyword,
    ReservedWord,
    NoiseWord,

    Comment,

    // Special symbols
    Dot,         // .
    Comma,       // ,
    Question,    // ?
    Colon,       // :
    Semicolon,   // ;
    LeftSquare,  // [
    RightSquare, // ]
    LeftParen,   // (
    RightParen,  // )
    LeftCurly,   // {
    RightCurly,  // }
    Newline,

    Eof,
}

impl TokenKind {
    /// Upper-snake name used in token tables and debug output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::ConstIdentifier => "CONST_IDENTIFIER",
            TokenKind::PrivateIdentifier => "PRIV_IDENTIFIER",
            TokenKind::PrivateConstIdentifier => "PRIV_CONST_IDENTIFIER",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::FloorDivide => "FLOOR_DIVIDE",
            TokenKind::Exponent => "EXPONENT",
            TokenKind::Modulo => "MODULO",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::MultiplyAssign => "MULTIPLY_ASSIGN",
            TokenKind::DivideAssign => "DIVIDE_ASSIGN",
            TokenKind::FloorDivideAssign => "FLOOR_DIVIDE_ASSIGN",
            TokenKind::ExponentAssign => "EXPONENT_ASSIGN",
            TokenKind::ModuloAssign => "MODULO_ASSIGN",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::Greater => "GREATER_THAN",
            TokenKind::Less => "LESS_THAN",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Docstring => "DOCSTRING",
            TokenKind::Bool => "BOOL",
            TokenKind::DataType => "DATA_TYPE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::NoiseWord => "NOISE_WORD",
            TokenKind::Comment => "COMMENT",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Question => "QUESTION_MARK",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftSquare => "LEFT_SQUARE",
            TokenKind::RightSquare => "RIGHT_SQUARE",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftCurly => "LEFT_CURLY",
            TokenKind::RightCurly => "RIGHT_CURLY",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Any of the four identifier variants.
    pub const fn is_identifier(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::ConstIdentifier
                | TokenKind::PrivateIdentifier
                | TokenKind::PrivateConstIdentifier
        )
    }

    /// Arithmetic, assignment and relational operators.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assignment
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::FloorDivide
                | TokenKind::Exponent
                | TokenKind::Modulo
                | TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::MultiplyAssign
                | TokenKind::DivideAssign
                | TokenKind::FloorDivideAssign
                | TokenKind::ExponentAssign
                | TokenKind::ModuloAssign
                | TokenKind::Increment
                | TokenKind::Decrement
                | TokenKind::Greater
                | TokenKind::Less
                | TokenKind::GreaterEqual
                | TokenKind::LessEqual
                | TokenKind::Equal
                | TokenKind::NotEqual
        )
    }

    pub const fn is_special_symbol(self) -> bool {
        matches!(
            self,
            TokenKind::Dot
                | TokenKind::Comma
                | TokenKind::Question
                | TokenKind::Colon
                | TokenKind::Semicolon
                | TokenKind::LeftSquare
                | TokenKind::RightSquare
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftCurly
                | TokenKind::RightCurly
                | TokenKind::Newline
        )
    }

    /// Tokens a parser would skip: comments and docstrings.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Docstring)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
