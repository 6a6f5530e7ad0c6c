use mono_ir::{Position, Span, Token, TokenKind, TokenValue};
use pretty_assertions::assert_eq;

use crate::{scan_with, LexError, LexErrorKind, ScanConfig, ScanOutput};

fn file(source: &str) -> ScanOutput {
    scan_with(ScanConfig::file(), "test.mono", source)
}

fn interactive(source: &str) -> ScanOutput {
    scan_with(ScanConfig::interactive(), "<stdin>", source)
}

/// Token kinds, `Eof` left out.
fn kinds(source: &str) -> Vec<TokenKind> {
    let output = file(source);
    output.tokens.without_eof().iter().map(|t| t.kind).collect()
}

fn error_kinds(source: &str) -> Vec<LexErrorKind> {
    file(source).errors.iter().map(|e| e.kind).collect()
}

/// The only token (besides `Eof`) of a clean scan.
fn single(source: &str) -> Token {
    let output = file(source);
    assert_eq!(output.errors, Vec::<LexError>::new(), "unexpected errors for {source:?}");
    let tokens = output.tokens.without_eof();
    assert_eq!(tokens.len(), 1, "expected one token for {source:?}, got {tokens:?}");
    tokens[0].clone()
}

/// The only error of a scan that produced no tokens.
fn single_error(source: &str) -> LexError {
    let output = file(source);
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Eof], "unexpected tokens for {source:?}");
    assert_eq!(output.errors.len(), 1, "expected one error for {source:?}");
    output.errors[0].clone()
}

fn text(s: &str) -> TokenValue {
    TokenValue::text(s)
}

// === Dispatch ===

#[test]
fn empty_source_is_just_eof() {
    let output = file("");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Eof]);
    assert_eq!(output.tokens[0].span, Span::point(Position::START));
    assert!(output.is_clean());
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t x\r\x0B "), vec![TokenKind::Identifier]);
    assert_eq!(kinds("   "), vec![]);
}

#[test]
fn newline_is_a_token() {
    let output = file("a\nb");
    assert_eq!(
        output.tokens.kinds(),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
    assert_eq!(output.tokens[1].value, text("\n"));
    assert_eq!(output.tokens[2].span.start, Position::new(2, 1, 0));
}

#[test]
fn eof_sits_at_the_end() {
    let output = file("ab\n");
    let eof = output.tokens.last().map(|t| t.span);
    assert_eq!(eof, Some(Span::point(Position::new(3, 1, 0))));
}

#[test]
fn errors_do_not_stop_the_scan() {
    let output = file("$ 1x \"abc");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Eof]);
    assert_eq!(
        output.errors.iter().map(|e| e.kind).collect::<Vec<_>>(),
        vec![
            LexErrorKind::IllegalCharacter,
            LexErrorKind::IllegalIdentifier,
            LexErrorKind::UnterminatedString,
        ]
    );
}

#[test]
fn tokens_resume_after_an_error() {
    let output = file("a & b");
    assert_eq!(
        output.tokens.kinds(),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(output.errors.len(), 1);
}

// === Illegal characters ===

#[test]
fn illegal_character_message_is_one_based() {
    let output = file("x = $");
    assert_eq!(output.errors.len(), 1);
    let err = &output.errors[0];
    assert_eq!(err.kind, LexErrorKind::IllegalCharacter);
    assert_eq!(err.message, "Illegal character '$' at line 1, column 5");
    assert_eq!(err.span, Span::new(Position::new(4, 0, 4), Position::new(5, 0, 5)));
}

#[test]
fn non_ascii_character_spans_its_bytes() {
    let err = single_error("é");
    assert_eq!(err.kind, LexErrorKind::IllegalCharacter);
    assert_eq!(err.span.len(), 2);
    assert_eq!(err.span.end.column, 1);
}

#[test]
fn backslash_quote_and_tilde_are_illegal() {
    for source in ["\\", "'", "~", "@", "`"] {
        assert_eq!(
            single_error(source).kind,
            LexErrorKind::IllegalCharacter,
            "{source:?}"
        );
    }
}

// === Identifiers and words ===

#[test]
fn identifier_variants() {
    assert_eq!(
        kinds("x _x X _X"),
        vec![
            TokenKind::Identifier,
            TokenKind::PrivateIdentifier,
            TokenKind::ConstIdentifier,
            TokenKind::PrivateConstIdentifier,
        ]
    );
}

#[test]
fn identifier_value_is_its_lexeme() {
    let token = single("count_2");
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.value, text("count_2"));
}

#[test]
fn logical_words() {
    assert_eq!(
        kinds("a and b or not c"),
        vec![
            TokenKind::Identifier,
            TokenKind::And,
            TokenKind::Identifier,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn word_kinds() {
    assert_eq!(
        kinds("if int true do"),
        vec![
            TokenKind::Keyword,
            TokenKind::DataType,
            TokenKind::Bool,
            TokenKind::NoiseWord,
        ]
    );
}

#[test]
fn keyword_prefix_is_an_identifier() {
    assert_eq!(kinds("iffy android"), vec![TokenKind::Identifier, TokenKind::Identifier]);
}

#[test]
fn untracked_symbol_makes_whole_identifier_illegal() {
    let err = single_error("abc$de");
    assert_eq!(err.kind, LexErrorKind::IllegalIdentifier);
    assert_eq!(err.message, "'abc$de' is not a valid identifier");
    assert_eq!(err.span.len(), 6);
}

#[test]
fn braces_and_hash_fold_into_identifier() {
    assert_eq!(single_error("foo{").kind, LexErrorKind::IllegalIdentifier);
    assert_eq!(single_error("a#b").kind, LexErrorKind::IllegalIdentifier);
}

// === Reserved words ===

#[test]
fn bare_reserved_word_is_misuse_in_files() {
    let output = file("import x");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(output.errors.len(), 1);
    let err = &output.errors[0];
    assert_eq!(err.kind, LexErrorKind::ReservedWordMisuse);
    assert_eq!(
        err.message,
        "'import' is a reserved word and cannot be used as a statement"
    );
    assert!(output.halt_requested());
}

#[test]
fn reserved_word_at_end_of_input_or_line_is_misuse() {
    assert_eq!(error_kinds("null"), vec![LexErrorKind::ReservedWordMisuse]);
    assert_eq!(error_kinds("const\n"), vec![LexErrorKind::ReservedWordMisuse]);
}

#[test]
fn reserved_word_followed_by_symbol_is_a_token() {
    let output = file("type(x)");
    assert!(output.is_clean());
    assert_eq!(output.tokens[0].kind, TokenKind::ReservedWord);
    assert_eq!(output.tokens[0].value, text("type"));
}

#[test]
fn reserved_word_is_a_token_at_the_prompt() {
    let output = interactive("import x");
    assert!(output.is_clean());
    assert!(!output.halt_requested());
    assert_eq!(
        output.tokens.kinds(),
        vec![TokenKind::ReservedWord, TokenKind::Identifier, TokenKind::Eof]
    );
}

// === Numbers ===

#[test]
fn integers() {
    assert_eq!(single("123").value, TokenValue::Int(123));
    assert_eq!(single("0").value, TokenValue::Int(0));
    assert_eq!(single("18446744073709551615").value, TokenValue::Int(u64::MAX));
}

#[test]
fn underscores_separate_digits() {
    let token = single("1_000");
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.value, TokenValue::Int(1000));
    assert_eq!(token.span.len(), 5);
}

#[test]
fn floats() {
    assert_eq!(single("2.5").value, TokenValue::Float(2.5));
    assert_eq!(single(".5").value, TokenValue::Float(0.5));
    assert_eq!(single("1.").value, TokenValue::Float(1.0));
    assert_eq!(single("1_0.2_5").value, TokenValue::Float(10.25));
}

#[test]
fn two_decimal_points_is_a_lexical_error() {
    let err = single_error("12.3.4");
    assert_eq!(err.kind, LexErrorKind::LexicalError);
    assert_eq!(err.message, "'12.3.4' has more than one decimal point");
    assert_eq!(error_kinds("1..2"), vec![LexErrorKind::LexicalError]);
}

#[test]
fn digit_then_letter_is_an_illegal_identifier() {
    let err = single_error("1x");
    assert_eq!(err.kind, LexErrorKind::IllegalIdentifier);
    assert_eq!(err.message, "'1x' is not a valid identifier");
}

#[test]
fn letters_inside_numbers_are_illegal() {
    let err = single_error("12abc");
    assert_eq!(err.kind, LexErrorKind::IllegalNumber);
    assert_eq!(err.message, "'12abc' is not a valid number");
    assert_eq!(error_kinds("1.e5"), vec![LexErrorKind::IllegalNumber]);
    assert_eq!(error_kinds("7$"), vec![LexErrorKind::IllegalNumber]);
}

#[test]
fn doubled_underscore_is_illegal() {
    assert_eq!(error_kinds("1__0"), vec![LexErrorKind::IllegalNumber]);
}

#[test]
fn integer_overflow_is_illegal() {
    let err = single_error("18446744073709551616");
    assert_eq!(err.kind, LexErrorKind::IllegalNumber);
    assert_eq!(err.suggestions.len(), 1);
}

#[test]
fn numbers_end_at_operators_and_spaces() {
    assert_eq!(
        kinds("3+4 5"),
        vec![
            TokenKind::Integer,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::Integer
        ]
    );
}

#[test]
fn dot_without_digit_is_a_symbol() {
    assert_eq!(
        kinds("x.y"),
        vec![TokenKind::Identifier, TokenKind::Dot, TokenKind::Identifier]
    );
}

// === Strings ===

#[test]
fn simple_string() {
    let token = single("\"abc\"");
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.value, text("abc"));
    assert_eq!(token.span.len(), 5);
}

#[test]
fn empty_string() {
    let token = single("\"\"");
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.value, text(""));
}

#[test]
fn escapes_cover_quote_and_backslash_only() {
    assert_eq!(single(r#""a\"b""#).value, text("a\"b"));
    assert_eq!(single(r#""a\\b""#).value, text("a\\b"));
    assert_eq!(single(r#""a\nb""#).value, text("a\\nb"));
}

#[test]
fn string_may_span_lines() {
    let token = single("\"a\nb\"");
    assert_eq!(token.value, text("a\nb"));
    assert_eq!(token.span.end.line, 1);
}

#[test]
fn unterminated_string_spans_to_end() {
    let err = single_error("\"abc");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.message, "String is not properly closed");
    assert_eq!(err.span.len(), 4);
    assert_eq!(error_kinds("\"ab\\"), vec![LexErrorKind::UnterminatedString]);
    assert_eq!(error_kinds("\"ab\\\""), vec![LexErrorKind::UnterminatedString]);
}

// === Docstrings ===

#[test]
fn docstring_keeps_its_delimiters() {
    let source = "\"\"\"line1\nline2\"\"\"";
    let token = single(source);
    assert_eq!(token.kind, TokenKind::Docstring);
    assert_eq!(token.value, text(source));
}

#[test]
fn short_quote_runs_are_docstring_content() {
    let source = "\"\"\"a\"\"b\"c\"\"\"";
    assert_eq!(single(source).value, text(source));
}

#[test]
fn empty_docstring() {
    assert_eq!(single("\"\"\"\"\"\"").value, text("\"\"\"\"\"\""));
}

#[test]
fn unterminated_docstring() {
    let err = single_error("\"\"\"abc\n\"\"");
    assert_eq!(err.kind, LexErrorKind::UnterminatedDocstring);
    assert_eq!(err.message, "Multi-line string is not properly closed");
    assert_eq!(err.span.len(), 9);
}

// === Operators ===

#[test]
fn arithmetic_and_assignment_operators() {
    assert_eq!(
        kinds("+ += ++ - -= -- * *= / /= // //= ^ ^= % %="),
        vec![
            TokenKind::Plus,
            TokenKind::PlusAssign,
            TokenKind::Increment,
            TokenKind::Minus,
            TokenKind::MinusAssign,
            TokenKind::Decrement,
            TokenKind::Multiply,
            TokenKind::MultiplyAssign,
            TokenKind::Divide,
            TokenKind::DivideAssign,
            TokenKind::FloorDivide,
            TokenKind::FloorDivideAssign,
            TokenKind::Exponent,
            TokenKind::ExponentAssign,
            TokenKind::Modulo,
            TokenKind::ModuloAssign,
        ]
    );
}

#[test]
fn relational_operators() {
    assert_eq!(
        kinds("= == > >= < <= !="),
        vec![
            TokenKind::Assignment,
            TokenKind::Equal,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::NotEqual,
        ]
    );
}

#[test]
fn operators_are_greedy() {
    assert_eq!(kinds("+++"), vec![TokenKind::Increment, TokenKind::Plus]);
    assert_eq!(kinds("///"), vec![TokenKind::FloorDivide, TokenKind::Divide]);
    assert_eq!(kinds("==="), vec![TokenKind::Equal, TokenKind::Assignment]);
}

#[test]
fn operator_value_is_its_lexeme() {
    assert_eq!(single("//=").value, text("//="));
}

#[test]
fn c_style_logic_is_rejected_with_a_hint() {
    let cases = [
        ("!", r#""!", Consider using "not" instead."#),
        ("&", r#""&", Consider using "and" instead."#),
        ("&&", r#""&&", Consider using "and" instead."#),
        ("|", r#""|", Consider using "or" instead."#),
        ("||", r#""||", Consider using "or" instead."#),
    ];
    for (source, message) in cases {
        let err = single_error(source);
        assert_eq!(err.kind, LexErrorKind::InvalidRelationalSymbol, "{source}");
        assert_eq!(err.message, message);
        assert_eq!(err.span.len() as usize, source.len());
    }
}

#[test]
fn not_equal_wins_over_bang() {
    let token = single("!=");
    assert_eq!(token.kind, TokenKind::NotEqual);
}

// === Comments and symbols ===

#[test]
fn comment_runs_to_end_of_line() {
    let output = file("x # note\ny");
    assert_eq!(
        output.tokens.kinds(),
        vec![
            TokenKind::Identifier,
            TokenKind::Comment,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(output.tokens[1].value, text("# note"));
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(single("#").value, text("#"));
}

#[test]
fn special_symbols() {
    assert_eq!(
        kinds(". , ? : ; [ ] ( ) { }"),
        vec![
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Question,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::LeftSquare,
            TokenKind::RightSquare,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftCurly,
            TokenKind::RightCurly,
        ]
    );
}

#[test]
fn a_small_program() {
    let source = "show(\"hi\", count + 1)\n";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Keyword,
            TokenKind::LeftParen,
            TokenKind::String,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::RightParen,
            TokenKind::Newline,
        ]
    );
}
