use mono_ir::Position;
use pretty_assertions::assert_eq;

use super::*;

fn span(start: u32, end: u32) -> Span {
    Span::new(Position::new(start, 0, start), Position::new(end, 0, end))
}

#[test]
fn builder_collects_fields() {
    let diag = Diagnostic::error(ErrorCode::E0007)
        .with_message("String is not properly closed")
        .with_span(span(4, 9))
        .with_note("strings may span lines")
        .with_suggestion("add closing `\"`");

    assert!(diag.is_error());
    assert_eq!(diag.title(), "Unterminated string literal");
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions, vec!["add closing `\"`".to_string()]);
}

#[test]
fn errors_display_their_severity() {
    let diag = Diagnostic::error(ErrorCode::E0009);
    assert!(diag.is_error());
    assert_eq!(diag.severity.to_string(), "error");
}

#[test]
fn render_uses_title_message_and_excerpt() {
    let source = "x = 1 & 2";
    let diag = Diagnostic::error(ErrorCode::E0006)
        .with_message("\"&\", Consider using \"and\" instead.")
        .with_span(span(6, 7));

    assert_eq!(
        diag.render(source),
        "Invalid Symbol: \"&\", Consider using \"and\" instead.\n\nx = 1 & 2\n      ^"
    );
}

#[test]
fn display_has_code_prefix() {
    let diag = Diagnostic::error(ErrorCode::E0001).with_message("Illegal character '$'");
    assert_eq!(
        diag.to_string(),
        "[E0001] Illegal Character: Illegal character '$'"
    );
}
