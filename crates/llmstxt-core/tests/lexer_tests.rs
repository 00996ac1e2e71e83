//! Integration tests for the line lexer

use llmstxt_core::lexer::Lexer;
use pretty_assertions::assert_eq;

#[test]
fn test_line_offsets_point_at_text() {
    let input = "# Tïtle\r\n\r\n> Süm\nlast";
    let mut lexer = Lexer::new(input);

    let mut seen = Vec::new();
    while let Some(line) = lexer.next_line() {
        assert_eq!(&input[line.offset..line.end_offset()], line.text);
        assert_eq!(line.span.slice(input), line.text);
        assert_eq!(line.span.start as usize, line.offset);
        seen.push(line.text);
    }

    assert_eq!(seen, vec!["# Tïtle", "", "> Süm", "last"]);
}

#[test]
fn test_past_end_line_is_empty_at_input_end() {
    let input = "# T\n";
    let mut lexer = Lexer::new(input);
    lexer.next_line();

    let line = lexer.next_line_or_empty();
    assert_eq!(line.text, "");
    assert_eq!(line.span.line, 2);
    assert_eq!(line.offset, input.len());
    assert_eq!(line.end_offset(), input.len());
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("a\nb\n");
    assert_eq!(lexer.peek_line().map(|l| l.text), Some("a"));
    assert_eq!(lexer.next_line().map(|l| l.text), Some("a"));
    assert_eq!(lexer.next_line().map(|l| l.span.line), Some(2));
    assert!(lexer.next_line().is_none());
}
