//! Integration tests for the lint adapter

use llmstxt_core::{lint, parse, LintResult, Status};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::title_missing("Title\n\nSummary\n", 1, "title missing")]
#[case::title_too_short("# \n\n", 2, "title too short")]
#[case::no_newline_after_title("# Title\nSummary\n", 3, "heading newline missing")]
#[case::multiline_summary("# Title\n\n> one\n> two\n", 4, "multi-line blockquote summary")]
fn test_lint_failures(#[case] input: &str, #[case] status: u16, #[case] message: &str) {
    let result = lint(input);
    assert!(!result.ok);
    assert_eq!(result.status, status);
    assert_eq!(result.message, message);
    assert!(result.metadata.is_empty());
}

#[test]
fn test_lint_valid() {
    let result = lint("# Project\n\n> Summary\n\n## Docs\n- [a](b)\n");
    assert_eq!(result, LintResult::passed());
    assert!(result.ok);
    assert_eq!(result.status, 0);
    assert_eq!(result.message, "linting passed");
}

#[test]
fn test_lint_ignores_sections_and_links() {
    let input = "# Project\n\n## Docs\n- not a link\n# Second\n";
    assert!(lint(input).ok);
    assert!(parse(input).is_err());
}

#[rstest]
#[case("Title\n\nSummary\n")]
#[case("# \n")]
#[case("# Title\nx\n")]
#[case("# Title\n\n> a\n> b\n")]
#[case("# Title\n\n> a\n")]
fn test_lint_agrees_with_parser_on_preamble(#[case] input: &str) {
    let from_parse = parse(input).err().map_or(0, |e| e.status());
    assert_eq!(lint(input).status, from_parse);
}

#[test]
fn test_lint_result_for_io_failures() {
    let not_found = LintResult::from_status(Status::FileNotFound);
    assert_eq!(not_found.status, 404);
    assert_eq!(not_found.message, "file not found");
    assert_eq!(not_found.kind(), Some(Status::FileNotFound));

    let unreadable =
        LintResult::from_status(Status::ReadFailed).with_metadata("path", "/tmp/llms.txt");
    assert_eq!(unreadable.status, 500);
    assert_eq!(unreadable.metadata.get("path").map(String::as_str), Some("/tmp/llms.txt"));
}

#[test]
fn test_status_codes_round_trip() {
    for code in [0, 1, 2, 3, 4, 5, 6, 404, 500] {
        let status = Status::from_code(code).unwrap();
        assert_eq!(status.code(), code);
    }
    assert_eq!(Status::from_code(7), None);
    assert!(Status::FileNotFound.is_io());
    assert!(!Status::TitleMissing.is_io());
}
