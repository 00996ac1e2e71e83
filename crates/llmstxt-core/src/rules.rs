//! Positional grammar for the first lines of an llms.txt file.
//!
//! Both [`crate::Parser`] and [`crate::lint()`] run these checks, in this
//! order, and stop at the first violation.

use log::debug;

use crate::error::ParseError;
use crate::lexer::Lexer;

pub const TITLE_MARKER: &str = "# ";
pub const SUMMARY_MARKER: &str = "> ";
pub const SECTION_MARKER: &str = "## ";
pub const BULLET_MARKER: &str = "- ";

/// Minimum length of the title line, marker included.
pub const MIN_TITLE_LINE_LEN: usize = 3;

/// The validated head of a document: title, blank line, optional summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble<'a> {
    pub title: &'a str,
    pub summary: Option<&'a str>,
}

/// Read and validate lines 1 to 4.
///
/// On success the lexer is left at the first body line: line 4 when a
/// summary is present, line 3 otherwise.
pub fn read_preamble<'a>(lexer: &mut Lexer<'a>) -> Result<Preamble<'a>, ParseError> {
    let heading = lexer.next_line_or_empty();
    let Some(title) = heading.strip_prefix(TITLE_MARKER) else {
        debug!("line 1 does not begin with {TITLE_MARKER:?}: {:?}", heading.text);
        return Err(ParseError::TitleMissing { span: heading.span });
    };
    if heading.text.len() < MIN_TITLE_LINE_LEN {
        debug!("line 1 is shorter than {MIN_TITLE_LINE_LEN} characters");
        return Err(ParseError::TitleTooShort { span: heading.span });
    }

    let separator = lexer.next_line_or_empty();
    if !separator.text.is_empty() {
        debug!("line 2 is not empty: {:?}", separator.text);
        return Err(ParseError::NewlineMissingAfterTitle {
            span: separator.span,
        });
    }

    let summary = match lexer.peek_line() {
        Some(line) if line.starts_with(SUMMARY_MARKER) => lexer.next_line(),
        _ => None,
    };

    if summary.is_some() {
        if let Some(next) = lexer.peek_line() {
            if next.starts_with(SUMMARY_MARKER) {
                debug!("summary continues on line {}", next.span.line);
                return Err(ParseError::MultilineBlockquoteSummary { span: next.span });
            }
        }
    }

    Ok(Preamble {
        title,
        summary: summary.and_then(|line| line.strip_prefix(SUMMARY_MARKER)),
    })
}
