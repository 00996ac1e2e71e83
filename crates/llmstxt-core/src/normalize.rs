//! Summary normalizer.
//!
//! Generic markdown formatters happily wrap a long blockquote over several
//! lines. llms.txt wants the summary on exactly one line, so after the
//! formatter has run, the `"> "` lines directly following the summary are
//! folded back into it. Nothing else is touched and nothing is validated.

use std::borrow::Cow;

use crate::lexer::Lexer;
use crate::rules::SUMMARY_MARKER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeState {
    /// Still folding `"> "` lines into the summary.
    AccumulatingSummary,
    /// Hit the first non-summary line; the rest is copied verbatim.
    Passthrough,
}

/// Merge a multi-line blockquote summary on line 3 into a single line.
///
/// Returns the input unchanged (borrowed) when there is nothing to merge,
/// which makes the function idempotent.
///
/// ```rust
/// use llmstxt_core::normalize;
///
/// let input = "# Title\n\n> Part 1\n> Part 2\nBody";
/// assert_eq!(normalize(input), "# Title\n\n> Part 1 Part 2\nBody");
/// ```
pub fn normalize(input: &str) -> Cow<'_, str> {
    let mut lexer = Lexer::new(input);
    let _title = lexer.next_line();
    let _blank = lexer.next_line();

    let Some(summary) = lexer.next_line() else {
        return Cow::Borrowed(input);
    };
    if !summary.starts_with(SUMMARY_MARKER) {
        return Cow::Borrowed(input);
    }

    let mut merged = String::from(summary.text);
    // Byte offset where the untouched tail of the input begins: the
    // terminator of the last line folded into the summary.
    let mut tail_start = summary.end_offset();
    let mut state = MergeState::AccumulatingSummary;

    while state == MergeState::AccumulatingSummary {
        match lexer.next_line() {
            Some(line) => match line.strip_prefix(SUMMARY_MARKER) {
                Some(rest) => {
                    merged.push(' ');
                    merged.push_str(rest);
                    tail_start = line.end_offset();
                }
                None => state = MergeState::Passthrough,
            },
            None => state = MergeState::Passthrough,
        }
    }

    if tail_start == summary.end_offset() {
        return Cow::Borrowed(input);
    }

    let (Some(head), Some(tail)) = (input.get(..summary.offset), input.get(tail_start..)) else {
        return Cow::Borrowed(input);
    };
    let mut out = String::with_capacity(head.len() + merged.len() + tail.len());
    out.push_str(head);
    out.push_str(&merged);
    out.push_str(tail);
    Cow::Owned(out)
}
