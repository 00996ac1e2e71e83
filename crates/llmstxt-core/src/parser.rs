//! Zero-allocation llms.txt parser.
//!
//! Borrows directly from input. Fails fast: the first grammar violation
//! is returned and no partial document is ever produced.

use std::borrow::Cow;

use log::{debug, trace};
use memchr::memchr;

use crate::ast::{Document, Link, LinkSection};
use crate::error::ParseError;
use crate::lexer::{Lexer, Line};
use crate::rules::{self, BULLET_MARKER, SECTION_MARKER, TITLE_MARKER};

/// Where the body scan currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyState {
    /// Before the first `"## "` heading, collecting extra info.
    ExtraInfo,
    /// Inside the section at this index of `link_sections`.
    Section(usize),
}

/// llms.txt parser.
///
/// Holds configuration only, so one parser can be shared and reused.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    strict_links: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[inline]
    pub fn new() -> Self {
        Self { strict_links: true }
    }

    /// Choose how bullets without a `[label](href)` are handled.
    ///
    /// When strict (default) they fail the parse with
    /// [`ParseError::MalformedLink`]. Otherwise they are skipped.
    pub fn with_strict_links(mut self, strict: bool) -> Self {
        self.strict_links = strict;
        self
    }

    /// Parse the input, returning the first error on failure.
    pub fn parse<'a>(&self, input: &'a str) -> Result<Document<'a>, ParseError> {
        let mut lexer = Lexer::new(input);
        let preamble = rules::read_preamble(&mut lexer)?;

        // The empty line separating a summary from the body belongs to
        // neither.
        if preamble.summary.is_some() && lexer.peek_line().is_some_and(|l| l.text.is_empty()) {
            lexer.next_line();
        }

        let mut extra_lines: Vec<Line<'a>> = Vec::new();
        let mut link_sections: Vec<LinkSection<'a>> = Vec::new();
        let mut state = BodyState::ExtraInfo;

        while let Some(line) = lexer.next_line() {
            if line.starts_with(TITLE_MARKER) {
                debug!("second top-level heading on line {}", line.span.line);
                return Err(ParseError::MultipleTopLevelHeadings {
                    heading: line.text[TITLE_MARKER.len()..].to_string(),
                    span: line.span,
                });
            }

            if let Some(name) = line.strip_prefix(SECTION_MARKER) {
                state = BodyState::Section(open_section(&mut link_sections, name, line));
                continue;
            }

            match state {
                BodyState::ExtraInfo => extra_lines.push(line),
                BodyState::Section(index) => {
                    if !line.contains(BULLET_MARKER) {
                        trace!("skipping line {}: not a bullet", line.span.line);
                        continue;
                    }
                    match parse_link(line) {
                        Ok(link) => link_sections[index].links.push(link),
                        Err(err) if self.strict_links => return Err(err),
                        Err(err) => debug!("skipping bullet: {err}"),
                    }
                }
            }
        }

        Ok(Document {
            title: preamble.title,
            summary: preamble.summary,
            extra_info: join_lines(input, &extra_lines),
            link_sections,
        })
    }
}

/// Register a section heading and return its index.
///
/// A repeated heading keeps the position of the first one and starts its
/// link list over.
fn open_section<'a>(sections: &mut Vec<LinkSection<'a>>, name: &'a str, line: Line<'a>) -> usize {
    if let Some(index) = sections.iter().position(|s| s.name == name) {
        debug!("section {name:?} reopened on line {}", line.span.line);
        let section = &mut sections[index];
        section.links.clear();
        section.span = line.span;
        return index;
    }

    sections.push(LinkSection {
        name,
        links: Vec::new(),
        span: line.span,
    });
    sections.len() - 1
}

/// Split a bullet line into its link parts.
///
/// The href is searched for after the label and the description after the
/// href, so brackets inside a label's parentheses don't confuse the split.
/// No escaping is supported.
pub fn parse_link(line: Line<'_>) -> Result<Link<'_>, ParseError> {
    let text = line.text;
    let bytes = text.as_bytes();
    let malformed = || {
        debug!("malformed link on line {}: {text:?}", line.span.line);
        ParseError::MalformedLink {
            text: text.to_string(),
            span: line.span,
        }
    };

    let label_start = memchr(b'[', bytes).ok_or_else(malformed)? + 1;
    let label_end = label_start + memchr(b']', &bytes[label_start..]).ok_or_else(malformed)?;
    let href_start =
        label_end + memchr(b'(', &bytes[label_end..]).ok_or_else(malformed)? + 1;
    let href_end = href_start + memchr(b')', &bytes[href_start..]).ok_or_else(malformed)?;

    let description = text[href_end..]
        .find("): ")
        .map(|pos| &text[href_end + pos + 3..]);

    Ok(Link {
        label: &text[label_start..label_end],
        href: &text[href_start..href_end],
        description,
        span: line.span,
    })
}

/// Join extra-info lines with `\n`, verbatim.
///
/// Borrows the input directly unless CRLF terminators sit inside the block.
fn join_lines<'a>(input: &'a str, lines: &[Line<'a>]) -> Cow<'a, str> {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return Cow::Borrowed("");
    };

    match input.get(first.offset..last.end_offset()) {
        Some(block) if memchr(b'\r', block.as_bytes()).is_none() => Cow::Borrowed(block),
        _ => {
            let joined: Vec<&str> = lines.iter().map(|l| l.text).collect();
            Cow::Owned(joined.join("\n"))
        }
    }
}
