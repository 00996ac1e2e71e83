//! Line-based lexer shared by the parser, the lint adapter and the
//! normalizer.
//!
//! The llms.txt grammar is positional for its first four lines and then
//! line-oriented, so the lexer only ever hands out whole lines. It uses
//! `memchr` for newline detection.
//!
//! - Zero-copy: lines borrow directly from input
//! - CRLF aware: a `\r` before the newline is not part of the line text
//! - Past the end of input, [`Lexer::next_line_or_empty`] yields an empty
//!   sentinel line so positional checks never need a separate "missing" case

use crate::span::Span;
use memchr::memchr;

/// A single line from the input with its source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline).
    pub text: &'a str,
    /// Byte span in the original input.
    pub span: Span,
    /// Byte offset of `text` in the input.
    ///
    /// Unlike the span offsets this is never clamped.
    pub offset: usize,
}

impl<'a> Line<'a> {
    /// Byte offset just past `text`, before any terminator.
    #[inline(always)]
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }

    #[inline(always)]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.as_bytes().starts_with(prefix.as_bytes())
    }

    /// Strip a prefix from the line, returning the remainder.
    #[inline(always)]
    pub fn strip_prefix(&self, prefix: &str) -> Option<&'a str> {
        self.text.strip_prefix(prefix)
    }

    /// Check if the line contains `needle` anywhere.
    #[inline]
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

/// Line-based lexer with peek/consume access.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    /// Current byte offset.
    offset: usize,
    /// Number of lines handed out so far.
    line: u32,
    /// Peeked line (for lookahead).
    peeked: Option<Line<'a>>,
}

impl<'a> Lexer<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            line: 0,
            peeked: None,
        }
    }

    /// Peek at the next line without consuming it.
    #[inline]
    pub fn peek_line(&mut self) -> Option<&Line<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.as_ref()
    }

    /// Consume and return the next line.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if let Some(line) = self.peeked.take() {
            return Some(line);
        }
        self.read_line()
    }

    /// Consume the next line, or return an empty line positioned at the end
    /// of input once the input is exhausted.
    #[inline]
    pub fn next_line_or_empty(&mut self) -> Line<'a> {
        match self.next_line() {
            Some(line) => line,
            None => {
                self.line = self.line.saturating_add(1);
                Line {
                    text: "",
                    span: Span::empty_at(self.line, span_offset(self.bytes.len())),
                    offset: self.bytes.len(),
                }
            }
        }
    }

    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;

        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        // CRLF: drop the carriage return from the line text
        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < self.bytes.len() { end + 1 } else { end };
        self.line = self.line.saturating_add(1);

        // `start` and `text_end` sit next to ASCII `\n`/`\r` bytes or at the
        // ends of the input, so both are char boundaries.
        let text = self.input.get(start..text_end)?;

        Some(Line {
            text,
            span: Span::new(self.line, span_offset(start), span_offset(text_end)),
            offset: start,
        })
    }
}

/// Spans hold `u32` offsets; past 4 GiB they saturate instead of wrapping.
#[inline(always)]
fn span_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
