//! Source location tracking.
//!
//! Every line handed out by the lexer, and every error or node built from
//! one, carries a `Span` pointing back at the raw text.

/// A byte range in the source text plus the 1-based line it sits on.
///
/// Byte offsets are inclusive-exclusive: `[start, end)`. A line's span never
/// includes its terminator (`\n` or `\r\n`).
///
/// # Example
///
/// ```rust
/// use llmstxt_core::span::Span;
///
/// let span = Span::new(3, 10, 14);
/// assert_eq!(span.len(), 4);
/// assert_eq!(span.slice("# T\n\nabcdefghijklmn"), "fghi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Line number, starting at 1.
    pub line: u32,
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(line: u32, start: u32, end: u32) -> Self {
        Self { line, start, end }
    }

    /// Zero-width span at `offset`, used for lines past the end of input.
    #[inline]
    pub const fn empty_at(line: u32, offset: u32) -> Self {
        Self {
            line,
            start: offset,
            end: offset,
        }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Borrow the spanned text out of `input`.
    ///
    /// Returns an empty string if the span does not fit `input`.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        input
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}
