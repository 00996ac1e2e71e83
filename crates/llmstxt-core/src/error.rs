use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Outcome codes shared by the parser, the lint adapter and the file loader.
///
/// The numeric values are part of the CLI contract: they become process
/// exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Valid document / lint passed.
    Ok,
    /// First line does not begin with `"# "`.
    TitleMissing,
    /// First line has the marker but is shorter than 3 characters.
    TitleTooShort,
    /// Second line is not empty.
    NewlineMissingAfterTitle,
    /// Blockquote summary spans more than one line.
    MultilineBlockquoteSummary,
    /// A second `"# "` heading appears after the preamble.
    MultipleTopLevelHeadings,
    /// A link bullet is missing its `[label]` or `(href)`.
    MalformedLink,
    /// The file does not exist.
    FileNotFound,
    /// The file exists but could not be read.
    ReadFailed,
}

impl Status {
    pub const fn code(self) -> u16 {
        match self {
            Status::Ok => 0,
            Status::TitleMissing => 1,
            Status::TitleTooShort => 2,
            Status::NewlineMissingAfterTitle => 3,
            Status::MultilineBlockquoteSummary => 4,
            Status::MultipleTopLevelHeadings => 5,
            Status::MalformedLink => 6,
            Status::FileNotFound => 404,
            Status::ReadFailed => 500,
        }
    }

    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::TitleMissing),
            2 => Some(Status::TitleTooShort),
            3 => Some(Status::NewlineMissingAfterTitle),
            4 => Some(Status::MultilineBlockquoteSummary),
            5 => Some(Status::MultipleTopLevelHeadings),
            6 => Some(Status::MalformedLink),
            404 => Some(Status::FileNotFound),
            500 => Some(Status::ReadFailed),
            _ => None,
        }
    }

    /// Short message reported by `lint` for this status.
    pub const fn message(self) -> &'static str {
        match self {
            Status::Ok => "linting passed",
            Status::TitleMissing => "title missing",
            Status::TitleTooShort => "title too short",
            Status::NewlineMissingAfterTitle => "heading newline missing",
            Status::MultilineBlockquoteSummary => "multi-line blockquote summary",
            Status::MultipleTopLevelHeadings => "multiple top-level headings",
            Status::MalformedLink => "malformed link",
            Status::FileNotFound => "file not found",
            Status::ReadFailed => "failed to read file",
        }
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Whether the status comes from loading the file rather than its content.
    #[inline]
    pub const fn is_io(self) -> bool {
        matches!(self, Status::FileNotFound | Status::ReadFailed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// Content error found while parsing an llms.txt document.
///
/// Parsing stops at the first error, so a failed parse yields exactly one of
/// these. Each variant carries the span of the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the first line of an llms.txt file must begin with '# ' (line {})", .span.line)]
    TitleMissing { span: Span },

    #[error("the first line of an llms.txt file must be at least 3 characters long")]
    TitleTooShort { span: Span },

    #[error(
        "the second line of an llms.txt file must be empty, separating the title from the rest of the content"
    )]
    NewlineMissingAfterTitle { span: Span },

    #[error("blockquote summaries must be on a single line (line {})", .span.line)]
    MultilineBlockquoteSummary { span: Span },

    #[error("only one top-level heading is allowed, found `# {heading}` at line {}", .span.line)]
    MultipleTopLevelHeadings { heading: String, span: Span },

    #[error("malformed link at line {}: expected `- [label](href)`, found `{text}`", .span.line)]
    MalformedLink { text: String, span: Span },
}

impl ParseError {
    pub fn kind(&self) -> Status {
        match self {
            ParseError::TitleMissing { .. } => Status::TitleMissing,
            ParseError::TitleTooShort { .. } => Status::TitleTooShort,
            ParseError::NewlineMissingAfterTitle { .. } => Status::NewlineMissingAfterTitle,
            ParseError::MultilineBlockquoteSummary { .. } => Status::MultilineBlockquoteSummary,
            ParseError::MultipleTopLevelHeadings { .. } => Status::MultipleTopLevelHeadings,
            ParseError::MalformedLink { .. } => Status::MalformedLink,
        }
    }

    /// Numeric status code, see [`Status::code`].
    #[inline]
    pub fn status(&self) -> u16 {
        self.kind().code()
    }

    /// Source location of the offending line.
    pub fn span(&self) -> Span {
        match self {
            ParseError::TitleMissing { span }
            | ParseError::TitleTooShort { span }
            | ParseError::NewlineMissingAfterTitle { span }
            | ParseError::MultilineBlockquoteSummary { span }
            | ParseError::MultipleTopLevelHeadings { span, .. }
            | ParseError::MalformedLink { span, .. } => *span,
        }
    }
}
