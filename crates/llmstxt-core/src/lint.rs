//! Lint adapter: the positional checks of lines 1 to 4, reported as a
//! status instead of a document.
//!
//! Sections and links are not looked at; use [`crate::Parser`] for the full
//! grammar.

use std::collections::BTreeMap;

use crate::error::{ParseError, Status};
use crate::lexer::Lexer;
use crate::rules;

/// Pass/fail report of a lint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    pub ok: bool,
    /// Numeric status code, 0 on success.
    pub status: u16,
    pub message: String,
    /// Context for failures that are not about content, e.g. the path of an
    /// unreadable file.
    pub metadata: BTreeMap<String, String>,
}

impl LintResult {
    pub fn passed() -> Self {
        Self::from_status(Status::Ok)
    }

    pub fn from_status(status: Status) -> Self {
        Self {
            ok: status.is_ok(),
            status: status.code(),
            message: status.message().to_string(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The status as a [`Status`], if the code is a known one.
    pub fn kind(&self) -> Option<Status> {
        Status::from_code(self.status)
    }
}

impl From<&ParseError> for LintResult {
    fn from(err: &ParseError) -> Self {
        Self::from_status(err.kind())
    }
}

/// Lint llms.txt text.
///
/// ```rust
/// use llmstxt_core::lint;
///
/// assert_eq!(lint("# Project\n\n> One line summary\n").status, 0);
/// assert_eq!(lint("Project\n").status, 1);
/// ```
pub fn lint(input: &str) -> LintResult {
    let mut lexer = Lexer::new(input);
    match rules::read_preamble(&mut lexer) {
        Ok(_) => LintResult::passed(),
        Err(err) => LintResult::from(&err),
    }
}
