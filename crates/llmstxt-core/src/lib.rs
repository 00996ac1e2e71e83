//! # llms.txt core
//!
//! Parser, linter and summary normalizer for `llms.txt` files: a small
//! markdown subset describing a project for language models.
//!
//! ```text
//! # Project name
//!
//! > One line summary
//!
//! Optional free-form details.
//!
//! ## Docs
//! - [README](./README.md): overview
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use llmstxt_core::parse;
//!
//! let input = "# T\n\n> S\n\n## Docs\n- [README](./README.md): overview\n";
//! let doc = parse(input).unwrap();
//!
//! assert_eq!(doc.title, "T");
//! assert_eq!(doc.summary, Some("S"));
//! assert_eq!(doc.links("Docs").unwrap()[0].href, "./README.md");
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`ParseError`] value carrying a numeric status code,
//! never a panic:
//!
//! ```rust
//! use llmstxt_core::parse;
//!
//! let err = parse("Title\n\nSummary\n").unwrap_err();
//! assert_eq!(err.status(), 1);
//! ```
//!
//! ## Formatting
//!
//! [`normalize`] folds a summary that an external markdown formatter
//! wrapped over several `"> "` lines back onto one line.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod lint;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod rules;
pub mod span;

pub use ast::{Document, Link, LinkSection};
pub use error::{ParseError, Status};
pub use lint::{lint, LintResult};
pub use normalize::normalize;
pub use parser::Parser;

/// Parse llms.txt text with the default [`Parser`].
#[inline]
pub fn parse(input: &str) -> Result<Document<'_>, ParseError> {
    Parser::new().parse(input)
}
