//! Canonical llms.txt output for a [`Document`].
//!
//! Title, summary and body are separated by one blank line, sections by one
//! more. Extra info is written verbatim, so any blank lines it ends with
//! stand between it and the first section. The output ends with a newline.
//! Parsing the output yields the same title, summary, extra info and links.

use std::fmt;

use crate::ast::{Document, Link, LinkSection};
use crate::rules::{BULLET_MARKER, SECTION_MARKER, SUMMARY_MARKER, TITLE_MARKER};

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE_MARKER}{}", self.title)?;

        let has_body = !self.extra_info.is_empty() || !self.link_sections.is_empty();
        if self.summary.is_some() || has_body {
            writeln!(f)?;
        }

        if let Some(summary) = self.summary {
            writeln!(f, "{SUMMARY_MARKER}{summary}")?;
            if has_body {
                writeln!(f)?;
            }
        } else if self.extra_info.starts_with(SUMMARY_MARKER) {
            // keep a quoted first body line from reading back as the summary
            writeln!(f)?;
        }

        if !self.extra_info.is_empty() {
            writeln!(f, "{}", self.extra_info)?;
        }

        for (i, section) in self.link_sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{section}")?;
        }

        Ok(())
    }
}

impl fmt::Display for LinkSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SECTION_MARKER}{}", self.name)?;
        for link in &self.links {
            writeln!(f, "{link}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BULLET_MARKER}[{}]({})", self.label, self.href)?;
        if let Some(description) = self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}
