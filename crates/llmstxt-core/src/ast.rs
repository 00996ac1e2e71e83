//! Document model for parsed llms.txt files.
//!
//! The model borrows from the input text wherever it can. It is only ever
//! built from a fully valid document; see [`crate::Parser`].

use std::borrow::Cow;

use crate::span::Span;

/// A parsed llms.txt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Text of the first line after the `"# "` marker.
    pub title: &'a str,
    /// Text of the blockquote summary after the `"> "` marker.
    pub summary: Option<&'a str>,
    /// Free-form body between the preamble and the first section heading.
    ///
    /// Lines are joined with `\n`; blank lines around the block are dropped.
    pub extra_info: Cow<'a, str>,
    /// Link sections in source order.
    pub link_sections: Vec<LinkSection<'a>>,
}

impl<'a> Document<'a> {
    /// Look up a section by its heading text.
    pub fn section(&self, name: &str) -> Option<&LinkSection<'a>> {
        self.link_sections.iter().find(|s| s.name == name)
    }

    /// Links of the named section, if the section exists.
    pub fn links(&self, name: &str) -> Option<&[Link<'a>]> {
        self.section(name).map(|s| s.links.as_slice())
    }

    /// Section names in source order.
    pub fn section_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.link_sections.iter().map(|s| s.name)
    }

    /// Total number of links across all sections.
    pub fn link_count(&self) -> usize {
        self.link_sections.iter().map(|s| s.links.len()).sum()
    }
}

/// A `"## "` heading and the links listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSection<'a> {
    /// Heading text after the `"## "` marker.
    pub name: &'a str,
    /// Links in source order.
    pub links: Vec<Link<'a>>,
    /// Span of the heading line.
    pub span: Span,
}

/// One `- [label](href): description` bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    pub label: &'a str,
    pub href: &'a str,
    /// Text after `"): "`, if any.
    pub description: Option<&'a str>,
    /// Span of the bullet line.
    pub span: Span,
}
