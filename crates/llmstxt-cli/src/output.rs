//! Text and JSON rendering of command results.

use std::collections::BTreeMap;

use anyhow::Result;
use llmstxt_core::{Document, LintResult, ParseError};
use serde::Serialize;

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    summary: Option<&'a str>,
    extra_info: &'a str,
    link_sections: Vec<JsonSection<'a>>,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    name: &'a str,
    links: Vec<JsonLink<'a>>,
}

#[derive(Serialize)]
struct JsonLink<'a> {
    label: &'a str,
    href: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonStatus<'a> {
    ok: bool,
    status: u16,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    metadata: &'a BTreeMap<String, String>,
}

fn convert_document<'a>(doc: &'a Document<'a>) -> JsonDocument<'a> {
    JsonDocument {
        title: doc.title,
        summary: doc.summary,
        extra_info: &doc.extra_info,
        link_sections: doc
            .link_sections
            .iter()
            .map(|section| JsonSection {
                name: section.name,
                links: section
                    .links
                    .iter()
                    .map(|link| JsonLink {
                        label: link.label,
                        href: link.href,
                        description: link.description,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn print_document_json(doc: &Document) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&convert_document(doc))?);
    Ok(())
}

pub fn print_lint_json(result: &LintResult) -> Result<()> {
    let json = JsonStatus {
        ok: result.ok,
        status: result.status,
        message: &result.message,
        line: None,
        metadata: &result.metadata,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

pub fn print_parse_error_json(err: &ParseError) -> Result<()> {
    let message = err.to_string();
    let metadata = BTreeMap::new();
    let json = JsonStatus {
        ok: false,
        status: err.status(),
        message: &message,
        line: Some(err.span().line),
        metadata: &metadata,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

// =============================================================================
// Text Output
// =============================================================================

pub fn print_document_summary(doc: &Document) {
    println!("Title: {}", doc.title);
    if let Some(summary) = doc.summary {
        println!("Summary: {}", summary);
    }
    if !doc.extra_info.is_empty() {
        println!("Extra info: {} line(s)", doc.extra_info.lines().count());
    }

    println!("Sections: {}", doc.link_sections.len());
    for (i, section) in doc.link_sections.iter().enumerate() {
        println!("  [{}] {} ({} links)", i + 1, section.name, section.links.len());
    }
}

pub fn print_document_verbose(doc: &Document) {
    println!("=== llms.txt ===");
    println!();
    println!("Title:   {}", doc.title);
    println!("Summary: {}", doc.summary.unwrap_or("(none)"));
    println!();

    if !doc.extra_info.is_empty() {
        println!("--- Extra info ---");
        for line in doc.extra_info.lines() {
            println!("  {}", line);
        }
        println!();
    }

    println!("--- Sections ---");
    for section in &doc.link_sections {
        println!();
        println!("## {} (line {})", section.name, section.span.line);
        for link in &section.links {
            match link.description {
                Some(description) => {
                    println!("  - {} -> {}: {}", link.label, link.href, description)
                }
                None => println!("  - {} -> {}", link.label, link.href),
            }
        }
    }

    println!();
    println!("Sections: {}", doc.link_sections.len());
    println!("Links:    {}", doc.link_count());
}
