//! llms-txt - parse, lint and format llms.txt files
//!
//! Usage:
//!   llms-txt [OPTIONS] <COMMAND> [PATH]
//!
//! Commands:
//!   parse     Parse and display document structure
//!   lint      Check the title, separator and summary lines
//!   fmt       Run a markdown formatter, then fold the summary onto one line
//!
//! PATH is an llms.txt file or a directory containing one (default: the
//! current directory). `parse` and `lint` exit with the status code of the
//! result, 0 on success. `fmt` does not validate content: it exits 0, 404 or
//! 500, or 1 when `--check` finds a pending change or anything else fails.

mod fmt;
mod load;
mod output;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use llmstxt_core::{lint, Parser as LlmsTxtParser, Status};
use log::debug;

use crate::fmt::{FmtConfig, FmtError};

/// Exit code of `fmt --check` when the file would be rewritten.
const WOULD_REFORMAT: u16 = 1;

#[derive(Parser)]
#[command(
    name = "llms-txt",
    version,
    about = "Utility for parsing, linting and formatting llms.txt files"
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse and display document structure
    Parse {
        /// llms.txt file or directory containing one
        path: Option<PathBuf>,

        /// Skip malformed link bullets instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Check the title, separator and summary lines
    Lint {
        /// llms.txt file or directory containing one
        path: Option<PathBuf>,
    },
    /// Run a markdown formatter, then fold the summary onto one line
    Fmt {
        /// llms.txt file or directory containing one
        path: Option<PathBuf>,

        #[command(flatten)]
        config: FmtConfig,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(status) => process::exit(i32::from(status)),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Run the selected command, returning the status code to exit with.
fn run(cli: &Cli) -> Result<u16> {
    match &cli.command {
        Command::Parse { path, lenient } => {
            let path = load::resolve_path(path.as_deref()).context("failed to resolve path")?;
            cmd_parse(&path, *lenient, cli)
        }
        Command::Lint { path } => {
            let path = load::resolve_path(path.as_deref()).context("failed to resolve path")?;
            cmd_lint(&path, cli)
        }
        Command::Fmt { path, config } => {
            let path = load::resolve_path(path.as_deref()).context("failed to resolve path")?;
            cmd_fmt(&path, config)
        }
    }
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(path: &Path, lenient: bool, cli: &Cli) -> Result<u16> {
    let input = match load::load_text(path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(e.status().code());
        }
    };

    let parser = LlmsTxtParser::new().with_strict_links(!lenient);
    match parser.parse(&input) {
        Ok(doc) => {
            if cli.json {
                output::print_document_json(&doc)?;
            } else if cli.verbose > 0 {
                output::print_document_verbose(&doc);
            } else {
                output::print_document_summary(&doc);
            }
            Ok(Status::Ok.code())
        }
        Err(e) => {
            if cli.json {
                output::print_parse_error_json(&e)?;
            } else {
                eprintln!("error: {}: {}", path.display(), e);
            }
            Ok(e.status())
        }
    }
}

// =============================================================================
// Lint Command
// =============================================================================

fn cmd_lint(path: &Path, cli: &Cli) -> Result<u16> {
    let result = match load::load_text(path) {
        Ok(input) => lint(&input),
        Err(e) => {
            debug!("failed to load {}: {}", e.path().display(), e);
            e.lint_result()
        }
    };

    if cli.json {
        output::print_lint_json(&result)?;
    } else if result.ok {
        println!("{}: {}", path.display(), result.message);
    } else {
        eprintln!("error: {}: {}", path.display(), result.message);
    }

    Ok(result.status)
}

// =============================================================================
// Fmt Command
// =============================================================================

fn cmd_fmt(path: &Path, config: &FmtConfig) -> Result<u16> {
    match fmt::format_file(path, config) {
        Ok(outcome) if !outcome.did_change => {
            println!("{}: already formatted", path.display());
            Ok(Status::Ok.code())
        }
        Ok(outcome) if outcome.written => {
            println!("{}: formatted", path.display());
            Ok(Status::Ok.code())
        }
        Ok(_) => {
            println!("{}: would reformat", path.display());
            Ok(WOULD_REFORMAT)
        }
        Err(FmtError::Load(e)) => {
            eprintln!("error: {}", e);
            Ok(e.status().code())
        }
        Err(e) => Err(e).with_context(|| format!("failed to format {}", path.display())),
    }
}
