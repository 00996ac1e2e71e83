//! The `fmt` workflow.
//!
//! 1. copy the file to a `.md` temp file next to it (formatters pick the
//!    language from the extension)
//! 2. run the external markdown formatter on the copy
//! 3. fold the summary back onto one line with [`normalize`]
//! 4. if the result differs from the original, rename the temp file over it
//!
//! The original is written at most once, by an atomic rename within its own
//! directory. On any failure the temp file is removed and the original is
//! left alone.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use clap::Args;
use llmstxt_core::normalize;
use log::{debug, info};
use thiserror::Error;

use crate::load::{load_text, LoadError};

/// Options for `fmt`.
#[derive(Debug, Clone, Args)]
pub struct FmtConfig {
    /// Markdown formatter command; the path of a `.md` copy is appended
    #[arg(long, env = "LLMS_TXT_FORMATTER", default_value = "deno fmt")]
    pub formatter: String,

    /// Skip the external formatter and only merge the summary
    #[arg(long)]
    pub no_external: bool,

    /// Report whether the file would change without writing it
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Error)]
pub enum FmtError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("formatter command is empty")]
    EmptyFormatter,

    #[error("failed to run formatter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("formatter `{program}` failed ({status}): {stderr}")]
    Formatter {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to read formatted copy {}: {source}", path.display())]
    ReadBack {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What `fmt` did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtOutcome {
    /// The formatted text differs from the original.
    pub did_change: bool,
    /// The original file was replaced.
    pub written: bool,
}

pub fn format_file(path: &Path, config: &FmtConfig) -> Result<FmtOutcome, FmtError> {
    let original = load_text(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source| FmtError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".llms.txt.")
        .suffix(".md")
        .tempfile_in(dir)
        .map_err(write_err)?;
    temp.write_all(original.as_bytes()).map_err(write_err)?;
    temp.flush().map_err(write_err)?;

    let formatted = if config.no_external {
        original.clone()
    } else {
        run_formatter(&config.formatter, temp.path())?;
        fs::read_to_string(temp.path()).map_err(|source| FmtError::ReadBack {
            path: temp.path().to_path_buf(),
            source,
        })?
    };

    let normalized = normalize(&formatted);
    if normalized == original.as_str() {
        debug!("{} is already formatted", path.display());
        return Ok(FmtOutcome {
            did_change: false,
            written: false,
        });
    }

    if config.check {
        return Ok(FmtOutcome {
            did_change: true,
            written: false,
        });
    }

    // Otherwise the temp file already holds the formatter's output. Written
    // by path since the formatter may have replaced the file we hold open.
    if normalized != formatted.as_str() {
        fs::write(temp.path(), normalized.as_bytes()).map_err(write_err)?;
    }

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_err)?;
    }
    temp.persist(path).map_err(|err| write_err(err.error))?;
    info!("formatted {}", path.display());

    Ok(FmtOutcome {
        did_change: true,
        written: true,
    })
}

/// Run `command` with `target` appended, in place.
fn run_formatter(command: &str, target: &Path) -> Result<(), FmtError> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or(FmtError::EmptyFormatter)?;

    debug!("running {command} {}", target.display());
    let output = Command::new(program)
        .args(parts)
        .arg(target)
        .output()
        .map_err(|source| FmtError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(FmtError::Formatter {
            program: program.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
