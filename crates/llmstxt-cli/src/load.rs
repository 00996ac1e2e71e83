//! Locating and reading llms.txt files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use llmstxt_core::{LintResult, Status};
use log::debug;
use thiserror::Error;

pub const FILE_NAME: &str = "llms.txt";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn status(&self) -> Status {
        match self {
            LoadError::NotFound { .. } => Status::FileNotFound,
            LoadError::Read { .. } => Status::ReadFailed,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path } | LoadError::Read { path, .. } => path,
        }
    }

    /// The lint report for a file that could not be loaded.
    ///
    /// Read failures carry the offending path in the metadata.
    pub fn lint_result(&self) -> LintResult {
        let result = LintResult::from_status(self.status());
        match self {
            LoadError::NotFound { .. } => result,
            LoadError::Read { path, .. } => {
                result.with_metadata("llms_txt_path", path.display().to_string())
            }
        }
    }
}

/// Resolve a command line path argument to an llms.txt file.
///
/// No argument means the current directory. A path that does not end in
/// `llms.txt` is taken to be the directory holding it.
pub fn resolve_path(arg: Option<&Path>) -> io::Result<PathBuf> {
    let base = match arg {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if base.to_string_lossy().ends_with(FILE_NAME) {
        Ok(base)
    } else {
        Ok(base.join(FILE_NAME))
    }
}

/// Read the whole file as UTF-8 text.
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
