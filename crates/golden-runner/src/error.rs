//! Runner error type.
//!
//! Everything here is an environment fault: it stops a case (or the whole
//! run) before a comparison can happen. Mismatches are never errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not find expected {format} output at {}.", path.display())]
    NotFound { format: &'static str, path: PathBuf },
    #[error("{0}")]
    Decode(String),
    #[error("Could not run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid test filter: {0}")]
    InvalidFilter(#[from] regex::Error),
}

impl RunnerError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
