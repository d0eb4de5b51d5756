#![forbid(unsafe_code)]

//! Harness errors: trace I/O, per-line parse failures, and report encoding.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("trace line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("trace file not found: {path}")]
    MissingTrace { path: PathBuf },
}

impl HarnessError {
    /// 1-based trace line for parse failures.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Json { line, .. } => Some(*line),
            _ => None,
        }
    }
}
