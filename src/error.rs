//! Error types for extraction and registry loading.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure reading or scanning a source file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl ParseError {
    /// Attach a file path to a structural error raised while scanning text.
    pub(crate) fn malformed(path: impl Into<PathBuf>, err: SyntaxError) -> Self {
        ParseError::Malformed {
            path: path.into(),
            line: err.line,
            reason: err.reason,
        }
    }
}

/// Structural error found by the comment scanner, without file context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct SyntaxError {
    pub line: usize,
    pub reason: String,
}

impl SyntaxError {
    pub(crate) fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// A registered value could not be described as a function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("{name}: must provide a function to get a signature (found {kind})")]
    NotCallable { name: String, kind: String },
}

/// Failure loading a registry manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid entry {name:?}: {reason}")]
    Invalid { name: String, reason: String },
}
