//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant is fatal at the process boundary; the CLI prints the message
//! and exits non-zero.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input path does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Unsupported file type: {} (expected one of: jpg, jpeg, png, webp)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("No supported images found in directory: {}", dir.display())]
    NoSupportedFiles { dir: PathBuf },

    #[error("Failed to decode {}: {reason}", path.display())]
    DecodeFailure { path: PathBuf, reason: String },

    #[error("Failed to encode {}: {reason}", path.display())]
    EncodeFailure { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }

    pub(crate) fn decode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::DecodeFailure {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub(crate) fn encode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::EncodeFailure {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}
