use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read params file {}: {source}", path.display())]
    ParamsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid params file {}: {source}", path.display())]
    ParamsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{failed} of {total} image(s) failed to process")]
    BatchFailed { failed: usize, total: usize },

    #[error(transparent)]
    Normalize(#[from] aspectnorm::Error),
}
