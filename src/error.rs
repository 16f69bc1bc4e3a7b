use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading the version declaration. These are fatal: the
/// pipeline cannot proceed without a base version.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read version file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no `__version__ = \"<version>\"` line found in {}", .path.display())]
    VersionNotFound { path: PathBuf },
}

/// Errors from a release index fetch. These are recoverable: the caller
/// degrades to an empty release set instead of aborting.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("index returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
