//! Error handling for the packaging layer.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while writing an export.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl PackageError {
    /// Attach the path an I/O error happened on.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, PackageError>;
