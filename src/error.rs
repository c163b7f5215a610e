//! Error types for `mtsfix`

use thiserror::Error;

/// The error type for `mtsfix` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a readable zip-compatible archive.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The extracted tree has no `assets/` root directory.
    #[error("No 'assets' folder in archive")]
    NoAssetsRoot,

    /// JSON serialization error while writing a model descriptor.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDir(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err.to_string())
    }
}

/// A specialized Result type for `mtsfix` operations.
pub type Result<T> = std::result::Result<T, Error>;
