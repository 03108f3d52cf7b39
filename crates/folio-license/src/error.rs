//! Error types for folio-license

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for license header operations
pub type Result<T> = std::result::Result<T, LicenseError>;

#[derive(Debug, Error)]
pub enum LicenseError {
    /// Reading or writing a file failed
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// package.json exists but is not valid JSON
    #[error("Invalid package.json at {path}: {source}")]
    PackageJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No --project given and no name in package.json
    #[error("Project name unknown: pass --project or add \"name\" to {0}")]
    MissingProjectName(PathBuf),

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl LicenseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
