//! Error types for folio-router

use thiserror::Error;

/// Result type alias for router operations
pub type Result<T> = std::result::Result<T, RouterError>;

/// Error types for the view router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Registry built without an entry for its fallback key
    #[error("Registry has no view for fallback key: {0}")]
    MissingFallback(String),

    /// Mount element not present in the document
    #[error("Mount element not found: #{0}")]
    MountNotFound(String),

    /// Failure reported by the host environment (DOM, listeners)
    #[error("Host error: {0}")]
    Host(String),
}
