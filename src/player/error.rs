//! File operation error types

use thiserror::Error;

/// Failures reported by the host's file-operation capability
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    /// No URL could be built for the file
    #[error("Could not resolve file URL: {0}")]
    ResolveUrl(String),

    /// Download failed or was interrupted
    #[error("Download failed: {0}")]
    Download(String),

    /// The share sheet could not be presented
    #[error("Share failed: {0}")]
    Share(String),
}

/// Result type for file operations
pub type Result<T> = std::result::Result<T, OperationError>;
