//! Session error types

use crate::classify::FileId;
use thiserror::Error;

/// Errors from viewer session operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Tried to open the viewer with no files
    #[error("Cannot open the viewer with an empty file list")]
    EmptyFileSet,

    /// Two files in one list share an id
    #[error("Duplicate file id in viewer list: {0}")]
    DuplicateFileId(FileId),

    /// Direct jump outside the file list
    #[error("Index {index} is out of range for {len} file(s)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of files
        len: usize,
    },

    /// Operation requires an open viewer
    #[error("No viewer is open")]
    NotOpen,
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
