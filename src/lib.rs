//! Peekr - File preview decision and interaction engine
//!
//! This library decides how a file should be presented (in-app modal, share
//! sheet, or silent download) and drives the in-app viewer: session
//! lifecycle, gallery navigation over previewable files, and the pinch, pan
//! and swipe gesture math of the image surface.
//!
//! Rendering, decoding and transport belong to the host. The host feeds
//! gestures and player callbacks in, calls `tick`/`step` from its frame
//! loop, and draws the [`viewer::ViewerFrame`] it gets back.
//!
//! # Example
//!
//! ```
//! use peekr::classify::FileDescriptor;
//! use peekr::config::PeekrConfig;
//! use peekr::timing::ManualClock;
//! use peekr::viewer::Viewer;
//!
//! let mut viewer = Viewer::new(ManualClock::new(), &PeekrConfig::default());
//! let files = vec![
//!     FileDescriptor::new("a", "beach.jpg", "image/jpeg", 2_000_000),
//!     FileDescriptor::new("b", "notes.docx", "", 40_000),
//!     FileDescriptor::new("c", "sunset.png", "image/png", 3_000_000),
//! ];
//!
//! let routed = viewer.present(files, 0).unwrap();
//! assert!(routed.decision.is_modal());
//! assert_eq!(viewer.frame().session.counter, Some((1, 2)));
//! ```

use thiserror::Error;

pub mod classify;
pub mod cli;
pub mod config;
pub mod gesture;
pub mod output;
pub mod player;
pub mod routing;
pub mod session;
pub mod timing;
pub mod viewer;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PeekrError {
    /// Viewer session error
    #[error("Session error: {0}")]
    SessionError(#[from] session::SessionError),
    /// File operation error
    #[error("File operation error: {0}")]
    OperationError(#[from] player::OperationError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// File manifest could not be parsed
    #[error("Manifest error: {0}")]
    ManifestError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
