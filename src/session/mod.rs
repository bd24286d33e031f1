//! Viewer session management
//!
//! Owns the single source of truth for what the viewer is showing: which
//! modal kind is open, over which files, at which index.
//!
//! # Lifecycle
//!
//! ```text
//! Closed --open*()--> Open --close()--> Closing (grace) --tick() after delay--> Closed
//!                      ^                  |
//!                      +----open*()-------+   (pending clear cancelled)
//! ```
//!
//! Opening a different kind while open replaces the session in one step.

mod controller;
mod error;
mod subset;

pub use controller::{
    DEFAULT_CLOSE_GRACE, OpenKind, SessionConfig, SessionPhase, SessionSnapshot, ViewerSession,
    ViewerSessionController,
};
pub use error::{Result, SessionError};
pub use subset::{NavigateDirection, PreviewableSubset};
