//! PDF and video player hosting
//!
//! The platform renders documents and plays video; this module owns what
//! surrounds it. A [`PlayerHost`] tracks the adapter's load lifecycle and
//! degrades every adapter failure to an in-place error state with recovery
//! actions. [`FileActions`] runs download and share through the host's
//! [`FileOperations`] capability and turns failures into user-facing alerts.

mod error;
mod ops;
mod state;

pub use error::{OperationError, Result};
pub use ops::{FileActions, FileOperations, OperationOutcome, SizeHint};
pub use state::{PlayerEvent, PlayerHost, PlayerKind, PlayerMetadata, PlayerState, RecoveryAction};
