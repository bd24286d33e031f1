//! Action routing
//!
//! Decides how a file should be presented: in an in-app modal, handed to
//! the system share sheet, or downloaded silently. Security checks run
//! alongside routing and only annotate the result.
//!
//! # Architecture
//!
//! - `decision`: `ActionDecision` and the modal component it targets
//! - `router`: size-threshold routing over `FileCategory`
//! - `security`: advisory checks for dangerous or oversize files

mod decision;
mod router;
mod security;

pub use decision::{ActionDecision, ModalComponent, RoutedAction};
pub use router::{ActionRouter, RouterConfig};
pub use security::{SecurityAdvisory, validate_security};
