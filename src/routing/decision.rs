//! Routing decision types

use crate::classify::FileDescriptor;
use serde::Serialize;
use std::fmt;

use super::security::SecurityAdvisory;

/// Which in-app modal renders a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalComponent {
    /// Zoomable image viewer
    Image,
    /// PDF player
    Pdf,
    /// Video player
    Video,
}

impl fmt::Display for ModalComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Video => "video",
        })
    }
}

/// Outcome of routing a single file
///
/// A `warning`, when present, must be shown to the user before or alongside
/// the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ActionDecision {
    /// Open an in-app modal
    Modal {
        /// Modal to open
        component: ModalComponent,
        /// File to show
        file: FileDescriptor,
    },
    /// Hand off to the system share sheet
    Share {
        /// User-facing warning
        warning: Option<String>,
    },
    /// Download without previewing
    Download {
        /// User-facing warning
        warning: Option<String>,
    },
}

impl ActionDecision {
    /// Warning attached to the decision, if any
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Modal { .. } => None,
            Self::Share { warning } | Self::Download { warning } => warning.as_deref(),
        }
    }

    /// Whether the decision opens an in-app modal
    #[must_use]
    pub const fn is_modal(&self) -> bool {
        matches!(self, Self::Modal { .. })
    }

    /// Short name of the action
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Modal { .. } => "modal",
            Self::Share { .. } => "share",
            Self::Download { .. } => "download",
        }
    }
}

/// Routing decision together with any security advisories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutedAction {
    /// The action to take
    pub decision: ActionDecision,
    /// Advisory findings; never block the decision
    pub advisories: Vec<SecurityAdvisory>,
}

impl RoutedAction {
    /// Whether the caller should consider prompting before proceeding
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.decision.warning().is_some() || !self.advisories.is_empty()
    }
}
