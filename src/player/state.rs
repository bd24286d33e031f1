//! Player load lifecycle

use crate::classify::FileId;
use serde::Serialize;
use tracing::{debug, warn};

/// Fallback overlay text when an adapter reports an empty error
const GENERIC_LOAD_ERROR: &str = "This file could not be loaded";

/// Which native player backs the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Document renderer
    Pdf,
    /// Video player
    Video,
}

/// Metadata reported once loading completes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlayerMetadata {
    /// A loaded document
    #[serde(rename_all = "camelCase")]
    Pdf {
        /// Number of pages
        page_count: u32,
    },
    /// A loaded video
    #[serde(rename_all = "camelCase")]
    Video {
        /// Length in seconds
        duration_secs: f64,
    },
}

impl PlayerMetadata {
    const fn kind(&self) -> PlayerKind {
        match self {
            Self::Pdf { .. } => PlayerKind::Pdf,
            Self::Video { .. } => PlayerKind::Video,
        }
    }
}

/// Load state shown by the player overlay
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PlayerState {
    /// Nothing reported yet
    #[default]
    Idle,
    /// Loading, with a fraction in `[0, 1]`
    Loading {
        /// Load progress
        progress: f32,
    },
    /// Ready to display
    Ready {
        /// Reported metadata
        metadata: PlayerMetadata,
        /// Playback or scroll progress in `[0, 1]`
        progress: f32,
    },
    /// Load failed; the overlay offers recovery actions
    Failed {
        /// Message for the overlay
        message: String,
    },
}

/// Affordances offered on a failed load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecoveryAction {
    /// Reload in place
    Retry,
    /// Hand the file to another app
    OpenExternally,
    /// Save the file locally
    Download,
}

/// Callbacks a native player adapter reports
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Loading started
    LoadStart,
    /// Loading finished
    LoadComplete(PlayerMetadata),
    /// Progress fraction; clamped to `[0, 1]`
    Progress(f32),
    /// Visible PDF page changed (1-based)
    PageChanged {
        /// New page
        page: u32,
    },
    /// Loading or playback failed
    Error(String),
}

/// Host state for one open PDF or video
///
/// Every adapter callback is accepted. Inconsistent input (metadata of the
/// wrong kind, a document with no pages) lands in [`PlayerState::Failed`]
/// instead of propagating.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHost {
    kind: PlayerKind,
    file_id: FileId,
    state: PlayerState,
    current_page: Option<u32>,
    attempts: u32,
}

impl PlayerHost {
    /// Create an idle host for a file
    #[must_use]
    pub const fn new(kind: PlayerKind, file_id: FileId) -> Self {
        Self {
            kind,
            file_id,
            state: PlayerState::Idle,
            current_page: None,
            attempts: 0,
        }
    }

    /// Player kind
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// File being played
    #[must_use]
    pub const fn file_id(&self) -> &FileId {
        &self.file_id
    }

    /// Current load state
    #[must_use]
    pub const fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Number of retries so far
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Visible page of a loaded PDF
    #[must_use]
    pub const fn current_page(&self) -> Option<u32> {
        self.current_page
    }

    /// Whether the player is ready to display
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, PlayerState::Ready { .. })
    }

    /// Whether the error overlay is showing
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.state, PlayerState::Failed { .. })
    }

    /// Apply one adapter callback
    pub fn handle(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::LoadStart => {
                self.state = PlayerState::Loading { progress: 0.0 };
                self.current_page = None;
            }
            PlayerEvent::LoadComplete(metadata) => self.load_complete(metadata),
            PlayerEvent::Progress(fraction) => self.progress(fraction),
            PlayerEvent::PageChanged { page } => {
                if let PlayerState::Ready {
                    metadata: PlayerMetadata::Pdf { page_count },
                    ..
                } = self.state
                {
                    self.current_page = Some(page.clamp(1, page_count));
                }
            }
            PlayerEvent::Error(message) => {
                let message = if message.trim().is_empty() {
                    GENERIC_LOAD_ERROR.to_string()
                } else {
                    message
                };
                self.fail(message);
            }
        }
    }

    fn load_complete(&mut self, metadata: PlayerMetadata) {
        if metadata.kind() != self.kind {
            self.fail(format!(
                "Unexpected {:?} metadata for a {:?} player",
                metadata.kind(),
                self.kind
            ));
            return;
        }

        match metadata {
            PlayerMetadata::Pdf { page_count: 0 } => {
                self.fail("This document has no pages".to_string());
            }
            PlayerMetadata::Video { duration_secs }
                if !duration_secs.is_finite() || duration_secs < 0.0 =>
            {
                self.fail("This video reported an invalid duration".to_string());
            }
            PlayerMetadata::Pdf { .. } => {
                self.current_page = Some(1);
                self.state = PlayerState::Ready {
                    metadata,
                    progress: 0.0,
                };
            }
            PlayerMetadata::Video { .. } => {
                self.state = PlayerState::Ready {
                    metadata,
                    progress: 0.0,
                };
            }
        }
        debug!(file = %self.file_id, state = ?self.state, "player load complete");
    }

    fn progress(&mut self, fraction: f32) {
        if fraction.is_nan() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);

        match &mut self.state {
            PlayerState::Loading { progress } | PlayerState::Ready { progress, .. } => {
                *progress = fraction;
            }
            // adapters may report progress without a LoadStart
            PlayerState::Idle => {
                self.state = PlayerState::Loading { progress: fraction };
            }
            PlayerState::Failed { .. } => {}
        }
    }

    fn fail(&mut self, message: String) {
        warn!(file = %self.file_id, kind = ?self.kind, %message, "player failed to load");
        self.current_page = None;
        self.state = PlayerState::Failed { message };
    }

    /// Recovery affordances for the error overlay; empty unless failed
    #[must_use]
    pub fn recovery_actions(&self) -> &'static [RecoveryAction] {
        if self.is_failed() {
            &[
                RecoveryAction::Retry,
                RecoveryAction::OpenExternally,
                RecoveryAction::Download,
            ]
        } else {
            &[]
        }
    }

    /// Reload after a failure
    ///
    /// Returns `false` unless the host was in the failed state.
    pub fn retry(&mut self) -> bool {
        if !self.is_failed() {
            return false;
        }
        self.attempts += 1;
        self.state = PlayerState::Loading { progress: 0.0 };
        debug!(file = %self.file_id, attempts = self.attempts, "retrying player load");
        true
    }

    /// Footer label such as `"3 / 12"` for a loaded PDF
    #[must_use]
    pub fn page_label(&self) -> Option<String> {
        match (&self.state, self.current_page) {
            (
                PlayerState::Ready {
                    metadata: PlayerMetadata::Pdf { page_count },
                    ..
                },
                Some(page),
            ) => Some(format!("{page} / {page_count}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_host() -> PlayerHost {
        PlayerHost::new(PlayerKind::Pdf, FileId::new("doc"))
    }

    #[test]
    fn test_pdf_load_lifecycle() {
        let mut host = pdf_host();
        assert_eq!(host.state(), &PlayerState::Idle);

        host.handle(PlayerEvent::LoadStart);
        host.handle(PlayerEvent::Progress(0.4));
        assert_eq!(host.state(), &PlayerState::Loading { progress: 0.4 });

        host.handle(PlayerEvent::LoadComplete(PlayerMetadata::Pdf { page_count: 12 }));
        assert!(host.is_ready());
        assert_eq!(host.current_page(), Some(1));
        assert_eq!(host.page_label().as_deref(), Some("1 / 12"));
        assert!(host.recovery_actions().is_empty());
    }

    #[test]
    fn test_page_changes_are_clamped() {
        let mut host = pdf_host();
        host.handle(PlayerEvent::LoadComplete(PlayerMetadata::Pdf { page_count: 5 }));

        host.handle(PlayerEvent::PageChanged { page: 3 });
        assert_eq!(host.page_label().as_deref(), Some("3 / 5"));

        host.handle(PlayerEvent::PageChanged { page: 40 });
        assert_eq!(host.current_page(), Some(5));

        host.handle(PlayerEvent::PageChanged { page: 0 });
        assert_eq!(host.current_page(), Some(1));
    }

    #[test]
    fn test_page_change_before_ready_is_ignored() {
        let mut host = pdf_host();
        host.handle(PlayerEvent::LoadStart);
        host.handle(PlayerEvent::PageChanged { page: 2 });
        assert_eq!(host.current_page(), None);
    }

    #[test]
    fn test_progress_is_clamped_and_nan_ignored() {
        let mut host = PlayerHost::new(PlayerKind::Video, FileId::new("clip"));
        host.handle(PlayerEvent::Progress(1.7));
        assert_eq!(host.state(), &PlayerState::Loading { progress: 1.0 });

        host.handle(PlayerEvent::Progress(f32::NAN));
        assert_eq!(host.state(), &PlayerState::Loading { progress: 1.0 });

        host.handle(PlayerEvent::LoadComplete(PlayerMetadata::Video {
            duration_secs: 42.5,
        }));
        host.handle(PlayerEvent::Progress(-0.2));
        assert!(matches!(
            host.state(),
            PlayerState::Ready { progress, .. } if *progress == 0.0
        ));
    }

    #[test]
    fn test_error_offers_recovery_and_retry() {
        let mut host = pdf_host();
        host.handle(PlayerEvent::LoadStart);
        host.handle(PlayerEvent::Error("corrupt xref table".into()));

        assert!(host.is_failed());
        assert_eq!(
            host.recovery_actions(),
            &[
                RecoveryAction::Retry,
                RecoveryAction::OpenExternally,
                RecoveryAction::Download
            ]
        );

        assert!(host.retry());
        assert_eq!(host.attempts(), 1);
        assert_eq!(host.state(), &PlayerState::Loading { progress: 0.0 });
        assert!(!host.retry());
    }

    #[test]
    fn test_empty_error_message_gets_fallback() {
        let mut host = pdf_host();
        host.handle(PlayerEvent::Error("  ".into()));
        assert_eq!(
            host.state(),
            &PlayerState::Failed {
                message: GENERIC_LOAD_ERROR.to_string()
            }
        );
    }

    #[test]
    fn test_inconsistent_metadata_degrades_to_failure() {
        let mut host = pdf_host();
        host.handle(PlayerEvent::LoadComplete(PlayerMetadata::Video {
            duration_secs: 3.0,
        }));
        assert!(host.is_failed());

        let mut host = pdf_host();
        host.handle(PlayerEvent::LoadComplete(PlayerMetadata::Pdf { page_count: 0 }));
        assert!(host.is_failed());
        assert_eq!(host.page_label(), None);

        let mut host = PlayerHost::new(PlayerKind::Video, FileId::new("clip"));
        host.handle(PlayerEvent::LoadComplete(PlayerMetadata::Video {
            duration_secs: f64::INFINITY,
        }));
        assert!(host.is_failed());
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let mut host = pdf_host();
        host.handle(PlayerEvent::LoadComplete(PlayerMetadata::Pdf { page_count: 2 }));
        let json = serde_json::to_value(&host).unwrap();

        assert_eq!(json["kind"], "pdf");
        assert_eq!(json["state"]["state"], "ready");
        assert_eq!(json["state"]["metadata"]["pageCount"], 2);
        assert_eq!(json["currentPage"], 1);
    }
}
