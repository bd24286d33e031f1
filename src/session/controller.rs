//! Viewer session state machine

use crate::classify::{FileDescriptor, FileId};
use crate::timing::{Clock, Debounce, SystemClock};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

use super::error::{Result, SessionError};
use super::subset::{NavigateDirection, PreviewableSubset};

/// Default delay between a visual close and clearing the file list
pub const DEFAULT_CLOSE_GRACE: Duration = Duration::from_millis(300);

/// Which modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenKind {
    /// Nothing is shown
    #[default]
    None,
    /// Zoomable image viewer
    Image,
    /// PDF player
    Pdf,
    /// Video player
    Video,
}

/// Derived lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// No modal, no files retained
    Closed,
    /// A modal is visible
    Open,
    /// Modal hidden, files retained until the grace delay passes
    Closing,
}

/// Configuration for the session controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Grace period before a closed session drops its files
    pub close_grace: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            close_grace: DEFAULT_CLOSE_GRACE,
        }
    }
}

/// What the viewer is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerSession {
    open_kind: OpenKind,
    files: Vec<FileDescriptor>,
    current_index: usize,
}

impl ViewerSession {
    /// Open modal kind
    #[must_use]
    pub const fn open_kind(&self) -> OpenKind {
        self.open_kind
    }

    /// Files backing the session (retained during the grace period)
    #[must_use]
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    /// Raw index of the current file
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current file, if any files are retained
    #[must_use]
    pub fn current_file(&self) -> Option<&FileDescriptor> {
        self.files.get(self.current_index)
    }

    /// Whether a modal is visible
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open_kind != OpenKind::None
    }
}

/// Serializable view of the session for header/footer rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Open modal kind
    pub open_kind: OpenKind,
    /// Lifecycle phase
    pub phase: SessionPhase,
    /// Current file
    pub current_file: Option<FileDescriptor>,
    /// Raw index of the current file
    pub current_index: usize,
    /// Number of files in the session
    pub file_count: usize,
    /// 1-based position and size of the previewable subset
    pub counter: Option<(usize, usize)>,
}

/// Owns the viewer session and its deferred cleanup
///
/// One controller per viewer provider. Time is read from the injected
/// [`Clock`]; the host calls [`tick`](Self::tick) to let the grace timer
/// fire.
pub struct ViewerSessionController<C: Clock = SystemClock> {
    clock: C,
    session: ViewerSession,
    subset: PreviewableSubset,
    pending_clear: Debounce,
}

impl<C: Clock> ViewerSessionController<C> {
    /// Create an empty, closed controller
    #[must_use]
    pub fn new(clock: C, config: SessionConfig) -> Self {
        Self {
            clock,
            session: ViewerSession::default(),
            subset: PreviewableSubset::default(),
            pending_clear: Debounce::new(config.close_grace),
        }
    }

    /// Open the image viewer over a file list
    ///
    /// An out-of-range `index` is clamped to 0.
    ///
    /// # Errors
    ///
    /// Returns `EmptyFileSet` for an empty list and `DuplicateFileId` if two
    /// files share an id. The previous session is untouched on error.
    pub fn open_image(&mut self, files: Vec<FileDescriptor>, index: usize) -> Result<()> {
        self.open(OpenKind::Image, files, index)
    }

    /// Open the PDF player for a single file
    pub fn open_pdf(&mut self, file: FileDescriptor) {
        self.open_single(OpenKind::Pdf, file);
    }

    /// Open the video player for a single file
    pub fn open_video(&mut self, file: FileDescriptor) {
        self.open_single(OpenKind::Video, file);
    }

    fn open_single(&mut self, kind: OpenKind, file: FileDescriptor) {
        self.replace(kind, vec![file], 0);
    }

    fn open(&mut self, kind: OpenKind, files: Vec<FileDescriptor>, index: usize) -> Result<()> {
        if files.is_empty() {
            return Err(SessionError::EmptyFileSet);
        }

        let duplicate = {
            let mut seen = HashSet::with_capacity(files.len());
            files
                .iter()
                .find(|file| !seen.insert(&file.id))
                .map(|file| file.id.clone())
        };
        if let Some(id) = duplicate {
            return Err(SessionError::DuplicateFileId(id));
        }

        let index = if index < files.len() { index } else { 0 };
        self.replace(kind, files, index);
        Ok(())
    }

    fn replace(&mut self, kind: OpenKind, files: Vec<FileDescriptor>, index: usize) {
        if self.pending_clear.is_pending() {
            debug!("reopened during close grace, cancelling pending clear");
            self.pending_clear.cancel();
        }
        if self.session.is_open() && self.session.open_kind != kind {
            debug!(
                from = ?self.session.open_kind,
                to = ?kind,
                "replacing open viewer"
            );
        }

        self.subset = PreviewableSubset::from_files(&files);
        self.session = ViewerSession {
            open_kind: kind,
            files,
            current_index: index,
        };
        debug!(
            kind = ?kind,
            index,
            count = self.session.files.len(),
            previewable = self.subset.len(),
            "viewer opened"
        );
    }

    /// Hide the viewer now and clear its files after the grace period
    pub fn close(&mut self) {
        if !self.session.is_open() {
            return;
        }
        self.session.open_kind = OpenKind::None;
        self.pending_clear.restart(self.clock.now());
        debug!(grace = ?self.pending_clear.delay(), "viewer closed");
    }

    /// Fire the deferred clear if its deadline has passed
    ///
    /// Returns `true` when the file list was cleared by this call.
    pub fn tick(&mut self) -> bool {
        if !self.pending_clear.fire_if_due(self.clock.now()) {
            return false;
        }
        self.clear_files();
        debug!("close grace elapsed, session cleared");
        true
    }

    /// Tear down on unmount of the owning provider
    ///
    /// Cancels any pending clear and drops the session immediately.
    pub fn dispose(&mut self) {
        self.pending_clear.cancel();
        self.session.open_kind = OpenKind::None;
        self.clear_files();
    }

    fn clear_files(&mut self) {
        self.session.files.clear();
        self.session.current_index = 0;
        self.subset = PreviewableSubset::default();
    }

    /// Step through the previewable subset
    ///
    /// Returns `true` if the current file changed. No-op while closed or
    /// when fewer than two files are previewable.
    pub fn navigate(&mut self, direction: NavigateDirection) -> bool {
        if !self.session.is_open() {
            return false;
        }
        let Some(target) = self.subset.step(self.session.current_index, direction) else {
            return false;
        };

        debug!(
            from = self.session.current_index,
            to = target,
            ?direction,
            "navigated"
        );
        self.session.current_index = target;
        true
    }

    /// Jump directly to a raw index (thumbnail strip)
    ///
    /// # Errors
    ///
    /// Returns `NotOpen` while closed and `IndexOutOfRange` for an index
    /// past the end of the list.
    pub fn set_index(&mut self, index: usize) -> Result<()> {
        if !self.session.is_open() {
            return Err(SessionError::NotOpen);
        }
        let len = self.session.files.len();
        if index >= len {
            return Err(SessionError::IndexOutOfRange { index, len });
        }
        self.session.current_index = index;
        Ok(())
    }

    /// Clock the controller reads
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Current session state
    #[must_use]
    pub const fn session(&self) -> &ViewerSession {
        &self.session
    }

    /// Open modal kind
    #[must_use]
    pub const fn open_kind(&self) -> OpenKind {
        self.session.open_kind
    }

    /// Id of the current file, if any
    #[must_use]
    pub fn current_file_id(&self) -> Option<&FileId> {
        self.session.current_file().map(|file| &file.id)
    }

    /// Lifecycle phase derived from the session and the grace timer
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.session.is_open() {
            SessionPhase::Open
        } else if self.pending_clear.is_pending() {
            SessionPhase::Closing
        } else {
            SessionPhase::Closed
        }
    }

    /// Memoized previewable subset of the current file list
    #[must_use]
    pub const fn previewable_subset(&self) -> &PreviewableSubset {
        &self.subset
    }

    /// 1-based position of the current file in the previewable subset
    #[must_use]
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.subset
            .position_of(self.session.current_index)
            .map(|position| (position + 1, self.subset.len()))
    }

    /// Serializable snapshot for the host UI
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            open_kind: self.session.open_kind,
            phase: self.phase(),
            current_file: self.session.current_file().cloned(),
            current_index: self.session.current_index,
            file_count: self.session.files.len(),
            counter: self.counter(),
        }
    }
}

impl Default for ViewerSessionController<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new(), SessionConfig::default())
    }
}
