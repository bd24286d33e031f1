//! Viewer coordinator
//!
//! Ties routing, the session controller, the gesture engine, the controls
//! countdown and the player host together behind one surface. The host
//! forwards input and adapter callbacks here, calls [`Viewer::tick`] and
//! [`Viewer::step`] from its frame loop, and renders [`Viewer::frame`].
//!
//! Whenever the current file changes (fresh open or navigation) the gesture
//! transform returns to identity, the controls reappear, and a new player
//! host is created for PDFs and videos.

use crate::classify::{FileDescriptor, FileId};
use crate::config::PeekrConfig;
use crate::gesture::{
    ControlsVisibility, GestureEvent, GestureOutcome, GestureTransform, PreviewRenderer, Viewport,
};
use crate::player::{PlayerEvent, PlayerHost, PlayerKind};
use crate::routing::{ActionDecision, ActionRouter, ModalComponent, RoutedAction};
use crate::session::{
    NavigateDirection, OpenKind, Result, SessionError, SessionSnapshot, ViewerSessionController,
};
use crate::timing::{Clock, SystemClock};
use serde::Serialize;
use tracing::debug;

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerFrame {
    /// Header/footer/thumbnail-strip state
    pub session: SessionSnapshot,
    /// Transform for the image layer
    pub transform: GestureTransform,
    /// Whether on-screen controls are shown
    pub controls_visible: bool,
    /// Player overlay state for PDFs and videos
    pub player: Option<PlayerHost>,
}

/// One viewer provider for the app
pub struct Viewer<C: Clock = SystemClock> {
    router: ActionRouter,
    session: ViewerSessionController<C>,
    renderer: PreviewRenderer,
    controls: ControlsVisibility,
    player: Option<PlayerHost>,
    shown: Option<FileId>,
}

impl<C: Clock> Viewer<C> {
    /// Create a closed viewer
    #[must_use]
    pub fn new(clock: C, config: &PeekrConfig) -> Self {
        Self {
            router: ActionRouter::new(config.router_config()),
            session: ViewerSessionController::new(clock, config.session_config()),
            renderer: PreviewRenderer::new(config.gesture_config(), Viewport::default()),
            controls: ControlsVisibility::new(config.controls_hide()),
            player: None,
            shown: None,
        }
    }

    /// Route the file at `index` and open the matching modal
    ///
    /// Images open over the whole list so the gallery can be swiped; PDFs
    /// and videos open on their own. Share and download decisions leave the
    /// viewer untouched; the caller performs them.
    ///
    /// # Errors
    ///
    /// Returns `EmptyFileSet` for an empty list and `DuplicateFileId` when an
    /// image gallery has repeated ids.
    pub fn present(&mut self, files: Vec<FileDescriptor>, index: usize) -> Result<RoutedAction> {
        let Some(file) = files.get(index).or_else(|| files.first()) else {
            return Err(SessionError::EmptyFileSet);
        };
        let routed = self.router.route(file);

        match &routed.decision {
            ActionDecision::Modal {
                component: ModalComponent::Image,
                ..
            } => self.open_image(files, index)?,
            ActionDecision::Modal {
                component: ModalComponent::Pdf,
                file,
            } => self.open_pdf(file.clone()),
            ActionDecision::Modal {
                component: ModalComponent::Video,
                file,
            } => self.open_video(file.clone()),
            ActionDecision::Share { .. } | ActionDecision::Download { .. } => {
                debug!(action = routed.decision.label(), "presented outside the viewer");
            }
        }
        Ok(routed)
    }

    /// Open the image viewer over a gallery
    ///
    /// # Errors
    ///
    /// See [`ViewerSessionController::open_image`].
    pub fn open_image(&mut self, files: Vec<FileDescriptor>, index: usize) -> Result<()> {
        self.session.open_image(files, index)?;
        self.sync_current_file(true);
        Ok(())
    }

    /// Open the PDF player
    pub fn open_pdf(&mut self, file: FileDescriptor) {
        self.session.open_pdf(file);
        self.sync_current_file(true);
    }

    /// Open the video player
    pub fn open_video(&mut self, file: FileDescriptor) {
        self.session.open_video(file);
        self.sync_current_file(true);
    }

    /// Close the modal; content stays until the grace period ends
    pub fn close(&mut self) {
        self.session.close();
        self.controls.cancel();
    }

    /// Feed a gesture to the image surface
    ///
    /// Ignored unless the image viewer is open. Swipes navigate and single
    /// taps toggle the controls.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> GestureOutcome {
        if self.session.open_kind() != OpenKind::Image {
            return GestureOutcome::Handled;
        }
        let now = self.session.clock().now();
        self.controls.register_activity(now);

        let outcome = self.renderer.handle(event);
        match outcome {
            GestureOutcome::Navigate(direction) => {
                self.navigate(direction);
            }
            GestureOutcome::ToggleControls => self.controls.toggle(now),
            GestureOutcome::Handled => {}
        }
        outcome
    }

    /// Step through the previewable files
    ///
    /// Returns `true` if the current file changed.
    pub fn navigate(&mut self, direction: NavigateDirection) -> bool {
        if !self.session.navigate(direction) {
            return false;
        }
        self.sync_current_file(false);
        true
    }

    /// Jump to a file, e.g. from the thumbnail strip
    ///
    /// # Errors
    ///
    /// See [`ViewerSessionController::set_index`].
    pub fn set_index(&mut self, index: usize) -> Result<()> {
        self.session.set_index(index)?;
        self.sync_current_file(false);
        Ok(())
    }

    /// Rotate the image a quarter turn clockwise
    pub fn rotate_right(&mut self) {
        self.renderer.rotate_right();
        self.touch();
    }

    /// Rotate the image a quarter turn counter-clockwise
    pub fn rotate_left(&mut self) {
        self.renderer.rotate_left();
        self.touch();
    }

    /// Spring the image back to unzoomed
    pub fn reset_zoom(&mut self) {
        self.renderer.reset_zoom();
        self.touch();
    }

    /// Resize the viewing surface
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.renderer.set_viewport(viewport);
    }

    /// Forward a player adapter callback
    pub fn player_event(&mut self, event: PlayerEvent) {
        if let Some(player) = self.player.as_mut() {
            player.handle(event);
        }
    }

    /// Retry a failed PDF or video load
    pub fn retry_player(&mut self) -> bool {
        self.player.as_mut().is_some_and(PlayerHost::retry)
    }

    /// Fire due timers
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self) -> bool {
        let hidden = self.controls.tick(self.session.clock().now());
        let cleared = self.session.tick();
        if cleared {
            self.unmount();
        }
        hidden || cleared
    }

    /// Advance animations by `dt` seconds
    ///
    /// Returns `true` while anything is still animating.
    pub fn step(&mut self, dt: f32) -> bool {
        self.renderer.step(dt)
    }

    /// Tear everything down when the provider unmounts
    pub fn dispose(&mut self) {
        self.session.dispose();
        self.controls.cancel();
        self.unmount();
    }

    /// Current frame for the host to render
    #[must_use]
    pub fn frame(&self) -> ViewerFrame {
        ViewerFrame {
            session: self.session.snapshot(),
            transform: self.renderer.transform(),
            controls_visible: self.controls.is_visible(),
            player: self.player.clone(),
        }
    }

    /// Router used by [`present`](Self::present)
    #[must_use]
    pub const fn router(&self) -> &ActionRouter {
        &self.router
    }

    /// Session controller
    #[must_use]
    pub const fn session(&self) -> &ViewerSessionController<C> {
        &self.session
    }

    /// Gesture engine for the image surface
    #[must_use]
    pub const fn renderer(&self) -> &PreviewRenderer {
        &self.renderer
    }

    /// Player host for an open PDF or video
    #[must_use]
    pub const fn player(&self) -> Option<&PlayerHost> {
        self.player.as_ref()
    }

    /// Whether on-screen controls are shown
    #[must_use]
    pub const fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    fn touch(&mut self) {
        self.controls.register_activity(self.session.clock().now());
    }

    fn unmount(&mut self) {
        self.renderer.reset();
        self.player = None;
        self.shown = None;
    }

    /// Reset per-file surfaces if the current file changed
    fn sync_current_file(&mut self, fresh_open: bool) {
        let current = self.session.current_file_id().cloned();
        if !fresh_open && current == self.shown {
            return;
        }

        self.renderer.reset();
        self.controls.show(self.session.clock().now());
        self.player = match (self.session.open_kind(), &current) {
            (OpenKind::Pdf, Some(id)) => Some(PlayerHost::new(PlayerKind::Pdf, id.clone())),
            (OpenKind::Video, Some(id)) => Some(PlayerHost::new(PlayerKind::Video, id.clone())),
            _ => None,
        };
        debug!(file = ?current, kind = ?self.session.open_kind(), "showing file");
        self.shown = current;
    }
}

impl Default for Viewer<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new(), &PeekrConfig::default())
    }
}
