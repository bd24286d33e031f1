//! Auto-hiding viewer controls

use crate::timing::Debounce;
use std::time::Duration;

/// Idle time before the header, footer and thumbnail strip hide
pub const DEFAULT_CONTROLS_HIDE: Duration = Duration::from_millis(3000);

/// Visibility of on-screen controls with an idle countdown
///
/// All methods take the current time so the owner decides which clock to
/// read.
#[derive(Debug, Clone)]
pub struct ControlsVisibility {
    visible: bool,
    hide_timer: Debounce,
}

impl ControlsVisibility {
    /// Visible controls with no countdown running
    #[must_use]
    pub const fn new(hide_after: Duration) -> Self {
        Self {
            visible: true,
            hide_timer: Debounce::new(hide_after),
        }
    }

    /// Whether controls are shown
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a hide countdown is running
    #[must_use]
    pub const fn is_counting_down(&self) -> bool {
        self.hide_timer.is_pending()
    }

    /// Show controls and restart the countdown
    pub fn show(&mut self, now: Duration) {
        self.visible = true;
        self.hide_timer.restart(now);
    }

    /// Hide controls immediately
    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_timer.cancel();
    }

    /// Flip visibility (single tap)
    pub fn toggle(&mut self, now: Duration) {
        if self.visible {
            self.hide();
        } else {
            self.show(now);
        }
    }

    /// Restart the countdown on user activity
    ///
    /// Hidden controls stay hidden; only a tap or navigation brings them back.
    pub fn register_activity(&mut self, now: Duration) {
        if self.visible {
            self.hide_timer.restart(now);
        }
    }

    /// Hide controls if the countdown has elapsed
    ///
    /// Returns `true` when this call hid them.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.hide_timer.fire_if_due(now) {
            self.visible = false;
            return true;
        }
        false
    }

    /// Stop the countdown without changing visibility
    pub fn cancel(&mut self) {
        self.hide_timer.cancel();
    }
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROLS_HIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{Clock, ManualClock};

    #[test]
    fn test_controls_hide_after_idle() {
        let clock = ManualClock::new();
        let mut controls = ControlsVisibility::default();
        controls.show(clock.now());

        clock.advance_ms(2_999);
        assert!(!controls.tick(clock.now()));
        assert!(controls.is_visible());

        clock.advance_ms(1);
        assert!(controls.tick(clock.now()));
        assert!(!controls.is_visible());
    }

    #[test]
    fn test_activity_restarts_countdown() {
        let clock = ManualClock::new();
        let mut controls = ControlsVisibility::default();
        controls.show(clock.now());

        clock.advance_ms(2_000);
        controls.register_activity(clock.now());
        clock.advance_ms(2_000);
        assert!(!controls.tick(clock.now()));

        clock.advance_ms(1_000);
        assert!(controls.tick(clock.now()));
    }

    #[test]
    fn test_activity_does_not_reveal_hidden_controls() {
        let clock = ManualClock::new();
        let mut controls = ControlsVisibility::default();
        controls.hide();
        controls.register_activity(clock.now());

        assert!(!controls.is_visible());
        assert!(!controls.is_counting_down());
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let clock = ManualClock::new();
        let mut controls = ControlsVisibility::default();
        controls.show(clock.now());

        controls.toggle(clock.now());
        assert!(!controls.is_visible());
        controls.toggle(clock.now());
        assert!(controls.is_visible());
        assert!(controls.is_counting_down());
    }

    #[test]
    fn test_cancel_keeps_controls_visible() {
        let clock = ManualClock::new();
        let mut controls = ControlsVisibility::default();
        controls.show(clock.now());
        controls.cancel();

        clock.advance_ms(10_000);
        assert!(!controls.tick(clock.now()));
        assert!(controls.is_visible());
    }
}
