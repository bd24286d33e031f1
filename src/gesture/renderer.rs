//! Gesture reducer for the image surface
//!
//! One `handle` call per gesture phase. Pinch and pan write values directly
//! while a finger is down; releasing hands the values to springs that
//! settle into bounds.
//!
//! ```text
//! PinchBegin ─ PinchUpdate* ─ PinchEnd      scale / focal translation
//! PanBegin   ─ PanUpdate*   ─ PanEnd        zoomed pan  or  swipe card
//! Tap                                       toggle controls
//! DoubleTap                                 zoom to point / reset
//! ```

use super::spring::{Spring, SpringConfig};
use super::transform::{GestureTransform, Rotation, Viewport};
use super::{MAX_ZOOM, MIN_ZOOM, SWIPE_THRESHOLD, ZOOM_EPSILON};
use crate::session::NavigateDirection;
use tracing::debug;

/// Tunables for the gesture engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Lower scale bound
    pub min_zoom: f32,
    /// Upper scale bound
    pub max_zoom: f32,
    /// Drag distance that commits a swipe
    pub swipe_threshold: f32,
    /// Card opacity at full swipe fade
    pub swipe_min_opacity: f32,
    /// Target scale for double-tap zoom
    pub double_tap_scale: f32,
    /// Whether unzoomed horizontal drags navigate between files
    pub swipe_navigation: bool,
    /// Settling spring constants
    pub spring: SpringConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            swipe_threshold: SWIPE_THRESHOLD,
            swipe_min_opacity: 0.7,
            double_tap_scale: 2.5,
            swipe_navigation: true,
            spring: SpringConfig::default(),
        }
    }
}

/// Raw gesture input, one variant per phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Two fingers down
    PinchBegin {
        /// Focal point, screen x
        focal_x: f32,
        /// Focal point, screen y
        focal_y: f32,
    },
    /// Pinch moved; `scale` is relative to the gesture start
    PinchUpdate {
        /// Raw gesture scale
        scale: f32,
    },
    /// Pinch released
    PinchEnd,
    /// One finger down and moving
    PanBegin,
    /// Pan moved; translation is cumulative since `PanBegin`
    PanUpdate {
        /// Horizontal translation
        translation_x: f32,
        /// Vertical translation
        translation_y: f32,
    },
    /// Pan released
    PanEnd,
    /// Single tap
    Tap,
    /// Double tap at a screen point
    DoubleTap {
        /// Screen x
        x: f32,
        /// Screen y
        y: f32,
    },
}

/// What the caller should do after a gesture event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Transform updated, nothing else to do
    Handled,
    /// A swipe committed; move to the adjacent file
    Navigate(NavigateDirection),
    /// A single tap; flip controls visibility
    ToggleControls,
}

/// Pan behavior chosen at `PanBegin`
#[derive(Debug, Clone, Copy, PartialEq)]
enum PanMode {
    /// Moving a zoomed image. Translation is `origin + (delta - anchor)`.
    Zoomed {
        origin_x: f32,
        origin_y: f32,
        anchor_x: f32,
        anchor_y: f32,
    },
    /// Dragging the whole card for swipe navigation
    Swipe,
    /// Neither applies; updates are ignored
    Inert,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanGesture {
    mode: PanMode,
    last_x: f32,
    last_y: f32,
}

/// Interactive transform state for one image surface
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    config: GestureConfig,
    viewport: Viewport,
    scale: Spring,
    translate_x: Spring,
    translate_y: Spring,
    focal_x: Spring,
    focal_y: Spring,
    swipe_offset_x: Spring,
    opacity: Spring,
    rotation: Rotation,
    pinching: bool,
    pan: Option<PanGesture>,
}

impl PreviewRenderer {
    /// Create a renderer at the identity transform
    #[must_use]
    pub const fn new(config: GestureConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            scale: Spring::new(1.0),
            translate_x: Spring::new(0.0),
            translate_y: Spring::new(0.0),
            focal_x: Spring::new(0.0),
            focal_y: Spring::new(0.0),
            swipe_offset_x: Spring::new(0.0),
            opacity: Spring::new(1.0),
            rotation: Rotation::Deg0,
            pinching: false,
            pan: None,
        }
    }

    /// Get the gesture configuration
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current viewport
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport (rotation of the device, layout change)
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Apply one gesture event
    pub fn handle(&mut self, event: GestureEvent) -> GestureOutcome {
        match event {
            GestureEvent::PinchBegin { focal_x, focal_y } => {
                self.pinching = true;
                self.focal_x.set(focal_x);
                self.focal_y.set(focal_y);
            }
            GestureEvent::PinchUpdate { scale } => self.pinch_update(scale),
            GestureEvent::PinchEnd => self.pinch_end(),
            GestureEvent::PanBegin => self.pan_begin(),
            GestureEvent::PanUpdate {
                translation_x,
                translation_y,
            } => self.pan_update(translation_x, translation_y),
            GestureEvent::PanEnd => return self.pan_end(),
            GestureEvent::Tap => return GestureOutcome::ToggleControls,
            GestureEvent::DoubleTap { x, y } => self.double_tap(x, y),
        }
        GestureOutcome::Handled
    }

    fn pinch_update(&mut self, raw: f32) {
        if !(raw.is_finite() && raw > 0.0) {
            return;
        }

        self.scale
            .set(raw.clamp(self.config.min_zoom, self.config.max_zoom));

        // keep the point under the fingers stationary
        if raw > 1.0 {
            let (tx, ty) =
                self.viewport
                    .focal_translation(self.focal_x.value(), self.focal_y.value(), raw);
            self.translate_x.set(tx);
            self.translate_y.set(ty);
        }
    }

    fn pinch_end(&mut self) {
        self.pinching = false;
        let scale = self.scale.value();

        if scale < 1.0 {
            self.scale.animate_to(1.0);
            self.translate_x.animate_to(0.0);
            self.translate_y.animate_to(0.0);
        } else {
            if scale > self.config.max_zoom {
                self.scale.animate_to(self.config.max_zoom);
            }
            // a pan from an earlier zoom may be out of bounds at this scale
            self.clamp_translation();
        }
        debug!(scale, resting = self.scale.resting(), "pinch ended");
    }

    fn pan_begin(&mut self) {
        let scale = self.scale.value();

        let mode = if scale > 1.0 + ZOOM_EPSILON {
            // take over from any settling animation
            let (x, y) = (self.translate_x.value(), self.translate_y.value());
            self.translate_x.set(x);
            self.translate_y.set(y);
            PanMode::Zoomed {
                origin_x: x,
                origin_y: y,
                anchor_x: 0.0,
                anchor_y: 0.0,
            }
        } else if self.config.swipe_navigation
            && !self.pinching
            && (scale - 1.0).abs() <= ZOOM_EPSILON
        {
            PanMode::Swipe
        } else {
            PanMode::Inert
        };

        self.pan = Some(PanGesture {
            mode,
            last_x: 0.0,
            last_y: 0.0,
        });
    }

    fn pan_update(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        let Some(pan) = self.pan.as_mut() else {
            return;
        };
        pan.last_x = dx;
        pan.last_y = dy;
        let mode = pan.mode;

        match mode {
            PanMode::Zoomed {
                origin_x,
                origin_y,
                anchor_x,
                anchor_y,
            } => {
                self.translate_x.set(origin_x + dx - anchor_x);
                self.translate_y.set(origin_y + dy - anchor_y);
            }
            PanMode::Swipe => {
                self.swipe_offset_x.set(dx);
                self.opacity.set(self.swipe_opacity(dx));
            }
            PanMode::Inert => {}
        }
    }

    fn pan_end(&mut self) -> GestureOutcome {
        let Some(pan) = self.pan.take() else {
            return GestureOutcome::Handled;
        };

        match pan.mode {
            PanMode::Zoomed { .. } => {
                self.clamp_translation();
                GestureOutcome::Handled
            }
            PanMode::Swipe => {
                let offset = self.swipe_offset_x.value();
                self.swipe_offset_x.animate_to(0.0);
                self.opacity.animate_to(1.0);

                if offset.abs() > self.config.swipe_threshold {
                    // dragging left reveals the next file
                    let direction = if offset < 0.0 {
                        NavigateDirection::Next
                    } else {
                        NavigateDirection::Prev
                    };
                    debug!(offset, ?direction, "swipe committed");
                    GestureOutcome::Navigate(direction)
                } else {
                    GestureOutcome::Handled
                }
            }
            PanMode::Inert => GestureOutcome::Handled,
        }
    }

    /// Opacity for a swipe offset, fading linearly over a third of the width
    fn swipe_opacity(&self, offset: f32) -> f32 {
        let fade_distance = self.viewport.width / 3.0;
        let progress = if fade_distance > 0.0 {
            (offset.abs() / fade_distance).min(1.0)
        } else {
            0.0
        };
        1.0 - (1.0 - self.config.swipe_min_opacity) * progress
    }

    /// Spring the resting translation back inside the overscroll bound
    fn clamp_translation(&mut self) {
        let (max_x, max_y) = self.viewport.max_translate(self.scale.resting());
        for (spring, bound) in [
            (&mut self.translate_x, max_x),
            (&mut self.translate_y, max_y),
        ] {
            let resting = spring.resting();
            let clamped = resting.clamp(-bound, bound);
            if clamped != resting {
                spring.animate_to(clamped);
            }
        }
    }

    fn double_tap(&mut self, x: f32, y: f32) {
        if self.scale.resting() > 1.0 + ZOOM_EPSILON {
            self.reset_zoom();
            return;
        }

        let target = self
            .config
            .double_tap_scale
            .clamp(self.config.min_zoom, self.config.max_zoom);
        let (tx, ty) = self.viewport.focal_translation(x, y, target);
        let (max_x, max_y) = self.viewport.max_translate(target);

        self.focal_x.set(x);
        self.focal_y.set(y);
        self.scale.animate_to(target);
        self.translate_x.animate_to(tx.clamp(-max_x, max_x));
        self.translate_y.animate_to(ty.clamp(-max_y, max_y));
    }

    /// Spring back to unzoomed, centered
    ///
    /// Safe mid-gesture: an active zoomed pan continues from the reset
    /// position.
    pub fn reset_zoom(&mut self) {
        self.scale.animate_to(1.0);
        self.translate_x.animate_to(0.0);
        self.translate_y.animate_to(0.0);
        self.focal_x.animate_to(0.0);
        self.focal_y.animate_to(0.0);

        if let Some(pan) = self.pan.as_mut()
            && let PanMode::Zoomed { .. } = pan.mode
        {
            pan.mode = PanMode::Zoomed {
                origin_x: 0.0,
                origin_y: 0.0,
                anchor_x: pan.last_x,
                anchor_y: pan.last_y,
            };
        }
    }

    /// Rotate a quarter turn clockwise
    pub fn rotate_right(&mut self) {
        self.rotation = self.rotation.rotate_right();
    }

    /// Rotate a quarter turn counter-clockwise
    pub fn rotate_left(&mut self) {
        self.rotation = self.rotation.rotate_left();
    }

    /// Current rotation
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Return to identity and drop any gesture in progress
    ///
    /// Called whenever the displayed file changes.
    pub fn reset(&mut self) {
        *self = Self::new(self.config, self.viewport);
    }

    /// Advance all springs by `dt` seconds
    ///
    /// Returns `true` while anything is still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        let config = self.config.spring;
        let mut moving = false;
        for spring in self.springs_mut() {
            moving |= spring.step(dt, &config);
        }
        moving
    }

    /// Finish every running animation immediately
    pub fn settle(&mut self) {
        for spring in self.springs_mut() {
            spring.settle();
        }
    }

    /// Whether any spring is animating
    #[must_use]
    pub fn is_animating(&self) -> bool {
        [
            &self.scale,
            &self.translate_x,
            &self.translate_y,
            &self.focal_x,
            &self.focal_y,
            &self.swipe_offset_x,
            &self.opacity,
        ]
        .iter()
        .any(|spring| spring.is_animating())
    }

    /// Whether a finger-driven gesture is in progress
    #[must_use]
    pub const fn is_gesture_active(&self) -> bool {
        self.pinching || self.pan.is_some()
    }

    /// Live transform for the current frame
    #[must_use]
    pub const fn transform(&self) -> GestureTransform {
        GestureTransform {
            scale: self.scale.value(),
            translate_x: self.translate_x.value(),
            translate_y: self.translate_y.value(),
            focal_x: self.focal_x.value(),
            focal_y: self.focal_y.value(),
            rotation: self.rotation,
            swipe_offset_x: self.swipe_offset_x.value(),
            opacity: self.opacity.value(),
        }
    }

    /// Transform once all running springs settle
    #[must_use]
    pub fn resting_transform(&self) -> GestureTransform {
        GestureTransform {
            scale: self.scale.resting(),
            translate_x: self.translate_x.resting(),
            translate_y: self.translate_y.resting(),
            focal_x: self.focal_x.resting(),
            focal_y: self.focal_y.resting(),
            rotation: self.rotation,
            swipe_offset_x: self.swipe_offset_x.resting(),
            opacity: self.opacity.resting(),
        }
    }

    fn springs_mut(&mut self) -> [&mut Spring; 7] {
        [
            &mut self.scale,
            &mut self.translate_x,
            &mut self.translate_y,
            &mut self.focal_x,
            &mut self.focal_y,
            &mut self.swipe_offset_x,
            &mut self.opacity,
        ]
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new(GestureConfig::default(), Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 400.0;
    const H: f32 = 800.0;

    fn renderer() -> PreviewRenderer {
        PreviewRenderer::new(GestureConfig::default(), Viewport::new(W, H))
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    fn pinch(r: &mut PreviewRenderer, focal: (f32, f32), scales: &[f32]) {
        r.handle(GestureEvent::PinchBegin {
            focal_x: focal.0,
            focal_y: focal.1,
        });
        for &scale in scales {
            r.handle(GestureEvent::PinchUpdate { scale });
        }
        r.handle(GestureEvent::PinchEnd);
    }

    fn drag(r: &mut PreviewRenderer, dx: f32, dy: f32) -> GestureOutcome {
        r.handle(GestureEvent::PanBegin);
        r.handle(GestureEvent::PanUpdate {
            translation_x: dx,
            translation_y: dy,
        });
        r.handle(GestureEvent::PanEnd)
    }

    #[test]
    fn test_pinch_clamps_scale_while_active() {
        let mut r = renderer();
        r.handle(GestureEvent::PinchBegin {
            focal_x: W / 2.0,
            focal_y: H / 2.0,
        });

        r.handle(GestureEvent::PinchUpdate { scale: 8.0 });
        assert_close(r.transform().scale, MAX_ZOOM);

        r.handle(GestureEvent::PinchUpdate { scale: 0.1 });
        assert_close(r.transform().scale, MIN_ZOOM);
    }

    #[test]
    fn test_pinch_translates_toward_focal_point() {
        let mut r = renderer();
        r.handle(GestureEvent::PinchBegin {
            focal_x: 300.0,
            focal_y: 200.0,
        });
        r.handle(GestureEvent::PinchUpdate { scale: 2.0 });

        let t = r.transform();
        // fx = 100, fy = -200, factor = 0.5
        assert_close(t.translate_x, 50.0);
        assert_close(t.translate_y, -100.0);
        assert_close(t.focal_x, 300.0);
    }

    #[test]
    fn test_pinch_below_one_snaps_back() {
        let mut r = renderer();
        pinch(&mut r, (100.0, 100.0), &[0.6]);

        let resting = r.resting_transform();
        assert_close(resting.scale, 1.0);
        assert_close(resting.translate_x, 0.0);
        assert!(r.is_animating());

        r.settle();
        assert_eq!(
            r.transform(),
            GestureTransform {
                focal_x: 100.0,
                focal_y: 100.0,
                ..GestureTransform::IDENTITY
            }
        );
    }

    #[test]
    fn test_pinch_within_bounds_keeps_resting_value() {
        let mut r = renderer();
        pinch(&mut r, (W / 2.0, H / 2.0), &[1.5, 2.5]);

        assert!(!r.is_animating());
        assert_close(r.transform().scale, 2.5);
    }

    #[test]
    fn test_pinch_back_to_one_recenters_panned_image() {
        let mut r = renderer();
        pinch(&mut r, (W / 2.0, H / 2.0), &[2.0]);
        drag(&mut r, 180.0, -60.0);
        assert_close(r.resting_transform().translate_x, 180.0);

        pinch(&mut r, (W / 2.0, H / 2.0), &[1.0]);

        let resting = r.resting_transform();
        assert_close(resting.scale, 1.0);
        assert_close(resting.translate_x, 0.0);
        assert_close(resting.translate_y, 0.0);

        r.settle();
        assert_eq!(
            drag(&mut r, -(SWIPE_THRESHOLD + 1.0), 0.0),
            GestureOutcome::Navigate(NavigateDirection::Next)
        );
    }

    #[test]
    fn test_resting_scale_always_within_bounds() {
        let sequences: &[&[f32]] = &[
            &[0.1],
            &[9.0],
            &[1.0, 3.0, 0.3],
            &[4.9, 5.1, 50.0],
            &[0.7, 0.99],
            &[f32::NAN, 2.0],
        ];
        for seq in sequences {
            let mut r = renderer();
            pinch(&mut r, (10.0, 10.0), seq);
            let scale = r.resting_transform().scale;
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&scale), "{seq:?} -> {scale}");
            assert!(scale >= 1.0, "{seq:?} rests below 1: {scale}");
        }
    }

    #[test]
    fn test_zoomed_pan_accumulates_from_gesture_start() {
        let mut r = renderer();
        pinch(&mut r, (W / 2.0, H / 2.0), &[2.0]);

        drag(&mut r, 30.0, 10.0);
        assert_close(r.transform().translate_x, 30.0);
        assert_close(r.transform().translate_y, 10.0);

        r.handle(GestureEvent::PanBegin);
        r.handle(GestureEvent::PanUpdate {
            translation_x: 5.0,
            translation_y: 0.0,
        });
        r.handle(GestureEvent::PanUpdate {
            translation_x: 10.0,
            translation_y: 0.0,
        });
        assert_close(r.transform().translate_x, 40.0);
        assert_close(r.transform().translate_y, 10.0);
    }

    #[test]
    fn test_zoomed_pan_clamps_to_overscroll_bound() {
        let mut r = renderer();
        pinch(&mut r, (W / 2.0, H / 2.0), &[2.0]);

        let outcome = drag(&mut r, 500.0, -900.0);
        assert_eq!(outcome, GestureOutcome::Handled);

        // max translate at scale 2: (200, 400)
        let resting = r.resting_transform();
        assert_close(resting.translate_x, 200.0);
        assert_close(resting.translate_y, -400.0);
    }

    #[test]
    fn test_zoomed_pan_inside_bound_is_kept() {
        let mut r = renderer();
        pinch(&mut r, (W / 2.0, H / 2.0), &[3.0]);
        drag(&mut r, 120.0, 0.0);

        assert!(!r.is_animating());
        assert_close(r.transform().translate_x, 120.0);
    }

    #[test]
    fn test_swipe_past_threshold_navigates_once() {
        let mut r = renderer();
        let outcome = drag(&mut r, -(SWIPE_THRESHOLD + 1.0), 0.0);
        assert_eq!(outcome, GestureOutcome::Navigate(NavigateDirection::Next));

        let mut r = renderer();
        let outcome = drag(&mut r, SWIPE_THRESHOLD + 1.0, 0.0);
        assert_eq!(outcome, GestureOutcome::Navigate(NavigateDirection::Prev));
    }

    #[test]
    fn test_swipe_below_threshold_does_not_navigate() {
        let mut r = renderer();
        assert_eq!(
            drag(&mut r, -(SWIPE_THRESHOLD - 1.0), 0.0),
            GestureOutcome::Handled
        );
        assert_eq!(drag(&mut r, SWIPE_THRESHOLD, 0.0), GestureOutcome::Handled);
    }

    #[test]
    fn test_swipe_springs_card_back() {
        let mut r = renderer();
        drag(&mut r, -120.0, 0.0);

        let resting = r.resting_transform();
        assert_close(resting.swipe_offset_x, 0.0);
        assert_close(resting.opacity, 1.0);

        for _ in 0..180 {
            r.step(1.0 / 60.0);
        }
        assert!(!r.is_animating());
        assert_close(r.transform().swipe_offset_x, 0.0);
    }

    #[test]
    fn test_swipe_opacity_fades_to_floor() {
        let mut r = renderer();
        r.handle(GestureEvent::PanBegin);

        r.handle(GestureEvent::PanUpdate {
            translation_x: W / 6.0,
            translation_y: 0.0,
        });
        assert_close(r.transform().opacity, 0.85);

        r.handle(GestureEvent::PanUpdate {
            translation_x: -W / 3.0,
            translation_y: 0.0,
        });
        assert_close(r.transform().opacity, 0.7);

        r.handle(GestureEvent::PanUpdate {
            translation_x: W,
            translation_y: 0.0,
        });
        assert_close(r.transform().opacity, 0.7);
        assert_close(r.transform().swipe_offset_x, W);
    }

    #[test]
    fn test_swipe_disabled_makes_pan_inert() {
        let config = GestureConfig {
            swipe_navigation: false,
            ..GestureConfig::default()
        };
        let mut r = PreviewRenderer::new(config, Viewport::new(W, H));

        assert_eq!(drag(&mut r, -200.0, 0.0), GestureOutcome::Handled);
        assert_eq!(r.transform(), GestureTransform::IDENTITY);
    }

    #[test]
    fn test_pan_update_without_begin_is_ignored() {
        let mut r = renderer();
        r.handle(GestureEvent::PanUpdate {
            translation_x: 80.0,
            translation_y: 0.0,
        });
        assert_eq!(r.handle(GestureEvent::PanEnd), GestureOutcome::Handled);
        assert_eq!(r.transform(), GestureTransform::IDENTITY);
    }

    #[test]
    fn test_reset_zoom_mid_gesture_rebases_pan() {
        let mut r = renderer();
        pinch(&mut r, (W / 2.0, H / 2.0), &[2.0]);

        r.handle(GestureEvent::PanBegin);
        r.handle(GestureEvent::PanUpdate {
            translation_x: 50.0,
            translation_y: 0.0,
        });
        r.reset_zoom();
        r.handle(GestureEvent::PanUpdate {
            translation_x: 60.0,
            translation_y: 0.0,
        });

        assert_close(r.transform().translate_x, 10.0);

        r.handle(GestureEvent::PanEnd);
        r.settle();
        let t = r.transform();
        assert_close(t.scale, 1.0);
        assert_close(t.translate_x, 0.0);
    }

    #[test]
    fn test_reset_zoom_targets_identity() {
        let mut r = renderer();
        pinch(&mut r, (50.0, 60.0), &[3.0]);
        r.reset_zoom();

        let resting = r.resting_transform();
        assert_close(resting.scale, 1.0);
        assert_close(resting.translate_x, 0.0);
        assert_close(resting.translate_y, 0.0);
        assert_close(resting.focal_x, 0.0);
        assert_close(resting.focal_y, 0.0);
    }

    #[test]
    fn test_double_tap_toggles_zoom() {
        let mut r = renderer();
        r.handle(GestureEvent::DoubleTap { x: 300.0, y: 400.0 });
        let zoomed = r.resting_transform();
        assert_close(zoomed.scale, 2.5);
        assert_close(zoomed.translate_x, 100.0 * (1.0 - 1.0 / 2.5));

        r.settle();
        r.handle(GestureEvent::DoubleTap { x: 0.0, y: 0.0 });
        assert_close(r.resting_transform().scale, 1.0);
    }

    #[test]
    fn test_tap_requests_controls_toggle() {
        let mut r = renderer();
        assert_eq!(r.handle(GestureEvent::Tap), GestureOutcome::ToggleControls);
    }

    #[test]
    fn test_rotation_is_independent_of_zoom() {
        let mut r = renderer();
        pinch(&mut r, (W / 2.0, H / 2.0), &[2.0]);
        r.rotate_right();
        r.rotate_right();

        assert_eq!(r.rotation().degrees(), 180);
        assert_close(r.transform().scale, 2.0);

        for _ in 0..2 {
            r.rotate_right();
        }
        assert_eq!(r.rotation(), Rotation::Deg0);
        r.rotate_left();
        assert_eq!(r.rotation().degrees(), 270);
    }

    #[test]
    fn test_reset_returns_to_identity() {
        let mut r = renderer();
        pinch(&mut r, (10.0, 10.0), &[4.0]);
        r.rotate_left();
        r.handle(GestureEvent::PanBegin);

        r.reset();
        assert_eq!(r.transform(), GestureTransform::IDENTITY);
        assert!(!r.is_gesture_active());
        assert!(!r.is_animating());
    }
}
