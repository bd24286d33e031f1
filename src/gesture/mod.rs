//! Gesture and animation engine for the image viewer
//!
//! Turns raw pinch, pan and tap events into a [`GestureTransform`] with
//! boundary clamping and spring settling. The engine is a plain struct
//! updated by one reducer call per gesture phase; it owns no timers and
//! never touches the session directly. Swipe navigation is reported back
//! as a [`GestureOutcome`] for the caller to apply.
//!
//! # Architecture
//!
//! - `transform`: `GestureTransform`, `Rotation`, `Viewport`
//! - `spring`: cancelable spring-animated scalars
//! - `renderer`: `PreviewRenderer`, the per-phase reducer
//! - `chrome`: auto-hiding controls countdown

mod chrome;
mod renderer;
mod spring;
mod transform;

pub use chrome::{ControlsVisibility, DEFAULT_CONTROLS_HIDE};
pub use renderer::{GestureConfig, GestureEvent, GestureOutcome, PreviewRenderer};
pub use spring::{Spring, SpringConfig};
pub use transform::{GestureTransform, Rotation, Viewport};

/// Smallest scale reachable during a pinch
pub const MIN_ZOOM: f32 = 0.5;

/// Largest scale reachable during a pinch
pub const MAX_ZOOM: f32 = 5.0;

/// Horizontal drag distance (px) that commits a swipe navigation
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Scales within this distance of 1.0 count as unzoomed
pub const ZOOM_EPSILON: f32 = 0.01;
