//! Transform types produced by the gesture engine

use serde::Serialize;

/// Quarter-turn rotation of the displayed image
///
/// Rotation is a display property only; it never composes with the
/// zoom/pan transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u16")]
pub enum Rotation {
    /// Upright
    #[default]
    Deg0,
    /// Quarter turn clockwise
    Deg90,
    /// Half turn
    Deg180,
    /// Three quarter turns clockwise
    Deg270,
}

impl Rotation {
    /// Angle in degrees, in `[0, 360)`
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Add 90 degrees
    #[must_use]
    pub const fn rotate_right(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// Subtract 90 degrees
    #[must_use]
    pub const fn rotate_left(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg270,
            Self::Deg90 => Self::Deg0,
            Self::Deg180 => Self::Deg90,
            Self::Deg270 => Self::Deg180,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Size of the viewing surface in screen points
///
/// Overscroll bounds use the viewport as a proxy for the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl Viewport {
    /// Create a viewport
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Largest translation per axis that keeps a zoomed image covering the
    /// viewport: `(dimension * scale - dimension) / 2`, floored at 0
    #[must_use]
    pub fn max_translate(&self, scale: f32) -> (f32, f32) {
        let bound = |dimension: f32| ((dimension * scale - dimension) / 2.0).max(0.0);
        (bound(self.width), bound(self.height))
    }

    /// Translation that keeps the point `(x, y)` stationary at `scale`
    #[must_use]
    pub fn focal_translation(&self, x: f32, y: f32, scale: f32) -> (f32, f32) {
        let (cx, cy) = self.center();
        let factor = 1.0 - 1.0 / scale;
        ((x - cx) * factor, (y - cy) * factor)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

/// Visual transform of the current image
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureTransform {
    /// Zoom factor
    pub scale: f32,
    /// Horizontal pan offset
    pub translate_x: f32,
    /// Vertical pan offset
    pub translate_y: f32,
    /// Pinch focal point, x
    pub focal_x: f32,
    /// Pinch focal point, y
    pub focal_y: f32,
    /// Display rotation
    #[serde(rename = "rotationDegrees")]
    pub rotation: Rotation,
    /// Horizontal drag of the whole card during swipe navigation
    pub swipe_offset_x: f32,
    /// Card opacity during swipe navigation
    pub opacity: f32,
}

impl GestureTransform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        focal_x: 0.0,
        focal_y: 0.0,
        rotation: Rotation::Deg0,
        swipe_offset_x: 0.0,
        opacity: 1.0,
    };

    /// Whether the image is zoomed beyond rest
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0 + super::ZOOM_EPSILON
    }
}

impl Default for GestureTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_right_four_times_returns_to_zero() {
        let mut rotation = Rotation::default();
        for _ in 0..4 {
            rotation = rotation.rotate_right();
        }
        assert_eq!(rotation, Rotation::Deg0);
    }

    #[test]
    fn test_rotate_left_wraps_below_zero() {
        assert_eq!(Rotation::Deg0.rotate_left(), Rotation::Deg270);
        assert_eq!(Rotation::Deg0.rotate_left().degrees(), 270);
    }

    #[test]
    fn test_max_translate_uses_viewport() {
        let viewport = Viewport::new(400.0, 800.0);
        assert_eq!(viewport.max_translate(2.0), (200.0, 400.0));
        assert_eq!(viewport.max_translate(1.0), (0.0, 0.0));
        assert_eq!(viewport.max_translate(0.5), (0.0, 0.0));
    }

    #[test]
    fn test_focal_translation_is_zero_at_center() {
        let viewport = Viewport::new(400.0, 800.0);
        assert_eq!(viewport.focal_translation(200.0, 400.0, 3.0), (0.0, 0.0));

        let (tx, ty) = viewport.focal_translation(300.0, 400.0, 2.0);
        assert!((tx - 50.0).abs() < f32::EPSILON);
        assert!(ty.abs() < f32::EPSILON);
    }

    #[test]
    fn test_rotation_serializes_as_degrees() {
        let json = serde_json::to_string(&GestureTransform {
            rotation: Rotation::Deg180,
            ..GestureTransform::IDENTITY
        })
        .unwrap();
        assert!(json.contains("\"rotationDegrees\":180"));
    }
}
