//! Spring-animated scalars

/// Displacement below which a settling spring snaps to its target
const SNAP_THRESHOLD: f32 = 0.001;

/// Speed below which a settling spring counts as at rest
const VELOCITY_THRESHOLD: f32 = 0.01;

/// Largest integration step; longer frames are split
const MAX_STEP: f32 = 1.0 / 120.0;

/// Frames longer than this (seconds) finish the animation outright
const MAX_FRAME: f32 = 1.0;

/// Spring constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per unit displacement
    pub stiffness: f32,
    /// Opposing force per unit velocity
    pub damping: f32,
}

impl Default for SpringConfig {
    /// Close to critically damped for unit mass
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
        }
    }
}

/// A scalar that is either set directly or animating toward a target
///
/// Starting a new animation supersedes the in-flight one, keeping the
/// current velocity so the motion stays continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: Option<f32>,
}

impl Spring {
    /// A spring at rest at `value`
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: None,
        }
    }

    /// Current value
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Target of the running animation
    #[must_use]
    pub const fn target(&self) -> Option<f32> {
        self.target
    }

    /// Value the spring will rest at
    #[must_use]
    pub fn resting(&self) -> f32 {
        self.target.unwrap_or(self.value)
    }

    /// Whether an animation is running
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Jump to `value`, cancelling any animation
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.target = None;
    }

    /// Animate toward `target`
    pub fn animate_to(&mut self, target: f32) {
        self.target = Some(target);
    }

    /// Jump to the target of the running animation
    pub fn settle(&mut self) {
        if let Some(target) = self.target.take() {
            self.value = target;
            self.velocity = 0.0;
        }
    }

    /// Advance the animation by `dt` seconds
    ///
    /// Returns `true` while the spring is still moving.
    pub fn step(&mut self, dt: f32, config: &SpringConfig) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if !(dt.is_finite() && dt > 0.0) {
            return true;
        }
        if dt > MAX_FRAME {
            self.settle();
            return false;
        }

        let substeps = (dt / MAX_STEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            // semi-implicit Euler: velocity first, then position
            let acceleration =
                -config.stiffness * (self.value - target) - config.damping * self.velocity;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        if (self.value - target).abs() < SNAP_THRESHOLD && self.velocity.abs() < VELOCITY_THRESHOLD
        {
            self.value = target;
            self.velocity = 0.0;
            self.target = None;
            return false;
        }
        true
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}
