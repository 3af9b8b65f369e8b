use glam::DVec2;
use web_time::Instant;

use crate::math::Quaternion;

/// The current object rotation relative to the reference pose.
///
/// Replaced (never mutated component-wise) by each processed drag move and
/// read once per tick by the matrix builder. Every stored value is
/// renormalized so drift cannot accumulate across compositions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationState {
    rotation: Quaternion,
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::identity()
    }
}

impl OrientationState {
    /// Start from the given rotation (normalized on the way in).
    #[must_use]
    pub fn new(rotation: Quaternion) -> Self {
        Self {
            rotation: rotation.normalized(),
        }
    }

    /// Start from the reference pose.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: Quaternion::IDENTITY,
        }
    }

    /// Current unit rotation.
    #[must_use]
    pub fn rotation(&self) -> Quaternion {
        self.rotation
    }

    /// Replace the rotation outright.
    pub fn set(&mut self, rotation: Quaternion) {
        self.rotation = rotation.normalized();
    }

    /// Apply `increment` in object-local space: `rotation ← rotation *
    /// increment`, renormalized.
    pub fn apply_local(&mut self, increment: Quaternion) {
        self.rotation = self.rotation.compose(increment).normalized();
    }
}

/// An in-progress pointer drag.
///
/// Exists only while the primary button is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Last pointer position seen during this drag, in physical pixels.
    pub last: DVec2,
    /// When the button went down.
    pub started_at: Instant,
}

impl DragSession {
    /// Begin a drag at `origin`.
    #[must_use]
    pub fn new(origin: DVec2, started_at: Instant) -> Self {
        Self {
            last: origin,
            started_at,
        }
    }

    /// Move the reference point to `to`, returning the delta from the
    /// previous one.
    pub fn advance(&mut self, to: DVec2) -> DVec2 {
        let delta = to - self.last;
        self.last = to;
        delta
    }
}
