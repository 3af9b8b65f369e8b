use glam::DVec2;
use web_time::Instant;

use super::orientation::{DragSession, OrientationState};
use crate::math::Quaternion;

/// Radians of rotation per pixel of pointer travel.
pub const DEFAULT_SENSITIVITY: f64 = 16.0 * std::f64::consts::PI / 10800.0;

/// Incremental rotation for a pointer delta of `(rx, ry)` pixels.
///
/// The axis lies in the screen plane perpendicular to the drag direction,
/// `(-ry, -rx, 0)`, and the angle is the drag distance times
/// `sensitivity`. A zero delta has no rotation and returns `None`.
#[must_use]
pub fn drag_increment(delta: DVec2, sensitivity: f64) -> Option<Quaternion> {
    let rr = delta.length_squared();
    if rr == 0.0 {
        return None;
    }
    let r = rr.sqrt();
    let (sin, cos) = (r * sensitivity / 2.0).sin_cos();
    Some(Quaternion::new(
        sin * -delta.y / r,
        sin * -delta.x / r,
        0.0,
        cos,
    ))
}

/// Drag-to-rotation state machine.
///
/// Idle until [`pointer_down`](Self::pointer_down); while dragging, every
/// [`pointer_move`](Self::pointer_move) composes a rotation proportional to
/// the pointer delta onto the orientation, in object-local space.
#[derive(Debug, Clone)]
pub struct Trackball {
    session: Option<DragSession>,
    sensitivity: f64,
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY)
    }
}

impl Trackball {
    /// Idle trackball with the given radians-per-pixel sensitivity.
    #[must_use]
    pub fn new(sensitivity: f64) -> Self {
        Self {
            session: None,
            sensitivity,
        }
    }

    /// Radians of rotation per pixel.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Change the radians-per-pixel scaling. Takes effect on the next move.
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start (or restart) a drag at `(x, y)`. The orientation is untouched.
    pub fn pointer_down(&mut self, x: f64, y: f64, started_at: Instant) {
        log::debug!("drag start at ({x}, {y})");
        self.session = Some(DragSession::new(DVec2::new(x, y), started_at));
    }

    /// Feed a pointer position.
    ///
    /// Returns `true` when `orientation` was changed, which is the caller's
    /// cue to request a redraw. Moves while idle, and moves with a zero
    /// delta, change nothing.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        orientation: &mut OrientationState,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let delta = session.advance(DVec2::new(x, y));
        let Some(increment) = drag_increment(delta, self.sensitivity) else {
            return false;
        };
        orientation.apply_local(increment);
        log::trace!(
            "drag delta ({}, {}) -> {:?}",
            delta.x,
            delta.y,
            orientation.rotation()
        );
        true
    }

    /// End the drag. The orientation is untouched.
    pub fn pointer_up(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("drag end after {:?}", session.started_at.elapsed());
        }
    }
}
