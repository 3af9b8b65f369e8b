use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::projection::DEFAULT_CAMERA_DISTANCE;
use crate::math::Quaternion;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View", inline)]
#[serde(default)]
/// Camera placement and startup pose.
pub struct ViewOptions {
    /// Distance the camera sits back from the object.
    #[schemars(title = "Camera Distance", range(min = 2.0, max = 32.0), extend("step" = 0.5))]
    pub camera_distance: f32,
    /// Startup orientation as `[i, j, k, l]`; normalized on use.
    #[schemars(skip)]
    pub initial_orientation: [f64; 4],
    /// Background clear color (RGBA).
    #[schemars(skip)]
    pub clear_color: [f64; 4],
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            initial_orientation: [0.5, 0.5, 0.5, 0.5],
            clear_color: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl ViewOptions {
    /// The configured startup orientation as a unit quaternion.
    #[must_use]
    pub fn initial_rotation(&self) -> Quaternion {
        Quaternion::from_array(self.initial_orientation).normalized()
    }
}
