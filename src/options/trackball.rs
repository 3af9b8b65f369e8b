use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::trackball::DEFAULT_SENSITIVITY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Trackball", inline)]
#[serde(default)]
/// Drag-to-rotation parameters.
pub struct TrackballOptions {
    /// Radians of rotation per pixel of pointer travel.
    #[schemars(title = "Sensitivity", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub sensitivity: f64,
}

impl Default for TrackballOptions {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}
