use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Model", inline)]
#[serde(default)]
/// The scale control and its range.
pub struct ModelOptions {
    /// Initial scale value.
    #[schemars(title = "Scale", range(min = 0.25, max = 2.0), extend("step" = 0.05))]
    pub scale: f32,
    /// Lowest value the control accepts.
    #[schemars(skip)]
    pub scale_min: f32,
    /// Highest value the control accepts.
    #[schemars(skip)]
    pub scale_max: f32,
    /// Increment used by the scale key bindings.
    #[schemars(skip)]
    pub scale_step: f32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            scale_min: 0.25,
            scale_max: 2.0,
            scale_step: 0.05,
        }
    }
}

impl ModelOptions {
    /// Clamp `value` into `[scale_min, scale_max]`. NaN falls back to the
    /// minimum.
    #[must_use]
    pub fn clamp_scale(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.scale_min;
        }
        value.max(self.scale_min).min(self.scale_max)
    }
}
