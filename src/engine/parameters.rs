use crate::options::ModelOptions;

/// Scalars set by UI controls outside the drag flow, read by the render
/// step at tick time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    /// Position of the cube's far corner along the `(1, 1, 1)` diagonal.
    pub scale: f32,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl RenderParameters {
    /// Initial parameters from the model options.
    #[must_use]
    pub fn from_options(model: &ModelOptions) -> Self {
        Self {
            scale: model.clamp_scale(model.scale),
        }
    }

    /// The far-corner position uploaded over the cube's last vertex.
    #[must_use]
    pub fn corner(&self) -> [f32; 3] {
        [self.scale; 3]
    }
}
