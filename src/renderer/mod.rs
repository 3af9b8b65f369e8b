//! The renderer boundary and its wgpu implementation.
//!
//! The orientation core only ever talks to [`Renderer`]: one vertex
//! override, two matrix uploads and a draw per tick. [`cube::CubeRenderer`]
//! implements it on top of [`RenderContext`](crate::gpu::render_context::RenderContext).

/// wgpu renderer for the rotating cube.
pub mod cube;
/// Cube vertex/index data and its byte layout.
pub mod mesh;
pub(crate) mod pipeline_util;

/// Uniform buffers the core writes a matrix into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformSlot {
    /// Projection matrix (binding 0).
    Camera,
    /// View matrix carrying the object orientation (binding 1).
    Model,
}

impl UniformSlot {
    /// Buffer label used for GPU debugging.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Camera => "Camera Buffer",
            Self::Model => "Model Buffer",
        }
    }
}

/// What the core needs from a renderer, called once per tick.
pub trait Renderer {
    /// Failure surfaced by [`draw_frame`](Self::draw_frame).
    type Error;

    /// Overwrite `floats` in the vertex buffer starting at `offset_bytes`.
    fn upload_vertex_override(&mut self, offset_bytes: u64, floats: &[f32]);

    /// Write a 16-float column-major matrix at offset 0 of `slot`.
    fn upload_uniform(&mut self, slot: UniformSlot, matrix: &[f32; 16]);

    /// Record and submit the frame with whatever was uploaded.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports; the core passes it through untouched.
    fn draw_frame(&mut self) -> Result<(), Self::Error>;
}
