/// Cube vertex: a bare position, 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
}

/// Bytes between consecutive vertices.
pub const VERTEX_STRIDE: u64 = 12;

/// Bytes in one column-major 4×4 `f32` matrix uniform.
pub const MATRIX_BYTES: u64 = 64;

/// Index of the `(1, 1, 1)` corner driven by the scale parameter.
pub const SCALE_CORNER_INDEX: u64 = 7;

/// Byte offset of the scale corner inside the vertex buffer.
pub const SCALE_CORNER_OFFSET: u64 = SCALE_CORNER_INDEX * VERTEX_STRIDE;

const fn v(x: f32, y: f32, z: f32) -> Vertex {
    Vertex {
        position: [x, y, z],
    }
}

/// The eight `±1` corners; bit 0 of the index is x, bit 1 y, bit 2 z.
pub const CUBE_VERTICES: [Vertex; 8] = [
    v(-1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0),
    v(-1.0, 1.0, -1.0),
    v(1.0, 1.0, -1.0),
    v(-1.0, -1.0, 1.0),
    v(1.0, -1.0, 1.0),
    v(-1.0, 1.0, 1.0),
    v(1.0, 1.0, 1.0),
];

/// Two triangles per face, twelve in all.
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 5, 5, 4, 0, //
    0, 4, 6, 6, 2, 0, //
    0, 2, 3, 3, 1, 0, //
    7, 6, 4, 4, 5, 7, //
    7, 5, 1, 1, 3, 7, //
    7, 3, 2, 2, 6, 7,
];

const ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];

/// Vertex buffer layout matching [`Vertex`].
pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}
