//! Object orientation and the matrices derived from it.
//!
//! Holds the accumulated rotation, the drag-to-rotation mapping that
//! updates it, and the projection/view matrix builder that feeds the
//! renderer once per tick.

/// Accumulated object rotation and the active drag session.
pub mod orientation;
/// Projection and view matrices in the renderer's column-major layout.
pub mod projection;
/// Pointer-drag to incremental rotation mapping.
pub mod trackball;

pub use orientation::{DragSession, OrientationState};
pub use projection::FrameMatrices;
pub use trackball::Trackball;
