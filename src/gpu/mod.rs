//! GPU resource management.
//!
//! Provides wgpu device/surface initialization for the viewer window.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
