// -- Lint policy ---------------------------------------------------------
// Crate-wide lints live in `[workspace.lints]` in Cargo.toml. Attributes
// here would override its allowances, so only test exemptions go here.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Drag-to-rotate orientation control with on-demand redraw.
//!
//! Tumble keeps an object's orientation as a unit quaternion, turns pointer
//! drags into incremental rotations composed in object space, and coalesces
//! every state change between two display refreshes into a single draw.
//!
//! # Key entry points
//!
//! - [`engine::Engine`] - interactive state and the event handlers a host
//!   calls into
//! - [`math::Quaternion`] - rotation algebra (product, exp/log, rotation
//!   matrix)
//! - [`camera::FrameMatrices`] - projection and view matrices per tick
//! - [`renderer::Renderer`] - the upload/draw boundary, implemented for wgpu
//!   by [`renderer::cube::CubeRenderer`]
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the host's event thread. Input handlers mutate state
//! and call [`engine::FrameScheduler::request_redraw`]; the first request
//! after a draw registers one tick with the host, later ones are absorbed.
//! When the tick fires, [`engine::Engine::on_tick`] builds the matrices from
//! whatever state is current, uploads them and draws once.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod math;
pub mod options;
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::Engine;
pub use error::TumbleError;
pub use input::{InputEvent, MouseButton};
pub use math::Quaternion;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
