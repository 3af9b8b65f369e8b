//! The orientation-and-redraw controller.
//!
//! [`Engine`] owns every piece of interactive state (orientation, drag
//! session, render parameters, redraw gate) and exposes the event-handler
//! contract the host calls into. Handlers run on one thread and mutate the
//! state synchronously; the only way anything reaches the renderer is
//! [`Engine::on_tick`], which the host invokes once per registered tick.

/// Render-time scalars set by UI controls.
pub mod parameters;
/// Redraw coalescing over a host tick primitive.
pub mod scheduler;

use glam::DVec2;
pub use parameters::RenderParameters;
pub use scheduler::{FrameScheduler, HostScheduler};
use web_time::Instant;

use crate::camera::{FrameMatrices, OrientationState, Trackball};
use crate::input::{InputEvent, KeyAction, MouseButton};
use crate::math::Quaternion;
use crate::options::Options;
use crate::renderer::mesh::SCALE_CORNER_OFFSET;
use crate::renderer::{Renderer, UniformSlot};

/// Interactive state plus the handlers that mutate it.
///
/// Every handler that changes what would be drawn calls
/// [`FrameScheduler::request_redraw`] with the caller's host, so any number
/// of events between two display refreshes cost one draw.
#[derive(Debug)]
pub struct Engine {
    options: Options,
    orientation: OrientationState,
    trackball: Trackball,
    params: RenderParameters,
    scheduler: FrameScheduler,
    /// Last cursor position, used as the drag origin on button press.
    /// `None` until the host reports one.
    cursor: Option<DVec2>,
    /// Primary press seen before any cursor position; the drag starts at
    /// the next reported position.
    pending_press: Option<Instant>,
}

impl Engine {
    /// Create the engine from `options` and register the first frame with
    /// `host`.
    pub fn new(options: Options, host: &mut impl HostScheduler) -> Self {
        Self {
            orientation: OrientationState::new(
                options.view.initial_rotation(),
            ),
            trackball: Trackball::new(options.trackball.sensitivity),
            params: RenderParameters::from_options(&options.model),
            scheduler: FrameScheduler::start(host),
            cursor: None,
            pending_press: None,
            options,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and push the changes into the live state. The
    /// current orientation is kept.
    pub fn set_options(
        &mut self,
        options: Options,
        host: &mut impl HostScheduler,
    ) {
        self.trackball.set_sensitivity(options.trackball.sensitivity);
        self.params.scale = options.model.clamp_scale(self.params.scale);
        self.options = options;
        self.scheduler.request_redraw(host);
    }

    /// Current object rotation.
    #[must_use]
    pub fn orientation(&self) -> Quaternion {
        self.orientation.rotation()
    }

    /// Current render parameters.
    #[must_use]
    pub fn parameters(&self) -> RenderParameters {
        self.params
    }

    /// The redraw gate.
    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.trackball.is_dragging()
    }

    /// Mark the scene dirty for a reason outside the engine's own state
    /// (window resize, exposed surface).
    pub fn request_redraw(&mut self, host: &mut impl HostScheduler) {
        self.scheduler.request_redraw(host);
    }

    /// Begin a drag at `(x, y)`.
    pub fn pointer_down(&mut self, x: f64, y: f64, started_at: Instant) {
        self.cursor = Some(DVec2::new(x, y));
        self.pending_press = None;
        self.trackball.pointer_down(x, y, started_at);
    }

    /// Pointer moved to `(x, y)`. While dragging, rotates the object and
    /// requests a redraw; otherwise only the cursor is tracked.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        host: &mut impl HostScheduler,
    ) {
        self.cursor = Some(DVec2::new(x, y));
        if self.trackball.pointer_move(x, y, &mut self.orientation) {
            self.scheduler.request_redraw(host);
        }
    }

    /// End the drag.
    pub fn pointer_up(&mut self) {
        self.pending_press = None;
        self.trackball.pointer_up();
    }

    /// The scale control changed. The value is clamped to the configured
    /// range; orientation is untouched.
    pub fn on_parameter_change(
        &mut self,
        value: f32,
        host: &mut impl HostScheduler,
    ) {
        self.params.scale = self.options.model.clamp_scale(value);
        log::debug!("scale -> {}", self.params.scale);
        self.scheduler.request_redraw(host);
    }

    /// Return to the configured startup orientation.
    pub fn reset_orientation(&mut self, host: &mut impl HostScheduler) {
        self.orientation.set(self.options.view.initial_rotation());
        self.scheduler.request_redraw(host);
    }

    /// Run a bound key action.
    pub fn execute(&mut self, action: KeyAction, host: &mut impl HostScheduler) {
        let step = self.options.model.scale_step;
        match action {
            KeyAction::ResetOrientation => self.reset_orientation(host),
            KeyAction::ScaleUp => {
                self.on_parameter_change(self.params.scale + step, host);
            }
            KeyAction::ScaleDown => {
                self.on_parameter_change(self.params.scale - step, host);
            }
        }
    }

    /// Dispatch a platform-agnostic input event. Only the primary button
    /// drives the drag.
    ///
    /// A primary press starts the drag at the last reported cursor
    /// position. If no position has been reported yet, the drag starts at
    /// the next [`InputEvent::CursorMoved`] instead of rotating toward it.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        host: &mut impl HostScheduler,
    ) {
        match event {
            InputEvent::CursorMoved { x, y } => match self.pending_press.take() {
                Some(started_at) => self.pointer_down(x, y, started_at),
                None => self.pointer_move(x, y, host),
            },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => match self.cursor {
                Some(at) => self.pointer_down(at.x, at.y, Instant::now()),
                None => self.pending_press = Some(Instant::now()),
            },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            } => self.pointer_up(),
            InputEvent::MouseButton { .. } => {}
            InputEvent::ParameterChanged { value } => {
                self.on_parameter_change(value, host);
            }
        }
    }

    /// Matrices for the current orientation at `viewport` size.
    #[must_use]
    pub fn frame_matrices(&self, viewport: (u32, u32)) -> FrameMatrices {
        FrameMatrices::build(
            viewport,
            self.orientation.rotation(),
            self.options.view.camera_distance,
        )
    }

    /// The host's tick callback: upload the current state and draw exactly
    /// once, then reopen the redraw gate.
    ///
    /// # Errors
    ///
    /// Whatever [`Renderer::draw_frame`] returns. The gate is reopened
    /// either way.
    pub fn on_tick<R: Renderer>(
        &mut self,
        renderer: &mut R,
        viewport: (u32, u32),
    ) -> Result<(), R::Error> {
        let orientation = &self.orientation;
        let params = &self.params;
        let camera_distance = self.options.view.camera_distance;
        self.scheduler.on_tick(|| {
            let matrices = FrameMatrices::build(
                viewport,
                orientation.rotation(),
                camera_distance,
            );
            renderer.upload_vertex_override(SCALE_CORNER_OFFSET, &params.corner());
            renderer.upload_uniform(
                UniformSlot::Camera,
                &matrices.projection_cols(),
            );
            renderer.upload_uniform(UniformSlot::Model, &matrices.view_cols());
            renderer.draw_frame()
        })
    }
}
