//! Standalone window backed by winit.
//!
//! The window only redraws when something changed: input handlers go
//! through [`Engine`], which asks the window for a redraw at most once per
//! display refresh.
//!
//! ```no_run
//! # use tumble::Viewer;
//! Viewer::builder().with_title("Tumble").build().run().unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    engine::HostScheduler, error::TumbleError,
    gpu::render_context::RenderContext, options::Options,
    renderer::cube::CubeRenderer, Engine, InputEvent, MouseButton,
};

impl HostScheduler for Arc<Window> {
    fn schedule_tick(&mut self) {
        self.request_redraw();
    }
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "Tumble".
    fn new() -> Self {
        Self {
            options: None,
            title: "Tumble".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the cube, rotated by dragging with the left button.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// [`TumbleError::Viewer`] if the event loop cannot be created or exits
    /// with an error.
    pub fn run(self) -> Result<(), TumbleError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TumbleError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            scene: None,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TumbleError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Engine and renderer, created once the window exists.
struct Scene {
    engine: Engine,
    renderer: CubeRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    scene: Option<Scene>,
    /// Taken when the engine is built.
    options: Option<Options>,
    title: String,
}

/// Surface size for a window size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// What to do after a frame failed to draw.
///
/// The loop waits for events, so any frame that should still be shown must
/// register a new tick itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameRecovery {
    /// Reconfigure the surface to the window size, then redraw.
    Reconfigure,
    /// Transient failure: redraw as is.
    Retry,
    /// Nothing more can be drawn.
    Exit,
}

fn frame_recovery(error: &wgpu::SurfaceError) -> FrameRecovery {
    match error {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            FrameRecovery::Reconfigure
        }
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => {
            FrameRecovery::Retry
        }
        wgpu::SurfaceError::OutOfMemory => FrameRecovery::Exit,
    }
}

impl ViewerApp {
    /// Half the primary monitor, or the platform default without one.
    fn window_attributes(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> WindowAttributes {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = Window::default_attributes().with_title(&self.title);
        let Some(mon) = monitor else {
            return attrs;
        };
        let mon_size = mon.size();
        let scale = mon.scale_factor();
        let logical_w = (f64::from(mon_size.width) / scale * 0.5) as u32;
        let logical_h = (f64::from(mon_size.height) / scale * 0.5) as u32;
        attrs.with_inner_size(winit::dpi::LogicalSize::new(
            logical_w, logical_h,
        ))
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = self.window_attributes(event_loop);
        let mut window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let viewport = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            Arc::clone(&window),
            viewport,
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let renderer = CubeRenderer::new(context, options.view.clear_color);
        let engine = Engine::new(options, &mut window);
        log::info!("viewer ready at {}x{}", viewport.0, viewport.1);

        self.window = Some(window);
        self.scene = Some(Scene { engine, renderer });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and scene must be initialised.
        let (Some(window), Some(scene)) = (&mut self.window, &mut self.scene)
        else {
            return;
        };
        let Scene { engine, renderer } = scene;

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                renderer.resize(vp_w, vp_h);
                engine.request_redraw(window);
            }

            WindowEvent::RedrawRequested => {
                let viewport = renderer.viewport();
                let Err(e) = engine.on_tick(renderer, viewport) else {
                    return;
                };
                match frame_recovery(&e) {
                    FrameRecovery::Reconfigure => {
                        log::warn!("surface {e}, reconfiguring");
                        let (vp_w, vp_h) = viewport_size(window.inner_size());
                        renderer.resize(vp_w, vp_h);
                        engine.request_redraw(window);
                    }
                    FrameRecovery::Retry => {
                        log::warn!("frame skipped: {e}");
                        engine.request_redraw(window);
                    }
                    FrameRecovery::Exit => {
                        log::error!("render error: {e:?}");
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                engine.handle_input(
                    InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed: state == ElementState::Pressed,
                    },
                    window,
                );
            }

            WindowEvent::CursorMoved { position, .. } => {
                engine.handle_input(
                    InputEvent::CursorMoved {
                        x: position.x,
                        y: position.y,
                    },
                    window,
                );
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(action) =
                    engine.options().keybindings.lookup(&key_str)
                {
                    engine.execute(action, window);
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failed_frame_but_oom_is_redrawn() {
        assert_eq!(
            frame_recovery(&wgpu::SurfaceError::Lost),
            FrameRecovery::Reconfigure
        );
        assert_eq!(
            frame_recovery(&wgpu::SurfaceError::Outdated),
            FrameRecovery::Reconfigure
        );
        assert_eq!(
            frame_recovery(&wgpu::SurfaceError::Timeout),
            FrameRecovery::Retry
        );
        assert_eq!(
            frame_recovery(&wgpu::SurfaceError::Other),
            FrameRecovery::Retry
        );
        assert_eq!(
            frame_recovery(&wgpu::SurfaceError::OutOfMemory),
            FrameRecovery::Exit
        );
    }
}
