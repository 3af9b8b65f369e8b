//! Redraw coalescing.
//!
//! Input handlers may dirty the scene many times between two display
//! refreshes. [`FrameScheduler`] turns all of them into a single registered
//! tick, and the tick reads whatever state is current when it fires, so the
//! last change before the refresh is always the one drawn.

/// Host primitive that arranges for one tick callback on the next display
/// refresh (for a winit window, `request_redraw`).
pub trait HostScheduler {
    /// Register for exactly one upcoming tick.
    fn schedule_tick(&mut self);
}

/// One-bit gate over a [`HostScheduler`]: at most one tick is ever pending.
#[derive(Debug)]
pub struct FrameScheduler {
    /// A tick is registered and has not run yet.
    queued: bool,
    frames_drawn: u64,
}

impl FrameScheduler {
    /// Create the scheduler with a tick already registered so the first
    /// frame is drawn without waiting for input.
    pub fn start(host: &mut impl HostScheduler) -> Self {
        host.schedule_tick();
        Self {
            queued: true,
            frames_drawn: 0,
        }
    }

    /// Mark the scene dirty. Registers a tick unless one is already pending.
    pub fn request_redraw(&mut self, host: &mut impl HostScheduler) {
        if self.queued {
            return;
        }
        self.queued = true;
        host.schedule_tick();
    }

    /// Run the tick: call `render` once, then open the gate for the next
    /// request. The gate is cleared whatever `render` returns.
    pub fn on_tick<T>(&mut self, render: impl FnOnce() -> T) -> T {
        let out = render();
        self.queued = false;
        self.frames_drawn += 1;
        log::debug!("tick drew frame {}", self.frames_drawn);
        out
    }

    /// Whether a tick is registered and pending.
    #[must_use]
    pub fn is_queued(&self) -> bool {
        self.queued
    }

    /// Number of ticks that have run.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::*;

    /// Counts registrations instead of talking to a window.
    #[derive(Debug, Default)]
    pub(crate) struct CountingHost {
        pub(crate) ticks: usize,
    }

    impl HostScheduler for CountingHost {
        fn schedule_tick(&mut self) {
            self.ticks += 1;
        }
    }

    #[test]
    fn start_registers_the_first_frame() {
        let mut host = CountingHost::default();
        let scheduler = FrameScheduler::start(&mut host);
        assert!(scheduler.is_queued());
        assert_eq!(host.ticks, 1);
    }

    #[test]
    fn requests_coalesce_until_the_tick() {
        let mut host = CountingHost::default();
        let mut scheduler = FrameScheduler::start(&mut host);
        let renders = Cell::new(0);
        scheduler.on_tick(|| renders.set(renders.get() + 1));

        for _ in 0..25 {
            scheduler.request_redraw(&mut host);
        }
        assert_eq!(host.ticks, 2);

        scheduler.on_tick(|| renders.set(renders.get() + 1));
        assert_eq!(renders.get(), 2);
        assert_eq!(scheduler.frames_drawn(), 2);
    }

    #[test]
    fn single_request_schedules_once() {
        let mut host = CountingHost::default();
        let mut scheduler = FrameScheduler::start(&mut host);
        scheduler.on_tick(|| ());
        scheduler.request_redraw(&mut host);
        assert_eq!(host.ticks, 2);
        assert!(scheduler.is_queued());
    }

    #[test]
    fn tick_reopens_the_gate() {
        let mut host = CountingHost::default();
        let mut scheduler = FrameScheduler::start(&mut host);
        scheduler.request_redraw(&mut host);
        assert_eq!(host.ticks, 1);

        scheduler.on_tick(|| ());
        assert!(!scheduler.is_queued());

        scheduler.request_redraw(&mut host);
        assert_eq!(host.ticks, 2);
        assert!(scheduler.is_queued());
    }

    #[test]
    fn render_sees_state_at_tick_time() {
        let mut host = CountingHost::default();
        let mut scheduler = FrameScheduler::start(&mut host);
        let state = Cell::new(0);
        for value in 1..=5 {
            state.set(value);
            scheduler.request_redraw(&mut host);
        }
        let drawn = scheduler.on_tick(|| state.get());
        assert_eq!(drawn, 5);
    }

    #[test]
    fn failed_render_still_clears_gate() {
        let mut host = CountingHost::default();
        let mut scheduler = FrameScheduler::start(&mut host);
        let result: Result<(), &str> = scheduler.on_tick(|| Err("lost"));
        assert!(result.is_err());
        assert!(!scheduler.is_queued());
    }
}
