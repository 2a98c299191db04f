//! Frame driver interface
//!
//! Everything a controller needs from the outside world, injected at
//! construction. The controller calls these; it never polls them.

use crate::scheduler::DelayedTask;

/// Callbacks into the compositor / frame driver
pub trait ScrollbarAnimationClient {
    /// Start calling `animate(now)` every frame
    fn start_animating(&mut self);

    /// Stop calling `animate(now)`
    fn stop_animating(&mut self);

    /// Call `run_delayed_task(task.id)` once `task.delay` has elapsed
    fn post_delayed_task(&mut self, task: DelayedTask);

    /// Opacity or thickness changed; draw a new frame
    fn set_needs_redraw(&mut self);
}

/// Client that records every call, for tests and tooling
#[derive(Debug, Default)]
pub struct RecordingClient {
    pub animating: bool,
    pub start_count: usize,
    pub stop_count: usize,
    pub redraw_count: usize,
    pub posted: Vec<DelayedTask>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_posted(&self) -> Option<DelayedTask> {
        self.posted.last().copied()
    }
}

impl ScrollbarAnimationClient for RecordingClient {
    fn start_animating(&mut self) {
        self.animating = true;
        self.start_count += 1;
    }

    fn stop_animating(&mut self) {
        self.animating = false;
        self.stop_count += 1;
    }

    fn post_delayed_task(&mut self, task: DelayedTask) {
        self.posted.push(task);
    }

    fn set_needs_redraw(&mut self) {
        self.redraw_count += 1;
    }
}
