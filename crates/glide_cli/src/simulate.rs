//! Simulated frame driver
//!
//! Replays a [`Scenario`] against a [`ScrollbarAnimationController`] on a
//! manual clock. Per frame: deliver events that are due, run delayed tasks
//! that are due, then call `animate` if the controller asked for frames.

use glide_animation::{
    DelayedTask, FadePhase, ManualClock, ManualTaskRunner, ScrollbarAnimationClient,
    ScrollbarAnimationController, TimeSource,
};
use glide_core::{Rect, ScrollLayerSnapshot};
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::scenario::Scenario;

/// Frame driver backed by a [`ManualTaskRunner`]
pub struct SimulationClient {
    runner: ManualTaskRunner,
    now: Instant,
    animating: bool,
    redraws: usize,
}

impl SimulationClient {
    pub fn new(now: Instant) -> Self {
        Self {
            runner: ManualTaskRunner::new(),
            now,
            animating: false,
            redraws: 0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl ScrollbarAnimationClient for SimulationClient {
    fn start_animating(&mut self) {
        self.animating = true;
    }

    fn stop_animating(&mut self) {
        self.animating = false;
    }

    fn post_delayed_task(&mut self, task: DelayedTask) {
        self.runner.post(task, self.now);
    }

    fn set_needs_redraw(&mut self) {
        self.redraws += 1;
    }
}

/// One rendered frame
#[derive(Clone, Debug, Serialize)]
pub struct FrameSample {
    pub t_ms: u64,
    pub phase: &'static str,
    pub opacity: f32,
    pub thickness_scale: f32,
    pub thumb: Rect,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub frames: Vec<FrameSample>,
    pub redraws: usize,
}

fn phase_name(phase: FadePhase) -> &'static str {
    match phase {
        FadePhase::Idle => "idle",
        FadePhase::Visible => "visible",
        FadePhase::AwaitingFadeStart => "awaiting_fade_start",
        FadePhase::FadingOut => "fading_out",
    }
}

pub struct Simulation {
    scenario: Scenario,
    clock: ManualClock,
    layer: ScrollLayerSnapshot,
    controller: ScrollbarAnimationController<SimulationClient>,
    next_event: usize,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> Self {
        let clock = ManualClock::new();
        let controller = ScrollbarAnimationController::new(
            scenario.orientation,
            scenario.config.clone(),
            SimulationClient::new(clock.now()),
        );
        Self {
            layer: scenario.layer,
            scenario,
            clock,
            controller,
            next_event: 0,
        }
    }

    /// Run to the end of the scenario
    pub fn run(mut self) -> SimulationReport {
        let interval = self.scenario.frame_interval_ms;
        let mut frames = Vec::new();
        let mut t_ms = 0;
        while t_ms <= self.scenario.duration_ms {
            frames.push(self.frame(t_ms));
            t_ms += interval;
        }

        tracing::info!(
            "Simulated {} frames over {}ms",
            frames.len(),
            self.scenario.duration_ms
        );
        SimulationReport {
            frames,
            redraws: self.controller.client().redraws(),
        }
    }

    /// Advance to `t_ms` and produce that frame
    pub fn frame(&mut self, t_ms: u64) -> FrameSample {
        while let Some(event) = self.scenario.events.get(self.next_event) {
            if event.at_ms > t_ms {
                break;
            }
            let event = event.clone();
            self.next_event += 1;

            self.set_time(event.at_ms);
            self.run_due_tasks();
            event.apply_to(&mut self.layer);
            tracing::debug!("{}ms: {}", event.at_ms, event.event.name());
            self.controller.handle_event(event.event, &self.layer);
        }

        self.set_time(t_ms);
        self.run_due_tasks();
        if self.controller.client().is_animating() {
            self.controller.animate(self.clock.now());
        }

        FrameSample {
            t_ms,
            phase: phase_name(self.controller.phase()),
            opacity: self.controller.opacity(),
            thickness_scale: self.controller.thickness_scale(),
            thumb: self.controller.thumb_rect(&self.layer, &self.scenario.track),
        }
    }

    fn set_time(&mut self, t_ms: u64) {
        self.clock.set_elapsed(Duration::from_millis(t_ms));
        let now = self.clock.now();
        self.controller.client_mut().now = now;
    }

    fn run_due_tasks(&mut self) {
        let now = self.clock.now();
        let due = self.controller.client_mut().runner.take_due(now);
        for id in due {
            self.controller.run_delayed_task(id);
        }
    }
}

/// Human-readable frame table
pub fn format_report(report: &SimulationReport) -> String {
    let mut out = String::new();
    for frame in &report.frames {
        let thumb = &frame.thumb;
        out.push_str(&format!(
            "{:>7}ms  {:<19} opacity {:.3}  thickness {:.3}  thumb ({:.1}, {:.1}) {:.1}x{:.1}\n",
            frame.t_ms,
            frame.phase,
            frame.opacity,
            frame.thickness_scale,
            thumb.x(),
            thumb.y(),
            thumb.width(),
            thumb.height()
        ));
    }
    out.push_str(&format!("{} redraws\n", report.redraws));
    out
}
