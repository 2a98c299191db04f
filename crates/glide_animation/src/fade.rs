//! Visibility fade controller
//!
//! Owns a scrollbar's opacity. Scrolling wakes the scrollbar up at full
//! opacity; once activity settles a delayed task is posted, and when it fires
//! the opacity ramps down to the policy floor over `fade_duration`.
//!
//! ```text
//! Idle --(scroll begin | pointer over)--> Visible
//! Visible --(scroll end)--> AwaitingFadeStart[fade_delay]
//! Visible --(resize update)--> AwaitingFadeStart[resize_delay]
//! AwaitingFadeStart --(task fires)--> FadingOut --(ramp done)--> Idle
//! FadingOut --(scroll begin | pointer over)--> Visible
//! any --(axis not scrollable)--> Idle, opacity 0
//! ```
//!
//! The ramp's start time is taken from the first `animate` after the task
//! fires, and that frame leaves opacity unchanged.
//!
//! Scroll begin stops a running ramp but leaves a pending task alone; the
//! first scroll update of the gesture is what cancels it. A gesture that
//! never scrolls (a pinch) therefore keeps whatever task was pending.

use std::time::Instant;

use glide_core::ScrollExtent;

use crate::activity::ScrollActivityTracker;
use crate::client::ScrollbarAnimationClient;
use crate::config::ScrollbarAnimationConfig;
use crate::intent::{elapsed_since_anchor, AnimationIntent, FadeReason};
use crate::scheduler::{DelayedTask, DelayedTaskSlot, TaskId};
use crate::thickness::VisibilityHost;

/// Opacity of an awake scrollbar
pub const FULL_OPACITY: f32 = 1.0;

/// Coarse visibility state, for introspection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    /// Resting at the policy floor, or hidden
    Idle,
    /// Awake at full opacity with nothing scheduled
    Visible,
    /// Awake, with a fade-out task pending
    AwaitingFadeStart,
    /// Opacity is ramping down
    FadingOut,
}

pub struct VisibilityFadeController<C: ScrollbarAnimationClient> {
    config: ScrollbarAnimationConfig,
    client: C,
    opacity: f32,
    intent: AnimationIntent,
    activity: ScrollActivityTracker,
    fade_task: DelayedTaskSlot,
    scrollable: bool,
    /// Pointer is over the scrollbar; fading is suspended
    held: bool,
    /// Whether the client is currently calling `animate`
    animating: bool,
}

impl<C: ScrollbarAnimationClient> VisibilityFadeController<C> {
    /// Create a controller resting at the policy floor. The axis is assumed
    /// scrollable until a scroll update says otherwise.
    pub fn new(config: ScrollbarAnimationConfig, client: C) -> Self {
        let opacity = config.policy.floor();
        Self {
            config,
            client,
            opacity,
            intent: AnimationIntent::Idle,
            activity: ScrollActivityTracker::new(),
            fade_task: DelayedTaskSlot::new(),
            scrollable: true,
            held: false,
            animating: false,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn config(&self) -> &ScrollbarAnimationConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn intent(&self) -> AnimationIntent {
        self.intent
    }

    pub fn pending_task(&self) -> Option<DelayedTask> {
        self.fade_task.pending()
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// Whether the pointer is holding the scrollbar awake
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Whether the client has been asked for per-frame callbacks
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn phase(&self) -> FadePhase {
        match self.intent {
            AnimationIntent::AwaitingFadeStart(_) => FadePhase::AwaitingFadeStart,
            AnimationIntent::FadingOut { .. } => FadePhase::FadingOut,
            _ if self.scrollable && self.opacity > self.config.policy.floor() => {
                FadePhase::Visible
            }
            _ => FadePhase::Idle,
        }
    }

    pub fn did_scroll_begin(&mut self) {
        self.activity.begin();
        if !self.scrollable {
            tracing::trace!("Scroll begin on unscrollable axis");
            return;
        }
        tracing::debug!("Scroll begin; waking scrollbar");
        self.cancel_fade_animation();
        self.set_opacity(FULL_OPACITY);
    }

    /// The scroll offset changed, or (`is_resize`) the clip/content bounds did
    pub fn did_scroll_update(&mut self, is_resize: bool, extent: &ScrollExtent) {
        let first_in_gesture = self.activity.in_gesture() && !self.activity.has_scrolled();
        let reason = self.activity.update(is_resize);

        if !extent.is_scrollable() {
            self.force_hide();
            return;
        }
        if !self.scrollable {
            tracing::debug!("Axis became scrollable");
            self.scrollable = true;
        }

        // Only the gesture's first scroll drops a task posted before it; a
        // resize posted earlier in the gesture must survive later updates.
        if first_in_gesture && reason.is_none() {
            self.cancel_fade();
        }
        self.cancel_fade_animation();
        self.set_opacity(FULL_OPACITY);

        if let Some(reason) = reason {
            self.post_fade(reason);
        }
    }

    pub fn did_scroll_end(&mut self) {
        let reason = self.activity.end();
        if !self.scrollable {
            return;
        }
        match reason {
            Some(reason) => self.post_fade(reason),
            // Resize task already pending; leave it alone.
            None if self.fade_task.is_pending() => {}
            None if self.opacity > self.config.policy.floor() => {
                self.post_fade(FadeReason::Scroll)
            }
            None => {}
        }
    }

    /// Entry point for a delayed task posted by this controller. Stale ids
    /// are ignored.
    pub fn run_delayed_task(&mut self, id: TaskId) {
        if !self.fade_task.take_if_current(id) {
            tracing::debug!("Ignoring stale fade task {:?}", id);
            return;
        }

        if self.opacity <= self.config.policy.floor() {
            self.intent = AnimationIntent::Idle;
            return;
        }

        tracing::debug!("Fade task fired; fading from {:.2}", self.opacity);
        self.intent = AnimationIntent::FadingOut {
            from: self.opacity,
            anchor: None,
        };
        self.start_animating();
    }

    /// Advance the fade. Returns whether more frames are needed.
    pub fn animate(&mut self, now: Instant) -> bool {
        self.animate_with(now, false)
    }

    /// Advance the fade while another animation (the thumb thickness) may
    /// still need frames. The client is told to stop animating only when
    /// neither does.
    pub fn animate_with(&mut self, now: Instant, others_need_frames: bool) -> bool {
        let mut needs_frames = others_need_frames;

        let step = match &mut self.intent {
            AnimationIntent::FadingOut { from, anchor } => {
                Some((*from, elapsed_since_anchor(anchor, now)))
            }
            _ => None,
        };

        match step {
            Some((_, None)) => needs_frames = true,
            Some((from, Some(elapsed))) => {
                let floor = self.config.policy.floor();
                let duration = self.config.fade_duration().as_secs_f32().max(f32::EPSILON);
                let progress = (elapsed.as_secs_f32() / duration).min(1.0);

                if progress >= 1.0 {
                    tracing::debug!("Fade complete at {:.2}", floor);
                    self.intent = AnimationIntent::Idle;
                    self.set_opacity(floor);
                } else {
                    let eased = self.config.fade_easing.apply(progress);
                    self.set_opacity((from + (floor - from) * eased).max(floor));
                    needs_frames = true;
                }
            }
            None => {}
        }

        if !needs_frames {
            self.stop_animating();
        }
        needs_frames
    }

    /// Ask the client for a new frame
    pub fn request_redraw(&mut self) {
        self.client.set_needs_redraw();
    }

    fn start_animating(&mut self) {
        if !self.animating {
            self.animating = true;
            self.client.start_animating();
        }
    }

    fn stop_animating(&mut self) {
        if self.animating {
            self.animating = false;
            self.client.stop_animating();
        }
    }

    fn set_opacity(&mut self, opacity: f32) {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, FULL_OPACITY)
        };
        if opacity != self.opacity {
            tracing::trace!("Scrollbar opacity {:.3} -> {:.3}", self.opacity, opacity);
            self.opacity = opacity;
            self.client.set_needs_redraw();
        }
    }

    fn post_fade(&mut self, reason: FadeReason) {
        if self.held {
            tracing::trace!("Pointer over scrollbar; not scheduling fade");
            return;
        }
        let task = self.fade_task.post(self.config.delay_for(reason));
        tracing::debug!("Fade scheduled in {:?} ({:?})", task.delay, reason);
        self.intent = AnimationIntent::AwaitingFadeStart(reason);
        self.client.post_delayed_task(task);
    }

    /// Drop both the pending task and any running ramp
    fn cancel_fade(&mut self) {
        self.fade_task.cancel();
        if matches!(
            self.intent,
            AnimationIntent::AwaitingFadeStart(_) | AnimationIntent::FadingOut { .. }
        ) {
            self.intent = AnimationIntent::Idle;
        }
    }

    fn cancel_fade_animation(&mut self) {
        if matches!(self.intent, AnimationIntent::FadingOut { .. }) {
            self.intent = AnimationIntent::Idle;
        }
    }

    fn force_hide(&mut self) {
        if self.scrollable || self.opacity > 0.0 || self.fade_task.is_pending() {
            tracing::debug!("Axis no longer scrollable; hiding scrollbar");
        }
        self.scrollable = false;
        self.fade_task.cancel();
        self.intent = AnimationIntent::Idle;
        self.set_opacity(0.0);
    }
}

impl<C: ScrollbarAnimationClient> VisibilityHost for VisibilityFadeController<C> {
    fn request_full_visibility(&mut self) {
        self.held = true;
        if !self.scrollable {
            return;
        }
        tracing::debug!("Pointer over scrollbar; holding it awake");
        self.cancel_fade();
        self.set_opacity(FULL_OPACITY);
    }

    fn release_full_visibility(&mut self) {
        self.held = false;
        if !self.scrollable || self.activity.in_gesture() {
            return;
        }
        if self.opacity > self.config.policy.floor() {
            self.post_fade(FadeReason::Scroll);
        }
    }

    fn request_frames(&mut self) {
        self.start_animating();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RecordingClient;
    use crate::config::FadePolicy;
    use std::time::Duration;

    fn scrollable() -> ScrollExtent {
        ScrollExtent::new(100.0, 400.0, true)
    }

    fn fade_to_zero() -> VisibilityFadeController<RecordingClient> {
        VisibilityFadeController::new(ScrollbarAnimationConfig::fade_to_zero(), RecordingClient::new())
    }

    #[test]
    fn test_starts_at_policy_floor() {
        assert_eq!(fade_to_zero().opacity(), 0.0);

        let config = ScrollbarAnimationConfig {
            policy: FadePolicy::FadeToIdleFloor { floor: 0.7 },
            ..Default::default()
        };
        let fade = VisibilityFadeController::new(config, RecordingClient::new());
        assert_eq!(fade.opacity(), 0.7);
        assert_eq!(fade.phase(), FadePhase::Idle);
    }

    #[test]
    fn test_scroll_begin_snaps_to_full_opacity() {
        let mut fade = fade_to_zero();
        fade.did_scroll_begin();
        assert_eq!(fade.opacity(), 1.0);
        assert_eq!(fade.phase(), FadePhase::Visible);
        assert_eq!(fade.client().redraw_count, 1);
    }

    #[test]
    fn test_scroll_end_posts_fade_delay() {
        let mut fade = fade_to_zero();
        fade.did_scroll_begin();
        fade.did_scroll_update(false, &scrollable());
        assert!(fade.pending_task().is_none());
        fade.did_scroll_end();

        let task = fade.pending_task().unwrap();
        assert_eq!(task.delay, Duration::from_secs(2));
        assert_eq!(fade.client().last_posted(), Some(task));
        assert_eq!(fade.phase(), FadePhase::AwaitingFadeStart);
    }

    #[test]
    fn test_stale_task_is_noop() {
        let mut fade = fade_to_zero();
        fade.did_scroll_update(false, &scrollable());
        let stale = fade.pending_task().unwrap();
        fade.did_scroll_update(false, &scrollable());

        fade.run_delayed_task(stale.id);
        assert_eq!(fade.phase(), FadePhase::AwaitingFadeStart);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_first_frame_after_task_only_anchors() {
        let mut fade = fade_to_zero();
        fade.did_scroll_update(false, &scrollable());
        let task = fade.pending_task().unwrap();
        fade.run_delayed_task(task.id);
        assert_eq!(fade.client().start_count, 1);

        let t0 = Instant::now();
        assert!(fade.animate(t0 + Duration::from_millis(1234)));
        assert_eq!(fade.opacity(), 1.0);
        assert!(fade.animate(t0 + Duration::from_millis(1234 + 1500)));
        assert!((fade.opacity() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_hold_suspends_fade() {
        let mut fade = fade_to_zero();
        fade.did_scroll_update(false, &scrollable());
        assert!(fade.pending_task().is_some());

        fade.request_full_visibility();
        assert!(fade.pending_task().is_none());
        assert_eq!(fade.opacity(), 1.0);

        fade.did_scroll_begin();
        fade.did_scroll_update(false, &scrollable());
        fade.did_scroll_end();
        assert!(fade.pending_task().is_none());

        fade.release_full_visibility();
        assert_eq!(fade.pending_task().unwrap().delay, Duration::from_secs(2));
    }

    #[test]
    fn test_gesture_without_updates_keeps_pending_task() {
        let mut fade = fade_to_zero();
        fade.did_scroll_update(true, &scrollable());
        let resize = fade.pending_task().unwrap();
        assert_eq!(resize.delay, Duration::from_secs(5));

        fade.did_scroll_begin();
        fade.did_scroll_end();
        assert_eq!(fade.pending_task(), Some(resize));
        assert_eq!(fade.client().posted.len(), 1);
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn test_gesture_without_updates_posts_when_nothing_pending() {
        let mut fade = fade_to_zero();
        fade.did_scroll_begin();
        fade.did_scroll_end();
        assert_eq!(fade.pending_task().unwrap().delay, Duration::from_secs(2));
    }

    #[test]
    fn test_first_scroll_of_gesture_replaces_pending_task() {
        let mut fade = fade_to_zero();
        fade.did_scroll_update(true, &scrollable());
        let resize = fade.pending_task().unwrap();

        fade.did_scroll_begin();
        assert_eq!(fade.pending_task(), Some(resize));
        fade.did_scroll_update(false, &scrollable());
        assert!(fade.pending_task().is_none());

        fade.did_scroll_end();
        let task = fade.pending_task().unwrap();
        assert_eq!(task.delay, Duration::from_secs(2));

        fade.run_delayed_task(resize.id);
        assert_eq!(fade.phase(), FadePhase::AwaitingFadeStart);
    }

    #[test]
    fn test_bad_floor_is_normalized() {
        for (floor, expected) in [(f32::NAN, 0.0), (1.5, 1.0), (-0.5, 0.0)] {
            let config = ScrollbarAnimationConfig {
                policy: FadePolicy::FadeToIdleFloor { floor },
                ..Default::default()
            };
            let mut fade = VisibilityFadeController::new(config, RecordingClient::new());
            assert_eq!(fade.opacity(), expected, "floor {}", floor);

            fade.did_scroll_update(false, &scrollable());
            let task = fade.pending_task().unwrap();
            fade.run_delayed_task(task.id);

            let t0 = Instant::now();
            for ms in [0, 1000, 2000, 3000] {
                fade.animate(t0 + Duration::from_millis(ms));
                let opacity = fade.opacity();
                assert!((0.0..=1.0).contains(&opacity), "floor {}: {}", floor, opacity);
            }
            assert_eq!(fade.opacity(), expected);
        }
    }

    #[test]
    fn test_unscrollable_ignores_scroll_begin() {
        let mut fade = fade_to_zero();
        fade.did_scroll_update(false, &ScrollExtent::new(100.0, 100.0, true));
        fade.did_scroll_begin();
        assert_eq!(fade.opacity(), 0.0);
        fade.request_full_visibility();
        assert_eq!(fade.opacity(), 0.0);
        assert_eq!(fade.phase(), FadePhase::Idle);
    }
}
