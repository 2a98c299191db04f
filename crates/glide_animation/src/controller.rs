//! Per-scrollbar animation controller
//!
//! Composes the visibility fade with the optional thickness controller for
//! one scrollbar and exposes what the renderer needs each frame.

use std::time::Instant;

use glide_core::{
    compute_thumb_rect, Orientation, Rect, ScrollLayerSnapshot, ScrollbarEvent, ScrollbarTrack,
};

use crate::client::ScrollbarAnimationClient;
use crate::config::ScrollbarAnimationConfig;
use crate::fade::{FadePhase, VisibilityFadeController};
use crate::scheduler::{DelayedTask, TaskId};
use crate::thickness::{ProximityZone, ThumbThicknessController, FULL_THICKNESS_SCALE};

/// What the renderer draws
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarVisualState {
    pub opacity: f32,
    pub thumb_thickness_scale: f32,
}

pub struct ScrollbarAnimationController<C: ScrollbarAnimationClient> {
    orientation: Orientation,
    fade: VisibilityFadeController<C>,
    thickness: Option<ThumbThicknessController>,
}

impl<C: ScrollbarAnimationClient> ScrollbarAnimationController<C> {
    pub fn new(orientation: Orientation, config: ScrollbarAnimationConfig, client: C) -> Self {
        let thickness = config.thinning.then(|| ThumbThicknessController::new(&config));
        tracing::debug!(
            "Creating {} scrollbar controller (policy {:?}, thinning {})",
            orientation,
            config.policy,
            config.thinning
        );
        Self {
            orientation,
            fade: VisibilityFadeController::new(config, client),
            thickness,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn fade(&self) -> &VisibilityFadeController<C> {
        &self.fade
    }

    pub fn thickness(&self) -> Option<&ThumbThicknessController> {
        self.thickness.as_ref()
    }

    pub fn client(&self) -> &C {
        self.fade.client()
    }

    pub fn client_mut(&mut self) -> &mut C {
        self.fade.client_mut()
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    /// Current thickness scale; always full when thinning is off
    pub fn thickness_scale(&self) -> f32 {
        self.thickness
            .as_ref()
            .map_or(FULL_THICKNESS_SCALE, |t| t.thickness_scale())
    }

    pub fn visual_state(&self) -> ScrollbarVisualState {
        ScrollbarVisualState {
            opacity: self.opacity(),
            thumb_thickness_scale: self.thickness_scale(),
        }
    }

    pub fn phase(&self) -> FadePhase {
        self.fade.phase()
    }

    pub fn zone(&self) -> ProximityZone {
        self.thickness
            .as_ref()
            .map_or(ProximityZone::Far, |t| t.zone())
    }

    pub fn pending_task(&self) -> Option<DelayedTask> {
        self.fade.pending_task()
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }

    pub fn did_scroll_begin(&mut self) {
        self.fade.did_scroll_begin();
    }

    pub fn did_scroll_update(&mut self, is_resize: bool, layer: &ScrollLayerSnapshot) {
        self.fade
            .did_scroll_update(is_resize, &layer.extent(self.orientation));
    }

    pub fn did_scroll_end(&mut self) {
        self.fade.did_scroll_end();
    }

    /// Pointer moved; `distance` is pixels from this scrollbar
    pub fn did_mouse_move_near(&mut self, distance: f32) {
        match self.thickness.as_mut() {
            Some(thickness) => thickness.did_mouse_move_near(distance, &mut self.fade),
            None => tracing::trace!("Ignoring pointer move; thinning disabled"),
        }
    }

    pub fn did_mouse_move_off(&mut self) {
        if let Some(thickness) = self.thickness.as_mut() {
            thickness.did_mouse_move_off(&mut self.fade);
        }
    }

    pub fn run_delayed_task(&mut self, id: TaskId) {
        self.fade.run_delayed_task(id);
    }

    /// Advance every running animation. Returns whether more frames are
    /// needed.
    pub fn animate(&mut self, now: Instant) -> bool {
        let thickness_frames = match self.thickness.as_mut() {
            Some(thickness) => {
                let before = thickness.thickness_scale();
                let more = thickness.animate(now);
                if thickness.thickness_scale() != before {
                    self.fade.request_redraw();
                }
                more
            }
            None => false,
        };
        self.fade.animate_with(now, thickness_frames)
    }

    /// Route an input event
    pub fn handle_event(&mut self, event: ScrollbarEvent, layer: &ScrollLayerSnapshot) {
        tracing::trace!("{} scrollbar event {}", self.orientation, event.name());
        match event {
            ScrollbarEvent::ScrollBegin => self.did_scroll_begin(),
            ScrollbarEvent::ScrollUpdate { resize } => self.did_scroll_update(resize, layer),
            ScrollbarEvent::ScrollEnd => self.did_scroll_end(),
            ScrollbarEvent::MouseMove { distance } => self.did_mouse_move_near(distance),
            ScrollbarEvent::MouseLeave => self.did_mouse_move_off(),
        }
    }

    /// Thumb rectangle for the current scroll offset and thickness
    pub fn thumb_rect(&self, layer: &ScrollLayerSnapshot, track: &ScrollbarTrack) -> Rect {
        let inputs = layer.geometry_inputs(self.orientation, track, self.thickness_scale());
        compute_thumb_rect(&inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RecordingClient;
    use glide_core::{Size, Vec2};

    fn layer() -> ScrollLayerSnapshot {
        ScrollLayerSnapshot {
            clip_bounds: Size::new(100.0, 100.0),
            content_bounds: Size::new(100.0, 400.0),
            scroll_offset: Vec2::new(0.0, 150.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_thinning_disabled_keeps_full_thickness() {
        let mut controller = ScrollbarAnimationController::new(
            Orientation::Vertical,
            ScrollbarAnimationConfig::fade_to_zero(),
            RecordingClient::new(),
        );
        controller.did_mouse_move_near(0.0);
        assert_eq!(controller.thickness_scale(), 1.0);
        assert_eq!(controller.zone(), ProximityZone::Far);
        assert_eq!(controller.opacity(), 0.0);
    }

    #[test]
    fn test_thumb_rect_uses_thickness_scale() {
        let controller = ScrollbarAnimationController::new(
            Orientation::Vertical,
            ScrollbarAnimationConfig::overlay_thinning(),
            RecordingClient::new(),
        );
        let track = ScrollbarTrack {
            track_start: 0.0,
            track_length: 100.0,
            thumb_thickness: 10.0,
            vertical_adjust: 0.0,
        };

        let rect = controller.thumb_rect(&layer(), &track);
        assert!((rect.width() - 4.0).abs() < 1e-4);
        assert!((rect.right() - 10.0).abs() < 1e-4);
        assert_eq!(rect.height(), 25.0);
        assert_eq!(rect.y(), 38.0);
    }

    #[test]
    fn test_handle_event_routes_to_controllers() {
        let mut controller = ScrollbarAnimationController::new(
            Orientation::Vertical,
            ScrollbarAnimationConfig::overlay_thinning(),
            RecordingClient::new(),
        );
        let layer = layer();

        controller.handle_event(ScrollbarEvent::ScrollBegin, &layer);
        assert_eq!(controller.phase(), FadePhase::Visible);

        controller.handle_event(ScrollbarEvent::MouseMove { distance: 0.0 }, &layer);
        assert_eq!(controller.zone(), ProximityZone::Over);
        assert!(controller.is_animating());

        controller.handle_event(ScrollbarEvent::MouseLeave, &layer);
        assert_eq!(controller.zone(), ProximityZone::Far);

        controller.handle_event(ScrollbarEvent::ScrollEnd, &layer);
        assert_eq!(controller.phase(), FadePhase::AwaitingFadeStart);
    }
}
