//! Thumb thinning together with the visibility fade
//!
//! These tests verify that:
//! - Pointer proximity drives thickness independently of scrolling
//! - A pointer over the scrollbar holds it at full opacity
//! - Both animations share one start/stop pair on the client
//! - The thumb rectangle follows the animated thickness

use glide_animation::{
    FadePhase, ProximityZone, RecordingClient, ScrollbarAnimationConfig,
    ScrollbarAnimationController,
};
use glide_core::{Orientation, ScrollLayerSnapshot, ScrollbarEvent, ScrollbarTrack, Size, Vec2};
use std::time::{Duration, Instant};

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn layer() -> ScrollLayerSnapshot {
    ScrollLayerSnapshot {
        clip_bounds: Size::new(100.0, 100.0),
        content_bounds: Size::new(100.0, 400.0),
        scroll_offset: Vec2::new(0.0, 150.0),
        ..Default::default()
    }
}

fn controller() -> ScrollbarAnimationController<RecordingClient> {
    ScrollbarAnimationController::new(
        Orientation::Vertical,
        ScrollbarAnimationConfig::overlay_thinning(),
        RecordingClient::new(),
    )
}

fn scroll_gesture(controller: &mut ScrollbarAnimationController<RecordingClient>) {
    let layer = layer();
    controller.did_scroll_begin();
    controller.did_scroll_update(false, &layer);
    controller.did_scroll_end();
}

#[test]
fn near_pointer_thickness_survives_scrolling() {
    let mut controller = controller();
    let t0 = Instant::now();

    controller.did_mouse_move_near(10.0);
    assert_eq!(controller.zone(), ProximityZone::Near);
    assert!(controller.client().animating);

    controller.animate(t0);
    controller.animate(t0 + secs(3));
    assert_eq!(controller.thickness_scale(), 1.0);
    assert!(!controller.client().animating);

    scroll_gesture(&mut controller);
    assert_eq!(controller.thickness_scale(), 1.0);

    let task = controller.pending_task().unwrap();
    let t1 = t0 + secs(10);
    controller.run_delayed_task(task.id);
    for s in 0..=3 {
        controller.animate(t1 + secs(s));
        assert_eq!(controller.thickness_scale(), 1.0);
    }
    assert!(approx(controller.opacity(), 0.7));
}

#[test]
fn far_pointer_keeps_idle_thickness_through_fade() {
    let mut controller = controller();
    controller.did_mouse_move_near(200.0);
    assert_eq!(controller.zone(), ProximityZone::Far);

    scroll_gesture(&mut controller);
    let task = controller.pending_task().unwrap();
    let t0 = Instant::now();
    controller.run_delayed_task(task.id);

    for s in 0..=3 {
        controller.animate(t0 + secs(s));
        assert!(approx(controller.thickness_scale(), 0.4));
    }

    let state = controller.visual_state();
    assert!(approx(state.opacity, 0.7));
    assert!(approx(state.thumb_thickness_scale, 0.4));
    assert_eq!(controller.phase(), FadePhase::Idle);
}

#[test]
fn pointer_over_holds_full_opacity() {
    let mut controller = controller();
    let layer = layer();

    controller.handle_event(ScrollbarEvent::MouseMove { distance: 0.0 }, &layer);
    assert_eq!(controller.zone(), ProximityZone::Over);
    assert_eq!(controller.opacity(), 1.0);

    scroll_gesture(&mut controller);
    assert!(controller.pending_task().is_none());
    assert!(controller.fade().is_held());

    controller.handle_event(ScrollbarEvent::MouseLeave, &layer);
    assert!(!controller.fade().is_held());
    let task = controller.pending_task().unwrap();
    assert_eq!(task.delay, secs(2));
    assert_eq!(controller.phase(), FadePhase::AwaitingFadeStart);
}

#[test]
fn pointer_over_interrupts_running_fade() {
    let mut controller = controller();
    scroll_gesture(&mut controller);

    let task = controller.pending_task().unwrap();
    let t0 = Instant::now();
    controller.run_delayed_task(task.id);
    controller.animate(t0);
    controller.animate(t0 + secs(1));
    assert!(approx(controller.opacity(), 0.9));

    controller.did_mouse_move_near(-2.0);
    assert_eq!(controller.opacity(), 1.0);
    assert_eq!(controller.phase(), FadePhase::Visible);
    assert!(controller.pending_task().is_none());
}

#[test]
fn shared_frames_stop_once_both_animations_settle() {
    let mut controller = controller();
    scroll_gesture(&mut controller);

    let task = controller.pending_task().unwrap();
    let t0 = Instant::now();
    controller.run_delayed_task(task.id);
    assert_eq!(controller.client().start_count, 1);

    controller.animate(t0);
    controller.animate(t0 + secs(1));

    // Thickening starts while the fade is still running.
    controller.did_mouse_move_near(10.0);
    assert_eq!(controller.client().start_count, 1);

    assert!(controller.animate(t0 + secs(2)));
    let redraws = controller.client().redraw_count;
    assert!(controller.animate(t0 + secs(3)));
    assert!(controller.client().redraw_count > redraws);

    // Fade finished, thickness still moving.
    assert!(approx(controller.opacity(), 0.7));
    assert!(approx(controller.thickness_scale(), 0.6));
    assert_eq!(controller.client().stop_count, 0);

    assert!(controller.animate(t0 + secs(4)));
    assert!(!controller.animate(t0 + secs(5)));
    assert_eq!(controller.thickness_scale(), 1.0);
    assert_eq!(controller.client().stop_count, 1);
    assert!(!controller.client().animating);
}

#[test]
fn thumb_rect_follows_thickness() {
    let mut controller = controller();
    let layer = layer();
    let track = ScrollbarTrack {
        track_start: 0.0,
        track_length: 100.0,
        thumb_thickness: 10.0,
        vertical_adjust: 0.0,
    };
    let t0 = Instant::now();

    let thin = controller.thumb_rect(&layer, &track);
    assert!(approx(thin.width(), 4.0));

    controller.did_mouse_move_near(5.0);
    controller.animate(t0);
    controller.animate(t0 + secs(3));

    let thick = controller.thumb_rect(&layer, &track);
    assert!(approx(thick.width(), 10.0));
    assert_eq!(thick.y(), thin.y());
    assert_eq!(thick.height(), thin.height());
    assert!(approx(thick.right(), thin.right()));
}
