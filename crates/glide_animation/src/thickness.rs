//! Thumb thickness controller
//!
//! Thickens the thumb when the pointer comes near the scrollbar and thins it
//! back to the idle scale when the pointer goes away. The scale moves at a
//! fixed rate, so a transition that interrupts another one simply continues
//! from wherever the scale currently is.
//!
//! Pointer directly over the scrollbar also asks the visibility side for full
//! opacity through [`VisibilityHost`]. The coupling is one way: opacity never
//! touches thickness.

use std::time::Instant;

use crate::config::ScrollbarAnimationConfig;
use crate::intent::{elapsed_since_anchor, AnimationIntent, ThicknessDirection};

/// Full thickness
pub const FULL_THICKNESS_SCALE: f32 = 1.0;

/// Distance to the target below which a transition snaps and settles
const SETTLE_EPSILON: f32 = 1e-4;

/// Pointer proximity to the scrollbar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProximityZone {
    #[default]
    Far,
    Near,
    Over,
}

impl ProximityZone {
    /// Classify a pointer distance. Negative distances count as over the
    /// scrollbar; NaN counts as far away.
    pub fn classify(distance: f32, near_threshold: f32) -> Self {
        if distance.is_nan() {
            ProximityZone::Far
        } else if distance <= 0.0 {
            ProximityZone::Over
        } else if distance <= near_threshold {
            ProximityZone::Near
        } else {
            ProximityZone::Far
        }
    }
}

/// What the thickness controller may ask of the visibility side
pub trait VisibilityHost {
    /// Show at full opacity and stay awake until released
    fn request_full_visibility(&mut self);

    /// Undo [`request_full_visibility`](Self::request_full_visibility)
    fn release_full_visibility(&mut self);

    /// Ask for per-frame `animate` calls
    fn request_frames(&mut self);
}

#[derive(Clone, Debug)]
pub struct ThumbThicknessController {
    idle_scale: f32,
    /// Scale units per second
    rate: f32,
    near_threshold: f32,
    zone: ProximityZone,
    scale: f32,
    intent: AnimationIntent,
}

impl ThumbThicknessController {
    pub fn new(config: &ScrollbarAnimationConfig) -> Self {
        // NaN disables thinning rather than poisoning the scale.
        let idle_scale = if config.idle_thickness_scale.is_nan() {
            FULL_THICKNESS_SCALE
        } else {
            config
                .idle_thickness_scale
                .clamp(f32::EPSILON, FULL_THICKNESS_SCALE)
        };
        let seconds = config.thinning_duration().as_secs_f32().max(f32::EPSILON);
        Self {
            idle_scale,
            rate: (FULL_THICKNESS_SCALE - idle_scale) / seconds,
            near_threshold: config.near_threshold.max(0.0),
            zone: ProximityZone::Far,
            scale: idle_scale,
            intent: AnimationIntent::Idle,
        }
    }

    pub fn thickness_scale(&self) -> f32 {
        self.scale
    }

    pub fn zone(&self) -> ProximityZone {
        self.zone
    }

    pub fn intent(&self) -> AnimationIntent {
        self.intent
    }

    pub fn is_animating(&self) -> bool {
        self.intent.needs_frames()
    }

    /// Pointer moved; `distance` is pixels from the scrollbar
    pub fn did_mouse_move_near(&mut self, distance: f32, host: &mut dyn VisibilityHost) {
        let zone = ProximityZone::classify(distance, self.near_threshold);
        self.set_zone(zone, host);
    }

    /// Pointer left the scroller
    pub fn did_mouse_move_off(&mut self, host: &mut dyn VisibilityHost) {
        self.set_zone(ProximityZone::Far, host);
    }

    fn set_zone(&mut self, zone: ProximityZone, host: &mut dyn VisibilityHost) {
        let previous = self.zone;
        if previous == zone {
            return;
        }
        tracing::debug!("Thumb proximity {:?} -> {:?}", previous, zone);
        self.zone = zone;

        let direction = match zone {
            ProximityZone::Far => ThicknessDirection::Thin,
            ProximityZone::Near | ProximityZone::Over => ThicknessDirection::Thicken,
        };
        if self.start_transition(direction) {
            host.request_frames();
        }

        if zone == ProximityZone::Over {
            host.request_full_visibility();
        } else if previous == ProximityZone::Over {
            host.release_full_visibility();
        }
    }

    fn target(&self, direction: ThicknessDirection) -> f32 {
        match direction {
            ThicknessDirection::Thicken => FULL_THICKNESS_SCALE,
            ThicknessDirection::Thin => self.idle_scale,
        }
    }

    /// Returns whether a new transition was started
    fn start_transition(&mut self, direction: ThicknessDirection) -> bool {
        if let AnimationIntent::ThickeningOrThinning { direction: current, .. } = self.intent {
            if current == direction {
                return false;
            }
        }
        if self.scale == self.target(direction) {
            self.intent = AnimationIntent::Idle;
            return false;
        }

        self.intent = AnimationIntent::ThickeningOrThinning {
            direction,
            from: self.scale,
            anchor: None,
        };
        true
    }

    /// Advance the thickness. Returns whether more frames are needed.
    pub fn animate(&mut self, now: Instant) -> bool {
        let AnimationIntent::ThickeningOrThinning {
            direction,
            from,
            anchor,
        } = &mut self.intent
        else {
            return false;
        };
        let (direction, from) = (*direction, *from);
        let Some(elapsed) = elapsed_since_anchor(anchor, now) else {
            return true;
        };

        let delta = elapsed.as_secs_f32() * self.rate;
        let target = self.target(direction);
        let next = match direction {
            ThicknessDirection::Thicken => (from + delta).min(target),
            ThicknessDirection::Thin => (from - delta).max(target),
        };

        if (target - next).abs() <= SETTLE_EPSILON {
            self.scale = target;
            tracing::debug!("Thumb thickness settled at {:.2}", target);
            self.intent = AnimationIntent::Idle;
            return false;
        }
        self.scale = next;
        tracing::trace!("Thumb thickness {:.3} -> {:.3}", from, next);
        true
    }
}
