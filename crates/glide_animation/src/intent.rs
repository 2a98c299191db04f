//! Animation intents
//!
//! What a controller is currently trying to do. At most one intent is active
//! per controller; setting a new one replaces the old.

use std::time::{Duration, Instant};

/// Why a fade-out was scheduled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeReason {
    /// A scroll settled
    Scroll,
    /// The clip or content bounds changed
    Resize,
}

/// Direction of a thickness transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThicknessDirection {
    Thicken,
    Thin,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationIntent {
    #[default]
    Idle,
    /// A fade-out task is pending with the frame driver
    AwaitingFadeStart(FadeReason),
    /// Opacity ramps from `from` toward the policy floor.
    /// `anchor` is captured by the first frame after the task fires.
    FadingOut {
        from: f32,
        anchor: Option<Instant>,
    },
    /// Thickness moves from `from` toward the direction's target
    ThickeningOrThinning {
        direction: ThicknessDirection,
        from: f32,
        anchor: Option<Instant>,
    },
}

impl AnimationIntent {
    /// Whether this intent needs per-frame callbacks
    pub fn needs_frames(&self) -> bool {
        matches!(
            self,
            AnimationIntent::FadingOut { .. } | AnimationIntent::ThickeningOrThinning { .. }
        )
    }
}

/// Time elapsed since `anchor`, capturing it on first use.
///
/// Returns `None` on the capturing frame: that frame leaves the animated
/// value untouched, so the animation never depends on how far the task's
/// execution and the next frame tick are apart.
pub(crate) fn elapsed_since_anchor(anchor: &mut Option<Instant>, now: Instant) -> Option<Duration> {
    match *anchor {
        Some(start) => Some(now.saturating_duration_since(start)),
        None => {
            *anchor = Some(now);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_captured_once() {
        let t0 = Instant::now();
        let mut anchor = None;

        assert_eq!(elapsed_since_anchor(&mut anchor, t0), None);
        assert_eq!(anchor, Some(t0));
        assert_eq!(
            elapsed_since_anchor(&mut anchor, t0 + Duration::from_secs(1)),
            Some(Duration::from_secs(1))
        );
        assert_eq!(anchor, Some(t0));
    }

    #[test]
    fn test_needs_frames() {
        assert!(!AnimationIntent::Idle.needs_frames());
        assert!(!AnimationIntent::AwaitingFadeStart(FadeReason::Scroll).needs_frames());
        assert!(AnimationIntent::FadingOut {
            from: 1.0,
            anchor: None
        }
        .needs_frames());
    }
}
