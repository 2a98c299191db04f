//! Scroll gesture tracking
//!
//! Remembers where we are in a user scroll gesture and decides which delay,
//! if any, the next fade-out should use.

use crate::intent::FadeReason;

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollActivityTracker {
    in_gesture: bool,
    scrolled: bool,
    rescheduled: bool,
}

impl ScrollActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.in_gesture = true;
        self.scrolled = false;
        self.rescheduled = false;
    }

    /// Record a scroll update. Returns the fade to schedule now, if any.
    ///
    /// Outside a gesture every update schedules a fade. Inside one, only a
    /// resize does; plain scrolls wait for `end`.
    pub fn update(&mut self, is_resize: bool) -> Option<FadeReason> {
        if !self.in_gesture {
            return Some(if is_resize {
                FadeReason::Resize
            } else {
                FadeReason::Scroll
            });
        }

        self.scrolled = true;
        if is_resize {
            self.rescheduled = true;
            return Some(FadeReason::Resize);
        }
        None
    }

    /// Record the end of a gesture. Returns the fade to schedule if the
    /// gesture scrolled and no resize already rescheduled one. A gesture
    /// without any update (a pinch, say) schedules nothing.
    pub fn end(&mut self) -> Option<FadeReason> {
        if !self.in_gesture {
            return None;
        }
        let post = self.scrolled && !self.rescheduled;
        *self = Self::default();
        post.then_some(FadeReason::Scroll)
    }

    pub fn in_gesture(&self) -> bool {
        self.in_gesture
    }

    /// Whether the current gesture has produced any scroll update
    pub fn has_scrolled(&self) -> bool {
        self.scrolled
    }
}
