//! Scrollbar input events
//!
//! The input vocabulary the animation controller reacts to. Input routing
//! upstream (hit testing, gesture recognition) is done by the embedder; by the
//! time an event reaches us the pointer has already been reduced to a
//! distance from the scrollbar.

use serde::{Deserialize, Serialize};

/// An input event for one scrollbar
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollbarEvent {
    /// A user scroll gesture started
    ScrollBegin,
    /// The scroll offset changed, or the clip/content bounds changed
    /// (`resize = true`)
    ScrollUpdate {
        #[serde(default)]
        resize: bool,
    },
    /// The scroll gesture ended
    ScrollEnd,
    /// Pointer moved; `distance` is in pixels from the scrollbar track,
    /// zero when directly over it
    MouseMove { distance: f32 },
    /// Pointer left the scroller entirely
    MouseLeave,
}

impl ScrollbarEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ScrollbarEvent::ScrollBegin => "scroll_begin",
            ScrollbarEvent::ScrollUpdate { .. } => "scroll_update",
            ScrollbarEvent::ScrollEnd => "scroll_end",
            ScrollbarEvent::MouseMove { .. } => "mouse_move",
            ScrollbarEvent::MouseLeave => "mouse_leave",
        }
    }

    /// Whether this event belongs to a scroll gesture
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            ScrollbarEvent::ScrollBegin
                | ScrollbarEvent::ScrollUpdate { .. }
                | ScrollbarEvent::ScrollEnd
        )
    }
}
