//! Scroll layer snapshot
//!
//! The read-only view of a scrolling layer that the layout side hands over
//! each frame: clip (viewport) bounds, content bounds, the current scroll
//! offset and which axes the user may scroll. Everything the animation
//! controllers and the thumb geometry need is derived from it here.

use serde::{Deserialize, Serialize};

use crate::geometry::{Orientation, Size, Vec2};
use crate::thumb::ScrollbarGeometryInputs;

/// Content must exceed the clip by more than this many device pixels before
/// an axis counts as scrollable.
const SCROLLABLE_EPSILON_PX: f32 = 0.5;

/// Snapshot of a scrolling layer for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollLayerSnapshot {
    /// Viewport bounds in layout pixels
    pub clip_bounds: Size,
    /// Scrollable content bounds in layout pixels
    pub content_bounds: Size,
    /// Current scroll offset in layout pixels
    #[serde(default)]
    pub scroll_offset: Vec2,
    #[serde(default = "default_true")]
    pub user_scrollable_horizontal: bool,
    #[serde(default = "default_true")]
    pub user_scrollable_vertical: bool,
    #[serde(default = "default_scale")]
    pub device_scale_factor: f32,
}

fn default_true() -> bool {
    true
}

fn default_scale() -> f32 {
    1.0
}

impl Default for ScrollLayerSnapshot {
    fn default() -> Self {
        Self {
            clip_bounds: Size::ZERO,
            content_bounds: Size::ZERO,
            scroll_offset: Vec2::ZERO,
            user_scrollable_horizontal: true,
            user_scrollable_vertical: true,
            device_scale_factor: 1.0,
        }
    }
}

/// Extent of one scroll axis, in device pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExtent {
    pub clip_length: f32,
    pub content_length: f32,
    pub user_scrollable: bool,
}

impl ScrollExtent {
    pub fn new(clip_length: f32, content_length: f32, user_scrollable: bool) -> Self {
        Self {
            clip_length,
            content_length,
            user_scrollable,
        }
    }

    /// Whether there is anything to scroll on this axis
    pub fn is_scrollable(&self) -> bool {
        self.user_scrollable && self.content_length - self.clip_length > SCROLLABLE_EPSILON_PX
    }
}

/// Track metrics of a scrollbar in its own coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarTrack {
    pub track_start: f32,
    pub track_length: f32,
    pub thumb_thickness: f32,
    #[serde(default)]
    pub vertical_adjust: f32,
}

impl ScrollLayerSnapshot {
    fn scale(&self) -> f32 {
        if self.device_scale_factor.is_finite() && self.device_scale_factor > 0.0 {
            self.device_scale_factor
        } else {
            1.0
        }
    }

    fn user_scrollable(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.user_scrollable_horizontal,
            Orientation::Vertical => self.user_scrollable_vertical,
        }
    }

    /// Axis extent in device pixels
    pub fn extent(&self, orientation: Orientation) -> ScrollExtent {
        let scale = self.scale();
        ScrollExtent::new(
            self.clip_bounds.along(orientation).max(0.0) * scale,
            self.content_bounds.along(orientation).max(0.0) * scale,
            self.user_scrollable(orientation),
        )
    }

    /// Largest scroll offset on the axis, never negative
    pub fn maximum(&self, orientation: Orientation) -> f32 {
        (self.content_bounds.along(orientation) - self.clip_bounds.along(orientation)).max(0.0)
    }

    pub fn current_pos(&self, orientation: Orientation) -> f32 {
        self.scroll_offset.along(orientation)
    }

    /// viewport length / content length, 1.0 when there is no content
    pub fn visible_to_total_ratio(&self, orientation: Orientation) -> f32 {
        let content = self.content_bounds.along(orientation);
        if content <= 0.0 {
            return 1.0;
        }
        (self.clip_bounds.along(orientation) / content).clamp(0.0, 1.0)
    }

    /// Build thumb geometry inputs for `orientation`'s scrollbar
    pub fn geometry_inputs(
        &self,
        orientation: Orientation,
        track: &ScrollbarTrack,
        thickness_scale: f32,
    ) -> ScrollbarGeometryInputs {
        ScrollbarGeometryInputs {
            orientation,
            current_pos: self.current_pos(orientation),
            maximum: self.maximum(orientation),
            track_start: track.track_start,
            track_length: track.track_length,
            thumb_thickness: track.thumb_thickness,
            vertical_adjust: track.vertical_adjust,
            visible_to_total_ratio: self.visible_to_total_ratio(orientation),
            thickness_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(clip: Size, content: Size) -> ScrollLayerSnapshot {
        ScrollLayerSnapshot {
            clip_bounds: clip,
            content_bounds: content,
            ..Default::default()
        }
    }

    #[test]
    fn test_scrollable_requires_overflow() {
        let l = layer(Size::new(100.0, 100.0), Size::new(100.0, 300.0));
        assert!(l.extent(Orientation::Vertical).is_scrollable());
        assert!(!l.extent(Orientation::Horizontal).is_scrollable());
    }

    #[test]
    fn test_subpixel_overflow_is_not_scrollable() {
        let l = layer(Size::new(100.0, 100.0), Size::new(100.0, 100.4));
        assert!(!l.extent(Orientation::Vertical).is_scrollable());
    }

    #[test]
    fn test_user_scrollable_flag_disables_axis() {
        let mut l = layer(Size::new(100.0, 100.0), Size::new(100.0, 300.0));
        l.user_scrollable_vertical = false;
        assert!(!l.extent(Orientation::Vertical).is_scrollable());
    }

    #[test]
    fn test_extent_uses_device_pixels() {
        let mut l = layer(Size::new(100.0, 100.0), Size::new(100.0, 100.3));
        assert!(!l.extent(Orientation::Vertical).is_scrollable());
        l.device_scale_factor = 2.0;
        let extent = l.extent(Orientation::Vertical);
        assert_eq!(extent.clip_length, 200.0);
        assert!(extent.is_scrollable());
    }

    #[test]
    fn test_geometry_inputs() {
        let mut l = layer(Size::new(100.0, 100.0), Size::new(100.0, 400.0));
        l.scroll_offset = Vec2::new(0.0, 150.0);
        let track = ScrollbarTrack {
            track_start: 0.0,
            track_length: 100.0,
            thumb_thickness: 10.0,
            vertical_adjust: 0.0,
        };

        let inputs = l.geometry_inputs(Orientation::Vertical, &track, 1.0);
        assert_eq!(inputs.maximum, 300.0);
        assert_eq!(inputs.current_pos, 150.0);
        assert_eq!(inputs.visible_to_total_ratio, 0.25);
    }

    #[test]
    fn test_empty_content_ratio() {
        let l = layer(Size::new(100.0, 100.0), Size::ZERO);
        assert_eq!(l.visible_to_total_ratio(Orientation::Vertical), 1.0);
        assert_eq!(l.maximum(Orientation::Vertical), 0.0);
    }
}
