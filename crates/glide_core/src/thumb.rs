//! Thumb geometry
//!
//! Maps a scroll position onto a thumb rectangle inside the scrollbar's own
//! coordinate space. Stateless: everything comes in through
//! [`ScrollbarGeometryInputs`], which the layout side rebuilds every frame.
//!
//! Layout along the scroll axis:
//!
//! ```text
//! track_start                                   track_start + track_length
//!     |<--------------- thumb travel --------------->|<-- thumb_length -->|
//! ```
//!
//! `vertical_adjust` is applied per orientation: it moves a horizontal
//! scrollbar's cross-axis origin, and it lengthens a vertical scrollbar's
//! track (the viewport grew or shrank vertically, e.g. a collapsing toolbar).

use serde::{Deserialize, Serialize};

use crate::geometry::{Orientation, Rect};

/// Per-frame inputs to [`compute_thumb_rect`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarGeometryInputs {
    pub orientation: Orientation,
    /// Current scroll offset along the axis
    pub current_pos: f32,
    /// Largest valid scroll offset (content length - viewport length)
    pub maximum: f32,
    /// Where the track begins along the axis
    pub track_start: f32,
    /// Track length along the axis, before `vertical_adjust`
    pub track_length: f32,
    /// Full thumb size across the axis
    pub thumb_thickness: f32,
    #[serde(default)]
    pub vertical_adjust: f32,
    /// viewport length / content length
    pub visible_to_total_ratio: f32,
    /// Thinning scale applied across the axis (1.0 = full thickness)
    #[serde(default = "default_thickness_scale")]
    pub thickness_scale: f32,
}

fn default_thickness_scale() -> f32 {
    1.0
}

impl Default for ScrollbarGeometryInputs {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            current_pos: 0.0,
            maximum: 0.0,
            track_start: 0.0,
            track_length: 0.0,
            thumb_thickness: 0.0,
            vertical_adjust: 0.0,
            visible_to_total_ratio: 1.0,
            thickness_scale: 1.0,
        }
    }
}

/// Replace NaN/infinite values with `fallback`.
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

impl ScrollbarGeometryInputs {
    fn thickness(&self) -> f32 {
        finite_or(self.thumb_thickness, 0.0).max(0.0)
    }

    fn adjust(&self) -> f32 {
        finite_or(self.vertical_adjust, 0.0)
    }

    /// Effective track length along the axis
    pub fn effective_track_length(&self) -> f32 {
        let base = finite_or(self.track_length, 0.0);
        match self.orientation {
            Orientation::Horizontal => base.max(0.0),
            Orientation::Vertical => (base + self.adjust()).max(0.0),
        }
    }

    /// Thumb length along the axis. Never shorter than the thumb is thick.
    pub fn thumb_length(&self) -> f32 {
        let ratio = finite_or(self.visible_to_total_ratio, 1.0).clamp(0.0, 1.0);
        let proportional = (self.effective_track_length() * ratio).round();
        proportional.max(self.thickness())
    }

    /// Thumb offset along the axis
    pub fn thumb_offset(&self) -> f32 {
        let track_start = finite_or(self.track_start, 0.0);
        let maximum = finite_or(self.maximum, 0.0);
        if maximum <= 0.0 {
            return track_start;
        }

        let travel = (self.effective_track_length() - self.thumb_length()).max(0.0);
        let pos = finite_or(self.current_pos, 0.0).clamp(0.0, maximum);
        let offset = track_start + (travel * (pos / maximum)).round();
        offset.clamp(track_start, track_start + travel)
    }

    /// Region the thumb is confined to: the full track along the axis and the
    /// full thickness across it.
    pub fn track_rect(&self) -> Rect {
        let track_start = finite_or(self.track_start, 0.0);
        let length = self.effective_track_length();
        let thickness = self.thickness();
        match self.orientation {
            Orientation::Horizontal => Rect::new(track_start, self.adjust(), length, thickness),
            Orientation::Vertical => Rect::new(0.0, track_start, thickness, length),
        }
    }
}

/// Compute the thumb rectangle for `inputs`.
///
/// Degenerate inputs (zero maximum, zero track, ratio 0 or 1) still yield a
/// rectangle with non-negative size. When the track is shorter than the
/// thumb's minimum length the thumb pins to `track_start` and overhangs the
/// track end.
pub fn compute_thumb_rect(inputs: &ScrollbarGeometryInputs) -> Rect {
    let thickness = inputs.thickness();
    let scale = finite_or(inputs.thickness_scale, 1.0).clamp(0.0, 1.0);
    // Thinning keeps the thumb against the outer edge of the track.
    let inset = thickness * (1.0 - scale);
    let cross = thickness - inset;
    let length = inputs.thumb_length();
    let offset = inputs.thumb_offset();

    if length > inputs.effective_track_length() {
        tracing::trace!(
            "Thumb length {:.1} exceeds {} track {:.1}",
            length,
            inputs.orientation,
            inputs.effective_track_length()
        );
    }

    match inputs.orientation {
        Orientation::Horizontal => Rect::new(offset, inputs.adjust() + inset, length, cross),
        Orientation::Vertical => Rect::new(inset, offset, cross, length),
    }
}
