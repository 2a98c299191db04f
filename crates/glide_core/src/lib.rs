//! Glide Core
//!
//! Foundational types for overlay scrollbars:
//!
//! - **Geometry**: points, sizes, rects and scroll orientation
//! - **Layer snapshots**: the per-frame view of a scrolling layer
//! - **Thumb geometry**: scroll offset to thumb rectangle
//! - **Events**: the input vocabulary of the animation controller
//!
//! # Example
//!
//! ```rust
//! use glide_core::{compute_thumb_rect, Orientation, ScrollbarGeometryInputs};
//!
//! let inputs = ScrollbarGeometryInputs {
//!     orientation: Orientation::Vertical,
//!     current_pos: 50.0,
//!     maximum: 100.0,
//!     track_length: 100.0,
//!     thumb_thickness: 10.0,
//!     visible_to_total_ratio: 0.5,
//!     ..Default::default()
//! };
//!
//! let rect = compute_thumb_rect(&inputs);
//! assert_eq!(rect.height(), 50.0);
//! assert_eq!(rect.y(), 25.0);
//! ```

pub mod events;
pub mod geometry;
pub mod layer;
pub mod thumb;

pub use events::ScrollbarEvent;
pub use geometry::{Orientation, Point, Rect, Size, Vec2};
pub use layer::{ScrollExtent, ScrollLayerSnapshot, ScrollbarTrack};
pub use thumb::{compute_thumb_rect, ScrollbarGeometryInputs};
