//! Glide Animation
//!
//! Overlay scrollbar visibility and thinning, driven frame by frame.
//!
//! # Features
//!
//! - **Fade controller**: wakes on scroll, fades out after a delay, to zero
//!   or to an idle opacity floor
//! - **Thickness controller**: thickens the thumb as the pointer approaches
//! - **Delayed tasks**: single-slot, generation-checked task handles
//! - **Deterministic time**: everything advances from `animate(now)`
//!
//! # Example
//!
//! ```rust
//! use glide_animation::{RecordingClient, ScrollbarAnimationConfig, ScrollbarAnimationController};
//! use glide_core::{Orientation, ScrollLayerSnapshot, Size};
//! use std::time::{Duration, Instant};
//!
//! let layer = ScrollLayerSnapshot {
//!     clip_bounds: Size::new(100.0, 100.0),
//!     content_bounds: Size::new(100.0, 300.0),
//!     ..Default::default()
//! };
//! let mut controller = ScrollbarAnimationController::new(
//!     Orientation::Vertical,
//!     ScrollbarAnimationConfig::fade_to_zero(),
//!     RecordingClient::new(),
//! );
//!
//! controller.did_scroll_begin();
//! controller.did_scroll_update(false, &layer);
//! controller.did_scroll_end();
//! assert_eq!(controller.opacity(), 1.0);
//!
//! let task = controller.pending_task().unwrap();
//! assert_eq!(task.delay, Duration::from_secs(2));
//!
//! let fired = Instant::now();
//! controller.run_delayed_task(task.id);
//! controller.animate(fired);
//! controller.animate(fired + Duration::from_secs(3));
//! assert_eq!(controller.opacity(), 0.0);
//! ```

pub mod activity;
pub mod client;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod fade;
pub mod intent;
pub mod scheduler;
pub mod thickness;

pub use activity::ScrollActivityTracker;
pub use client::{RecordingClient, ScrollbarAnimationClient};
pub use config::{FadePolicy, ScrollbarAnimationConfig};
pub use controller::{ScrollbarAnimationController, ScrollbarVisualState};
pub use easing::Easing;
pub use error::{ConfigError, Result};
pub use fade::{FadePhase, VisibilityFadeController};
pub use intent::{AnimationIntent, FadeReason, ThicknessDirection};
pub use scheduler::{
    DelayedTask, DelayedTaskSlot, ManualClock, ManualTaskRunner, SystemClock, TaskId, TimeSource,
};
pub use thickness::{ProximityZone, ThumbThicknessController, VisibilityHost};
