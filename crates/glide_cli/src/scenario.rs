//! Scenario files
//!
//! A scenario describes one scrollbar and a timed list of input events:
//!
//! ```toml
//! orientation = "vertical"
//! frame_interval_ms = 100
//! duration_ms = 8000
//!
//! [config]
//! thinning = true
//!
//! [layer]
//! clip_bounds = { width = 100.0, height = 100.0 }
//! content_bounds = { width = 100.0, height = 400.0 }
//!
//! [track]
//! track_length = 100.0
//! thumb_thickness = 10.0
//!
//! [[events]]
//! at_ms = 0
//! kind = "scroll_begin"
//!
//! [[events]]
//! at_ms = 50
//! kind = "scroll_update"
//! scroll_offset = { x = 0.0, y = 40.0 }
//! ```

use anyhow::{Context, Result};
use glide_animation::{ConfigError, ScrollbarAnimationConfig};
use glide_core::{Orientation, ScrollLayerSnapshot, ScrollbarEvent, ScrollbarTrack, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Problems with a scenario that parsed fine but cannot be run
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Event {index} at {at_ms}ms comes before the previous event at {previous_ms}ms")]
    EventsOutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },

    #[error("Event {index} at {at_ms}ms is past the end of the run ({duration_ms}ms)")]
    EventAfterEnd {
        index: usize,
        at_ms: u64,
        duration_ms: u64,
    },

    #[error("frame_interval_ms must be greater than zero")]
    ZeroFrameInterval,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A timed input event, optionally moving the layer first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: ScrollbarEvent,
    /// New scroll offset, applied before the event is delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_offset: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_bounds: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_bounds: Option<Size>,
}

impl TimedEvent {
    /// Apply this event's layer changes to `layer`
    pub fn apply_to(&self, layer: &mut ScrollLayerSnapshot) {
        if let Some(offset) = self.scroll_offset {
            layer.scroll_offset = offset;
        }
        if let Some(clip) = self.clip_bounds {
            layer.clip_bounds = clip;
        }
        if let Some(content) = self.content_bounds {
            layer.content_bounds = content;
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: ScrollbarAnimationConfig,
    #[serde(default)]
    pub orientation: Orientation,
    pub layer: ScrollLayerSnapshot,
    pub track: ScrollbarTrack,
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
    #[serde(default = "default_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

fn default_frame_interval() -> u64 {
    // ~60fps
    16
}

fn default_duration() -> u64 {
    10_000
}

impl Scenario {
    /// Load and validate a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content).context("Failed to parse scenario")?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> std::result::Result<(), ScenarioError> {
        self.config.validate()?;
        if self.frame_interval_ms == 0 {
            return Err(ScenarioError::ZeroFrameInterval);
        }

        let mut previous_ms = 0;
        for (index, event) in self.events.iter().enumerate() {
            if event.at_ms < previous_ms {
                return Err(ScenarioError::EventsOutOfOrder {
                    index,
                    at_ms: event.at_ms,
                    previous_ms,
                });
            }
            if event.at_ms > self.duration_ms {
                return Err(ScenarioError::EventAfterEnd {
                    index,
                    at_ms: event.at_ms,
                    duration_ms: self.duration_ms,
                });
            }
            previous_ms = event.at_ms;
        }
        Ok(())
    }
}
