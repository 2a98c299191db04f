//! Scrollbar animation configuration
//!
//! Timings and thresholds for the fade and thinning controllers. Loadable
//! from TOML; every field has a default, so a partial file is fine:
//!
//! ```toml
//! fade_delay_ms = 2000
//! thinning = true
//!
//! [policy]
//! kind = "fade_to_idle_floor"
//! floor = 0.7
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::easing::Easing;
use crate::error::{ConfigError, Result};
use crate::intent::FadeReason;

/// Where a fade-out ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FadePolicy {
    /// Fade all the way out; the scrollbar disappears when untouched
    #[default]
    FadeToZero,
    /// Dim to `floor` and stay faintly visible at rest
    FadeToIdleFloor {
        #[serde(default = "default_idle_floor")]
        floor: f32,
    },
}

fn default_idle_floor() -> f32 {
    0.7
}

impl FadePolicy {
    /// Resting opacity of a scrollable axis, always in `[0, 1]`. A NaN
    /// floor counts as zero.
    pub fn floor(&self) -> f32 {
        match self {
            FadePolicy::FadeToZero => 0.0,
            FadePolicy::FadeToIdleFloor { floor } if floor.is_nan() => 0.0,
            FadePolicy::FadeToIdleFloor { floor } => (*floor).clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarAnimationConfig {
    /// Delay before fading out after a scroll settles
    pub fade_delay_ms: u64,
    /// Delay before fading out after the clip or content bounds change
    pub resize_delay_ms: u64,
    /// Length of the opacity ramp down to the policy floor
    pub fade_duration_ms: u64,
    /// Time for the thumb to go from idle thickness to full thickness
    pub thinning_duration_ms: u64,
    /// Thickness scale at rest
    pub idle_thickness_scale: f32,
    /// Pointer distance, in pixels, that still counts as near the scrollbar
    pub near_threshold: f32,
    /// Whether the thumb thins at rest and thickens near the pointer
    pub thinning: bool,
    pub fade_easing: Easing,
    pub policy: FadePolicy,
}

impl Default for ScrollbarAnimationConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: 2000,
            resize_delay_ms: 5000,
            fade_duration_ms: 3000,
            thinning_duration_ms: 3000,
            idle_thickness_scale: 0.4,
            near_threshold: 25.0,
            thinning: false,
            fade_easing: Easing::Linear,
            policy: FadePolicy::FadeToZero,
        }
    }
}

impl ScrollbarAnimationConfig {
    /// Scrollbar that disappears completely when untouched
    pub fn fade_to_zero() -> Self {
        Self::default()
    }

    /// Overlay scrollbar that rests thin and dimmed but never vanishes
    pub fn overlay_thinning() -> Self {
        Self {
            thinning: true,
            policy: FadePolicy::FadeToIdleFloor {
                floor: default_idle_floor(),
            },
            ..Self::default()
        }
    }

    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }

    pub fn resize_delay(&self) -> Duration {
        Duration::from_millis(self.resize_delay_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }

    pub fn thinning_duration(&self) -> Duration {
        Duration::from_millis(self.thinning_duration_ms)
    }

    /// Delay to use for a fade scheduled for `reason`
    pub fn delay_for(&self, reason: FadeReason) -> Duration {
        match reason {
            FadeReason::Scroll => self.fade_delay(),
            FadeReason::Resize => self.resize_delay(),
        }
    }

    /// Check that every value is usable by the controllers
    pub fn validate(&self) -> Result<()> {
        if let FadePolicy::FadeToIdleFloor { floor } = self.policy {
            if !(0.0..1.0).contains(&floor) {
                return Err(ConfigError::InvalidIdleFloor(floor));
            }
        }
        if !(self.idle_thickness_scale > 0.0 && self.idle_thickness_scale <= 1.0) {
            return Err(ConfigError::InvalidThicknessScale(self.idle_thickness_scale));
        }
        if !(self.near_threshold.is_finite() && self.near_threshold >= 0.0) {
            return Err(ConfigError::InvalidNearThreshold(self.near_threshold));
        }
        if self.fade_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("fade_duration_ms"));
        }
        if self.thinning && self.thinning_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("thinning_duration_ms"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
