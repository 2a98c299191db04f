//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or validating a [`ScrollbarAnimationConfig`]
///
/// [`ScrollbarAnimationConfig`]: crate::config::ScrollbarAnimationConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("Failed to parse scrollbar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("Failed to serialize scrollbar config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Idle opacity floor must be in [0, 1), got {0}")]
    InvalidIdleFloor(f32),

    #[error("Idle thickness scale must be in (0, 1], got {0}")]
    InvalidThicknessScale(f32),

    #[error("Near threshold must be a non-negative number of pixels, got {0}")]
    InvalidNearThreshold(f32),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
