//! # Engine Configuration
//!
//! Window, frame timing, asset and logging settings for an [`Engine`](crate::Engine).
//! Defaults reproduce the classic 1024x768 window paced at roughly 60 FPS with
//! a 50ms simulation step cap.

use serde::{Serialize, Deserialize};
use std::time::Duration;

use crate::config::{Config, ConfigError};
use crate::render::Color;

/// Window placement and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Top-left x coordinate of the window
    pub x: i32,
    /// Top-left y coordinate of the window
    pub y: i32,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
    /// VSync setting
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given title and default geometry
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Actor Engine".to_string(),
            x: 100,
            y: 100,
            width: 1024,
            height: 768,
            vsync: true,
        }
    }
}

/// Frame pacing and simulation step settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Minimum wall-clock time between frames, in milliseconds
    pub min_frame_ms: u64,
    /// Largest simulation step a single frame may take, in seconds
    pub max_delta_seconds: f32,
}

impl TimingConfig {
    /// Minimum frame interval as a duration
    pub fn min_frame(&self) -> Duration {
        Duration::from_millis(self.min_frame_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_frame_ms: 16,
            max_delta_seconds: 0.05,
        }
    }
}

/// Asset loading settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Base directory that relative texture paths are resolved against
    pub assets_dir: String,
}

impl AssetConfig {
    /// Set assets directory
    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            assets_dir: ".".to_string(),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Color the surface is cleared to every frame
    pub clear_color: Color,
    /// Window settings
    pub window: WindowConfig,
    /// Frame timing settings
    pub timing: TimingConfig,
    /// Asset settings
    pub assets: AssetConfig,
}

impl EngineConfig {
    /// Create a configuration for an application with the given window title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            window: WindowConfig::new(title),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the clear color
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Set the asset directory
    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets = self.assets.with_assets_dir(dir);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        if self.timing.max_delta_seconds.is_nan() || self.timing.max_delta_seconds <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_delta_seconds must be positive, got {}",
                self.timing.max_delta_seconds
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            clear_color: Color::BLACK,
            window: WindowConfig::default(),
            timing: TimingConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Config for EngineConfig {}
