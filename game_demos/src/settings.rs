//! Demo configuration
//!
//! The first command line argument, if present, names a `.toml` or `.ron`
//! file holding an [`EngineConfig`].

use std::path::PathBuf;

use actor_engine::config::{Config, ConfigError};
use actor_engine::core::EngineConfig;
use macroquad::miniquad::conf::Platform;
use macroquad::window::Conf;

/// Config file named on the command line
pub fn config_path() -> Option<PathBuf> {
    std::env::args_os().nth(1).map(PathBuf::from)
}

/// Load the configuration file, or build the default one for `title`
pub fn load(title: &str) -> Result<EngineConfig, ConfigError> {
    match config_path() {
        Some(path) => {
            let config = EngineConfig::load_from_file(&path)?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(EngineConfig::new(title)),
    }
}

/// Like [`load`], falling back to the defaults on any error
///
/// Used before logging exists; [`load`] reports the error again afterwards.
pub fn load_or_default(title: &str) -> EngineConfig {
    load(title).unwrap_or_else(|_| EngineConfig::new(title))
}

/// Window settings for macroquad
pub fn window_conf(config: &EngineConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: i32::try_from(config.window.width).unwrap_or(i32::MAX),
        window_height: i32::try_from(config.window.height).unwrap_or(i32::MAX),
        window_resizable: false,
        platform: Platform {
            swap_interval: Some(i32::from(config.window.vsync)),
            ..Default::default()
        },
        ..Default::default()
    }
}
