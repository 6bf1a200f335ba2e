//! # Core Engine Module
//!
//! Shared configuration types used by the engine coordinator and the demos.
//!
//! ## Organization
//!
//! - **Config**: window, frame timing, asset and logging settings

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;
pub use crate::assets;
pub use crate::actor;

// Re-export commonly used config types
pub use config::{
    AssetConfig,
    EngineConfig,
    TimingConfig,
    WindowConfig,
};
pub use crate::config::{Config, ConfigError};
