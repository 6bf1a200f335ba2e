//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create a game on top of the engine. The engine
/// calls the hooks in order: `initialize` once, `update` every frame after
/// the world has been updated, `cleanup` once during shutdown.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once the render surface exists. Use this to load textures and
    /// spawn the initial actors.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after the actors have been updated.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Clamped time step of this frame in seconds
    fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called at the start of shutdown, while actors and textures still exist.
    fn cleanup(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// A required asset could not be loaded
    #[error("Asset error: {0}")]
    Asset(String),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
