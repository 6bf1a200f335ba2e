//! Core engine implementation

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::{
    actor::World,
    application::Application,
    assets::{FileImageSource, ImageSource, TextureCache},
    config::ConfigError,
    core::EngineConfig,
    foundation::{math::Vec2, time::FrameTimer},
    input::{InputSnapshot, KeyCode},
    render::{Platform, RenderSurface, SurfaceError, Texture},
};

/// Lifecycle of an [`Engine`]
///
/// States only move forward: `Uninitialized -> Running -> ShuttingDown ->
/// Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Created, no surface yet
    #[default]
    Uninitialized,
    /// Surface created, frames may run
    Running,
    /// Tearing down actors and textures
    ShuttingDown,
    /// Everything released
    Terminated,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Running => "running",
            Self::ShuttingDown => "shutting down",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Main engine struct
///
/// The engine owns the actor world, the texture cache, the frame timer and
/// the platform collaborators, and drives the frame loop.
pub struct Engine {
    /// Actor world updated and drawn every frame
    pub world: World,

    textures: TextureCache,
    timer: FrameTimer,
    input: InputSnapshot,
    platform: Box<dyn Platform>,
    images: Box<dyn ImageSource>,
    surface: Option<Box<dyn RenderSurface>>,
    state: EngineState,
    quit_requested: bool,
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine instance
    ///
    /// Nothing is created on the platform yet; call [`Engine::initialize`].
    /// Images are loaded from `config.assets.assets_dir` unless replaced with
    /// [`Engine::with_image_source`].
    pub fn new(config: EngineConfig, platform: impl Platform + 'static) -> Result<Self, EngineError> {
        config.validate()?;

        let timer = FrameTimer::new(config.timing.min_frame(), config.timing.max_delta_seconds);
        let images = FileImageSource::new(config.assets.assets_dir.clone());

        Ok(Self {
            world: World::new(),
            textures: TextureCache::new(),
            timer,
            input: InputSnapshot::new(),
            platform: Box::new(platform),
            images: Box::new(images),
            surface: None,
            state: EngineState::Uninitialized,
            quit_requested: false,
            config,
        })
    }

    /// Replace the image source used by [`Engine::texture`]
    pub fn with_image_source(mut self, images: impl ImageSource + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    /// Create the render surface and hand control to the application
    ///
    /// # Errors
    ///
    /// `InvalidState` unless the engine is uninitialized, `SurfaceCreation`
    /// if the platform cannot create the window, `Application` if the
    /// application fails to set itself up.
    pub fn initialize<A: Application>(&mut self, app: &mut A) -> Result<(), EngineError> {
        self.expect_state(EngineState::Uninitialized, "initialize")?;

        log::info!(
            "Initializing engine: '{}' {}x{} at ({}, {})",
            self.config.window.title,
            self.config.window.width,
            self.config.window.height,
            self.config.window.x,
            self.config.window.y
        );

        let surface = self.platform.create_surface(&self.config.window).map_err(|err| {
            log::error!("Failed to create render surface: {}", err);
            EngineError::SurfaceCreation(err)
        })?;
        self.surface = Some(surface);
        self.state = EngineState::Running;
        self.timer.reset();

        app.initialize(self).map_err(|err| {
            log::error!("Application initialization failed: {}", err);
            EngineError::Application(err.to_string())
        })?;

        log::info!("Engine running with {} actor(s)", self.world.actor_count());
        Ok(())
    }

    /// Run frames until Escape or a quit request stops the loop
    pub fn run<A: Application>(&mut self, app: &mut A) -> Result<(), EngineError> {
        log::info!("Starting main loop...");
        while self.run_frame(app)? {}
        log::info!(
            "Main loop stopped after {} frame(s), {:.1} FPS on average",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        Ok(())
    }

    /// Run one frame: input, update, output
    ///
    /// Returns `false` once a stop condition was seen; no update or draw
    /// happens for that frame.
    pub fn run_frame<A: Application>(&mut self, app: &mut A) -> Result<bool, EngineError> {
        self.expect_state(EngineState::Running, "run a frame")?;

        self.process_input();
        if self.quit_requested {
            return Ok(false);
        }

        self.update_game(app)?;
        self.generate_output()?;
        Ok(true)
    }

    /// Poll the platform and forward the snapshot to active actors
    ///
    /// A quit request or a held Escape key stops the loop.
    pub fn process_input(&mut self) {
        self.platform.poll_input(&mut self.input);

        if self.input.quit_requested() || self.input.is_key_down(KeyCode::Escape) {
            self.quit();
        }

        self.world.process_input(&self.input);
    }

    /// Wait out the frame interval, then update actors and the application
    pub fn update_game<A: Application>(&mut self, app: &mut A) -> Result<(), EngineError> {
        let delta_time = self.timer.tick();
        log::trace!("Frame {} dt={:.4}", self.timer.frame_count(), delta_time);

        self.update_world(delta_time);
        app.update(self, delta_time)
            .map_err(|err| EngineError::Application(err.to_string()))
    }

    /// Update actors from an explicitly measured elapsed time
    ///
    /// Applies the same clamping as the frame loop and returns the step
    /// actually simulated.
    pub fn step(&mut self, elapsed: Duration) -> f32 {
        let delta_time = self.timer.advance(elapsed);
        self.update_world(delta_time);
        delta_time
    }

    fn update_world(&mut self, delta_time: f32) {
        let destroyed = self.world.update(delta_time);
        if destroyed > 0 {
            log::debug!("Removed {} dead actor(s)", destroyed);
        }
    }

    /// Clear, draw every sprite back to front, present
    pub fn generate_output(&mut self) -> Result<(), EngineError> {
        self.expect_state(EngineState::Running, "draw")?;
        let Some(surface) = self.surface.as_deref_mut() else {
            return Err(EngineError::InvalidState {
                operation: "draw",
                state: self.state,
            });
        };

        surface.clear(self.config.clear_color);
        self.world.draw(surface);
        surface.present();
        Ok(())
    }

    /// Tear everything down
    ///
    /// Runs the application's cleanup, destroys every actor, releases every
    /// cached texture and drops the surface.
    pub fn shutdown<A: Application>(&mut self, app: &mut A) -> Result<(), EngineError> {
        self.expect_state(EngineState::Running, "shut down")?;
        log::info!("Shutting down engine...");
        self.state = EngineState::ShuttingDown;

        app.cleanup(self);
        self.world.clear();
        if let Some(mut surface) = self.surface.take() {
            self.textures.release_all(surface.as_mut());
        }

        self.state = EngineState::Terminated;
        log::info!("Engine shutdown complete");
        Ok(())
    }

    /// Texture for `path`, loaded on first use and cached afterwards
    ///
    /// Failures are logged and reported as `None`.
    pub fn texture(&mut self, path: &str) -> Option<Texture> {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::warn!("Texture {} requested without a render surface", path);
            return self.textures.get(path).cloned();
        };
        self.textures.get_or_load(path, self.images.as_mut(), surface)
    }

    /// Load several textures, skipping the ones that fail
    pub fn textures<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) -> Vec<Texture> {
        paths.into_iter().filter_map(|path| self.texture(path)).collect()
    }

    /// Request the frame loop to stop at the next frame boundary
    pub fn quit(&mut self) {
        if !self.quit_requested {
            log::info!("Engine shutdown requested");
        }
        self.quit_requested = true;
    }

    /// Whether a stop condition has been seen
    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Get the actor world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the actor world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the texture cache
    pub fn texture_cache(&self) -> &TextureCache {
        &self.textures
    }

    /// Input seen by the last frame
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    /// Get the frame timer
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Get the configuration the engine was created with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Window size in pixels
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.config.window.width as f32, self.config.window.height as f32)
    }

    fn expect_state(&self, expected: EngineState, operation: &'static str) -> Result<(), EngineError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The platform could not create the window or renderer
    #[error("Engine initialization failed: {0}")]
    SurfaceCreation(SurfaceError),

    /// The operation is not allowed in the current lifecycle state
    #[error("Cannot {operation} while the engine is {state}")]
    InvalidState {
        /// What was attempted
        operation: &'static str,
        /// State the engine was in
        state: EngineState,
    },

    /// Application error
    #[error("Application error: {0}")]
    Application(String),
}
