//! Demo games for the actor engine
//!
//! Each binary picks an [`Application`] and hands it to [`run`], which drives
//! the engine from macroquad's frame loop.

pub mod backend;
pub mod pong;
pub mod settings;
pub mod ship;
pub mod space_shooter;

use actor_engine::{foundation::logging, Application, Engine};
use macroquad::window::next_frame;

use crate::backend::MacroquadPlatform;

/// Run `app` until the window closes or Escape is pressed
///
/// Startup failures are logged and end the process with a non-zero status.
pub async fn run<A: Application>(title: &str, mut app: A) {
    let config = match settings::load(title) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };
    logging::init(&config.log_level);
    log::info!("Starting {}", config.window.title);

    let mut engine = match Engine::new(config, MacroquadPlatform::new()) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("Failed to create engine: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = engine.initialize(&mut app) {
        log::error!("Failed to initialize: {}", err);
        std::process::exit(1);
    }

    loop {
        match engine.run_frame(&mut app) {
            Ok(true) => next_frame().await,
            Ok(false) => break,
            Err(err) => {
                log::error!("Frame failed: {}", err);
                break;
            }
        }
    }

    if let Err(err) = engine.shutdown(&mut app) {
        log::error!("Shutdown failed: {}", err);
    }
}
