//! # Actor Engine
//!
//! A small 2D game framework built around actors, components and
//! draw-ordered sprites.
//!
//! ## Features
//!
//! - **Actor/Component model**: actors own ordered components and an optional behavior
//! - **Sorted sprite list**: drawables are kept in draw-order, ties in insertion order
//! - **Safe mutation during updates**: spawns are staged, dead actors swept after the pass
//! - **Texture cache**: each image path is decoded and uploaded once
//! - **Pluggable platform**: rendering and input sit behind small traits, with a headless backend for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use actor_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let ship = engine.world.spawn_empty();
//!         let mut sprite = SpriteComponent::new();
//!         if let Some(texture) = engine.texture("Assets/Ship01.png") {
//!             sprite.set_texture(texture);
//!         }
//!         engine.world.add_component(ship, sprite);
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::new("My Game"), HeadlessPlatform::new())?;
//!     let mut game = MyGame;
//!     engine.initialize(&mut game)?;
//!     engine.run(&mut game)?;
//!     engine.shutdown(&mut game)?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod actor;
pub mod components;
pub mod assets;
pub mod render;
pub mod input;

mod application;
mod engine;

#[cfg(test)]
mod engine_tests;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineError, EngineState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineError, EngineState,
        foundation::{
            math::{Rect, Transform2D, Vec2},
            time::FrameTimer,
        },
        actor::{
            Actor, ActorBehavior, ActorContext, ActorCore, ActorId, ActorState,
            Component, ComponentId, World,
        },
        components::{AnimSpriteComponent, BgSpriteComponent, RectComponent, SpriteComponent},
        assets::{DecodedImage, ImageSource},
        render::{Color, HeadlessPlatform, Platform, RenderSurface, Texture},
        input::{InputSnapshot, KeyCode},
        core::config::{EngineConfig, TimingConfig, WindowConfig},
        config::Config,
    };
}
