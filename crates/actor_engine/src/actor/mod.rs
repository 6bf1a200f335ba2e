//! Actor/Component framework
//!
//! A [`World`] owns a flat set of [`Actor`]s. Each actor carries a 2D
//! transform, a lifecycle [`ActorState`] and an ordered list of
//! [`Component`]s; an optional [`ActorBehavior`] adds per-type logic.
//! Drawable components are mirrored in a [`SpriteList`] kept sorted by
//! draw-order.
//!
//! Per frame the world advances every active actor (components first, in
//! ascending update-order, then the behavior), merges actors spawned during
//! the pass, and destroys actors that died.

pub mod behavior;
pub mod component;
pub mod entity;
pub mod sprite_list;
pub mod world;

pub use behavior::{ActorBehavior, ActorContext};
pub use component::{AsAny, Component, DEFAULT_UPDATE_ORDER};
pub use entity::{Actor, ActorCore, ActorState};
pub use sprite_list::{SpriteEntry, SpriteList};
pub use world::World;
pub use crate::foundation::collections::{ActorId, ComponentId};
