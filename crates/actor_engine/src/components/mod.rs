//! Built-in components
//!
//! Drawable building blocks shared by the demos: a static sprite, a
//! frame-cycling sprite, scrolling background layers and a solid rectangle.

pub mod anim_sprite;
pub mod bg_sprite;
pub mod rect;
pub mod sprite;

pub use anim_sprite::AnimSpriteComponent;
pub use bg_sprite::BgSpriteComponent;
pub use rect::RectComponent;
pub use sprite::{SpriteComponent, DEFAULT_DRAW_ORDER};
