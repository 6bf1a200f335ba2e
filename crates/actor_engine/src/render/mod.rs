//! Rendering collaborators
//!
//! The engine never talks to a graphics API directly. It issues a small
//! vocabulary of draw commands to a [`RenderSurface`], and asks a
//! [`Platform`] to create that surface and to report input each frame.

pub mod backend;
pub mod commands;
pub mod headless;
pub mod surface;

pub use backend::Platform;
pub use commands::DrawCommand;
pub use headless::{HeadlessPlatform, HeadlessSurface, SurfaceLog};
pub use surface::{Color, RenderSurface, SurfaceError, Texture, TextureId};
