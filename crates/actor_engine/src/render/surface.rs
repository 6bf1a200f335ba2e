//! Render surface trait and the value types that flow through it

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::DecodedImage;
use crate::foundation::math::Rect;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Backend-assigned identifier of a texture living on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Drawable texture handle
///
/// Cheap to clone; the pixel data lives in the surface that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture {
    /// Create a handle; only surfaces should need this
    pub const fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Backend identifier
    pub const fn id(&self) -> TextureId {
        self.id
    }

    /// Native width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Native height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// Errors raised by a surface or by the platform creating it
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The window or drawing context could not be created
    #[error("Failed to create surface: {0}")]
    Creation(String),

    /// A decoded image could not be turned into a texture
    #[error("Failed to create texture ({width}x{height}): {reason}")]
    Texture {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
        /// Backend message
        reason: String,
    },
}

/// Minimal drawing vocabulary the engine depends on
pub trait RenderSurface {
    /// Clear the whole target to `color`
    fn clear(&mut self, color: Color);

    /// Set the color used by subsequent [`fill_rect`](Self::fill_rect) calls
    fn set_draw_color(&mut self, color: Color);

    /// Fill a rectangle with the current draw color
    fn fill_rect(&mut self, rect: Rect);

    /// Draw `texture` stretched into `dest`, rotated by `rotation` radians
    /// counter-clockwise around the rectangle's center
    fn draw_texture(&mut self, texture: &Texture, dest: Rect, rotation: f32);

    /// Present the finished frame
    fn present(&mut self);

    /// Upload a decoded image and return a drawable handle
    fn create_texture(&mut self, image: &DecodedImage) -> Result<Texture, SurfaceError>;

    /// Release a texture created by this surface
    fn destroy_texture(&mut self, texture: &Texture);
}
