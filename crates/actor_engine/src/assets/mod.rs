//! Asset loading and caching
//!
//! Images are decoded by an [`ImageSource`] and uploaded through the render
//! surface; the [`TextureCache`] makes sure each path is loaded only once.

pub mod image_loader;
pub mod texture_cache;

pub use image_loader::{DecodedImage, FileImageSource, ImageSource};
pub use texture_cache::TextureCache;

use thiserror::Error;

use crate::render::SurfaceError;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was requested
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file was read but could not be decoded
    #[error("Failed to decode {path}: {source}")]
    Decode {
        /// Path that was requested
        path: String,
        /// Underlying error
        source: image::ImageError,
    },

    /// The decoded image could not be turned into a texture
    #[error("Failed to convert image to texture: {0}")]
    Surface(#[from] SurfaceError),
}
