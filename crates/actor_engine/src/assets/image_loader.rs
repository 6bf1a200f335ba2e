//! Image loading utilities for texture data

use std::path::{Path, PathBuf};

use super::AssetError;

/// Decoded RGBA8 image ready to be uploaded to a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl DecodedImage {
    /// Wrap raw RGBA8 pixels
    ///
    /// Returns `None` if `pixels` is not exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize * 4).then_some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        Self {
            pixels: color.repeat(pixel_count),
            width,
            height,
        }
    }

    /// Decode an encoded image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            pixels: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Raw RGBA8 pixels, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// Something that can turn a path into a decoded image
pub trait ImageSource {
    /// Load and decode the image at `path`
    fn load_image(&mut self, path: &str) -> Result<DecodedImage, AssetError>;
}

/// Loads images from disk, relative to a root directory
#[derive(Debug, Clone)]
pub struct FileImageSource {
    root: PathBuf,
}

impl FileImageSource {
    /// Create a source resolving relative paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `path` against the root; absolute paths are used as-is
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl ImageSource for FileImageSource {
    fn load_image(&mut self, path: &str) -> Result<DecodedImage, AssetError> {
        let full_path = self.resolve(path);
        log::debug!("Loading image from: {}", full_path.display());

        let bytes = std::fs::read(&full_path).map_err(|source| AssetError::Io {
            path: full_path.display().to_string(),
            source,
        })?;
        let image = DecodedImage::from_bytes(&bytes).map_err(|source| AssetError::Decode {
            path: full_path.display().to_string(),
            source,
        })?;

        log::info!("Loaded image {}x{} from {}", image.width(), image.height(), full_path.display());
        Ok(image)
    }
}
