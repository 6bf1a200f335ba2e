//! Path-keyed texture cache
//!
//! Loading is memoized per path with no eviction. Failures are not cached,
//! so a missing file is retried (and logged) on every request.

use std::collections::HashMap;

use super::{AssetError, ImageSource};
use crate::render::{RenderSurface, Texture};

/// Cache of textures keyed by the path they were loaded from
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<String, Texture>,
}

impl TextureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the texture for `path`, loading it on first use
    ///
    /// Any failure is logged and reported as `None`; callers are expected to
    /// carry on without the visual.
    pub fn get_or_load(
        &mut self,
        path: &str,
        images: &mut dyn ImageSource,
        surface: &mut dyn RenderSurface,
    ) -> Option<Texture> {
        if let Some(texture) = self.textures.get(path) {
            return Some(texture.clone());
        }

        match Self::load(path, images, surface) {
            Ok(texture) => {
                log::debug!("Cached texture {} as {:?}", path, texture.id());
                self.textures.insert(path.to_string(), texture.clone());
                Some(texture)
            }
            Err(err) => {
                log::error!("Failed to load texture file {}: {}", path, err);
                None
            }
        }
    }

    fn load(
        path: &str,
        images: &mut dyn ImageSource,
        surface: &mut dyn RenderSurface,
    ) -> Result<Texture, AssetError> {
        let image = images.load_image(path)?;
        Ok(surface.create_texture(&image)?)
    }

    /// Cached texture for `path`, without loading
    pub fn get(&self, path: &str) -> Option<&Texture> {
        self.textures.get(path)
    }

    /// Number of cached textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Destroy every cached texture through `surface` and empty the cache
    pub fn release_all(&mut self, surface: &mut dyn RenderSurface) {
        for (path, texture) in self.textures.drain() {
            log::trace!("Releasing texture {}", path);
            surface.destroy_texture(&texture);
        }
    }
}
