//! Textured sprite

use crate::actor::{ActorCore, Component};
use crate::foundation::math::Rect;
use crate::render::{RenderSurface, Texture};

/// Draw-order used when a sprite does not ask for another one
pub const DEFAULT_DRAW_ORDER: i32 = 100;

/// Draws one texture centered on its owner
///
/// The destination is the texture size multiplied by the owner's scale and
/// is rotated by the owner's rotation. Without a texture nothing is drawn.
#[derive(Debug, Clone)]
pub struct SpriteComponent {
    draw_order: i32,
    texture: Option<Texture>,
}

impl SpriteComponent {
    /// Create a sprite with the default draw-order and no texture
    pub fn new() -> Self {
        Self::with_draw_order(DEFAULT_DRAW_ORDER)
    }

    /// Create a sprite drawn at `draw_order`
    pub fn with_draw_order(draw_order: i32) -> Self {
        Self {
            draw_order,
            texture: None,
        }
    }

    /// Replace the texture (and with it the drawn size)
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    /// Stop drawing anything
    pub fn clear_texture(&mut self) {
        self.texture = None;
    }

    /// Current texture
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Width of the current texture, 0 without one
    pub fn tex_width(&self) -> u32 {
        self.texture.as_ref().map_or(0, Texture::width)
    }

    /// Height of the current texture, 0 without one
    pub fn tex_height(&self) -> u32 {
        self.texture.as_ref().map_or(0, Texture::height)
    }

    pub(crate) fn draw_texture(texture: &Texture, owner: &ActorCore, surface: &mut dyn RenderSurface) {
        let scale = owner.scale();
        let dest = Rect::centered(
            owner.position(),
            texture.width() as f32 * scale,
            texture.height() as f32 * scale,
        );
        surface.draw_texture(texture, dest, owner.rotation());
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SpriteComponent {
    fn draw_order(&self) -> Option<i32> {
        Some(self.draw_order)
    }

    fn draw(&self, owner: &ActorCore, surface: &mut dyn RenderSurface) {
        if let Some(texture) = &self.texture {
            Self::draw_texture(texture, owner, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::render::{DrawCommand, HeadlessSurface, TextureId};

    #[test]
    fn test_default_draw_order() {
        let sprite = SpriteComponent::new();

        assert_eq!(sprite.draw_order(), Some(DEFAULT_DRAW_ORDER));
        assert_eq!(sprite.tex_width(), 0);
        assert_eq!(sprite.tex_height(), 0);
    }

    #[test]
    fn test_draw_without_texture_is_noop() {
        let sprite = SpriteComponent::new();
        let mut surface = HeadlessSurface::new();

        sprite.draw(&ActorCore::default(), &mut surface);

        assert!(surface.log().commands().is_empty());
    }

    #[test]
    fn test_draw_is_centered_and_scaled() {
        let mut sprite = SpriteComponent::with_draw_order(150);
        sprite.set_texture(Texture::new(TextureId(3), 40, 20));
        let mut owner = ActorCore::default();
        owner.set_position(Vec2::new(100.0, 384.0));
        owner.set_scale(1.5);
        owner.set_rotation(0.25);
        let mut surface = HeadlessSurface::new();

        sprite.draw(&owner, &mut surface);

        assert_eq!(sprite.tex_width(), 40);
        assert_eq!(
            surface.log().commands(),
            vec![DrawCommand::Texture {
                id: TextureId(3),
                dest: Rect::new(70.0, 369.0, 60.0, 30.0),
                rotation: 0.25,
            }]
        );
    }
}
