//! Horizontally scrolling background layers

use crate::actor::{ActorCore, Component};
use crate::foundation::math::{Rect, Vec2};
use crate::render::{RenderSurface, Texture};

/// Draw-order of backgrounds unless told otherwise
pub const DEFAULT_BG_DRAW_ORDER: i32 = 10;

#[derive(Debug, Clone)]
struct BgLayer {
    texture: Texture,
    offset: Vec2,
}

/// Screen-sized textures laid side by side and scrolled sideways
///
/// Layers that scroll past the left edge are moved behind the last one, so a
/// pair of layers is enough for an endless background.
#[derive(Debug, Clone)]
pub struct BgSpriteComponent {
    draw_order: i32,
    layers: Vec<BgLayer>,
    screen_size: Vec2,
    scroll_speed: f32,
}

impl BgSpriteComponent {
    /// Create a background covering `screen_size`, drawn behind default sprites
    pub fn new(screen_size: Vec2) -> Self {
        Self::with_draw_order(screen_size, DEFAULT_BG_DRAW_ORDER)
    }

    /// Create a background drawn at `draw_order`
    pub fn with_draw_order(screen_size: Vec2, draw_order: i32) -> Self {
        Self {
            draw_order,
            layers: Vec::new(),
            screen_size,
            scroll_speed: 0.0,
        }
    }

    /// Replace the layers, placing layer `i` at `i * screen_width`
    pub fn set_bg_textures(&mut self, textures: Vec<Texture>) {
        let width = self.screen_size.x;
        self.layers = textures
            .into_iter()
            .enumerate()
            .map(|(i, texture)| BgLayer {
                texture,
                offset: Vec2::new(i as f32 * width, 0.0),
            })
            .collect();
    }

    /// Size each layer is stretched to
    pub fn set_screen_size(&mut self, size: Vec2) {
        self.screen_size = size;
    }

    /// Size of one layer
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// Horizontal speed in pixels per second; negative scrolls left
    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.scroll_speed = speed;
    }

    /// Horizontal speed in pixels per second
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Current offsets of every layer, in layer order
    pub fn layer_offsets(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.layers.iter().map(|layer| layer.offset)
    }
}

impl Component for BgSpriteComponent {
    fn update(&mut self, _owner: &mut ActorCore, delta_time: f32) {
        let width = self.screen_size.x;
        let wrap_to = (self.layers.len() as f32 - 1.0) * width - 1.0;
        for layer in &mut self.layers {
            layer.offset.x += self.scroll_speed * delta_time;
            if layer.offset.x < -width {
                layer.offset.x = wrap_to;
            }
        }
    }

    fn draw_order(&self) -> Option<i32> {
        Some(self.draw_order)
    }

    fn draw(&self, owner: &ActorCore, surface: &mut dyn RenderSurface) {
        for layer in &self.layers {
            let dest = Rect::centered(
                owner.position() + layer.offset,
                self.screen_size.x,
                self.screen_size.y,
            );
            surface.draw_texture(&layer.texture, dest, 0.0);
        }
    }
}
