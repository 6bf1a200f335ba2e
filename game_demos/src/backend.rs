//! macroquad implementation of the engine's platform traits
//!
//! macroquad opens the window before `main` runs and owns the frame loop, so
//! creating the surface only takes over the close button, and presenting is
//! left to `next_frame().await`.

use std::collections::HashMap;

use actor_engine::assets::DecodedImage;
use actor_engine::core::WindowConfig;
use actor_engine::foundation::math::Rect;
use actor_engine::input::{InputSnapshot, KeyCode};
use actor_engine::render::{Color, Platform, RenderSurface, SurfaceError, Texture, TextureId};
use macroquad::color::Color as MqColor;
use macroquad::input::{is_key_down, is_quit_requested, prevent_quit, KeyCode as MqKeyCode};
use macroquad::math::vec2;
use macroquad::shapes::draw_rectangle;
use macroquad::texture::{draw_texture_ex, DrawTextureParams, FilterMode, Texture2D};
use macroquad::window::clear_background;

/// Convert an engine color to a macroquad color
pub fn to_mq_color(color: Color) -> MqColor {
    MqColor::from_rgba(color.r, color.g, color.b, color.a)
}

/// macroquad key for an engine key
pub const fn to_mq_key(key: KeyCode) -> MqKeyCode {
    match key {
        KeyCode::A => MqKeyCode::A,
        KeyCode::D => MqKeyCode::D,
        KeyCode::S => MqKeyCode::S,
        KeyCode::W => MqKeyCode::W,
        KeyCode::Space => MqKeyCode::Space,
        KeyCode::Enter => MqKeyCode::Enter,
        KeyCode::Escape => MqKeyCode::Escape,
        KeyCode::Up => MqKeyCode::Up,
        KeyCode::Down => MqKeyCode::Down,
        KeyCode::Left => MqKeyCode::Left,
        KeyCode::Right => MqKeyCode::Right,
    }
}

/// Window and keyboard provided by macroquad
#[derive(Debug, Default)]
pub struct MacroquadPlatform;

impl MacroquadPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for MacroquadPlatform {
    fn create_surface(&mut self, window: &WindowConfig) -> Result<Box<dyn RenderSurface>, SurfaceError> {
        log::info!(
            "Using macroquad window '{}' ({}x{})",
            window.title,
            window.width,
            window.height
        );
        // Report the close button as a quit request instead of exiting
        prevent_quit();
        Ok(Box::new(MacroquadSurface::new()))
    }

    fn poll_input(&mut self, snapshot: &mut InputSnapshot) {
        for key in KeyCode::ALL {
            snapshot.set_key(key, is_key_down(to_mq_key(key)));
        }
        if is_quit_requested() {
            snapshot.request_quit();
        }
    }
}

/// Draws into macroquad's current frame
pub struct MacroquadSurface {
    textures: HashMap<TextureId, Texture2D>,
    next_id: u32,
    draw_color: MqColor,
}

impl MacroquadSurface {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_id: 0,
            draw_color: MqColor::from_rgba(255, 255, 255, 255),
        }
    }
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for MacroquadSurface {
    fn clear(&mut self, color: Color) {
        clear_background(to_mq_color(color));
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = to_mq_color(color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, self.draw_color);
    }

    fn draw_texture(&mut self, texture: &Texture, dest: Rect, rotation: f32) {
        let Some(gpu_texture) = self.textures.get(&texture.id()) else {
            log::warn!("Draw with released texture {:?}", texture.id());
            return;
        };
        // macroquad rotates clockwise on screen, actor rotation is counter-clockwise
        draw_texture_ex(
            gpu_texture,
            dest.x,
            dest.y,
            MqColor::from_rgba(255, 255, 255, 255),
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                rotation: -rotation,
                ..Default::default()
            },
        );
    }

    fn present(&mut self) {
        log::trace!("Frame ready, {} texture(s) resident", self.textures.len());
    }

    fn create_texture(&mut self, image: &DecodedImage) -> Result<Texture, SurfaceError> {
        let too_large = |_| SurfaceError::Texture {
            width: image.width(),
            height: image.height(),
            reason: "dimensions exceed 65535 pixels".to_string(),
        };
        let width = u16::try_from(image.width()).map_err(too_large)?;
        let height = u16::try_from(image.height()).map_err(too_large)?;

        let gpu_texture = Texture2D::from_rgba8(width, height, image.pixels());
        gpu_texture.set_filter(FilterMode::Linear);

        self.next_id += 1;
        let id = TextureId(self.next_id);
        self.textures.insert(id, gpu_texture);
        Ok(Texture::new(id, image.width(), image.height()))
    }

    fn destroy_texture(&mut self, texture: &Texture) {
        self.textures.remove(&texture.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_engine_key_is_mapped() {
        assert_eq!(to_mq_key(KeyCode::W), MqKeyCode::W);
        assert_eq!(to_mq_key(KeyCode::Escape), MqKeyCode::Escape);
        assert_eq!(to_mq_key(KeyCode::Down), MqKeyCode::Down);
        assert_eq!(KeyCode::ALL.len(), 11);
    }

    #[test]
    fn test_color_conversion() {
        let color = to_mq_color(Color::rgba(255, 0, 0, 255));

        assert_eq!(color, MqColor::new(1.0, 0.0, 0.0, 1.0));
    }
}
