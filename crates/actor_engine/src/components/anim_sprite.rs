//! Frame-cycling sprite

use super::sprite::{SpriteComponent, DEFAULT_DRAW_ORDER};
use crate::actor::{ActorCore, Component};
use crate::render::{RenderSurface, Texture};

/// Frames per second used until [`AnimSpriteComponent::set_anim_fps`] is called
pub const DEFAULT_ANIM_FPS: f32 = 24.0;

/// A sprite that steps through a list of textures at a fixed rate
#[derive(Debug, Clone)]
pub struct AnimSpriteComponent {
    sprite: SpriteComponent,
    frames: Vec<Texture>,
    current_frame: f32,
    fps: f32,
}

impl AnimSpriteComponent {
    /// Create an animation with the default draw-order and no frames
    pub fn new() -> Self {
        Self::with_draw_order(DEFAULT_DRAW_ORDER)
    }

    /// Create an animation drawn at `draw_order`
    pub fn with_draw_order(draw_order: i32) -> Self {
        Self {
            sprite: SpriteComponent::with_draw_order(draw_order),
            frames: Vec::new(),
            current_frame: 0.0,
            fps: DEFAULT_ANIM_FPS,
        }
    }

    /// Replace the animation frames and restart from the first one
    pub fn set_anim_textures(&mut self, frames: Vec<Texture>) {
        self.frames = frames;
        self.current_frame = 0.0;
        match self.frames.first() {
            Some(first) => self.sprite.set_texture(first.clone()),
            None => self.sprite.clear_texture(),
        }
    }

    /// Playback rate in frames per second
    pub fn anim_fps(&self) -> f32 {
        self.fps
    }

    /// Set the playback rate; negative rates play backwards
    pub fn set_anim_fps(&mut self, fps: f32) {
        self.fps = fps;
    }

    /// Fractional frame position, always in `[0, frame_count)`
    pub fn current_frame(&self) -> f32 {
        self.current_frame
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Texture currently shown
    pub fn texture(&self) -> Option<&Texture> {
        self.sprite.texture()
    }
}

impl Default for AnimSpriteComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AnimSpriteComponent {
    fn update(&mut self, _owner: &mut ActorCore, delta_time: f32) {
        if self.frames.is_empty() {
            return;
        }

        let count = self.frames.len() as f32;
        self.current_frame = (self.current_frame + self.fps * delta_time).rem_euclid(count);
        // rem_euclid can round up to `count` for tiny negatives, and yields NaN for infinite rates
        if !(0.0..count).contains(&self.current_frame) {
            self.current_frame = 0.0;
        }

        let index = (self.current_frame as usize).min(self.frames.len() - 1);
        self.sprite.set_texture(self.frames[index].clone());
    }

    fn draw_order(&self) -> Option<i32> {
        self.sprite.draw_order()
    }

    fn draw(&self, owner: &ActorCore, surface: &mut dyn RenderSurface) {
        self.sprite.draw(owner, surface);
    }
}
