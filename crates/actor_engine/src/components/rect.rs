//! Solid colored rectangle

use crate::actor::{ActorCore, Component};
use crate::foundation::math::{Rect, Vec2};
use crate::render::{Color, RenderSurface};

/// A filled rectangle centered on its owner, scaled by the owner's scale
#[derive(Debug, Clone, PartialEq)]
pub struct RectComponent {
    size: Vec2,
    color: Color,
    draw_order: i32,
}

impl RectComponent {
    /// Create a rectangle of `size` pixels in `color`
    pub fn new(size: Vec2, color: Color) -> Self {
        Self {
            size,
            color,
            draw_order: super::DEFAULT_DRAW_ORDER,
        }
    }

    /// Draw at `draw_order` instead of the default
    pub fn with_draw_order(mut self, draw_order: i32) -> Self {
        self.draw_order = draw_order;
        self
    }

    /// Unscaled size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Set the unscaled size
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Fill color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the fill color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Area covered when attached to `owner`
    pub fn bounds(&self, owner: &ActorCore) -> Rect {
        let size = self.size * owner.scale();
        Rect::centered(owner.position(), size.x, size.y)
    }
}

impl Component for RectComponent {
    fn draw_order(&self) -> Option<i32> {
        Some(self.draw_order)
    }

    fn draw(&self, owner: &ActorCore, surface: &mut dyn RenderSurface) {
        surface.set_draw_color(self.color);
        surface.fill_rect(self.bounds(owner));
    }
}
