//! Math utilities and types
//!
//! Provides the small set of 2D math types the actor framework needs.
//! Screen space is y-down with the origin in the top-left corner.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Position, rotation and uniform scale of an actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Position in screen space
    pub position: Vec2,

    /// Rotation in radians, counter-clockwise
    pub rotation: f32,

    /// Uniform scale (1.0 = 100%)
    pub scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }
}

/// Axis-aligned rectangle in screen space (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_identity() {
        let transform = Transform2D::identity();

        assert_eq!(transform.position, Vec2::zeros());
        assert_eq!(transform.rotation, 0.0);
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn test_centered_rect() {
        let rect = Rect::centered(Vec2::new(100.0, 50.0), 20.0, 10.0);

        assert_eq!(rect, Rect::new(90.0, 45.0, 20.0, 10.0));
        assert_eq!(rect.center(), Vec2::new(100.0, 50.0));
    }
}
