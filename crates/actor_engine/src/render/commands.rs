//! Recorded draw commands
//!
//! A [`DrawCommand`] mirrors one call on a [`RenderSurface`](super::RenderSurface).
//! The headless surface records them so frames can be inspected.

use crate::foundation::math::Rect;
use super::surface::{Color, TextureId};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Target cleared
    Clear(Color),
    /// Draw color changed
    SetDrawColor(Color),
    /// Rectangle filled with the current draw color
    FillRect(Rect),
    /// Texture drawn
    Texture {
        /// Texture drawn
        id: TextureId,
        /// Destination rectangle
        dest: Rect,
        /// Rotation in radians
        rotation: f32,
    },
    /// Frame presented
    Present,
}

impl DrawCommand {
    /// Returns the texture id if this command draws a texture
    pub fn texture_id(&self) -> Option<TextureId> {
        match self {
            Self::Texture { id, .. } => Some(*id),
            _ => None,
        }
    }
}
