//! Platform abstraction
//!
//! A platform owns the window system. The engine asks it for a surface once
//! during initialization and for an input snapshot once per frame.

use crate::core::WindowConfig;
use crate::input::InputSnapshot;
use super::surface::{RenderSurface, SurfaceError};

/// Window system collaborator
pub trait Platform {
    /// Create the rendering surface for the configured window
    ///
    /// A failure here is fatal to engine startup.
    fn create_surface(&mut self, window: &WindowConfig) -> Result<Box<dyn RenderSurface>, SurfaceError>;

    /// Refresh `snapshot` with the current keyboard state and pending quit events
    fn poll_input(&mut self, snapshot: &mut InputSnapshot);
}
