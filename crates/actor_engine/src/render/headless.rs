//! In-memory platform and surface
//!
//! Nothing is displayed: the surface records every call as a [`DrawCommand`]
//! and the platform replays scripted input. Tests use it to inspect frames,
//! and it doubles as a backend for headless smoke runs.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use crate::assets::DecodedImage;
use crate::core::WindowConfig;
use crate::foundation::math::Rect;
use crate::input::{InputSnapshot, KeyCode};
use super::backend::Platform;
use super::commands::DrawCommand;
use super::surface::{Color, RenderSurface, SurfaceError, Texture, TextureId};

#[derive(Debug, Default)]
struct Recording {
    commands: Vec<DrawCommand>,
    live_textures: HashSet<TextureId>,
    created_textures: u32,
}

/// Shared view of what a [`HeadlessSurface`] has recorded
///
/// Clones observe the same recording, so a test can keep one after handing
/// the platform to the engine.
#[derive(Debug, Clone, Default)]
pub struct SurfaceLog(Rc<RefCell<Recording>>);

impl SurfaceLog {
    /// All commands recorded so far
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.0.borrow().commands.clone()
    }

    /// Commands recorded since the last `Present`, or of the last frame if
    /// the log ends with one
    pub fn last_frame(&self) -> Vec<DrawCommand> {
        let recording = self.0.borrow();
        let commands = &recording.commands;
        let end = match commands.last() {
            Some(DrawCommand::Present) => commands.len() - 1,
            _ => commands.len(),
        };
        let start = commands[..end]
            .iter()
            .rposition(|cmd| *cmd == DrawCommand::Present)
            .map_or(0, |i| i + 1);
        commands[start..end].to_vec()
    }

    /// Number of presented frames
    pub fn frames_presented(&self) -> usize {
        self.0
            .borrow()
            .commands
            .iter()
            .filter(|cmd| **cmd == DrawCommand::Present)
            .count()
    }

    /// Number of textures created and not yet destroyed
    pub fn live_textures(&self) -> usize {
        self.0.borrow().live_textures.len()
    }

    /// Number of textures ever created
    pub fn textures_created(&self) -> u32 {
        self.0.borrow().created_textures
    }
}

/// Surface that records draw commands instead of drawing
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    log: SurfaceLog,
}

impl HeadlessSurface {
    /// Create a surface with a fresh log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface writing into an existing log
    pub fn with_log(log: SurfaceLog) -> Self {
        Self { log }
    }

    /// Shared handle to this surface's recording
    pub fn log(&self) -> SurfaceLog {
        self.log.clone()
    }

    fn record(&self, command: DrawCommand) {
        self.log.0.borrow_mut().commands.push(command);
    }
}

impl RenderSurface for HeadlessSurface {
    fn clear(&mut self, color: Color) {
        self.record(DrawCommand::Clear(color));
    }

    fn set_draw_color(&mut self, color: Color) {
        self.record(DrawCommand::SetDrawColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.record(DrawCommand::FillRect(rect));
    }

    fn draw_texture(&mut self, texture: &Texture, dest: Rect, rotation: f32) {
        self.record(DrawCommand::Texture {
            id: texture.id(),
            dest,
            rotation,
        });
    }

    fn present(&mut self) {
        self.record(DrawCommand::Present);
    }

    fn create_texture(&mut self, image: &DecodedImage) -> Result<Texture, SurfaceError> {
        let mut recording = self.log.0.borrow_mut();
        recording.created_textures += 1;
        let id = TextureId(recording.created_textures);
        recording.live_textures.insert(id);
        Ok(Texture::new(id, image.width(), image.height()))
    }

    fn destroy_texture(&mut self, texture: &Texture) {
        self.log.0.borrow_mut().live_textures.remove(&texture.id());
    }
}

/// Platform that hands out a [`HeadlessSurface`] and replays scripted input
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    log: SurfaceLog,
    script: VecDeque<Vec<KeyCode>>,
    quit_after: Option<u64>,
    polls: u64,
    fail_reason: Option<String>,
}

impl HeadlessPlatform {
    /// Create a platform with no scripted input
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys held on successive frames; after the script runs out no key is held
    pub fn with_script(mut self, frames: impl IntoIterator<Item = Vec<KeyCode>>) -> Self {
        self.script = frames.into_iter().collect();
        self
    }

    /// Raise a quit event on the `frames`-th poll
    pub fn quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    /// Make surface creation fail with `reason`
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_reason = Some(reason.into());
        self
    }

    /// Shared handle to the recording of the surface this platform creates
    pub fn log(&self) -> SurfaceLog {
        self.log.clone()
    }
}

impl Platform for HeadlessPlatform {
    fn create_surface(&mut self, window: &WindowConfig) -> Result<Box<dyn RenderSurface>, SurfaceError> {
        if let Some(reason) = &self.fail_reason {
            return Err(SurfaceError::Creation(reason.clone()));
        }
        log::debug!("Headless surface for '{}' ({}x{})", window.title, window.width, window.height);
        Ok(Box::new(HeadlessSurface::with_log(self.log.clone())))
    }

    fn poll_input(&mut self, snapshot: &mut InputSnapshot) {
        self.polls += 1;
        snapshot.release_all();
        if let Some(keys) = self.script.pop_front() {
            for key in keys {
                snapshot.set_key(key, true);
            }
        }
        if self.quit_after.is_some_and(|frames| self.polls >= frames) {
            snapshot.request_quit();
        }
    }
}
