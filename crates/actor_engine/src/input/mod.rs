//! Input snapshot
//!
//! The platform refreshes an [`InputSnapshot`] once per frame; the engine and
//! actor behaviors only ever read it.

use std::collections::HashSet;

/// Per-frame keyboard state and quit request
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    held: HashSet<KeyCode>,
    quit: bool,
}

impl InputSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Is `key` currently held?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Has the window system asked the application to quit?
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Record whether `key` is held
    pub fn set_key(&mut self, key: KeyCode, down: bool) {
        if down {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Record a quit event
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Release every key; the quit flag is sticky
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Iterate over held keys
    pub fn held_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.held.iter().copied()
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Every key the engine knows about, for backends that poll key by key
    pub const ALL: [Self; 11] = [
        Self::A,
        Self::D,
        Self::S,
        Self::W,
        Self::Space,
        Self::Enter,
        Self::Escape,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
    ];
}
