//! Draw-order sorted list of drawable components

use crate::foundation::collections::{ActorId, ComponentId};

/// One drawable component in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteEntry {
    /// Draw-order captured when the component was attached
    pub draw_order: i32,
    /// Owning actor
    pub actor: ActorId,
    /// The drawable component
    pub component: ComponentId,
}

/// Sprites sorted by ascending draw-order
///
/// Insertion is a linear scan for the first entry with a strictly greater
/// draw-order, so entries with equal orders stay in insertion order.
/// Removal shifts instead of swapping to keep the order intact.
#[derive(Debug, Clone, Default)]
pub struct SpriteList {
    entries: Vec<SpriteEntry>,
}

impl SpriteList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at its sorted position and return that position
    pub fn insert(&mut self, entry: SpriteEntry) -> usize {
        let index = self
            .entries
            .iter()
            .position(|existing| entry.draw_order < existing.draw_order)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, entry);
        index
    }

    /// Remove the entry for `component`, if present
    pub fn remove(&mut self, component: ComponentId) -> Option<SpriteEntry> {
        let index = self.entries.iter().position(|entry| entry.component == component)?;
        Some(self.entries.remove(index))
    }

    /// Remove every entry owned by `actor`, returning how many were removed
    pub fn remove_actor(&mut self, actor: ActorId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.actor != actor);
        before - self.entries.len()
    }

    /// Entries in draw order
    pub fn iter(&self) -> impl Iterator<Item = &SpriteEntry> {
        self.entries.iter()
    }

    /// Draw-orders in list order
    pub fn draw_orders(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|entry| entry.draw_order)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every adjacent pair is in non-decreasing draw-order
    pub fn is_sorted(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].draw_order <= pair[1].draw_order)
    }
}
