//! Stable identifiers for actors and components

use slotmap::new_key_type;

new_key_type! {
    /// Handle to an actor owned by a [`World`](crate::actor::World)
    pub struct ActorId;
}

/// Handle to a component attached to an actor
///
/// Component ids are unique for the lifetime of the world that issued them,
/// so a stale id never aliases a newer component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, useful for logging
    pub const fn raw(self) -> u64 {
        self.0
    }
}
