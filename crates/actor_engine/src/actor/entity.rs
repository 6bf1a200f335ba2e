//! Actor implementation

use super::behavior::ActorBehavior;
use super::component::Component;
use crate::foundation::collections::ComponentId;
use crate::foundation::math::{Transform2D, Vec2};

/// Lifecycle state of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorState {
    /// Updated every frame
    #[default]
    Active,
    /// Kept alive but skipped by the update pass
    Paused,
    /// Skipped and destroyed at the next reconciliation
    Dead,
}

/// Transform and lifecycle state of an actor
///
/// This is the part of an actor its components and behavior may touch while
/// the actor is being updated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorCore {
    transform: Transform2D,
    state: ActorState,
}

impl ActorCore {
    /// Full transform
    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Position in screen space
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Set position
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.transform.rotation
    }

    /// Set rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.transform.rotation = rotation;
    }

    /// Uniform scale
    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.scale = scale;
    }

    /// Lifecycle state
    pub fn state(&self) -> ActorState {
        self.state
    }

    /// Set lifecycle state
    ///
    /// `Dead` is terminal: once dead, later calls are ignored.
    pub fn set_state(&mut self, state: ActorState) {
        if self.state == ActorState::Dead && state != ActorState::Dead {
            log::warn!("Ignoring {:?} for a dead actor", state);
            return;
        }
        self.state = state;
    }

    /// Shorthand for `set_state(ActorState::Dead)`
    pub fn kill(&mut self) {
        self.state = ActorState::Dead;
    }

    /// Whether the update pass advances this actor
    pub fn is_active(&self) -> bool {
        self.state == ActorState::Active
    }
}

pub(crate) struct ComponentSlot {
    pub(crate) id: ComponentId,
    pub(crate) update_order: i32,
    pub(crate) component: Box<dyn Component>,
}

/// A game entity: transform, state, components and an optional behavior
pub struct Actor {
    core: ActorCore,
    components: Vec<ComponentSlot>,
    pub(crate) behavior: Option<Box<dyn ActorBehavior>>,
}

impl Actor {
    pub(crate) fn new(behavior: Option<Box<dyn ActorBehavior>>) -> Self {
        Self {
            core: ActorCore::default(),
            components: Vec::new(),
            behavior,
        }
    }

    /// Transform and state
    pub fn core(&self) -> &ActorCore {
        &self.core
    }

    /// Mutable transform and state
    pub fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    /// Position in screen space
    pub fn position(&self) -> Vec2 {
        self.core.position()
    }

    /// Set position
    pub fn set_position(&mut self, position: Vec2) {
        self.core.set_position(position);
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.core.rotation()
    }

    /// Set rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.core.set_rotation(rotation);
    }

    /// Uniform scale
    pub fn scale(&self) -> f32 {
        self.core.scale()
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.core.set_scale(scale);
    }

    /// Lifecycle state
    pub fn state(&self) -> ActorState {
        self.core.state()
    }

    /// Set lifecycle state
    pub fn set_state(&mut self, state: ActorState) {
        self.core.set_state(state);
    }

    /// Update every component in ascending update-order
    pub fn update_components(&mut self, delta_time: f32) {
        for slot in &mut self.components {
            slot.component.update(&mut self.core, delta_time);
        }
    }

    /// Attach a component, keeping the list sorted by update-order
    ///
    /// The component goes after every component whose order is less than or
    /// equal to its own.
    pub(crate) fn add_component(&mut self, id: ComponentId, component: Box<dyn Component>) {
        let update_order = component.update_order();
        let index = self
            .components
            .iter()
            .position(|slot| update_order < slot.update_order)
            .unwrap_or(self.components.len());
        self.components.insert(
            index,
            ComponentSlot {
                id,
                update_order,
                component,
            },
        );
    }

    /// Detach a component without destroying it
    pub(crate) fn remove_component(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let index = self.components.iter().position(|slot| slot.id == id)?;
        Some(self.components.remove(index).component)
    }

    /// Detach every component, last attached first
    pub(crate) fn take_components(&mut self) -> Vec<(ComponentId, Box<dyn Component>)> {
        self.components
            .drain(..)
            .rev()
            .map(|slot| (slot.id, slot.component))
            .collect()
    }

    /// Borrow a component by id
    pub fn component(&self, id: ComponentId) -> Option<&(dyn Component + 'static)> {
        self.components
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| slot.component.as_ref())
    }

    pub(crate) fn component_mut(&mut self, id: ComponentId) -> Option<&mut (dyn Component + 'static)> {
        self.components
            .iter_mut()
            .find(|slot| slot.id == id)
            .map(|slot| slot.component.as_mut())
    }

    /// Component ids in update order
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.components.iter().map(|slot| slot.id)
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Whether this actor has a behavior attached
    pub fn has_behavior(&self) -> bool {
        self.behavior.is_some()
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("core", &self.core)
            .field("components", &self.components.len())
            .field("behavior", &self.behavior.is_some())
            .finish()
    }
}
