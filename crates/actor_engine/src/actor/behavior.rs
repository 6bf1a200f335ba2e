//! Per-actor-type behavior hooks

use super::component::{downcast_mut, AsAny, Component};
use super::entity::ActorCore;
use super::world::World;
use crate::foundation::collections::{ActorId, ComponentId};
use crate::input::InputSnapshot;

/// Type-specific logic attached to an actor
///
/// Every hook defaults to doing nothing, so an actor type only implements
/// what it needs.
pub trait ActorBehavior: AsAny {
    /// Runs after the actor's components have been updated
    fn update_actor(&mut self, _ctx: &mut ActorContext<'_>, _delta_time: f32) {}

    /// Receives the frame's input snapshot before the update pass
    fn process_input(&mut self, _actor: &mut ActorCore, _input: &InputSnapshot) {}

    /// Runs exactly once, when the actor is destroyed
    fn on_destroy(&mut self, _actor: &mut ActorCore) {}
}

/// What a behavior can reach while its actor is being updated
///
/// Actors spawned through the context are staged and join the live set once
/// the current update pass has finished.
pub struct ActorContext<'w> {
    world: &'w mut World,
    id: ActorId,
}

impl<'w> ActorContext<'w> {
    pub(crate) fn new(world: &'w mut World, id: ActorId) -> Self {
        Self { world, id }
    }

    /// Id of the actor being updated
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Transform and state of the actor being updated
    pub fn actor(&self) -> &ActorCore {
        // The world keeps the actor alive for the whole call
        self.world.actors[self.id].core()
    }

    /// Mutable transform and state of the actor being updated
    pub fn actor_mut(&mut self) -> &mut ActorCore {
        self.world.actors[self.id].core_mut()
    }

    /// Read access to the rest of the world
    pub fn world(&self) -> &World {
        self.world
    }

    /// Spawn an actor with a behavior
    pub fn spawn(&mut self, behavior: impl ActorBehavior) -> ActorId {
        self.world.spawn(behavior)
    }

    /// Spawn an actor without a behavior
    pub fn spawn_empty(&mut self) -> ActorId {
        self.world.spawn_empty()
    }

    /// Attach a component to any actor
    pub fn add_component(&mut self, actor: ActorId, component: impl Component) -> Option<ComponentId> {
        self.world.add_component(actor, component)
    }

    /// Mutable access to one of this actor's components
    pub fn component_mut<T: Component>(&mut self, component: ComponentId) -> Option<&mut T> {
        let slot = self.world.actors.get_mut(self.id)?.component_mut(component)?;
        downcast_mut::<T>(slot)
    }

    /// Detach one of this actor's components
    pub fn remove_component(&mut self, component: ComponentId) -> Option<Box<dyn Component>> {
        self.world.remove_component(self.id, component)
    }
}
