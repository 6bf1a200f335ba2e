//! World: owner of all actors and of the sprite draw list

use slotmap::SlotMap;

use super::behavior::{ActorBehavior, ActorContext};
use super::component::{downcast_mut, downcast_ref, AsAny, Component};
use super::entity::{Actor, ActorState};
use super::sprite_list::{SpriteEntry, SpriteList};
use crate::foundation::collections::{ActorId, ComponentId};
use crate::input::InputSnapshot;
use crate::render::RenderSurface;

/// Container for every actor, their components and the sorted sprite list
///
/// Actors created while an update pass is running are parked in a staging
/// list and merged once the pass completes, so the live list never changes
/// underneath the pass. Dead actors are destroyed in the sweep that follows.
pub struct World {
    pub(super) actors: SlotMap<ActorId, Actor>,
    live: Vec<ActorId>,
    pending: Vec<ActorId>,
    sprites: SpriteList,
    updating: bool,
    next_component: u64,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
            live: Vec::new(),
            pending: Vec::new(),
            sprites: SpriteList::new(),
            updating: false,
            next_component: 0,
        }
    }

    /// Create an actor driven by `behavior` and register it
    pub fn spawn(&mut self, behavior: impl ActorBehavior) -> ActorId {
        self.insert_actor(Some(Box::new(behavior)))
    }

    /// Create an actor with no behavior and register it
    pub fn spawn_empty(&mut self) -> ActorId {
        self.insert_actor(None)
    }

    fn insert_actor(&mut self, behavior: Option<Box<dyn ActorBehavior>>) -> ActorId {
        let id = self.actors.insert(Actor::new(behavior));
        self.add_actor(id);
        id
    }

    /// Register an actor with the update pass
    ///
    /// While a pass is running the actor is staged and only joins the live
    /// list after the pass. Returns `false` if the actor does not exist or is
    /// already registered.
    pub fn add_actor(&mut self, id: ActorId) -> bool {
        if !self.actors.contains_key(id) || self.live.contains(&id) || self.pending.contains(&id) {
            return false;
        }

        if self.updating {
            log::debug!("Staging actor {:?} until the update pass ends", id);
            self.pending.push(id);
        } else {
            self.live.push(id);
        }
        true
    }

    /// Unregister an actor from the update pass without destroying it
    ///
    /// Looks in both the staging and the live list. Safe to call any number
    /// of times; returns whether anything was removed.
    pub fn remove_actor(&mut self, id: ActorId) -> bool {
        let mut removed = false;
        if let Some(index) = self.pending.iter().position(|&pending| pending == id) {
            self.pending.swap_remove(index);
            removed = true;
        }
        if let Some(index) = self.live.iter().position(|&live| live == id) {
            self.live.swap_remove(index);
            removed = true;
        }
        removed
    }

    /// Destroy an actor and all of its components
    ///
    /// Runs the behavior's `on_destroy` hook, unregisters the actor, drops its
    /// sprites from the draw list and releases its components. Returns `false`
    /// if the actor was already destroyed.
    pub fn destroy_actor(&mut self, id: ActorId) -> bool {
        let Some(mut actor) = self.actors.remove(id) else {
            return false;
        };

        if let Some(mut behavior) = actor.behavior.take() {
            behavior.on_destroy(actor.core_mut());
        }
        self.remove_actor(id);
        self.sprites.remove_actor(id);
        for (component_id, component) in actor.take_components() {
            log::trace!("Releasing component {} of actor {:?}", component_id.raw(), id);
            drop(component);
        }

        log::debug!("Destroyed actor {:?}", id);
        true
    }

    /// Attach a component to an actor
    ///
    /// Drawable components are also inserted into the sprite list. Returns
    /// `None` if the actor does not exist.
    pub fn add_component(&mut self, actor: ActorId, component: impl Component) -> Option<ComponentId> {
        self.add_boxed_component(actor, Box::new(component))
    }

    /// Attach an already boxed component to an actor
    pub fn add_boxed_component(&mut self, actor: ActorId, component: Box<dyn Component>) -> Option<ComponentId> {
        let owner = self.actors.get_mut(actor)?;

        self.next_component += 1;
        let id = ComponentId::new(self.next_component);
        if let Some(draw_order) = component.draw_order() {
            self.sprites.insert(SpriteEntry {
                draw_order,
                actor,
                component: id,
            });
        }
        owner.add_component(id, component);
        Some(id)
    }

    /// Detach a component, handing it back to the caller
    ///
    /// Returns `None` if either the actor or the component is unknown.
    pub fn remove_component(&mut self, actor: ActorId, component: ComponentId) -> Option<Box<dyn Component>> {
        let detached = self.actors.get_mut(actor)?.remove_component(component)?;
        self.sprites.remove(component);
        Some(detached)
    }

    /// Borrow a component as its concrete type
    pub fn component<T: Component>(&self, actor: ActorId, component: ComponentId) -> Option<&T> {
        downcast_ref::<T>(self.actors.get(actor)?.component(component)?)
    }

    /// Mutably borrow a component as its concrete type
    pub fn component_mut<T: Component>(&mut self, actor: ActorId, component: ComponentId) -> Option<&mut T> {
        downcast_mut::<T>(self.actors.get_mut(actor)?.component_mut(component)?)
    }

    /// Borrow an actor's behavior as its concrete type
    pub fn behavior<B: ActorBehavior>(&self, actor: ActorId) -> Option<&B> {
        let behavior = self.actors.get(actor)?.behavior.as_deref()?;
        AsAny::as_any(behavior).downcast_ref::<B>()
    }

    /// Mutably borrow an actor's behavior as its concrete type
    pub fn behavior_mut<B: ActorBehavior>(&mut self, actor: ActorId) -> Option<&mut B> {
        let behavior = self.actors.get_mut(actor)?.behavior.as_deref_mut()?;
        AsAny::as_any_mut(behavior).downcast_mut::<B>()
    }

    /// Borrow an actor
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Mutably borrow an actor
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    /// Whether the actor exists (live, staged or unregistered)
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(id)
    }

    /// Number of actors that exist
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Actors visited by the update pass
    pub fn live_actors(&self) -> &[ActorId] {
        &self.live
    }

    /// Actors waiting for the current pass to end
    pub fn pending_actors(&self) -> &[ActorId] {
        &self.pending
    }

    /// Whether an update pass is running
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Drawable components in draw order
    pub fn sprites(&self) -> &SpriteList {
        &self.sprites
    }

    /// Feed the frame's input to every active live actor
    pub fn process_input(&mut self, input: &InputSnapshot) {
        for &id in &self.live {
            let Some(actor) = self.actors.get_mut(id) else {
                continue;
            };
            if !actor.core().is_active() {
                continue;
            }
            if let Some(mut behavior) = actor.behavior.take() {
                behavior.process_input(actor.core_mut(), input);
                actor.behavior = Some(behavior);
            }
        }
    }

    /// Run one full update: advance live actors, then reconcile
    ///
    /// Returns the number of actors destroyed by the reconciliation sweep.
    pub fn update(&mut self, delta_time: f32) -> usize {
        self.updating = true;
        // Spawns during the pass go to `pending`, so `live` is stable here
        for index in 0..self.live.len() {
            let id = self.live[index];
            self.update_actor(id, delta_time);
        }
        self.updating = false;

        self.reconcile()
    }

    /// Advance one actor: components in update-order, then its behavior
    ///
    /// Actors that are not `Active` are left untouched.
    pub fn update_actor(&mut self, id: ActorId, delta_time: f32) {
        let Some(actor) = self.actors.get_mut(id) else {
            return;
        };
        if actor.state() != ActorState::Active {
            return;
        }

        actor.update_components(delta_time);

        let Some(mut behavior) = actor.behavior.take() else {
            return;
        };
        behavior.update_actor(&mut ActorContext::new(self, id), delta_time);
        if let Some(actor) = self.actors.get_mut(id) {
            actor.behavior = Some(behavior);
        }
    }

    /// Merge staged actors into the live list, then destroy dead actors
    ///
    /// Returns the number of actors destroyed.
    pub fn reconcile(&mut self) -> usize {
        self.live.append(&mut self.pending);

        let dead: Vec<ActorId> = self
            .live
            .iter()
            .copied()
            .filter(|&id| self.actors.get(id).is_some_and(|actor| actor.state() == ActorState::Dead))
            .collect();

        dead.into_iter().filter(|&id| self.destroy_actor(id)).count()
    }

    /// Draw every sprite in ascending draw-order
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        for entry in self.sprites.iter() {
            let Some(actor) = self.actors.get(entry.actor) else {
                continue;
            };
            if let Some(component) = actor.component(entry.component) {
                component.draw(actor.core(), surface);
            }
        }
    }

    /// Destroy every actor, registered or not
    pub fn clear(&mut self) {
        let ids: Vec<ActorId> = self.actors.keys().collect();
        let count = ids.len();
        for id in ids {
            self.destroy_actor(id);
        }
        log::info!("Destroyed {} actor(s)", count);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorCore;
    use crate::foundation::math::{Rect, Vec2};
    use crate::render::{Color, DrawCommand, HeadlessSurface};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Counts its own updates
    struct Counter {
        updates: Rc<Cell<u32>>,
    }

    impl Component for Counter {
        fn update(&mut self, _owner: &mut ActorCore, _delta_time: f32) {
            self.updates.set(self.updates.get() + 1);
        }
    }

    /// Draws a 1x1 rectangle at the owner, tagged by color
    struct Marker {
        order: i32,
        color: Color,
    }

    impl Component for Marker {
        fn draw_order(&self) -> Option<i32> {
            Some(self.order)
        }

        fn draw(&self, owner: &ActorCore, surface: &mut dyn RenderSurface) {
            surface.set_draw_color(self.color);
            surface.fill_rect(Rect::centered(owner.position(), 1.0, 1.0));
        }
    }

    /// Records which actors were visited, and optionally spawns or dies
    struct Probe {
        visits: Rc<RefCell<Vec<ActorId>>>,
        spawn_once: bool,
        die: bool,
        destroyed: Rc<Cell<u32>>,
    }

    impl Probe {
        fn new(visits: &Rc<RefCell<Vec<ActorId>>>) -> Self {
            Self {
                visits: Rc::clone(visits),
                spawn_once: false,
                die: false,
                destroyed: Rc::new(Cell::new(0)),
            }
        }
    }

    impl ActorBehavior for Probe {
        fn update_actor(&mut self, ctx: &mut ActorContext<'_>, _delta_time: f32) {
            self.visits.borrow_mut().push(ctx.id());
            if self.spawn_once {
                self.spawn_once = false;
                ctx.spawn(Self::new(&self.visits));
            }
            if self.die {
                ctx.actor_mut().kill();
            }
        }

        fn on_destroy(&mut self, _actor: &mut ActorCore) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    #[test]
    fn test_paused_and_dead_actors_do_not_update_components() {
        let mut world = World::new();
        let updates = Rc::new(Cell::new(0));
        let actor = world.spawn_empty();
        world.add_component(actor, Counter { updates: Rc::clone(&updates) });

        world.update(0.016);
        assert_eq!(updates.get(), 1);

        world.actor_mut(actor).unwrap().set_state(ActorState::Paused);
        for _ in 0..10 {
            world.update(0.016);
        }
        assert_eq!(updates.get(), 1);

        world.actor_mut(actor).unwrap().set_state(ActorState::Active);
        world.update(0.016);
        assert_eq!(updates.get(), 2);

        // Dead actors are skipped directly as well as swept
        world.actor_mut(actor).unwrap().set_state(ActorState::Dead);
        world.update_actor(actor, 0.016);
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn test_actor_spawned_mid_pass_joins_next_pass() {
        let mut world = World::new();
        let visits = Rc::new(RefCell::new(Vec::new()));
        let mut spawner = Probe::new(&visits);
        spawner.spawn_once = true;
        let parent = world.spawn(spawner);

        world.update(0.016);
        assert_eq!(*visits.borrow(), vec![parent]);
        assert_eq!(world.live_actors().len(), 2);
        assert!(world.pending_actors().is_empty());

        visits.borrow_mut().clear();
        world.update(0.016);
        let child = world.live_actors()[1];
        assert_eq!(*visits.borrow(), vec![parent, child]);
    }

    #[test]
    fn test_add_outside_pass_is_immediate() {
        let mut world = World::new();

        let actor = world.spawn_empty();

        assert_eq!(world.live_actors(), &[actor]);
        assert!(!world.add_actor(actor));
    }

    #[test]
    fn test_dead_actor_destroyed_exactly_once() {
        let mut world = World::new();
        let visits = Rc::new(RefCell::new(Vec::new()));
        let mut doomed = Probe::new(&visits);
        doomed.die = true;
        let destroyed = Rc::clone(&doomed.destroyed);
        let actor = world.spawn(doomed);
        let bystander = world.spawn_empty();

        assert_eq!(world.update(0.016), 1);

        assert_eq!(destroyed.get(), 1);
        assert!(!world.contains(actor));
        assert!(!world.remove_actor(actor));
        assert!(!world.destroy_actor(actor));
        assert_eq!(world.update(0.016), 0);
        assert_eq!(destroyed.get(), 1);
        assert_eq!(world.live_actors(), &[bystander]);
    }

    #[test]
    fn test_remove_actor_is_idempotent() {
        let mut world = World::new();
        let a = world.spawn_empty();
        let b = world.spawn_empty();
        let c = world.spawn_empty();

        assert!(world.remove_actor(a));
        assert!(!world.remove_actor(a));

        let mut live = world.live_actors().to_vec();
        live.sort();
        let mut expected = vec![b, c];
        expected.sort();
        assert_eq!(live, expected);
        assert!(world.contains(a));
    }

    #[test]
    fn test_destroy_releases_components_and_sprites() {
        struct DropFlag(Rc<Cell<u32>>);
        impl Drop for DropFlag {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }
        struct Owned(#[allow(dead_code)] DropFlag);
        impl Component for Owned {
            fn draw_order(&self) -> Option<i32> {
                Some(10)
            }
        }

        let mut world = World::new();
        let drops = Rc::new(Cell::new(0));
        let actor = world.spawn_empty();
        world.add_component(actor, Owned(DropFlag(Rc::clone(&drops))));
        world.add_component(actor, Owned(DropFlag(Rc::clone(&drops))));
        assert_eq!(world.sprites().len(), 2);

        assert!(world.destroy_actor(actor));

        assert_eq!(drops.get(), 2);
        assert!(world.sprites().is_empty());
    }

    #[test]
    fn test_removed_component_is_returned_not_destroyed() {
        let mut world = World::new();
        let actor = world.spawn_empty();
        let marker = world
            .add_component(actor, Marker { order: 5, color: Color::WHITE })
            .unwrap();

        let detached = world.remove_component(actor, marker).unwrap();

        assert_eq!(detached.draw_order(), Some(5));
        assert!(world.sprites().is_empty());
        assert!(world.remove_component(actor, marker).is_none());
        assert!(world.component::<Marker>(actor, marker).is_none());
    }

    #[test]
    fn test_draw_visits_sprites_in_draw_order() {
        let mut world = World::new();
        let front = world.spawn_empty();
        let back = world.spawn_empty();
        world.actor_mut(front).unwrap().set_position(Vec2::new(1.0, 1.0));
        world.actor_mut(back).unwrap().set_position(Vec2::new(2.0, 2.0));
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgb(0, 0, 255);
        world.add_component(front, Marker { order: 200, color: red });
        world.add_component(back, Marker { order: 10, color: blue });

        let mut surface = HeadlessSurface::new();
        world.draw(&mut surface);

        assert!(world.sprites().is_sorted());
        assert_eq!(
            surface.log().commands(),
            vec![
                DrawCommand::SetDrawColor(blue),
                DrawCommand::FillRect(Rect::centered(Vec2::new(2.0, 2.0), 1.0, 1.0)),
                DrawCommand::SetDrawColor(red),
                DrawCommand::FillRect(Rect::centered(Vec2::new(1.0, 1.0), 1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_typed_component_and_behavior_access() {
        let mut world = World::new();
        let visits = Rc::new(RefCell::new(Vec::new()));
        let actor = world.spawn(Probe::new(&visits));
        let marker = world
            .add_component(actor, Marker { order: 1, color: Color::BLACK })
            .unwrap();

        world.component_mut::<Marker>(actor, marker).unwrap().color = Color::WHITE;

        assert_eq!(world.component::<Marker>(actor, marker).unwrap().color, Color::WHITE);
        assert!(world.component::<Counter>(actor, marker).is_none());
        assert!(world.behavior::<Probe>(actor).is_some());
        world.behavior_mut::<Probe>(actor).unwrap().die = true;
        world.update(0.016);
        assert!(!world.contains(actor));
    }

    #[test]
    fn test_clear_destroys_everything() {
        let mut world = World::new();
        let visits = Rc::new(RefCell::new(Vec::new()));
        let probe = Probe::new(&visits);
        let destroyed = Rc::clone(&probe.destroyed);
        let registered = world.spawn(probe);
        let detached = world.spawn_empty();
        world.remove_actor(detached);

        world.clear();

        assert_eq!(destroyed.get(), 1);
        assert_eq!(world.actor_count(), 0);
        assert!(!world.contains(registered));
        assert!(world.live_actors().is_empty());
    }
}
