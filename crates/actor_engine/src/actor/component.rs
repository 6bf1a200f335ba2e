//! Component trait

use std::any::Any;

use super::entity::ActorCore;
use crate::render::RenderSurface;

/// Update-order used when a component does not ask for another one
pub const DEFAULT_UPDATE_ORDER: i32 = 100;

/// Downcasting support for trait objects
///
/// Implemented for every `'static` type; call it on `&dyn Trait` (not on a
/// `Box`) to reach the concrete type.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`
    fn as_any(&self) -> &dyn Any;
    /// Borrow as `&mut dyn Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A unit of behavior owned by exactly one actor
///
/// `update_order` and `draw_order` are read once, when the component is
/// attached, and never again.
pub trait Component: AsAny {
    /// Lower values update first; ties keep attach order
    fn update_order(&self) -> i32 {
        DEFAULT_UPDATE_ORDER
    }

    /// Advance internal state
    fn update(&mut self, _owner: &mut ActorCore, _delta_time: f32) {}

    /// `Some` for drawable components; lower values draw first (further back)
    fn draw_order(&self) -> Option<i32> {
        None
    }

    /// Issue draw calls for this component
    fn draw(&self, _owner: &ActorCore, _surface: &mut dyn RenderSurface) {}
}

pub(crate) fn downcast_ref<'a, T: Component>(component: &'a (dyn Component + 'static)) -> Option<&'a T> {
    AsAny::as_any(component).downcast_ref::<T>()
}

pub(crate) fn downcast_mut<'a, T: Component>(component: &'a mut (dyn Component + 'static)) -> Option<&'a mut T> {
    AsAny::as_any_mut(component).downcast_mut::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health(i32);
    impl Component for Health {}

    struct Armor;
    impl Component for Armor {}

    #[test]
    fn test_downcast_to_concrete_type() {
        let mut boxed: Box<dyn Component> = Box::new(Health(10));

        assert!(downcast_ref::<Armor>(boxed.as_ref()).is_none());
        downcast_mut::<Health>(boxed.as_mut()).unwrap().0 -= 3;

        assert_eq!(downcast_ref::<Health>(boxed.as_ref()).map(|health| health.0), Some(7));
        assert_eq!(boxed.update_order(), DEFAULT_UPDATE_ORDER);
        assert_eq!(boxed.draw_order(), None);
    }
}
