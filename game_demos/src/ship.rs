//! Player ship: keyboard driven, kept on the left part of the screen

use actor_engine::actor::{ActorBehavior, ActorContext, ActorCore};
use actor_engine::foundation::math::Vec2;
use actor_engine::input::{InputSnapshot, KeyCode};

/// Horizontal speed in pixels per second
pub const HORIZONTAL_SPEED: f32 = 250.0;
/// Vertical speed in pixels per second
pub const VERTICAL_SPEED: f32 = 300.0;

/// Area the ship's center may move in
pub const MIN_X: f32 = 25.0;
pub const MAX_X: f32 = 500.0;
pub const MIN_Y: f32 = 25.0;
pub const MAX_Y: f32 = 743.0;

/// D/A move right/left, S/W move down/up
#[derive(Debug, Default)]
pub struct Ship {
    right_speed: f32,
    down_speed: f32,
}

impl Ship {
    pub fn new() -> Self {
        Self::default()
    }

    /// Velocity requested by the last input snapshot
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.right_speed, self.down_speed)
    }
}

impl ActorBehavior for Ship {
    fn process_input(&mut self, _actor: &mut ActorCore, input: &InputSnapshot) {
        self.right_speed = 0.0;
        self.down_speed = 0.0;
        if input.is_key_down(KeyCode::D) {
            self.right_speed += HORIZONTAL_SPEED;
        }
        if input.is_key_down(KeyCode::A) {
            self.right_speed -= HORIZONTAL_SPEED;
        }
        if input.is_key_down(KeyCode::S) {
            self.down_speed += VERTICAL_SPEED;
        }
        if input.is_key_down(KeyCode::W) {
            self.down_speed -= VERTICAL_SPEED;
        }
    }

    fn update_actor(&mut self, ctx: &mut ActorContext<'_>, delta_time: f32) {
        let actor = ctx.actor_mut();
        let moved = actor.position() + self.velocity() * delta_time;
        actor.set_position(Vec2::new(
            moved.x.clamp(MIN_X, MAX_X),
            moved.y.clamp(MIN_Y, MAX_Y),
        ));
    }
}
