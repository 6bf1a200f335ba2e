//! Pong: a paddle on the left, walls on the other three sides

use actor_engine::actor::{ActorBehavior, ActorContext, ActorCore, ActorId};
use actor_engine::components::RectComponent;
use actor_engine::foundation::math::Vec2;
use actor_engine::input::{InputSnapshot, KeyCode};
use actor_engine::render::Color;
use actor_engine::{AppError, Application, Engine};
use rand::Rng;

/// Wall and paddle thickness
pub const THICKNESS: f32 = 15.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
/// Paddle speed in pixels per second
pub const PADDLE_SPEED: f32 = 300.0;
/// Horizontal span of ball centers that touch the paddle
pub const PADDLE_FACE_MIN_X: f32 = 20.0;
pub const PADDLE_FACE_MAX_X: f32 = 25.0;
/// Ball speed on each axis when served
pub const SERVE_SPEED_X: f32 = 200.0;
pub const SERVE_SPEED_Y: f32 = 235.0;

/// Moves up with W or Up, down with S or Down, stays between the walls
#[derive(Debug)]
pub struct Paddle {
    direction: f32,
    screen_height: f32,
}

impl Paddle {
    pub fn new(screen_height: f32) -> Self {
        Self {
            direction: 0.0,
            screen_height,
        }
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }
}

impl ActorBehavior for Paddle {
    fn process_input(&mut self, _actor: &mut ActorCore, input: &InputSnapshot) {
        self.direction = 0.0;
        if input.is_key_down(KeyCode::W) || input.is_key_down(KeyCode::Up) {
            self.direction -= 1.0;
        }
        if input.is_key_down(KeyCode::S) || input.is_key_down(KeyCode::Down) {
            self.direction += 1.0;
        }
    }

    fn update_actor(&mut self, ctx: &mut ActorContext<'_>, delta_time: f32) {
        if self.direction == 0.0 {
            return;
        }
        let top = PADDLE_HEIGHT / 2.0 + THICKNESS;
        let bottom = self.screen_height - PADDLE_HEIGHT / 2.0 - THICKNESS;

        let actor = ctx.actor_mut();
        let mut position = actor.position();
        position.y = (position.y + self.direction * PADDLE_SPEED * delta_time).clamp(top, bottom);
        actor.set_position(position);
    }
}

/// Bounces off the walls and the paddle; served again from the center when missed
#[derive(Debug)]
pub struct Ball {
    velocity: Vec2,
    paddle: ActorId,
    screen_size: Vec2,
    misses: u32,
}

impl Ball {
    pub fn new(paddle: ActorId, screen_size: Vec2) -> Self {
        Self {
            velocity: Vec2::new(-SERVE_SPEED_X, SERVE_SPEED_Y),
            paddle,
            screen_size,
            misses: 0,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Times the ball got past the paddle
    pub fn misses(&self) -> u32 {
        self.misses
    }

    fn serve(&mut self, actor: &mut ActorCore) {
        actor.set_position(self.screen_size / 2.0);
        let down = rand::thread_rng().gen_bool(0.5);
        self.velocity = Vec2::new(
            -SERVE_SPEED_X,
            if down { SERVE_SPEED_Y } else { -SERVE_SPEED_Y },
        );
    }
}

impl ActorBehavior for Ball {
    fn update_actor(&mut self, ctx: &mut ActorContext<'_>, delta_time: f32) {
        let paddle_y = ctx.world().actor(self.paddle).map(|paddle| paddle.position().y);

        let actor = ctx.actor_mut();
        let previous_x = actor.position().x;
        let position = actor.position() + self.velocity * delta_time;
        actor.set_position(position);

        // Moving left, the swept span [position.x, previous_x] must overlap the paddle face
        let hits_paddle = paddle_y.is_some_and(|y| (y - position.y).abs() <= PADDLE_HEIGHT / 2.0)
            && self.velocity.x < 0.0
            && position.x <= PADDLE_FACE_MAX_X
            && previous_x >= PADDLE_FACE_MIN_X;
        if hits_paddle {
            self.velocity.x = -self.velocity.x;
        } else if position.x <= 0.0 {
            self.misses += 1;
            log::info!("Missed the ball ({} so far)", self.misses);
            self.serve(actor);
            return;
        } else if position.x >= self.screen_size.x - THICKNESS && self.velocity.x > 0.0 {
            self.velocity.x = -self.velocity.x;
        }

        if (position.y <= THICKNESS && self.velocity.y < 0.0)
            || (position.y >= self.screen_size.y - THICKNESS && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Builds the court on initialize
#[derive(Debug, Default)]
pub struct PongGame {
    paddle: Option<ActorId>,
    ball: Option<ActorId>,
}

impl PongGame {
    pub const TITLE: &'static str = "Pong";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle(&self) -> Option<ActorId> {
        self.paddle
    }

    pub fn ball(&self) -> Option<ActorId> {
        self.ball
    }

    fn spawn_block(engine: &mut Engine, position: Vec2, size: Vec2) -> ActorId {
        let block = engine.world.spawn_empty();
        if let Some(actor) = engine.world.actor_mut(block) {
            actor.set_position(position);
        }
        engine.world.add_component(block, RectComponent::new(size, Color::WHITE));
        block
    }
}

impl Application for PongGame {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let screen = engine.screen_size();
        let half = THICKNESS / 2.0;

        Self::spawn_block(engine, Vec2::new(screen.x / 2.0, half), Vec2::new(screen.x, THICKNESS));
        Self::spawn_block(engine, Vec2::new(screen.x / 2.0, screen.y - half), Vec2::new(screen.x, THICKNESS));
        Self::spawn_block(engine, Vec2::new(screen.x - half, screen.y / 2.0), Vec2::new(THICKNESS, screen.y));

        let paddle = engine.world.spawn(Paddle::new(screen.y));
        if let Some(actor) = engine.world.actor_mut(paddle) {
            actor.set_position(Vec2::new(10.0, screen.y / 2.0));
        }
        engine
            .world
            .add_component(paddle, RectComponent::new(Vec2::new(THICKNESS, PADDLE_HEIGHT), Color::WHITE));

        let ball = engine.world.spawn(Ball::new(paddle, screen));
        if let Some(actor) = engine.world.actor_mut(ball) {
            actor.set_position(screen / 2.0);
        }
        engine
            .world
            .add_component(ball, RectComponent::new(Vec2::new(THICKNESS, THICKNESS), Color::WHITE));

        self.paddle = Some(paddle);
        self.ball = Some(ball);
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(ball) = self.ball.and_then(|ball| engine.world.behavior::<Ball>(ball)) {
            log::info!("Game over, {} miss(es)", ball.misses());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_engine::actor::World;
    use actor_engine::core::EngineConfig;
    use actor_engine::render::HeadlessPlatform;
    use approx::assert_relative_eq;

    const SCREEN: (f32, f32) = (1024.0, 768.0);

    fn screen() -> Vec2 {
        Vec2::new(SCREEN.0, SCREEN.1)
    }

    /// Paddle at the left edge, ball at `ball_at` moving with `velocity`
    fn court(ball_at: Vec2, velocity: Vec2) -> (World, ActorId, ActorId) {
        let mut world = World::new();
        let paddle = world.spawn(Paddle::new(SCREEN.1));
        world.actor_mut(paddle).unwrap().set_position(Vec2::new(10.0, 384.0));
        let mut ball = Ball::new(paddle, screen());
        ball.set_velocity(velocity);
        let ball = world.spawn(ball);
        world.actor_mut(ball).unwrap().set_position(ball_at);
        (world, paddle, ball)
    }

    fn hold(key: KeyCode) -> InputSnapshot {
        let mut input = InputSnapshot::new();
        input.set_key(key, true);
        input
    }

    #[test]
    fn test_paddle_follows_keys() {
        let (mut world, paddle, _ball) = court(screen() / 2.0, Vec2::zeros());

        world.process_input(&hold(KeyCode::S));
        world.update(0.05);

        assert_relative_eq!(world.actor(paddle).unwrap().position().y, 399.0, epsilon = 1e-4);
        assert_eq!(world.behavior::<Paddle>(paddle).unwrap().direction(), 1.0);
    }

    #[test]
    fn test_paddle_stays_between_walls() {
        let (mut world, paddle, _ball) = court(screen() / 2.0, Vec2::zeros());

        world.process_input(&hold(KeyCode::Up));
        for _ in 0..100 {
            world.update(0.05);
        }

        assert_relative_eq!(
            world.actor(paddle).unwrap().position().y,
            PADDLE_HEIGHT / 2.0 + THICKNESS
        );
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let (mut world, _paddle, ball) = court(Vec2::new(24.0, 400.0), Vec2::new(-200.0, 0.0));

        world.update(0.01);

        assert_eq!(world.behavior::<Ball>(ball).unwrap().velocity(), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_fast_ball_cannot_skip_the_paddle() {
        // 10px per clamped frame jumps from 28 to 18, past the 20..=25 face
        let (mut world, _paddle, ball) = court(Vec2::new(28.0, 384.0), Vec2::new(-200.0, 0.0));

        world.update(0.05);

        let behavior = world.behavior::<Ball>(ball).unwrap();
        assert_eq!(behavior.velocity(), Vec2::new(200.0, 0.0));
        assert_eq!(behavior.misses(), 0);
    }

    #[test]
    fn test_ball_already_behind_paddle_is_missed() {
        let (mut world, _paddle, ball) = court(Vec2::new(15.0, 384.0), Vec2::new(-200.0, 0.0));

        world.update(0.05);

        assert_eq!(world.behavior::<Ball>(ball).unwrap().velocity().x, -200.0);
    }

    #[test]
    fn test_ball_bounces_off_walls() {
        let (mut world, _paddle, ball) = court(Vec2::new(1008.0, 16.0), Vec2::new(200.0, -235.0));

        world.update(0.01);

        assert_eq!(world.behavior::<Ball>(ball).unwrap().velocity(), Vec2::new(-200.0, 235.0));
    }

    #[test]
    fn test_missed_ball_is_served_again() {
        let (mut world, _paddle, ball) = court(Vec2::new(1.0, 700.0), Vec2::new(-200.0, 0.0));

        world.update(0.01);

        let behavior = world.behavior::<Ball>(ball).unwrap();
        assert_eq!(behavior.misses(), 1);
        assert_eq!(behavior.velocity().x, -SERVE_SPEED_X);
        assert_eq!(behavior.velocity().y.abs(), SERVE_SPEED_Y);
        assert_eq!(world.actor(ball).unwrap().position(), screen() / 2.0);
    }

    #[test]
    fn test_court_layout() {
        let mut engine = Engine::new(EngineConfig::new(PongGame::TITLE), HeadlessPlatform::new()).unwrap();
        let mut game = PongGame::new();

        engine.initialize(&mut game).unwrap();

        assert_eq!(engine.world.actor_count(), 5);
        assert_eq!(engine.world.sprites().len(), 5);
        let paddle = engine.world.actor(game.paddle().unwrap()).unwrap();
        assert_eq!(paddle.position(), Vec2::new(10.0, 384.0));
        assert!(engine.world.behavior::<Ball>(game.ball().unwrap()).is_some());
    }
}
