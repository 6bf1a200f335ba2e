//! Space shooter scene: ship plus two scrolling star fields

use actor_engine::components::{AnimSpriteComponent, BgSpriteComponent};
use actor_engine::foundation::math::Vec2;
use actor_engine::actor::ActorId;
use actor_engine::{AppError, Application, Engine};

use crate::ship::Ship;

const SHIP_FRAMES: [&str; 4] = [
    "Assets/Ship01.png",
    "Assets/Ship02.png",
    "Assets/Ship03.png",
    "Assets/Ship04.png",
];
const FAR_BACK: [&str; 2] = ["Assets/Farback01.png", "Assets/Farback02.png"];
const STARS: [&str; 2] = ["Assets/Stars.png", "Assets/Stars.png"];

const SHIP_START: (f32, f32) = (100.0, 384.0);
const SHIP_SCALE: f32 = 1.5;
const FAR_BACK_SPEED: f32 = -100.0;
const STARS_SPEED: f32 = -200.0;
const STARS_DRAW_ORDER: i32 = 50;

/// Loads the scene on initialize; the actors do the rest
#[derive(Debug, Default)]
pub struct SpaceShooter {
    ship: Option<ActorId>,
}

impl SpaceShooter {
    pub const TITLE: &'static str = "SpaceShip";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn ship(&self) -> Option<ActorId> {
        self.ship
    }
}

impl Application for SpaceShooter {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let ship = engine.world.spawn(Ship::new());
        if let Some(actor) = engine.world.actor_mut(ship) {
            actor.set_position(Vec2::new(SHIP_START.0, SHIP_START.1));
            actor.set_scale(SHIP_SCALE);
        }
        let mut anim = AnimSpriteComponent::new();
        anim.set_anim_textures(engine.textures(SHIP_FRAMES));
        engine.world.add_component(ship, anim);
        self.ship = Some(ship);

        let screen = engine.screen_size();
        let background = engine.world.spawn_empty();
        if let Some(actor) = engine.world.actor_mut(background) {
            actor.set_position(screen / 2.0);
        }

        let mut far_back = BgSpriteComponent::new(screen);
        far_back.set_bg_textures(engine.textures(FAR_BACK));
        far_back.set_scroll_speed(FAR_BACK_SPEED);
        engine.world.add_component(background, far_back);

        let mut stars = BgSpriteComponent::with_draw_order(screen, STARS_DRAW_ORDER);
        stars.set_bg_textures(engine.textures(STARS));
        stars.set_scroll_speed(STARS_SPEED);
        engine.world.add_component(background, stars);

        log::info!("Space shooter loaded with {} actor(s)", engine.world.actor_count());
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        self.ship = None;
    }
}
