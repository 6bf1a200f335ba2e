//! End-to-end tests for the engine frame loop on the headless backend

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use approx::assert_relative_eq;

    use crate::actor::{ActorBehavior, ActorContext, ActorCore, ActorId};
    use crate::assets::{AssetError, DecodedImage, ImageSource};
    use crate::components::SpriteComponent;
    use crate::core::EngineConfig;
    use crate::foundation::math::Vec2;
    use crate::input::{InputSnapshot, KeyCode};
    use crate::render::{Color, DrawCommand, HeadlessPlatform, SurfaceLog};
    use crate::{AppError, Application, Engine, EngineError, EngineState};

    /// Serves solid 4x4 images and counts decodes; paths containing
    /// "missing" fail
    struct MemoryImages {
        loads: Rc<Cell<u32>>,
    }

    impl ImageSource for MemoryImages {
        fn load_image(&mut self, path: &str) -> Result<DecodedImage, AssetError> {
            self.loads.set(self.loads.get() + 1);
            if path.contains("missing") {
                return Err(AssetError::Io {
                    path: path.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                });
            }
            Ok(DecodedImage::solid_color(4, 4, [255, 255, 255, 255]))
        }
    }

    /// Moves right at a fixed speed and stops while Space is held
    struct Mover {
        speed: f32,
        holding: bool,
        destroyed: Rc<Cell<u32>>,
    }

    impl Mover {
        fn new(speed: f32) -> Self {
            Self {
                speed,
                holding: false,
                destroyed: Rc::new(Cell::new(0)),
            }
        }
    }

    impl ActorBehavior for Mover {
        fn process_input(&mut self, _actor: &mut ActorCore, input: &InputSnapshot) {
            self.holding = input.is_key_down(KeyCode::Space);
        }

        fn update_actor(&mut self, ctx: &mut ActorContext<'_>, delta_time: f32) {
            if !self.holding {
                let actor = ctx.actor_mut();
                let position = actor.position() + Vec2::new(self.speed * delta_time, 0.0);
                actor.set_position(position);
            }
        }

        fn on_destroy(&mut self, _actor: &mut ActorCore) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    /// Spawns one textured mover on initialize
    #[derive(Default)]
    struct TestGame {
        mover: Option<ActorId>,
        destroyed: Rc<Cell<u32>>,
        updates: u32,
        cleaned_up: bool,
    }

    impl Application for TestGame {
        fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            let mover = Mover::new(100.0);
            self.destroyed = Rc::clone(&mover.destroyed);
            let id = engine.world.spawn(mover);
            if let Some(actor) = engine.world.actor_mut(id) {
                actor.set_position(Vec2::new(10.0, 20.0));
            }

            let texture = engine
                .texture("Assets/Ship01.png")
                .ok_or_else(|| AppError::Asset("Assets/Ship01.png".to_string()))?;
            let mut sprite = SpriteComponent::new();
            sprite.set_texture(texture);
            engine.world.add_component(id, sprite);

            self.mover = Some(id);
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            Ok(())
        }

        fn cleanup(&mut self, engine: &mut Engine) {
            // Actors are still alive during cleanup
            self.cleaned_up = self.mover.is_some_and(|id| engine.world.contains(id));
        }
    }

    struct FailingGame;

    impl Application for FailingGame {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Err(AppError::Custom("no level".to_string()))
        }
    }

    fn test_config() -> EngineConfig {
        let mut config = EngineConfig::new("Test").with_clear_color(Color::rgb(1, 2, 3));
        config.timing.min_frame_ms = 0;
        config
    }

    fn headless_engine(platform: HeadlessPlatform) -> (Engine, SurfaceLog, Rc<Cell<u32>>) {
        let log = platform.log();
        let loads = Rc::new(Cell::new(0));
        let engine = Engine::new(test_config(), platform)
            .unwrap()
            .with_image_source(MemoryImages { loads: Rc::clone(&loads) });
        (engine, log, loads)
    }

    #[test]
    fn test_state_machine_moves_forward_only() {
        let (mut engine, _log, _loads) = headless_engine(HeadlessPlatform::new());
        let mut game = TestGame::default();
        assert_eq!(engine.state(), EngineState::Uninitialized);

        assert!(matches!(engine.run_frame(&mut game), Err(EngineError::InvalidState { .. })));
        assert!(matches!(engine.shutdown(&mut game), Err(EngineError::InvalidState { .. })));

        engine.initialize(&mut game).unwrap();
        assert_eq!(engine.state(), EngineState::Running);
        assert!(matches!(
            engine.initialize(&mut game),
            Err(EngineError::InvalidState { state: EngineState::Running, .. })
        ));

        engine.shutdown(&mut game).unwrap();
        assert_eq!(engine.state(), EngineState::Terminated);
        assert!(engine.initialize(&mut game).is_err());
        assert!(engine.run_frame(&mut game).is_err());
        assert!(engine.shutdown(&mut game).is_err());
    }

    #[test]
    fn test_surface_creation_failure_is_reported() {
        let (mut engine, _log, _loads) = headless_engine(HeadlessPlatform::new().failing("no display"));
        let mut game = TestGame::default();

        let result = engine.initialize(&mut game);

        assert!(matches!(result, Err(EngineError::SurfaceCreation(_))));
        assert_eq!(engine.state(), EngineState::Uninitialized);
        assert_eq!(game.mover, None);
    }

    #[test]
    fn test_application_initialize_failure_is_reported() {
        let (mut engine, _log, _loads) = headless_engine(HeadlessPlatform::new());

        let result = engine.initialize(&mut FailingGame);

        assert!(matches!(result, Err(EngineError::Application(message)) if message.contains("no level")));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = test_config();
        config.window.width = 0;

        let result = Engine::new(config, HeadlessPlatform::new());

        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn test_escape_stops_the_loop() {
        let platform = HeadlessPlatform::new().with_script([vec![], vec![], vec![KeyCode::Escape]]);
        let (mut engine, log, _loads) = headless_engine(platform);
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();

        engine.run(&mut game).unwrap();

        assert!(engine.is_quit_requested());
        assert_eq!(log.frames_presented(), 2);
        assert_eq!(game.updates, 2);
        assert_eq!(engine.timer().frame_count(), 2);
    }

    #[test]
    fn test_quit_event_stops_the_loop() {
        let (mut engine, log, _loads) = headless_engine(HeadlessPlatform::new().quit_after(4));
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();

        engine.run(&mut game).unwrap();

        assert_eq!(log.frames_presented(), 3);
        assert!(!engine.run_frame(&mut game).unwrap());
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let (mut engine, _log, _loads) = headless_engine(HeadlessPlatform::new());
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();
        let mover = game.mover.unwrap();
        let start = engine.world.actor(mover).unwrap().position();

        let delta_time = engine.step(Duration::from_millis(200));

        let moved = engine.world.actor(mover).unwrap().position() - start;
        assert_relative_eq!(delta_time, 0.05);
        assert!(moved.x <= 100.0 * 0.05 + 1e-4);
        assert_relative_eq!(moved.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(moved.y, 0.0);
    }

    #[test]
    fn test_input_reaches_behaviors() {
        let platform = HeadlessPlatform::new().with_script([vec![KeyCode::Space]]);
        let (mut engine, _log, _loads) = headless_engine(platform);
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();
        let mover = game.mover.unwrap();
        let start = engine.world.actor(mover).unwrap().position();

        engine.process_input();
        engine.step(Duration::from_millis(10));
        assert_eq!(engine.world.actor(mover).unwrap().position(), start);

        engine.process_input();
        engine.step(Duration::from_millis(10));
        assert!(engine.world.actor(mover).unwrap().position().x > start.x);
    }

    #[test]
    fn test_texture_is_loaded_once() {
        let (mut engine, log, loads) = headless_engine(HeadlessPlatform::new());
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();

        let first = engine.texture("Assets/Ship01.png").unwrap();
        let second = engine.texture("Assets/Ship01.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(loads.get(), 1);
        assert_eq!(log.textures_created(), 1);
        assert_eq!(engine.texture_cache().len(), 1);
    }

    #[test]
    fn test_missing_texture_yields_none() {
        let (mut engine, _log, loads) = headless_engine(HeadlessPlatform::new());
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();

        assert!(engine.texture("Assets/missing.png").is_none());
        assert!(engine.texture("Assets/missing.png").is_none());

        // Failures are not cached
        assert_eq!(loads.get(), 3);
        let loaded = engine.textures(["Assets/Ship01.png", "Assets/missing.png", "Assets/Ship02.png"]);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_texture_before_initialize_is_none() {
        let (mut engine, _log, loads) = headless_engine(HeadlessPlatform::new());

        assert!(engine.texture("Assets/Ship01.png").is_none());
        assert_eq!(loads.get(), 0);
    }

    #[test]
    fn test_frame_clears_draws_presents() {
        let (mut engine, log, _loads) = headless_engine(HeadlessPlatform::new());
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();

        assert!(engine.run_frame(&mut game).unwrap());

        let frame = log.last_frame();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[0], DrawCommand::Clear(Color::rgb(1, 2, 3)));
        assert!(matches!(frame[1], DrawCommand::Texture { .. }));
        assert_eq!(log.frames_presented(), 1);
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let (mut engine, log, _loads) = headless_engine(HeadlessPlatform::new());
        let mut game = TestGame::default();
        engine.initialize(&mut game).unwrap();
        engine.texture("Assets/Ship02.png");
        assert_eq!(log.live_textures(), 2);

        engine.shutdown(&mut game).unwrap();

        assert!(game.cleaned_up);
        assert_eq!(game.destroyed.get(), 1);
        assert_eq!(engine.world.actor_count(), 0);
        assert!(engine.world.sprites().is_empty());
        assert_eq!(log.live_textures(), 0);
    }
}
