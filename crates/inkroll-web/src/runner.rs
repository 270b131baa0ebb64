use inkroll_engine::{EngineContext, FixedTimestep, Game, GameConfig, GameEvent, InputEvent, InputQueue};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
///
/// One `tick` is: input sampling → `Game::update` → fixed physics steps, each
/// followed by `Game::collision_start` → `Game::before_render` → body draw.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            timestep: Self::timestep_for(&config),
            ctx: EngineContext::from_config(&config),
            game,
            input: InputQueue::new(),
            config,
            initialized: false,
        }
    }

    fn timestep_for(config: &GameConfig) -> FixedTimestep {
        FixedTimestep::new(config.fixed_dt).with_max_steps(config.max_steps_per_frame)
    }

    /// Forward game-specific JSON tuning. Only honoured before `init`.
    pub fn configure(&mut self, json: &str) {
        if self.initialized {
            log::warn!("configure ignored: game already initialized");
            return;
        }
        match self.game.configure(json) {
            Ok(()) => {
                self.config = self.game.config();
                self.timestep = Self::timestep_for(&self.config);
                self.ctx = EngineContext::from_config(&self.config);
                log::info!("configuration applied");
            }
            Err(e) => log::warn!("invalid configuration, keeping defaults: {}", e),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        self.ctx.sample_input(&self.input);
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        #[cfg(feature = "physics")]
        {
            let steps = self.timestep.accumulate(dt);
            for _ in 0..steps {
                self.ctx.step_physics();
                let started = self.ctx.started_collisions();
                if !started.is_empty() {
                    self.game.collision_start(&mut self.ctx, &started);
                }
            }
        }
        #[cfg(not(feature = "physics"))]
        let _ = self.timestep.accumulate(dt);

        self.game.before_render(&mut self.ctx);

        #[cfg(all(feature = "physics", feature = "vectors"))]
        inkroll_engine::draw_bodies(&self.ctx.scene, &self.ctx.physics, &mut self.ctx.vectors);

        if self.ctx.events.len() > self.config.max_events {
            log::warn!(
                "dropping {} game events over capacity",
                self.ctx.events.len() - self.config.max_events
            );
            self.ctx.events.truncate(self.config.max_events);
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for the page ----

    pub fn game_events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn max_vector_vertices(&self) -> u32 {
        self.ctx.vectors.max_vertices() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        log: Vec<&'static str>,
        seen_inputs: usize,
        tuned: bool,
        /// Spawn two balls on a collision course in zero gravity.
        collide: bool,
    }

    impl Game for Recorder {
        #[cfg(feature = "physics")]
        fn config(&self) -> GameConfig {
            if self.collide {
                GameConfig {
                    gravity: glam::Vec2::ZERO,
                    ..GameConfig::default()
                }
            } else {
                GameConfig::default()
            }
        }

        fn configure(&mut self, json: &str) -> Result<(), serde_json::Error> {
            let _: serde_json::Value = serde_json::from_str(json)?;
            self.tuned = true;
            Ok(())
        }

        #[cfg_attr(not(feature = "physics"), allow(unused_variables))]
        fn init(&mut self, ctx: &mut EngineContext) {
            self.log.push("init");
            #[cfg(feature = "physics")]
            if self.collide {
                use inkroll_engine::{BodyDesc, BodyStyle, BodyWorld, ColliderDesc, ColliderMaterial, VectorColor};
                for (x, vx) in [(100.0, 120.0), (130.0, -120.0)] {
                    ctx.add_body(
                        "ball",
                        BodyDesc::dynamic(ColliderDesc::Ball { radius: 10.0 })
                            .with_position(glam::Vec2::new(x, 300.0))
                            .with_velocity(glam::Vec2::new(vx, 0.0)),
                        ColliderMaterial::default(),
                        BodyStyle::filled(VectorColor::YELLOW),
                    );
                }
            }
        }

        #[cfg(feature = "physics")]
        fn collision_start(&mut self, _ctx: &mut EngineContext, pairs: &[inkroll_engine::CollisionPair]) {
            assert!(!pairs.is_empty());
            self.log.push("collision_start");
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.log.push("update");
            self.seen_inputs += input.len();
            ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        }

        fn before_render(&mut self, _ctx: &mut EngineContext) {
            self.log.push("before_render");
        }
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.tick(1.0 / 60.0);
        assert!(runner.game().log.is_empty());
    }

    #[test]
    fn tick_runs_hooks_in_order_and_drains_input() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        runner.push_input(InputEvent::PointerUp { x: 1.0, y: 1.0 });
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);

        let game = runner.game();
        assert_eq!(game.log, vec!["init", "update", "before_render", "update", "before_render"]);
        assert_eq!(game.seen_inputs, 2);
        assert_eq!(runner.game_events_len(), 1);
        assert!(!runner.context().pointer.pressed);
    }

    #[cfg(feature = "physics")]
    #[test]
    fn collision_start_runs_between_update_and_before_render() {
        let mut runner = GameRunner::new(Recorder {
            collide: true,
            ..Recorder::default()
        });
        runner.init();
        assert_eq!(runner.context().scene.count_tagged("ball"), 2);
        for _ in 0..20 {
            runner.tick(1.0 / 60.0);
        }

        let log = &runner.game().log;
        let at = log
            .iter()
            .position(|&hook| hook == "collision_start")
            .expect("balls never touched");
        assert_eq!(log[at - 1], "update");
        assert_eq!(log[at + 1], "before_render");
    }

    #[test]
    fn configure_rejects_bad_json_and_ignores_late_calls() {
        let mut runner = GameRunner::new(Recorder::default());
        runner.configure("{not json");
        assert!(!runner.game().tuned);
        runner.configure("{}");
        assert!(runner.game().tuned);

        runner.init();
        runner.configure("{}");
        assert_eq!(runner.game().log, vec!["init"]);
    }
}
