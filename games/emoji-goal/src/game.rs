//! Emoji goal: draw lines, drop the emoji, roll it into the goal.

use glam::Vec2;
use inkroll_engine::{
    BodyDesc, BodyStyle, BodyWorld, ColliderDesc, ColliderMaterial, CollisionPair, EngineContext,
    Game, GameConfig, GameEvent, InputEvent, InputQueue,
};

use crate::config::LevelConfig;
use crate::frame::frame_hook;
use crate::session::{GameSession, Phase, StrokeOutcome};

pub const TAG_WALL: &str = "wall";

/// Custom event kinds from the page UI
pub mod events {
    pub const START: u32 = 1;
    pub const RESET: u32 = 2;
}

/// Game event kinds sent to the page
pub mod game_events {
    /// a = phase code (0 idle, 1 drawing, 2 simulating, 3 won)
    pub const PHASE: f32 = 1.0;
    /// a = 1 when the start button should be enabled, else 0
    pub const START_ENABLED: f32 = 2.0;
    /// a, b, c = background rgb in 0..1
    pub const BACKGROUND: f32 = 3.0;
}

pub struct EmojiGoal {
    session: GameSession,
    /// Last phase sent to the page; `None` forces a report.
    reported: Option<Phase>,
}

impl EmojiGoal {
    pub fn new() -> Self {
        Self::with_level(LevelConfig::default())
    }

    pub fn with_level(level: LevelConfig) -> Self {
        Self {
            session: GameSession::new(level),
            reported: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Four static walls hugging the outside of the visible area.
    fn spawn_walls(&self, ctx: &mut EngineContext) {
        let level = self.session.config();
        let (w, h, t) = (level.world_width, level.world_height, level.wall_thickness);
        let walls = [
            (Vec2::new(w / 2.0, -t / 2.0), Vec2::new(w, t)),
            (Vec2::new(w / 2.0, h + t / 2.0), Vec2::new(w, t)),
            (Vec2::new(-t / 2.0, h / 2.0), Vec2::new(t, h)),
            (Vec2::new(w + t / 2.0, h / 2.0), Vec2::new(t, h)),
        ];
        for (center, size) in walls {
            ctx.add_body(
                TAG_WALL,
                BodyDesc::fixed(ColliderDesc::rect(size.x, size.y)).with_position(center),
                ColliderMaterial::default(),
                BodyStyle::filled(level.palette.wall),
            );
        }
    }

    fn handle(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::Custom { kind: events::START, .. } => {
                self.session.start(ctx);
            }
            InputEvent::Custom { kind: events::RESET, .. } => {
                self.session.setup(ctx);
                self.reported = None;
            }
            InputEvent::Custom { kind, .. } => log::trace!("unknown command {}", kind),
            InputEvent::PointerDown { x, y } => {
                self.session.pointer_down(Vec2::new(x, y), ctx.drag.is_engaged());
            }
            InputEvent::PointerMove { x, y } => {
                self.session.pointer_move(Vec2::new(x, y));
            }
            InputEvent::PointerUp { .. } => {
                if let StrokeOutcome::Committed(id) = self.session.pointer_up(ctx) {
                    log::info!("line {} added ({} on board)", id.0, self.session.drawn_lines().len());
                }
            }
        }
    }

    /// Tell the page about a phase change: phase code, start button state and
    /// background colour.
    fn report_phase(&mut self, ctx: &mut EngineContext) {
        let phase = self.session.phase();
        if self.reported == Some(phase) {
            return;
        }
        self.reported = Some(phase);

        let palette = &self.session.config().palette;
        let background = if phase == Phase::Won {
            palette.background_won
        } else {
            palette.background
        };
        let start_enabled = if phase.has_started() { 0.0 } else { 1.0 };
        ctx.emit_event(GameEvent::new(game_events::PHASE, phase.code(), 0.0, 0.0));
        ctx.emit_event(GameEvent::new(game_events::START_ENABLED, start_enabled, 0.0, 0.0));
        ctx.emit_event(GameEvent::new(
            game_events::BACKGROUND,
            background.r,
            background.g,
            background.b,
        ));
    }
}

impl Default for EmojiGoal {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for EmojiGoal {
    fn config(&self) -> GameConfig {
        let level = self.session.config();
        GameConfig {
            world_width: level.world_width,
            world_height: level.world_height,
            gravity: Vec2::new(0.0, level.gravity),
            ..GameConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let level = LevelConfig::from_json(json)?;
        *self = Self::with_level(level);
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.spawn_walls(ctx);
        self.session.setup(ctx);
        // Events emitted here would be cleared by the first tick.
        self.reported = None;
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle(ctx, event);
        }
        self.report_phase(ctx);
    }

    fn collision_start(&mut self, ctx: &mut EngineContext, pairs: &[CollisionPair]) {
        if self.session.collision_start(ctx, pairs) {
            self.report_phase(ctx);
        }
    }

    fn before_render(&mut self, ctx: &mut EngineContext) {
        frame_hook(&self.session, &mut ctx.drag, &mut ctx.vectors);
    }
}
