//! The round state machine: drawing, simulating, won.
//!
//! `GameSession` owns every body that belongs to a round (drawn lines, the
//! emoji, the goal sensor, the win marker) as plain ids and talks to the
//! world only through [`BodyWorld`]. Walls are level furniture and live
//! outside the session.

use glam::Vec2;
use inkroll_engine::{
    BodyDesc, BodyStyle, BodyWorld, ColliderDesc, ColliderMaterial, CollisionPair, EntityId,
};

use crate::config::{LevelConfig, RectConfig};
use crate::line_body::build_line_body;
use crate::monitor::emoji_reached_goal;
use crate::stroke::StrokeRecorder;

pub const TAG_LINE: &str = "line";
pub const TAG_EMOJI: &str = "emoji";
pub const TAG_GOAL: &str = "goal";
pub const TAG_WIN: &str = "win";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for strokes or the start command.
    Idle,
    /// A stroke is being recorded.
    Drawing,
    Simulating,
    Won,
}

impl Phase {
    /// Numeric code reported to the page.
    pub fn code(self) -> f32 {
        match self {
            Phase::Idle => 0.0,
            Phase::Drawing => 1.0,
            Phase::Simulating => 2.0,
            Phase::Won => 3.0,
        }
    }

    pub fn has_started(self) -> bool {
        matches!(self, Phase::Simulating | Phase::Won)
    }
}

/// What happened to a stroke on pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// No stroke was being recorded.
    Ignored,
    /// Fewer points than the gate; carries the recorded count.
    TooShort(usize),
    /// Simplification left fewer than two vertices.
    Degenerate,
    Committed(EntityId),
}

pub struct GameSession {
    config: LevelConfig,
    phase: Phase,
    stroke: StrokeRecorder,
    drawn_lines: Vec<EntityId>,
    emoji: Option<EntityId>,
    goal: Option<EntityId>,
    win_message: Option<EntityId>,
}

impl GameSession {
    pub fn new(config: LevelConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            stroke: StrokeRecorder::new(),
            drawn_lines: Vec::new(),
            emoji: None,
            goal: None,
            win_message: None,
        }
    }

    /// Clear the round and lay out a fresh goal. Safe to call at any time,
    /// including mid-stroke or mid-simulation.
    pub fn setup<W: BodyWorld>(&mut self, world: &mut W) {
        for id in self.drawn_lines.drain(..) {
            world.remove_body(id);
        }
        for slot in [&mut self.emoji, &mut self.goal, &mut self.win_message] {
            if let Some(id) = slot.take() {
                world.remove_body(id);
            }
        }
        self.stroke.abort();

        let palette = &self.config.palette;
        self.goal = Some(world.add_body(
            TAG_GOAL,
            sensor_rect(&self.config.goal),
            ColliderMaterial::default(),
            BodyStyle::filled(palette.goal_fill)
                .with_stroke(palette.goal_outline, palette.goal_outline_width),
        ));
        self.phase = Phase::Idle;
        log::info!("session: ready");
    }

    /// Drop the emoji in. Only valid while idle; returns whether it happened.
    pub fn start<W: BodyWorld>(&mut self, world: &mut W) -> bool {
        if self.phase != Phase::Idle {
            log::trace!("start ignored in {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Simulating;

        if let Some(stale) = self.emoji.take() {
            world.remove_body(stale);
        }
        let emoji = &self.config.emoji;
        let desc = BodyDesc::dynamic(ColliderDesc::Ball {
            radius: emoji.radius,
        })
        .with_position(emoji.spawn())
        .with_ccd(true);
        let material = ColliderMaterial {
            restitution: emoji.restitution,
            friction: emoji.friction,
            ..ColliderMaterial::default()
        };
        self.emoji = Some(world.add_body(
            TAG_EMOJI,
            desc,
            material,
            BodyStyle::filled(self.config.palette.emoji),
        ));
        log::info!("session: simulating");
        true
    }

    /// Freeze the emoji and show the win marker. Happens at most once per round.
    pub fn declare_win<W: BodyWorld>(&mut self, world: &mut W) -> bool {
        if self.phase != Phase::Simulating || self.win_message.is_some() {
            return false;
        }
        let palette = &self.config.palette;
        self.win_message = Some(world.add_body(
            TAG_WIN,
            sensor_rect(&self.config.win_marker),
            ColliderMaterial::default(),
            BodyStyle::filled(palette.win_fill)
                .with_stroke(palette.win_outline, palette.win_outline_width),
        ));
        if let Some(emoji) = self.emoji {
            world.set_static(emoji);
        }
        self.phase = Phase::Won;
        log::info!("session: won");
        true
    }

    /// Begin a stroke unless the round has started or the pointer is busy
    /// dragging a body.
    pub fn pointer_down(&mut self, at: Vec2, drag_engaged: bool) -> bool {
        if self.phase.has_started() || drag_engaged {
            log::trace!("pointer down ignored (phase {:?}, drag {})", self.phase, drag_engaged);
            return false;
        }
        self.stroke.begin(at);
        self.phase = Phase::Drawing;
        true
    }

    pub fn pointer_move(&mut self, at: Vec2) -> bool {
        if self.phase != Phase::Drawing {
            return false;
        }
        self.stroke.extend(at)
    }

    /// Close the current stroke and, if it is long enough, turn it into a
    /// line body.
    pub fn pointer_up<W: BodyWorld>(&mut self, world: &mut W) -> StrokeOutcome {
        let Some(points) = self.stroke.finish() else {
            return StrokeOutcome::Ignored;
        };
        if self.phase == Phase::Drawing {
            self.phase = Phase::Idle;
        }

        let outcome = self.commit(world, &points);
        log::debug!("stroke of {} points: {:?}", points.len(), outcome);
        outcome
    }

    fn commit<W: BodyWorld>(&mut self, world: &mut W, points: &[Vec2]) -> StrokeOutcome {
        if points.len() < self.config.stroke.min_points {
            return StrokeOutcome::TooShort(points.len());
        }
        let Some(line) = build_line_body(points, self.config.stroke.simplify_tolerance) else {
            return StrokeOutcome::Degenerate;
        };
        let id = world.add_body(
            TAG_LINE,
            line.body_desc(),
            ColliderMaterial::default(),
            BodyStyle::outlined(self.config.palette.line, self.config.palette.line_width),
        );
        self.drawn_lines.push(id);
        StrokeOutcome::Committed(id)
    }

    /// Feed one physics step's collision-start pairs. Returns `true` if this
    /// call won the round.
    pub fn collision_start<W: BodyWorld>(&mut self, world: &mut W, pairs: &[CollisionPair]) -> bool {
        let (Some(emoji), Some(goal)) = (self.emoji, self.goal) else {
            return false;
        };
        if self.win_message.is_some() || !emoji_reached_goal(emoji, goal, pairs) {
            return false;
        }
        self.declare_win(world)
    }

    /// Drag coupling for the current phase: only an idle board may be pushed
    /// around.
    pub fn drag_stiffness(&self) -> f32 {
        if self.phase == Phase::Idle {
            self.config.drag_stiffness
        } else {
            0.0
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn is_recording(&self) -> bool {
        self.stroke.is_recording()
    }

    pub fn stroke_points(&self) -> &[Vec2] {
        self.stroke.points()
    }

    pub fn drawn_lines(&self) -> &[EntityId] {
        &self.drawn_lines
    }

    pub fn emoji(&self) -> Option<EntityId> {
        self.emoji
    }

    pub fn goal(&self) -> Option<EntityId> {
        self.goal
    }

    pub fn win_message(&self) -> Option<EntityId> {
        self.win_message
    }
}

fn sensor_rect(rect: &RectConfig) -> BodyDesc {
    let size = rect.size();
    BodyDesc::fixed(ColliderDesc::rect(size.x, size.y))
        .with_position(rect.center())
        .with_sensor(true)
}
