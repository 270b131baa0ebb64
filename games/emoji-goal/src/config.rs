//! Level tuning. Every field has a default, so a page may send a partial JSON
//! object (or nothing at all).

use glam::Vec2;
use inkroll_engine::VectorColor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Downward acceleration in world units per second squared.
    pub gravity: f32,
    pub wall_thickness: f32,
    pub emoji: EmojiConfig,
    pub goal: RectConfig,
    pub win_marker: RectConfig,
    pub stroke: StrokeConfig,
    /// Drag coupling strength while the board is idle.
    pub drag_stiffness: f32,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    pub spawn: [f32; 2],
    pub radius: f32,
    pub restitution: f32,
    pub friction: f32,
}

/// Axis-aligned rectangle given by its center and full size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectConfig {
    pub center: [f32; 2],
    pub size: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    /// Strokes with fewer recorded points are discarded.
    pub min_points: usize,
    /// Simplification tolerance; larger gives coarser line bodies.
    pub simplify_tolerance: f32,
}

/// Colours as `#rrggbb` or `#rrggbbaa` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub line: VectorColor,
    pub line_width: f32,
    pub wall: VectorColor,
    pub emoji: VectorColor,
    pub goal_fill: VectorColor,
    pub goal_outline: VectorColor,
    pub goal_outline_width: f32,
    pub win_fill: VectorColor,
    pub win_outline: VectorColor,
    pub win_outline_width: f32,
    pub preview: VectorColor,
    pub preview_width: f32,
    pub background: VectorColor,
    pub background_won: VectorColor,
}

impl RectConfig {
    pub fn center(&self) -> Vec2 {
        Vec2::from(self.center)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::from(self.size)
    }
}

impl EmojiConfig {
    pub fn spawn(&self) -> Vec2 {
        Vec2::from(self.spawn)
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            gravity: 980.0,
            wall_thickness: 20.0,
            emoji: EmojiConfig::default(),
            goal: RectConfig {
                center: [700.0, 500.0],
                size: [80.0, 40.0],
            },
            win_marker: RectConfig {
                center: [400.0, 300.0],
                size: [300.0, 100.0],
            },
            stroke: StrokeConfig::default(),
            drag_stiffness: 0.2,
            palette: Palette::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            line: VectorColor::rgb8(0x2c, 0x3e, 0x50),
            line_width: 5.0,
            wall: VectorColor::rgb8(0x34, 0x49, 0x5e),
            emoji: VectorColor::YELLOW,
            goal_fill: VectorColor::rgba8(0x2e, 0xcc, 0x71, 0xb2),
            goal_outline: VectorColor::rgb8(0x2e, 0xcc, 0x71),
            goal_outline_width: 3.0,
            win_fill: VectorColor::WHITE.with_alpha(0.8),
            win_outline: VectorColor::rgb8(0x27, 0xae, 0x60),
            win_outline_width: 5.0,
            preview: VectorColor::rgb8(0x95, 0xa5, 0xa6),
            preview_width: 4.0,
            background: VectorColor::rgb8(0xf4, 0xf7, 0xf9),
            background_won: VectorColor::rgb8(0xe0, 0xff, 0xe0),
        }
    }
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            spawn: [100.0, 50.0],
            radius: 25.0,
            restitution: 0.6,
            friction: 0.01,
        }
    }
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            min_points: 5,
            simplify_tolerance: 30.0,
        }
    }
}

impl LevelConfig {
    /// Parse a (possibly partial) config and clamp it to workable values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// A line body needs two vertices, so the stroke gate never drops below 2.
    pub fn sanitized(mut self) -> Self {
        self.stroke.min_points = self.stroke.min_points.max(2);
        self.stroke.simplify_tolerance = self.stroke.simplify_tolerance.max(0.0);
        self.drag_stiffness = self.drag_stiffness.clamp(0.0, 1.0);
        self.emoji.radius = self.emoji.radius.max(1.0);
        self.palette.line_width = self.palette.line_width.max(0.0);
        self.palette.preview_width = self.palette.preview_width.max(0.0);
        self.palette.goal_outline_width = self.palette.goal_outline_width.max(0.0);
        self.palette.win_outline_width = self.palette.win_outline_width.max(0.0);
        self
    }
}
