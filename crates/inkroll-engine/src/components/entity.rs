use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::style::BodyStyle;
#[cfg(feature = "physics")]
use crate::core::physics::PhysicsBody;

/// Fat Entity: a single struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by role ("wall", "line", "goal", ...).
    pub tag: String,
    /// Position in world space, synced from physics after each step.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// How the draw pass renders this entity's collider; `None` is invisible.
    pub style: Option<BodyStyle>,
    #[cfg(feature = "physics")]
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            pos: Vec2::ZERO,
            rotation: 0.0,
            style: None,
            #[cfg(feature = "physics")]
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_style(mut self, style: BodyStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[cfg(feature = "physics")]
    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}
