//! The narrow world interface game logic is written against.
//!
//! Game state machines only add, remove and freeze bodies; they never touch
//! the physics pipeline directly. `EngineContext` is the real implementation.

use crate::api::game::EngineContext;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::style::BodyStyle;
use crate::core::physics::{BodyDesc, ColliderMaterial};

pub trait BodyWorld {
    /// Create a body, register it under `tag` and return its id.
    fn add_body(
        &mut self,
        tag: &str,
        desc: BodyDesc,
        material: ColliderMaterial,
        style: BodyStyle,
    ) -> EntityId;

    /// Remove a body. Returns `false` if it was not in the world.
    fn remove_body(&mut self, id: EntityId) -> bool;

    /// Make a body permanently immovable. Returns `false` for unknown ids.
    fn set_static(&mut self, id: EntityId) -> bool;

    fn is_static(&self, id: EntityId) -> bool;

    fn contains(&self, id: EntityId) -> bool;
}

impl BodyWorld for EngineContext {
    fn add_body(
        &mut self,
        tag: &str,
        desc: BodyDesc,
        material: ColliderMaterial,
        style: BodyStyle,
    ) -> EntityId {
        let id = self.next_id();
        let entity = Entity::new(id).with_tag(tag).with_style(style);
        self.spawn_with_body(entity, desc, material)
    }

    fn remove_body(&mut self, id: EntityId) -> bool {
        self.despawn(id)
    }

    fn set_static(&mut self, id: EntityId) -> bool {
        let Some(body) = self.scene.get(id).and_then(|e| e.body) else {
            return false;
        };
        self.physics.set_static(&body);
        true
    }

    fn is_static(&self, id: EntityId) -> bool {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.is_static(body))
            .unwrap_or(false)
    }

    fn contains(&self, id: EntityId) -> bool {
        self.scene.contains(id)
    }
}
