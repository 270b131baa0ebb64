//! Pointer-drag coupling: lets the player grab and fling dynamic bodies.
//!
//! The coupling strength is a plain public field so game code can weaken or
//! disable it every frame. At zero stiffness nothing can be grabbed and any
//! current grab is released on the next step.

use glam::Vec2;

use crate::api::types::EntityId;
use crate::core::physics::PhysicsWorld;

/// Default coupling strength between pointer and grabbed body.
pub const DEFAULT_DRAG_STIFFNESS: f32 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct DragConstraint {
    /// Fraction of the pointer offset closed per step (0 disables dragging).
    pub stiffness: f32,
    grabbed: Option<EntityId>,
}

impl DragConstraint {
    pub fn new(stiffness: f32) -> Self {
        Self {
            stiffness,
            grabbed: None,
        }
    }

    /// The body currently held by the pointer, if any.
    pub fn grabbed(&self) -> Option<EntityId> {
        self.grabbed
    }

    /// Whether a grab is currently engaged.
    pub fn is_engaged(&self) -> bool {
        self.grabbed.is_some()
    }

    /// Try to grab the dynamic body under `at`.
    pub fn press(&mut self, physics: &PhysicsWorld, at: Vec2) {
        if self.stiffness <= 0.0 {
            return;
        }
        self.grabbed = physics.dynamic_body_at(at);
        if let Some(id) = self.grabbed {
            log::debug!("drag: grabbed entity {}", id.0);
        }
    }

    pub fn release(&mut self) {
        self.grabbed = None;
    }

    /// Velocity that moves a body at `body_pos` a `stiffness` fraction of the
    /// way toward `pointer` within one step of length `dt`.
    /// Returns `None` (and drops the grab) when dragging is disabled.
    pub fn pull_velocity(&mut self, pointer: Vec2, body_pos: Vec2, dt: f32) -> Option<Vec2> {
        if self.stiffness <= 0.0 || dt <= 0.0 {
            self.grabbed = None;
            return None;
        }
        self.grabbed?;
        Some((pointer - body_pos) * self.stiffness / dt)
    }
}

impl Default for DragConstraint {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_STIFFNESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial};

    fn world_with_ball() -> PhysicsWorld {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        world.create_body(
            EntityId(4),
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 20.0 })
                .with_position(Vec2::new(100.0, 100.0)),
            ColliderMaterial::default(),
        );
        world
    }

    #[test]
    fn press_grabs_dynamic_body_under_pointer() {
        let world = world_with_ball();
        let mut drag = DragConstraint::default();
        drag.press(&world, Vec2::new(105.0, 95.0));
        assert_eq!(drag.grabbed(), Some(EntityId(4)));
        drag.release();
        assert!(!drag.is_engaged());
    }

    #[test]
    fn press_misses_empty_space() {
        let world = world_with_ball();
        let mut drag = DragConstraint::default();
        drag.press(&world, Vec2::new(400.0, 400.0));
        assert_eq!(drag.grabbed(), None);
    }

    #[test]
    fn zero_stiffness_cannot_grab_and_drops_grabs() {
        let world = world_with_ball();
        let mut drag = DragConstraint::new(0.0);
        drag.press(&world, Vec2::new(100.0, 100.0));
        assert!(!drag.is_engaged());

        drag.stiffness = DEFAULT_DRAG_STIFFNESS;
        drag.press(&world, Vec2::new(100.0, 100.0));
        assert!(drag.is_engaged());
        drag.stiffness = 0.0;
        assert_eq!(drag.pull_velocity(Vec2::ZERO, Vec2::ONE, 1.0 / 60.0), None);
        assert!(!drag.is_engaged());
    }

    #[test]
    fn pull_velocity_scales_with_stiffness() {
        let world = world_with_ball();
        let mut drag = DragConstraint::default();
        drag.press(&world, Vec2::new(100.0, 100.0));
        let v = drag
            .pull_velocity(Vec2::new(200.0, 100.0), Vec2::new(100.0, 100.0), 0.5)
            .unwrap();
        // 100 units * 0.2 / 0.5s
        assert!((v.x - 40.0).abs() < 1e-4);
        assert_eq!(v.y, 0.0);
    }
}
