//! Body draw pass: renders every styled entity from its live collider.
//!
//! Runs once per frame after the game's frame hook, so positions always match
//! the last physics step.

use glam::Vec2;

use crate::components::style::BodyStyle;
use crate::core::physics::{ColliderDesc, PhysicsWorld};
use crate::core::scene::Scene;
use crate::systems::vector::VectorState;

/// Draw all entities that carry both a body and a style.
pub fn draw_bodies(scene: &Scene, physics: &PhysicsWorld, vectors: &mut VectorState) {
    for entity in scene.iter() {
        let (Some(style), Some(body)) = (entity.style, entity.body.as_ref()) else {
            continue;
        };
        let Some(shape) = physics.collider_shape(body) else {
            continue;
        };
        let (pos, rot) = physics.body_position(body);
        draw_shape(vectors, pos, rot, &shape, style);
    }
}

fn draw_shape(vectors: &mut VectorState, pos: Vec2, rot: f32, shape: &ColliderDesc, style: BodyStyle) {
    if let ColliderDesc::Ball { radius } = *shape {
        if let Some(fill) = style.fill {
            vectors.fill_circle(pos, radius, fill);
        }
        if let Some((color, width)) = style.stroke {
            vectors.stroke_circle(pos, radius, width, color);
        }
        return;
    }

    let outline = collider_outline(pos, rot, shape);
    if let Some(fill) = style.fill {
        vectors.fill_polygon(&outline, fill);
    }
    if let Some((color, width)) = style.stroke {
        vectors.stroke_polygon(&outline, width, color);
    }
}

/// World-space outline of a cuboid or polygon collider. Empty for balls.
pub fn collider_outline(pos: Vec2, rot: f32, shape: &ColliderDesc) -> Vec<Vec2> {
    let rotation = Vec2::from_angle(rot);
    let place = |local: Vec2| pos + rotation.rotate(local);
    match shape {
        ColliderDesc::Ball { .. } => Vec::new(),
        ColliderDesc::Cuboid { half_width, half_height } => [
            Vec2::new(-half_width, -half_height),
            Vec2::new(*half_width, -half_height),
            Vec2::new(*half_width, *half_height),
            Vec2::new(-half_width, *half_height),
        ]
        .into_iter()
        .map(place)
        .collect(),
        ColliderDesc::Polygon { ring } => ring.iter().copied().map(place).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::Entity;
    use crate::components::style::VectorColor;
    use crate::core::physics::{BodyDesc, ColliderMaterial};

    #[test]
    fn cuboid_outline_is_placed_and_rotated() {
        let outline = collider_outline(
            Vec2::new(100.0, 100.0),
            std::f32::consts::FRAC_PI_2,
            &ColliderDesc::rect(20.0, 10.0),
        );
        assert_eq!(outline.len(), 4);
        // (-10, -5) rotated by 90° is (5, -10).
        assert!((outline[0] - Vec2::new(105.0, 90.0)).length() < 1e-3, "{:?}", outline[0]);
    }

    #[test]
    fn polygon_outline_offsets_by_anchor() {
        let ring = vec![Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0)];
        let outline = collider_outline(Vec2::new(50.0, 50.0), 0.0, &ColliderDesc::Polygon { ring });
        assert_eq!(outline, vec![Vec2::new(40.0, 50.0), Vec2::new(60.0, 50.0)]);
    }

    #[test]
    fn only_styled_bodies_are_drawn() {
        let mut scene = Scene::new();
        let mut physics = PhysicsWorld::new(Vec2::ZERO);
        let mut vectors = VectorState::new();

        let hidden = physics.create_body(
            EntityId(1),
            &BodyDesc::fixed(ColliderDesc::rect(40.0, 40.0)),
            ColliderMaterial::default(),
        );
        scene.spawn(Entity::new(EntityId(1)).with_body(hidden));
        draw_bodies(&scene, &physics, &mut vectors);
        assert_eq!(vectors.vertex_count(), 0);

        let shown = physics.create_body(
            EntityId(2),
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 25.0 }),
            ColliderMaterial::default(),
        );
        scene.spawn(
            Entity::new(EntityId(2))
                .with_body(shown)
                .with_style(BodyStyle::filled(VectorColor::YELLOW)),
        );
        draw_bodies(&scene, &physics, &mut vectors);
        assert!(vectors.vertex_count() > 0);
    }
}
