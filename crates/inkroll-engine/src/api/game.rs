use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::input::pointer::PointerState;
use crate::input::queue::InputQueue;
#[cfg(feature = "physics")]
use crate::components::entity::Entity;
#[cfg(feature = "physics")]
use crate::core::physics::{BodyDesc, ColliderMaterial, CollisionPair, PhysicsWorld};
#[cfg(feature = "physics")]
use crate::input::drag::DragConstraint;
#[cfg(feature = "physics")]
use crate::input::queue::InputEvent;
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;
#[cfg(feature = "physics")]
use glam::Vec2;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum physics steps run for one rendered frame (default: 10).
    pub max_steps_per_frame: u32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of vector vertices per frame (default: 16384).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Gravity vector. Y points down, so positive Y falls.
    #[cfg(feature = "physics")]
    pub gravity: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            world_width: 800.0,
            world_height: 600.0,
            max_vector_vertices: 16384,
            max_events: 32,
            #[cfg(feature = "physics")]
            gravity: Vec2::new(0.0, 980.0),
        }
    }
}

/// The contract every game fulfils. The runner calls these hooks in a fixed
/// order each frame: `update`, then per physics step `collision_start`, then
/// `before_render`.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply game-specific tuning from JSON. Called by the page before init.
    fn configure(&mut self, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }

    /// Build the initial level.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle this frame's input. Runs once per rendered frame, before physics.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Collision-start pairs reported by one physics step.
    #[cfg(feature = "physics")]
    fn collision_start(&mut self, _ctx: &mut EngineContext, _pairs: &[CollisionPair]) {}

    /// Per-frame hook after physics and before the body draw pass.
    fn before_render(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub events: Vec<GameEvent>,
    pub pointer: PointerState,
    next_id: u32,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
    #[cfg(feature = "physics")]
    pub drag: DragConstraint,
    #[cfg(feature = "physics")]
    collision_events: Vec<CollisionPair>,
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context with gravity, timestep and buffer sizes from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        #[cfg(feature = "physics")]
        let physics = {
            let mut physics = PhysicsWorld::new(config.gravity);
            physics.set_dt(config.fixed_dt);
            physics
        };
        Self {
            scene: Scene::new(),
            events: Vec::with_capacity(config.max_events),
            pointer: PointerState::default(),
            next_id: 1,
            #[cfg(feature = "physics")]
            physics,
            #[cfg(feature = "physics")]
            drag: DragConstraint::default(),
            #[cfg(feature = "physics")]
            collision_events: Vec::new(),
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue a game event for the page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, collisions, vector buffer).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        #[cfg(feature = "physics")]
        self.collision_events.clear();
        #[cfg(feature = "vectors")]
        self.vectors.clear();
    }

    /// Fold this frame's pointer events into the pointer state and resolve
    /// drag grabs. Runs before `Game::update` so the game sees the grab.
    pub fn sample_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            let pressed_at = self.pointer.apply(event);
            #[cfg(feature = "physics")]
            {
                if let Some(at) = pressed_at {
                    self.drag.press(&self.physics, at);
                }
                if matches!(event, InputEvent::PointerUp { .. }) {
                    self.drag.release();
                }
            }
            #[cfg(not(feature = "physics"))]
            let _ = pressed_at;
        }
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body. Returns the EntityId.
    /// The entity's position is set from the BodyDesc.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        let entity = entity.with_pos(desc.position).with_body(body);
        self.scene.spawn(entity);
        id
    }

    /// Despawn an entity, cleaning up its physics body if present.
    /// Returns `false` if no such entity exists.
    #[cfg(feature = "physics")]
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.scene.despawn(id) else {
            return false;
        };
        if let Some(body) = &entity.body {
            self.physics.remove_body(body);
        }
        if self.drag.grabbed() == Some(id) {
            self.drag.release();
        }
        true
    }

    /// Get the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Collision-start pairs from the most recent physics step.
    #[cfg(feature = "physics")]
    pub fn started_collisions(&self) -> Vec<CollisionPair> {
        self.collision_events
            .iter()
            .filter(|c| c.started)
            .copied()
            .collect()
    }

    /// Apply the drag pull, step the simulation once and sync positions back
    /// to entities.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.apply_drag();

        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }

    #[cfg(feature = "physics")]
    fn apply_drag(&mut self) {
        let Some(id) = self.drag.grabbed() else {
            return;
        };
        let Some(body) = self.scene.get(id).and_then(|e| e.body) else {
            self.drag.release();
            return;
        };
        if self.physics.is_static(&body) {
            self.drag.release();
            return;
        }
        let (body_pos, _) = self.physics.body_position(&body);
        let dt = self.physics.dt();
        if let Some(vel) = self.drag.pull_velocity(self.pointer.position, body_pos, dt) {
            self.physics.set_velocity(&body, vel);
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg(feature = "physics")]
mod physics_tests {
    use super::*;
    use crate::core::physics::ColliderDesc;
    use crate::input::queue::InputEvent;

    fn spawn_ball(ctx: &mut EngineContext, at: Vec2) -> EntityId {
        let id = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(id).with_tag("ball"),
            BodyDesc::dynamic(ColliderDesc::Ball { radius: 10.0 }).with_position(at),
            ColliderMaterial::default(),
        )
    }

    #[test]
    fn spawn_with_body_creates_entity_and_physics() {
        let mut ctx = EngineContext::new();
        let id = spawn_ball(&mut ctx, Vec2::new(100.0, 200.0));

        assert_eq!(ctx.scene.len(), 1);
        assert_eq!(ctx.physics.body_count(), 1);
        let entity = ctx.scene.get(id).unwrap();
        assert!(entity.body.is_some());
        assert_eq!(entity.pos, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn despawn_cleans_up_physics() {
        let mut ctx = EngineContext::new();
        let id = spawn_ball(&mut ctx, Vec2::ZERO);

        assert!(ctx.despawn(id));
        assert_eq!(ctx.scene.len(), 0);
        assert_eq!(ctx.physics.body_count(), 0);
        assert!(!ctx.despawn(id));
    }

    #[test]
    fn step_physics_syncs_positions() {
        let mut ctx = EngineContext::new();
        let id = spawn_ball(&mut ctx, Vec2::new(100.0, 0.0));

        for _ in 0..10 {
            ctx.step_physics();
        }

        let entity = ctx.scene.get(id).unwrap();
        assert!(entity.pos.y > 0.0, "Entity should have moved down: y={}", entity.pos.y);
    }

    #[test]
    fn drag_pulls_grabbed_body_toward_pointer() {
        let mut ctx = EngineContext::from_config(&GameConfig {
            gravity: Vec2::ZERO,
            ..GameConfig::default()
        });
        let id = spawn_ball(&mut ctx, Vec2::new(100.0, 100.0));

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 100.0, y: 100.0 });
        input.push(InputEvent::PointerMove { x: 300.0, y: 100.0 });
        ctx.sample_input(&input);
        assert_eq!(ctx.drag.grabbed(), Some(id));

        for _ in 0..30 {
            ctx.step_physics();
        }
        let x = ctx.scene.get(id).unwrap().pos.x;
        assert!(x > 200.0, "ball should follow the pointer: x={}", x);

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerUp { x: 300.0, y: 100.0 });
        ctx.sample_input(&input);
        assert!(!ctx.drag.is_engaged());
    }

    #[test]
    fn despawning_grabbed_body_releases_drag() {
        let mut ctx = EngineContext::new();
        let id = spawn_ball(&mut ctx, Vec2::new(50.0, 50.0));
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 50.0, y: 50.0 });
        ctx.sample_input(&input);
        assert!(ctx.drag.is_engaged());

        ctx.despawn(id);
        assert!(!ctx.drag.is_engaged());
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
