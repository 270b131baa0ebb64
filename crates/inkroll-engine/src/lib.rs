pub mod api;
pub mod components;
pub mod core;
pub mod geometry;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::style::{BodyStyle, VectorColor};
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use geometry::{perpendicular_distance, simplify_rdp};
pub use input::pointer::PointerState;
pub use input::queue::{InputEvent, InputQueue};

#[cfg(feature = "physics")]
pub use api::world::BodyWorld;
#[cfg(feature = "physics")]
pub use crate::core::physics::{
    BodyDesc, BodyType, ColliderDesc, ColliderMaterial, CollisionPair, PhysicsBody, PhysicsWorld,
};
#[cfg(feature = "physics")]
pub use input::drag::{DragConstraint, DEFAULT_DRAG_STIFFNESS};

#[cfg(feature = "vectors")]
pub use geometry::{path_to_vertices, polyline_path};
#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex};

#[cfg(all(feature = "physics", feature = "vectors"))]
pub use systems::draw::draw_bodies;
