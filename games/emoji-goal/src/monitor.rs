use inkroll_engine::{CollisionPair, EntityId};

/// Whether any collision-start pair in `pairs` is exactly {emoji, goal}.
/// Ended contacts and unrelated pairs never count.
pub fn emoji_reached_goal(emoji: EntityId, goal: EntityId, pairs: &[CollisionPair]) -> bool {
    pairs.iter().any(|p| p.started && p.involves_both(emoji, goal))
}
