//! Per-frame hook: keeps the drag coupling in step with the phase and draws
//! the stroke that is still being recorded.

use inkroll_engine::{DragConstraint, VectorState};

use crate::session::GameSession;

pub fn frame_hook(session: &GameSession, drag: &mut DragConstraint, vectors: &mut VectorState) {
    drag.stiffness = session.drag_stiffness();

    let points = session.stroke_points();
    if session.is_recording() && points.len() >= 2 {
        let palette = &session.config().palette;
        vectors.stroke_polyline(points, palette.preview_width, palette.preview);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelConfig;
    use glam::Vec2;
    use inkroll_engine::EngineContext;

    fn setup() -> (EngineContext, GameSession) {
        let mut ctx = EngineContext::new();
        let mut session = GameSession::new(LevelConfig::default());
        session.setup(&mut ctx);
        (ctx, session)
    }

    #[test]
    fn stiffness_follows_phase() {
        let (mut ctx, mut session) = setup();
        let mut drag = DragConstraint::new(0.0);
        let mut vectors = VectorState::new();

        frame_hook(&session, &mut drag, &mut vectors);
        assert_eq!(drag.stiffness, 0.2);

        session.start(&mut ctx);
        frame_hook(&session, &mut drag, &mut vectors);
        assert_eq!(drag.stiffness, 0.0);

        session.setup(&mut ctx);
        frame_hook(&session, &mut drag, &mut vectors);
        assert_eq!(drag.stiffness, 0.2);
    }

    #[test]
    fn preview_needs_two_points() {
        let (_ctx, mut session) = setup();
        let mut drag = DragConstraint::default();
        let mut vectors = VectorState::new();

        session.pointer_down(Vec2::new(10.0, 10.0), false);
        frame_hook(&session, &mut drag, &mut vectors);
        assert_eq!(vectors.vertex_count(), 0);
        assert_eq!(drag.stiffness, 0.0, "no dragging while a stroke is open");

        session.pointer_move(Vec2::new(60.0, 40.0));
        frame_hook(&session, &mut drag, &mut vectors);
        assert!(vectors.vertex_count() > 0);
        let c = vectors.vertices()[0];
        assert!((c.r - 0x95 as f32 / 255.0).abs() < 1e-6);
    }
}
