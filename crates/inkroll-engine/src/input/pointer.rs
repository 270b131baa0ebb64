use glam::Vec2;

use super::queue::InputEvent;

/// Last known pointer position and button state, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

impl PointerState {
    /// Fold one input event into the state. Returns the press position when
    /// the event is a pointer-down.
    pub fn apply(&mut self, event: &InputEvent) -> Option<Vec2> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.position = Vec2::new(x, y);
                self.pressed = true;
                Some(self.position)
            }
            InputEvent::PointerMove { x, y } => {
                self.position = Vec2::new(x, y);
                None
            }
            InputEvent::PointerUp { x, y } => {
                self.position = Vec2::new(x, y);
                self.pressed = false;
                None
            }
            InputEvent::Custom { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_position_and_button() {
        let mut p = PointerState::default();
        assert_eq!(p.apply(&InputEvent::PointerDown { x: 1.0, y: 2.0 }), Some(Vec2::new(1.0, 2.0)));
        assert!(p.pressed);
        assert_eq!(p.apply(&InputEvent::PointerMove { x: 3.0, y: 4.0 }), None);
        assert_eq!(p.position, Vec2::new(3.0, 4.0));
        p.apply(&InputEvent::PointerUp { x: 5.0, y: 6.0 });
        assert!(!p.pressed);
        assert_eq!(p.position, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn custom_events_leave_pointer_alone() {
        let mut p = PointerState::default();
        p.apply(&InputEvent::PointerDown { x: 1.0, y: 1.0 });
        p.apply(&InputEvent::command(1));
        assert!(p.pressed);
        assert_eq!(p.position, Vec2::ONE);
    }
}
