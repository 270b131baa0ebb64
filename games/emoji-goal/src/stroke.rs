//! Freehand stroke capture. Holds at most one in-progress stroke.

use glam::Vec2;

#[derive(Debug, Default)]
pub struct StrokeRecorder {
    points: Vec<Vec2>,
    recording: bool,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `at`, discarding anything left over.
    pub fn begin(&mut self, at: Vec2) {
        self.points.clear();
        self.points.push(at);
        self.recording = true;
    }

    /// Append a point. Duplicates are kept. Returns `false` when not recording.
    pub fn extend(&mut self, at: Vec2) -> bool {
        if !self.recording {
            return false;
        }
        self.points.push(at);
        true
    }

    /// Stop recording and hand over the points, leaving the buffer empty.
    /// `None` if no stroke was in progress.
    pub fn finish(&mut self) -> Option<Vec<Vec2>> {
        if !self.recording {
            return None;
        }
        self.recording = false;
        Some(std::mem::take(&mut self.points))
    }

    /// Drop the in-progress stroke, if any.
    pub fn abort(&mut self) {
        self.recording = false;
        self.points.clear();
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}
