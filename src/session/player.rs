use crate::foundation::core::{FrameIndex, SegmentIndex, SegmentPosition};

/// Playback collaborator that displays a segment at a local frame.
pub trait SegmentPlayer {
    /// Seek `position.segment` to `position.local` and hold it there.
    fn go_to_and_stop(&mut self, position: SegmentPosition);
}

/// Player that only remembers the last frame requested for each segment.
#[derive(Clone, Debug, Default)]
pub struct StillPlayer {
    frames: Vec<Option<FrameIndex>>,
    seeks: u64,
}

impl StillPlayer {
    /// Player for `segment_count` segments.
    pub fn new(segment_count: usize) -> Self {
        Self {
            frames: vec![None; segment_count],
            seeks: 0,
        }
    }

    /// Last local frame requested for `segment`.
    pub fn frame_of(&self, segment: SegmentIndex) -> Option<FrameIndex> {
        self.frames.get(segment.0).copied().flatten()
    }

    /// Number of seeks received.
    pub fn seeks(&self) -> u64 {
        self.seeks
    }
}

impl SegmentPlayer for StillPlayer {
    fn go_to_and_stop(&mut self, position: SegmentPosition) {
        let i = position.segment.0;
        if i >= self.frames.len() {
            self.frames.resize(i + 1, None);
        }
        self.frames[i] = Some(position.local);
        self.seeks += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
