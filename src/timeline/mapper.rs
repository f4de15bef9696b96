use crate::foundation::core::FrameIndex;

/// Scroll position reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset in pixels.
    pub offset: f64,
    /// Largest reachable scroll offset in pixels.
    pub max_scroll: f64,
}

impl ScrollMetrics {
    /// Normalized scroll position in `[0, 1]`.
    ///
    /// Before layout settles (`max_scroll <= 0`) the page counts as scrolled to the top.
    pub fn progress(self) -> f64 {
        if !(self.max_scroll.is_finite() && self.max_scroll > 0.0) || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / self.max_scroll).clamp(0.0, 1.0)
    }

    /// Unsnapped frame under the scroll position: `floor(progress * total)`.
    ///
    /// Reaches `total` at the very bottom; used by the preview panel and link hysteresis.
    pub fn raw_frame(self, total_frames: u64) -> FrameIndex {
        FrameIndex((self.progress() * total_frames as f64).floor() as u64)
    }
}

/// Timeline frame for `progress`: the frame counter runs `0..=total-1` and snaps to integers.
pub fn frame_for_progress(progress: f64, total_frames: u64) -> FrameIndex {
    let last = total_frames.saturating_sub(1);
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    FrameIndex((p * last as f64).round() as u64)
}

/// Scroll offset that puts the page at `global_frame`, inverse of [`ScrollMetrics::raw_frame`].
pub fn scroll_offset_for_frame(
    global_frame: f64,
    total_frames: u64,
    max_scroll: f64,
) -> Option<f64> {
    if total_frames == 0 || !global_frame.is_finite() {
        return None;
    }
    Some(global_frame * max_scroll / total_frames as f64)
}

/// Result of a mapping step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FrameStep {
    /// Frame for the current progress.
    pub frame: FrameIndex,
    /// `false` when the frame equals the previous step.
    pub changed: bool,
}

/// Progress-to-frame mapper remembering only the last computed frame.
#[derive(Clone, Debug)]
pub struct ScrollMapper {
    total_frames: u64,
    last: Option<FrameIndex>,
}

impl ScrollMapper {
    /// Mapper over a timeline of `total_frames` frames.
    pub fn new(total_frames: u64) -> Self {
        Self {
            total_frames,
            last: None,
        }
    }

    /// Total frames mapped onto the scroll range.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Last frame produced by [`ScrollMapper::step`].
    pub fn last_frame(&self) -> Option<FrameIndex> {
        self.last
    }

    /// Map `progress` to a frame and record it.
    pub fn step(&mut self, progress: f64) -> FrameStep {
        let frame = frame_for_progress(progress, self.total_frames);
        let changed = self.last != Some(frame);
        self.last = Some(frame);
        FrameStep { frame, changed }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/mapper.rs"]
mod tests;
