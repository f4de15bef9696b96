use crate::foundation::{
    core::{FrameIndex, FrameRange, SegmentIndex, SegmentPosition},
    error::{ReelError, ReelResult},
};

/// Immutable frame layout of every loaded segment, in concatenation order.
///
/// `prefix` has `len + 1` entries: `prefix[i]` is the first global frame of segment `i` and the
/// last entry is the total frame count.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SegmentTable {
    frames: Vec<u64>,
    prefix: Vec<u64>,
}

impl SegmentTable {
    /// Build the table from per-segment frame counts.
    ///
    /// Rejects an empty list and zero-length segments, so a constructed table always has
    /// `total_frames() > 0`.
    pub fn from_frame_counts(frames: Vec<u64>) -> ReelResult<Self> {
        if frames.is_empty() {
            return Err(ReelError::timeline("segment table needs at least one segment"));
        }
        if let Some(i) = frames.iter().position(|&n| n == 0) {
            return Err(ReelError::timeline(format!(
                "segment {} has zero frames",
                i + 1
            )));
        }

        let mut prefix = Vec::with_capacity(frames.len() + 1);
        let mut acc = 0u64;
        for &n in &frames {
            prefix.push(acc);
            acc = acc
                .checked_add(n)
                .ok_or_else(|| ReelError::timeline("total frame count overflows u64"))?;
        }
        prefix.push(acc);

        Ok(Self { frames, prefix })
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` only for a table with no segments, which construction rejects.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all segment frame counts.
    pub fn total_frames(&self) -> u64 {
        self.prefix[self.frames.len()]
    }

    /// Per-segment frame counts.
    pub fn frame_counts(&self) -> &[u64] {
        &self.frames
    }

    /// Frame count of one segment.
    pub fn frames(&self, segment: SegmentIndex) -> Option<u64> {
        self.frames.get(segment.0).copied()
    }

    /// First global frame of `segment`.
    pub fn start_of(&self, segment: SegmentIndex) -> Option<FrameIndex> {
        if segment.0 >= self.frames.len() {
            return None;
        }
        Some(FrameIndex(self.prefix[segment.0]))
    }

    /// Global span `[start, end)` covered by `segment`.
    pub fn span(&self, segment: SegmentIndex) -> Option<FrameRange> {
        let start = self.start_of(segment)?;
        Some(FrameRange {
            start,
            end: FrameIndex(self.prefix[segment.0 + 1]),
        })
    }

    /// Resolve a global frame onto its owning segment.
    ///
    /// A frame equal to a segment boundary belongs to the following segment. Frames at or past
    /// the total clamp to the final frame of the last segment.
    pub fn resolve(&self, global: FrameIndex) -> SegmentPosition {
        let total = self.total_frames();
        let g = global.0.min(total - 1);
        // First segment whose upper bound is strictly greater than g.
        let idx = self.prefix[1..].partition_point(|&end| end <= g);
        SegmentPosition {
            segment: SegmentIndex(idx),
            local: FrameIndex(g - self.prefix[idx]),
        }
    }

    /// Inverse of [`SegmentTable::resolve`] for integral local frames.
    ///
    /// The local frame is not bounded by the segment length, so a position past the end of its
    /// segment maps onto the following segments.
    pub fn global_frame(&self, position: SegmentPosition) -> Option<FrameIndex> {
        let start = self.start_of(position.segment)?;
        start.0.checked_add(position.local.0).map(FrameIndex)
    }

    /// Global frame for a section declared by markup, as `Number()`-parsed `data-anim` and
    /// `data-start` values.
    ///
    /// Every segment before the 1-based `anim` is summed. An `anim` below 1 or NaN sums nothing,
    /// so the section starts at `local_start` on the global timeline. An `anim` past the last
    /// segment yields NaN, as does a NaN `local_start`.
    pub fn markup_global_frame(&self, anim: f64, local_start: f64) -> f64 {
        let index = anim - 1.0;
        // Segments i with 0 <= i < index.
        let count = if index > 0.0 { index.ceil() } else { 0.0 };
        if count > self.frames.len() as f64 {
            return f64::NAN;
        }
        self.prefix[count as usize] as f64 + local_start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segments.rs"]
mod tests;
