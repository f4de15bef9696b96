use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Point, Rect};

/// Frame index on the global timeline, or relative to a segment start.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct FrameIndex(pub u64);

/// Zero-based position of a segment in concatenation order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct SegmentIndex(pub usize);

impl SegmentIndex {
    /// Parse the 1-based `data-anim` attribute used by overlay markup.
    ///
    /// Matching is literal: only the canonical decimal form (`"3"`, not `"03"`, `" 3"` or `"+3"`)
    /// names a segment. Anything else, `"0"` included, returns `None` and never matches.
    pub fn from_markup(attr: &str) -> Option<Self> {
        let canonical = !attr.starts_with('0') && attr.bytes().all(|b| b.is_ascii_digit());
        if !canonical {
            return None;
        }
        let n: usize = attr.parse().ok()?;
        n.checked_sub(1).map(Self)
    }

    /// 1-based value as written in page markup.
    pub fn to_markup(self) -> usize {
        self.0 + 1
    }
}

/// Half-open frame span `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the span.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ReelResult<Self> {
        if start.0 > end.0 {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the span covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Membership test (`start <= f < end`).
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp `f` into the span; empty spans clamp to `start`.
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }
}

/// A global frame resolved onto its owning segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SegmentPosition {
    /// Owning segment.
    pub segment: SegmentIndex,
    /// Frame relative to the segment start.
    pub local: FrameIndex,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
