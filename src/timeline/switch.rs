use crate::foundation::core::SegmentIndex;

/// Record of a real segment change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SegmentSwitch {
    /// Segment hidden by the switch.
    pub from: SegmentIndex,
    /// Segment shown by the switch.
    pub to: SegmentIndex,
}

/// Shows exactly one segment at a time.
///
/// Segment 0 starts shown, so the single-active invariant holds before the first scroll.
#[derive(Clone, Debug)]
pub struct ActiveSegmentSwitch {
    current: SegmentIndex,
    shown: Vec<bool>,
    mutations: u64,
}

impl ActiveSegmentSwitch {
    /// Switch over `segment_count` segments (at least one).
    pub fn new(segment_count: usize) -> Self {
        let mut shown = vec![false; segment_count.max(1)];
        shown[0] = true;
        Self {
            current: SegmentIndex(0),
            shown,
            mutations: 0,
        }
    }

    /// Currently shown segment.
    pub fn current(&self) -> SegmentIndex {
        self.current
    }

    /// Visibility flag per segment.
    pub fn shown(&self) -> &[bool] {
        &self.shown
    }

    /// Number of switches that changed visible state.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Show `target` and hide every other segment.
    ///
    /// Returns `None` when `target` is already active or does not exist.
    pub fn switch_to(&mut self, target: SegmentIndex) -> Option<SegmentSwitch> {
        if target == self.current || target.0 >= self.shown.len() {
            return None;
        }
        let from = self.current;
        for (i, flag) in self.shown.iter_mut().enumerate() {
            *flag = i == target.0;
        }
        self.current = target;
        self.mutations += 1;
        tracing::debug!(from = from.0, to = target.0, "segment switch");
        Some(SegmentSwitch { from, to: target })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/switch.rs"]
mod tests;
