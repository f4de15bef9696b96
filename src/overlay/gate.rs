use crate::foundation::{
    core::{FrameIndex, SegmentIndex},
    math::parse_leading_f64,
};

/// Overlay declaration as written in page markup (`data-anim`, `data-start`, `data-end`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OverlayMarkup {
    /// Element id, used to report state changes.
    pub id: String,
    /// 1-based segment number.
    pub anim: String,
    /// First local frame on which the overlay is shown.
    pub start: String,
    /// Last local frame on which the overlay is shown.
    pub end: String,
}

/// Text overlay bound to a local frame range of one segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextOverlay {
    /// Element id.
    pub id: String,
    /// Owning segment; `None` when markup names no valid segment.
    pub segment: Option<SegmentIndex>,
    /// Inclusive lower bound; NaN when unparseable.
    pub start: f64,
    /// Inclusive upper bound; NaN when unparseable.
    pub end: f64,
    /// Last applied visibility.
    pub visible: bool,
}

impl TextOverlay {
    /// Parse markup attributes. Bad values never fail; they make the overlay unreachable.
    pub fn from_markup(m: &OverlayMarkup) -> Self {
        let segment = SegmentIndex::from_markup(&m.anim);
        let start = parse_leading_f64(&m.start);
        let end = parse_leading_f64(&m.end);
        if segment.is_none() || start.is_nan() || end.is_nan() {
            tracing::debug!(
                id = %m.id,
                anim = %m.anim,
                start = %m.start,
                end = %m.end,
                "overlay markup will never show"
            );
        }
        Self {
            id: m.id.clone(),
            segment,
            start,
            end,
            visible: false,
        }
    }

    /// Inclusive range test; NaN bounds compare false.
    pub fn covers(&self, local: FrameIndex) -> bool {
        let f = local.0 as f64;
        f >= self.start && f <= self.end
    }
}

/// Applied visual state of one overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayState {
    /// Element id.
    pub id: String,
    /// Visibility after this update.
    pub visible: bool,
    /// Target opacity (1 shown, 0 hidden).
    pub opacity: f64,
    /// Whether the overlay accepts pointer interaction.
    pub interactive: bool,
    /// `true` when visibility differs from the previous update.
    pub changed: bool,
}

/// Decides which text overlays are visible for the current segment and local frame.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGate {
    overlays: Vec<TextOverlay>,
}

impl VisibilityGate {
    /// Gate over already parsed overlays.
    pub fn new(overlays: Vec<TextOverlay>) -> Self {
        Self { overlays }
    }

    /// Gate over raw markup declarations.
    pub fn from_markup(markup: &[OverlayMarkup]) -> Self {
        Self::new(markup.iter().map(TextOverlay::from_markup).collect())
    }

    /// All overlays with their last applied visibility.
    pub fn overlays(&self) -> &[TextOverlay] {
        &self.overlays
    }

    /// Ids of overlays currently visible.
    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.overlays
            .iter()
            .filter(|o| o.visible)
            .map(|o| o.id.as_str())
    }

    /// Re-evaluate every overlay tagged with `segment` against `local`.
    ///
    /// Overlays of other segments keep their state. Reapplying the same inputs yields the same
    /// states with `changed == false`.
    pub fn apply(&mut self, segment: SegmentIndex, local: FrameIndex) -> Vec<OverlayState> {
        self.overlays
            .iter_mut()
            .filter(|o| o.segment == Some(segment))
            .map(|o| {
                let visible = o.covers(local);
                let changed = visible != o.visible;
                o.visible = visible;
                OverlayState {
                    id: o.id.clone(),
                    visible,
                    opacity: if visible { 1.0 } else { 0.0 },
                    interactive: visible,
                    changed,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/gate.rs"]
mod tests;
