use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Rect},
};

/// Document scroll geometry as seen by the custom scrollbar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Current scroll offset.
    pub scroll_top: f64,
    /// Full document height.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub client_height: f64,
}

impl Viewport {
    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Thumb placement inside the track.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Thumb {
    /// Thumb height in pixels.
    pub height: f64,
    /// Distance of the thumb from the top of the track.
    pub top: f64,
}

impl Thumb {
    /// Thumb rectangle for a track `track_width` pixels wide.
    pub fn rect(&self, track_width: f64) -> Rect {
        Rect::from_origin_size(Point::new(0.0, self.top), (track_width, self.height))
    }
}

/// Custom scrollbar: thumb geometry and drag-to-scroll.
#[derive(Clone, Debug)]
pub struct Scrollbar {
    min_thumb_px: f64,
    drag: Option<Drag>,
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    start_y: f64,
    start_scroll_top: f64,
}

impl Scrollbar {
    /// Scrollbar whose thumb never gets shorter than `min_thumb_px`.
    pub fn new(min_thumb_px: f64) -> Self {
        Self {
            min_thumb_px,
            drag: None,
        }
    }

    /// Whether a drag is in progress (text selection is disabled meanwhile).
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Thumb geometry for the current viewport.
    pub fn thumb(&self, vp: &Viewport) -> Thumb {
        let client = vp.client_height;
        let height = if vp.scroll_height > 0.0 {
            (client / vp.scroll_height * client).max(self.min_thumb_px)
        } else {
            self.min_thumb_px
        };
        let max_scroll = vp.max_scroll();
        let top = if max_scroll > 0.0 {
            vp.scroll_top / max_scroll * (client - height)
        } else {
            0.0
        };
        Thumb { height, top }
    }

    /// Begin a drag at pointer position `y`.
    pub fn start_drag(&mut self, y: f64, vp: &Viewport) {
        self.drag = Some(Drag {
            start_y: y,
            start_scroll_top: vp.scroll_top,
        });
    }

    /// Scroll offset requested by moving the pointer to `y`; `None` when not dragging.
    pub fn drag_to(&self, y: f64, vp: &Viewport, thumb_height: f64) -> Option<f64> {
        let drag = self.drag?;
        let travel = vp.client_height - thumb_height;
        if travel <= 0.0 {
            return Some(drag.start_scroll_top);
        }
        let ratio = vp.max_scroll() / travel;
        Some(drag.start_scroll_top + (y - drag.start_y) * ratio)
    }

    /// End the drag and return the refreshed thumb.
    pub fn stop_drag(&mut self, vp: &Viewport) -> Thumb {
        self.drag = None;
        self.thumb(vp)
    }
}

/// Scale and opacity of the "scroll down" hint; it shrinks away over the first pixels of scroll.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollHint {
    /// Uniform scale.
    pub scale: f64,
    /// Opacity.
    pub opacity: f64,
}

impl ScrollHint {
    /// Hint state after scrolling `scroll_top` pixels of a `fade_px` long fade.
    pub fn at(scroll_top: f64, fade_px: f64) -> Self {
        let t = if fade_px > 0.0 {
            (scroll_top / fade_px).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let v = 1.0 - Ease::Power2Out.apply(t);
        Self {
            scale: v,
            opacity: v,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chrome/scrollbar.rs"]
mod tests;
