use std::collections::BTreeMap;

/// Project screenshot with separate mobile and desktop renditions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResponsiveImage {
    /// Image used up to the mobile breakpoint.
    pub mobile: String,
    /// Image used above the mobile breakpoint.
    pub desktop: String,
}

impl ResponsiveImage {
    /// Source for a viewport `width` pixels wide; `mobile_max_width` is inclusive.
    pub fn source_for(&self, width: u32, mobile_max_width: u32) -> &str {
        if width <= mobile_max_width {
            &self.mobile
        } else {
            &self.desktop
        }
    }
}

/// Client feedback shown in the testimonials carousel.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Testimonial {
    /// Client name.
    pub name: String,
    /// Feedback text.
    pub text: String,
}

/// Looped, autoplaying slide carousel.
///
/// Manual navigation keeps autoplay running and restarts its countdown.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay_delay_ms: u64,
    since_advance_ms: u64,
    breakpoints: BTreeMap<u32, usize>,
}

impl Carousel {
    /// Carousel of `len` slides, showing one slide per view at every width.
    pub fn new(len: usize, autoplay_delay_ms: u64) -> Self {
        Self {
            len,
            index: 0,
            autoplay_delay_ms,
            since_advance_ms: 0,
            breakpoints: BTreeMap::from([(0, 1)]),
        }
    }

    /// Replace breakpoints: minimum viewport width -> slides per view.
    pub fn with_breakpoints(mut self, breakpoints: impl IntoIterator<Item = (u32, usize)>) -> Self {
        self.breakpoints = breakpoints.into_iter().collect();
        self
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for a carousel without slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Slides per view for a viewport `width` pixels wide (largest breakpoint not above it).
    pub fn slides_per_view(&self, width: u32) -> usize {
        self.breakpoints
            .range(..=width)
            .next_back()
            .map(|(_, n)| *n)
            .unwrap_or(1)
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    /// Go back one slide, wrapping past the start.
    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    /// Advance the autoplay clock by `dt_ms`; returns the new index for each autoplay advance.
    pub fn tick(&mut self, dt_ms: u64) -> Option<usize> {
        if self.len < 2 || self.autoplay_delay_ms == 0 {
            return None;
        }
        self.since_advance_ms += dt_ms;
        let mut advanced = None;
        while self.since_advance_ms >= self.autoplay_delay_ms {
            self.since_advance_ms -= self.autoplay_delay_ms;
            self.index = (self.index + 1) % self.len;
            advanced = Some(self.index);
        }
        advanced
    }

    fn step(&mut self, delta: isize) -> usize {
        if self.len == 0 {
            return 0;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
        self.since_advance_ms = 0;
        self.index
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chrome/carousel.rs"]
mod tests;
