use std::{collections::BTreeSet, path::Path};

use anyhow::Context as _;

use crate::{
    chrome::carousel::{ResponsiveImage, Testimonial},
    foundation::error::{ReelError, ReelResult},
    navigation::jump::SectionMarkup,
    overlay::gate::OverlayMarkup,
    preview::panel::PreviewPanel,
};

/// Page description: segment sources, markup declarations and tuning constants.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReelManifest {
    /// Segment sources in concatenation order.
    pub segments: Vec<String>,
    /// Text overlays.
    #[serde(default)]
    pub overlays: Vec<OverlayMarkup>,
    /// Sections reachable from navigation links.
    #[serde(default)]
    pub sections: Vec<SectionMarkup>,
    /// Navigation link hrefs, e.g. `"#about"`.
    #[serde(default)]
    pub links: Vec<String>,
    /// Projects carousel slides.
    #[serde(default)]
    pub projects: Vec<ResponsiveImage>,
    /// Testimonials carousel slides.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    /// Tuning constants.
    #[serde(default)]
    pub tuning: Tuning,
}

/// Constants tied to the animation content. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Frames past a navigation target after which active links are cleared.
    pub nav_hysteresis_frames: u64,
    /// Frame window of the projects preview panel.
    pub preview: PreviewPanel,
    /// Lag between scroll position and applied frame, in seconds.
    pub scrub_secs: f64,
    /// Minimum scrollbar thumb height in pixels.
    pub min_thumb_px: f64,
    /// Duration of the navigation scroll animation.
    pub jump_duration_secs: f64,
    /// Carousel autoplay delay.
    pub autoplay_delay_ms: u64,
    /// Widest viewport that still uses mobile images.
    pub mobile_max_width_px: u32,
    /// Scroll distance over which the scroll hint fades out.
    pub scroll_hint_px: f64,
    /// Testimonial slides per view: minimum viewport width -> slides.
    pub testimonial_breakpoints: Vec<(u32, usize)>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            nav_hysteresis_frames: 500,
            preview: PreviewPanel::default(),
            scrub_secs: 1.0,
            min_thumb_px: 25.0,
            jump_duration_secs: 1.2,
            autoplay_delay_ms: 3000,
            mobile_max_width_px: 768,
            scroll_hint_px: 100.0,
            testimonial_breakpoints: vec![(0, 1), (768, 3)],
        }
    }
}

impl ReelManifest {
    /// Read and validate a manifest JSON file.
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open manifest '{}'", path.display()))?;
        let manifest: Self = serde_json::from_reader(std::io::BufReader::new(f))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Structural checks. Bad numeric markup is tolerated; it only makes elements inert.
    pub fn validate(&self) -> ReelResult<()> {
        if self.segments.is_empty() {
            return Err(ReelError::validation("manifest declares no segments"));
        }
        if let Some(s) = self.segments.iter().find(|s| s.trim().is_empty()) {
            return Err(ReelError::validation(format!(
                "segment source must be non-empty (got {s:?})"
            )));
        }

        let mut ids = BTreeSet::new();
        for id in self
            .overlays
            .iter()
            .map(|o| &o.id)
            .chain(self.sections.iter().map(|s| &s.id))
        {
            if id.trim().is_empty() {
                return Err(ReelError::validation("element ids must be non-empty"));
            }
            if !ids.insert(id.as_str()) {
                return Err(ReelError::validation(format!("duplicate element id '{id}'")));
            }
        }

        for link in &self.links {
            if !link.starts_with('#') {
                return Err(ReelError::validation(format!(
                    "navigation link '{link}' must be a fragment (#id)"
                )));
            }
        }

        let t = &self.tuning;
        if t.preview.start >= t.preview.end {
            return Err(ReelError::validation("preview window start must be < end"));
        }
        if !(t.scrub_secs.is_finite() && t.scrub_secs >= 0.0) {
            return Err(ReelError::validation("scrub_secs must be finite and >= 0"));
        }
        if !(t.jump_duration_secs.is_finite() && t.jump_duration_secs >= 0.0) {
            return Err(ReelError::validation(
                "jump_duration_secs must be finite and >= 0",
            ));
        }
        if !(t.min_thumb_px.is_finite() && t.min_thumb_px >= 0.0) {
            return Err(ReelError::validation("min_thumb_px must be finite and >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/manifest.rs"]
mod tests;
