use crate::{
    chrome::{
        carousel::{Carousel, ResponsiveImage},
        scrollbar::{ScrollHint, Scrollbar, Thumb, Viewport},
    },
    config::manifest::ReelManifest,
    foundation::{
        core::{FrameIndex, SegmentPosition},
        error::ReelResult,
    },
    navigation::jump::{JumpCompletion, JumpPlan, Navigator},
    overlay::gate::{OverlayState, VisibilityGate},
    preview::panel::{PreviewPanel, PreviewPose},
    session::player::SegmentPlayer,
    timeline::{
        mapper::{ScrollMapper, ScrollMetrics},
        scrub::Scrub,
        segments::SegmentTable,
        switch::{ActiveSegmentSwitch, SegmentSwitch},
    },
};

/// Outcome of mapping one progress value onto the segments.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameUpdate {
    /// Progress that was applied.
    pub progress: f64,
    /// Global timeline frame.
    pub global: FrameIndex,
    /// Owning segment and local frame.
    pub position: SegmentPosition,
    /// `false` when the global frame equals the previous update.
    pub frame_changed: bool,
    /// Segment switch performed by this update, if any.
    pub switched: Option<SegmentSwitch>,
    /// States of the overlays belonging to the active segment.
    pub overlays: Vec<OverlayState>,
}

/// Everything that follows from one scroll (or resize) event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScrollUpdate {
    /// Raw scroll progress.
    pub metrics: ScrollMetrics,
    /// Unsnapped frame under the scroll position.
    pub raw_frame: FrameIndex,
    /// Projects preview pose.
    pub preview: PreviewPose,
    /// Scroll hint pose.
    pub hint: ScrollHint,
    /// Scrollbar thumb.
    pub thumb: Thumb,
    /// `true` when active navigation links were cleared.
    pub links_cleared: bool,
    /// Frame update, present when scrubbing is disabled.
    pub frame: Option<FrameUpdate>,
}

/// Result of advancing time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TickUpdate {
    /// Frame update while the scrub is catching up.
    pub frame: Option<FrameUpdate>,
    /// New projects slide after an autoplay advance.
    pub projects_slide: Option<usize>,
    /// New testimonials slide after an autoplay advance.
    pub testimonials_slide: Option<usize>,
}

/// Scroll-driven page state, created once every segment has loaded.
///
/// `on_scroll` is the single entry point for scroll and resize events; `tick` advances the
/// scrub and the carousels.
pub struct ScrollSession {
    table: SegmentTable,
    mapper: ScrollMapper,
    scrub: Scrub,
    switch: ActiveSegmentSwitch,
    gate: VisibilityGate,
    navigator: Navigator,
    preview: PreviewPanel,
    scrollbar: Scrollbar,
    hint_px: f64,
    projects: Carousel,
    project_images: Vec<ResponsiveImage>,
    mobile_max_width_px: u32,
    testimonials: Carousel,
    player: Box<dyn SegmentPlayer>,
    last_viewport: Option<Viewport>,
}

impl std::fmt::Debug for ScrollSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSession")
            .field("total_frames", &self.table.total_frames())
            .field("current_segment", &self.switch.current())
            .field("last_frame", &self.mapper.last_frame())
            .finish_non_exhaustive()
    }
}

impl ScrollSession {
    /// Wire a validated manifest to the loaded segment table.
    pub fn new(
        manifest: &ReelManifest,
        table: SegmentTable,
        player: Box<dyn SegmentPlayer>,
    ) -> ReelResult<Self> {
        manifest.validate()?;
        let t = &manifest.tuning;

        let gate = VisibilityGate::from_markup(&manifest.overlays);
        for o in gate.overlays() {
            if let Some(seg) = o.segment
                && seg.0 >= table.len()
            {
                tracing::warn!(
                    id = %o.id,
                    segment = seg.to_markup(),
                    "overlay names a segment that is not loaded"
                );
            }
        }

        Ok(Self {
            mapper: ScrollMapper::new(table.total_frames()),
            scrub: Scrub::new(t.scrub_secs),
            switch: ActiveSegmentSwitch::new(table.len()),
            gate,
            navigator: Navigator::new(
                &manifest.sections,
                manifest.links.clone(),
                t.nav_hysteresis_frames,
                t.jump_duration_secs,
            ),
            preview: t.preview,
            scrollbar: Scrollbar::new(t.min_thumb_px),
            hint_px: t.scroll_hint_px,
            projects: Carousel::new(manifest.projects.len(), t.autoplay_delay_ms),
            project_images: manifest.projects.clone(),
            mobile_max_width_px: t.mobile_max_width_px,
            testimonials: Carousel::new(manifest.testimonials.len(), t.autoplay_delay_ms)
                .with_breakpoints(t.testimonial_breakpoints.iter().copied()),
            player,
            table,
            last_viewport: None,
        })
    }

    /// Segment frame layout.
    pub fn table(&self) -> &SegmentTable {
        &self.table
    }

    /// Active-segment state.
    pub fn switch(&self) -> &ActiveSegmentSwitch {
        &self.switch
    }

    /// Overlay state.
    pub fn gate(&self) -> &VisibilityGate {
        &self.gate
    }

    /// Navigation state.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Mutable navigation state (menu toggle).
    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Custom scrollbar, for drag handling.
    pub fn scrollbar_mut(&mut self) -> &mut Scrollbar {
        &mut self.scrollbar
    }

    /// Projects carousel.
    pub fn projects_mut(&mut self) -> &mut Carousel {
        &mut self.projects
    }

    /// Image source of every project slide for a viewport `viewport_width` pixels wide.
    pub fn project_sources(&self, viewport_width: u32) -> Vec<&str> {
        self.project_images
            .iter()
            .map(|img| img.source_for(viewport_width, self.mobile_max_width_px))
            .collect()
    }

    /// Testimonials carousel.
    pub fn testimonials_mut(&mut self) -> &mut Carousel {
        &mut self.testimonials
    }

    /// Handle a scroll or layout-affecting resize.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_scroll(&mut self, viewport: &Viewport) -> ScrollUpdate {
        self.last_viewport = Some(*viewport);
        let metrics = ScrollMetrics {
            offset: viewport.scroll_top,
            max_scroll: viewport.max_scroll(),
        };
        let raw_frame = metrics.raw_frame(self.table.total_frames());
        let links_cleared = self.navigator.on_scroll(raw_frame);
        let frame = self
            .scrub
            .set_target(metrics.progress())
            .map(|p| self.apply_progress(p));

        ScrollUpdate {
            metrics,
            raw_frame,
            preview: self.preview.pose(raw_frame),
            hint: ScrollHint::at(viewport.scroll_top, self.hint_px),
            thumb: self.scrollbar.thumb(viewport),
            links_cleared,
            frame,
        }
    }

    /// Advance scrub smoothing and carousel autoplay by `dt_secs`.
    pub fn tick(&mut self, dt_secs: f64) -> TickUpdate {
        let frame = self.scrub.tick(dt_secs).map(|p| self.apply_progress(p));
        let dt_ms = (dt_secs.max(0.0) * 1000.0).round() as u64;
        TickUpdate {
            frame,
            projects_slide: self.projects.tick(dt_ms),
            testimonials_slide: self.testimonials.tick(dt_ms),
        }
    }

    /// Apply `progress` immediately, bypassing the scrub.
    pub fn seek(&mut self, progress: f64) -> FrameUpdate {
        self.scrub.snap(progress);
        self.apply_progress(progress)
    }

    /// Plan a navigation jump against the last seen viewport.
    pub fn plan_jump(&mut self, href: &str) -> Option<JumpPlan> {
        let max_scroll = self.last_viewport.map(|v| v.max_scroll()).unwrap_or(0.0);
        self.navigator.plan_jump(href, &self.table, max_scroll)
    }

    /// Mark a landed jump.
    pub fn complete_jump(&mut self, plan: &JumpPlan) -> JumpCompletion {
        self.navigator.complete_jump(plan)
    }

    fn apply_progress(&mut self, progress: f64) -> FrameUpdate {
        let step = self.mapper.step(progress);
        let position = self.table.resolve(step.frame);
        let switched = self.switch.switch_to(position.segment);
        self.player.go_to_and_stop(position);
        let overlays = self.gate.apply(position.segment, position.local);
        FrameUpdate {
            progress,
            global: step.frame,
            position,
            frame_changed: step.changed,
            switched,
            overlays,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scroll_session.rs"]
mod tests;
