use crate::{
    animation::{ease::Ease, tween::Tween},
    loader::preload::LoadProgress,
};

/// Stage of the page reveal that follows segment loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Segments are loading; scrolling is locked.
    Loading,
    /// Loader screen fades out.
    LoaderFading,
    /// Pause between removing the loader and fading the overlay.
    OverlayDelay,
    /// Overlay fades out.
    OverlayFading,
    /// Scrolling is unlocked and the scroll mapping runs.
    Ready,
}

/// Visual state of the loader and overlay at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealState {
    /// Current phase.
    pub phase: RevealPhase,
    /// Loading percentage as displayed (rounded).
    pub percent: u32,
    /// Loader screen opacity.
    pub loader_opacity: f64,
    /// Whether the loader element still exists.
    pub loader_present: bool,
    /// Overlay opacity.
    pub overlay_opacity: f64,
    /// Whether page scrolling is locked.
    pub scroll_locked: bool,
}

/// Loader percentage and the fade sequence that hands the page over to scrolling.
#[derive(Clone, Debug)]
pub struct Reveal {
    phase: RevealPhase,
    percent: Tween,
    fade: Tween,
    delay_left_secs: f64,
}

impl Reveal {
    /// Percentage counter catch-up duration.
    pub const PERCENT_SECS: f64 = 0.5;
    /// Duration of each fade.
    pub const FADE_SECS: f64 = 1.0;
    /// Pause between loader removal and overlay fade.
    pub const OVERLAY_DELAY_SECS: f64 = 1.0;

    /// Fresh reveal in the loading phase at 0%.
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::Loading,
            percent: Tween::new(0.0, 0.0, 0.0, Ease::Power1Out),
            fade: Tween::new(1.0, 1.0, 0.0, Ease::Power1Out),
            delay_left_secs: 0.0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Retarget the displayed percentage.
    pub fn on_progress(&mut self, progress: LoadProgress) {
        let from = self.percent.value();
        self.percent = Tween::new(from, progress.percent(), Self::PERCENT_SECS, Ease::Power1Out);
    }

    /// Every segment has loaded: start fading the loader.
    pub fn all_loaded(&mut self) {
        if self.phase != RevealPhase::Loading {
            return;
        }
        self.phase = RevealPhase::LoaderFading;
        self.fade = Tween::new(1.0, 0.0, Self::FADE_SECS, Ease::Power1Out);
    }

    /// Advance the sequence by `dt_secs`.
    pub fn tick(&mut self, dt_secs: f64) -> RevealState {
        self.percent.tick(dt_secs);
        match self.phase {
            RevealPhase::Loading | RevealPhase::Ready => {}
            RevealPhase::LoaderFading => {
                self.fade.tick(dt_secs);
                if self.fade.is_done() {
                    self.phase = RevealPhase::OverlayDelay;
                    self.delay_left_secs = Self::OVERLAY_DELAY_SECS;
                }
            }
            RevealPhase::OverlayDelay => {
                self.delay_left_secs -= dt_secs;
                if self.delay_left_secs <= 0.0 {
                    self.phase = RevealPhase::OverlayFading;
                    self.fade = Tween::new(1.0, 0.0, Self::FADE_SECS, Ease::Power1Out);
                    // Carry the overshoot into the fade.
                    self.fade.tick(-self.delay_left_secs);
                }
            }
            RevealPhase::OverlayFading => {
                self.fade.tick(dt_secs);
                if self.fade.is_done() {
                    self.phase = RevealPhase::Ready;
                    tracing::info!("page revealed, scrolling unlocked");
                }
            }
        }
        self.state()
    }

    /// Snapshot without advancing time.
    pub fn state(&self) -> RevealState {
        let (loader_opacity, overlay_opacity) = match self.phase {
            RevealPhase::Loading => (1.0, 1.0),
            RevealPhase::LoaderFading => (self.fade.value(), 1.0),
            RevealPhase::OverlayDelay => (0.0, 1.0),
            RevealPhase::OverlayFading => (0.0, self.fade.value()),
            RevealPhase::Ready => (0.0, 0.0),
        };
        RevealState {
            phase: self.phase,
            percent: self.percent.value().round().clamp(0.0, 100.0) as u32,
            loader_opacity,
            loader_present: matches!(self.phase, RevealPhase::Loading | RevealPhase::LoaderFading),
            overlay_opacity,
            scroll_locked: self.phase != RevealPhase::Ready,
        }
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loader/reveal.rs"]
mod tests;
