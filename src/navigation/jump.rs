use std::collections::BTreeMap;

use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::{
        core::FrameIndex,
        math::parse_whole_f64,
    },
    timeline::{mapper::scroll_offset_for_frame, segments::SegmentTable},
};

/// Section declaration targeted by navigation links (`id`, `data-anim`, `data-start`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionMarkup {
    /// Section id, referenced by `href="#id"`.
    pub id: String,
    /// 1-based segment number.
    pub anim: String,
    /// Local frame at which the section starts.
    pub start: String,
}

/// Parsed navigation target.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavTarget {
    /// Section id.
    pub id: String,
    /// 1-based segment number; NaN when unparseable.
    pub anim: f64,
    /// Local start frame; NaN when unparseable.
    pub local_start: f64,
}

impl NavTarget {
    /// Parse markup attributes with whole-string number rules (`"40px"` is NaN, `""` is 0).
    pub fn from_markup(m: &SectionMarkup) -> Self {
        Self {
            id: m.id.clone(),
            anim: parse_whole_f64(&m.anim),
            local_start: parse_whole_f64(&m.start),
        }
    }
}

/// Animated scroll requested by a navigation click.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct JumpPlan {
    /// Section id the jump lands on.
    pub target_id: String,
    /// Global frame of the section start.
    pub global_frame: f64,
    /// Scroll offset that shows `global_frame`.
    pub scroll_offset: f64,
    /// Scroll animation duration in seconds.
    pub duration_secs: f64,
    /// Scroll animation easing.
    pub ease: Ease,
}

impl JumpPlan {
    /// Scroll tween from the current offset to the plan's offset.
    pub fn tween(&self, from_offset: f64) -> Tween {
        Tween::new(from_offset, self.scroll_offset, self.duration_secs, self.ease)
    }
}

/// State written when a jump animation finishes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct JumpCompletion {
    /// Replacement URL fragment (no new history entry).
    pub fragment: String,
    /// Links marked active.
    pub active_links: Vec<String>,
}

/// Navigation link state: jumps, active marking and the menu toggle.
#[derive(Clone, Debug)]
pub struct Navigator {
    targets: BTreeMap<String, NavTarget>,
    links: Vec<String>,
    active: Vec<bool>,
    clicked_frame: Option<f64>,
    hysteresis_frames: u64,
    jump_duration_secs: f64,
    fragment: Option<String>,
    menu_open: bool,
}

impl Navigator {
    /// Easing of the jump scroll.
    pub const JUMP_EASE: Ease = Ease::Power2Out;

    /// Build from section markup and link hrefs (for example `"#about"`).
    pub fn new(
        sections: &[SectionMarkup],
        links: Vec<String>,
        hysteresis_frames: u64,
        jump_duration_secs: f64,
    ) -> Self {
        let targets = sections
            .iter()
            .map(|s| (s.id.clone(), NavTarget::from_markup(s)))
            .collect();
        let active = vec![false; links.len()];
        Self {
            targets,
            links,
            active,
            clicked_frame: None,
            hysteresis_frames,
            jump_duration_secs,
            fragment: None,
            menu_open: false,
        }
    }

    /// Link hrefs in declaration order.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Hrefs currently marked active.
    pub fn active_links(&self) -> Vec<String> {
        self.links
            .iter()
            .zip(&self.active)
            .filter(|(_, a)| **a)
            .map(|(l, _)| l.clone())
            .collect()
    }

    /// Fragment last written by a completed jump.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Frame recorded by the last click.
    pub fn clicked_frame(&self) -> Option<f64> {
        self.clicked_frame
    }

    /// Whether the mobile menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Toggle the mobile menu; returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Plan the jump for a clicked link.
    ///
    /// Unknown sections, segments past the end and NaN start frames are silently ignored. A
    /// section whose segment number is below 1 or NaN lands on its start frame counted from the
    /// top of the timeline. The clicked frame is recorded before the NaN check, so a bad target
    /// still moves the hysteresis threshold.
    pub fn plan_jump(
        &mut self,
        href: &str,
        table: &SegmentTable,
        max_scroll: f64,
    ) -> Option<JumpPlan> {
        let id = href.strip_prefix('#').unwrap_or(href);
        let Some(target) = self.targets.get(id) else {
            tracing::debug!(href, "navigation target not found");
            return None;
        };

        let global_frame = table.markup_global_frame(target.anim, target.local_start);
        self.clicked_frame = Some(global_frame);
        if global_frame.is_nan() {
            tracing::debug!(href, "navigation target has no usable frame");
            return None;
        }
        let scroll_offset =
            scroll_offset_for_frame(global_frame, table.total_frames(), max_scroll)?;

        self.menu_open = false;
        Some(JumpPlan {
            target_id: target.id.clone(),
            global_frame,
            scroll_offset,
            duration_secs: self.jump_duration_secs,
            ease: Self::JUMP_EASE,
        })
    }

    /// Record the fragment and mark matching links active once the jump has landed.
    pub fn complete_jump(&mut self, plan: &JumpPlan) -> JumpCompletion {
        let fragment = format!("#{}", plan.target_id);
        for (link, active) in self.links.iter().zip(self.active.iter_mut()) {
            *active = *link == fragment;
        }
        self.fragment = Some(fragment.clone());
        JumpCompletion {
            fragment,
            active_links: self.active_links(),
        }
    }

    /// Clear every active link once the page scrolls past the clicked frame plus hysteresis.
    ///
    /// Returns `true` when links were cleared by this call.
    pub fn on_scroll(&mut self, raw_frame: FrameIndex) -> bool {
        // A NaN clicked frame never compares greater, so links stay marked.
        let threshold = self.clicked_frame.unwrap_or(0.0) + self.hysteresis_frames as f64;
        let past = raw_frame.0 as f64 > threshold;
        if !past {
            return false;
        }
        let had_active = self.active.iter().any(|a| *a);
        self.active.iter_mut().for_each(|a| *a = false);
        had_active
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/jump.rs"]
mod tests;
