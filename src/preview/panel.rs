use crate::foundation::{
    core::FrameIndex,
    math::{inverse_lerp_clamped, lerp},
};

/// Pose of the projects preview panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PreviewPose {
    /// Vertical offset as a percentage of the panel height.
    pub y_percent: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl PreviewPose {
    const BELOW: Self = Self {
        y_percent: 100.0,
        scale: 0.5,
        opacity: 0.0,
    };
    const CENTERED: Self = Self {
        y_percent: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
    const ABOVE: Self = Self {
        y_percent: -100.0,
        scale: 0.5,
        opacity: 0.0,
    };

    fn mix(a: Self, b: Self, t: f64) -> Self {
        Self {
            y_percent: lerp(a.y_percent, b.y_percent, t),
            scale: lerp(a.scale, b.scale, t),
            opacity: lerp(a.opacity, b.opacity, t),
        }
    }
}

/// Global frame window during which the preview panel travels through the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewPanel {
    /// Frame at which the panel starts entering.
    pub start: u64,
    /// Frame at which the panel has fully exited.
    pub end: u64,
}

impl Default for PreviewPanel {
    fn default() -> Self {
        Self {
            start: 8200,
            end: 11700,
        }
    }
}

impl PreviewPanel {
    // Timeline units: enter 1, hold 0.5, exit 1.
    const ENTER: f64 = 1.0;
    const HOLD: f64 = 0.5;
    const EXIT: f64 = 1.0;

    /// Timeline progress for a raw scroll frame, clamped to `[0, 1]`.
    pub fn progress(&self, raw_frame: FrameIndex) -> f64 {
        let f = raw_frame.0;
        if f <= self.start {
            return 0.0;
        }
        if f >= self.end {
            return 1.0;
        }
        inverse_lerp_clamped(self.start as f64, self.end as f64, f as f64)
    }

    /// Pose at timeline `progress`: enter from below, hold centered, exit upwards.
    pub fn pose_at(progress: f64) -> PreviewPose {
        let total = Self::ENTER + Self::HOLD + Self::EXIT;
        let t = progress.clamp(0.0, 1.0) * total;
        if t <= Self::ENTER {
            PreviewPose::mix(PreviewPose::BELOW, PreviewPose::CENTERED, t / Self::ENTER)
        } else if t <= Self::ENTER + Self::HOLD {
            PreviewPose::CENTERED
        } else {
            let u = (t - Self::ENTER - Self::HOLD) / Self::EXIT;
            PreviewPose::mix(PreviewPose::CENTERED, PreviewPose::ABOVE, u)
        }
    }

    /// Pose for a raw scroll frame.
    pub fn pose(&self, raw_frame: FrameIndex) -> PreviewPose {
        let progress = self.progress(raw_frame);
        tracing::trace!(
            frame = raw_frame.0,
            start = self.start,
            end = self.end,
            progress,
            "preview panel"
        );
        Self::pose_at(progress)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/panel.rs"]
mod tests;
