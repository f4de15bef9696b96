/// Easing curves used by page motion (named after the power family used in the page script).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed (`none`).
    #[default]
    Linear,
    /// Quadratic ease-out (`power1.out`).
    Power1Out,
    /// Cubic ease-out (`power2.out`).
    Power2Out,
    /// Quartic ease-out (`power3.out`).
    Power3Out,
}

impl Ease {
    /// Map normalized time `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
