use crate::animation::ease::Ease;

/// Time-driven interpolation of a single scalar from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Tween {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Duration in seconds. Zero completes on the first tick.
    pub duration_secs: f64,
    /// Easing applied to normalized time.
    pub ease: Ease,
    elapsed_secs: f64,
}

impl Tween {
    /// Create a tween at time zero.
    pub fn new(from: f64, to: f64, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_secs: duration_secs.max(0.0),
            ease,
            elapsed_secs: 0.0,
        }
    }

    /// Normalized time in `[0, 1]`.
    pub fn t(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.ease.apply(self.t())
    }

    /// Advance by `dt_secs` and return the new value.
    pub fn tick(&mut self, dt_secs: f64) -> f64 {
        self.elapsed_secs += dt_secs.max(0.0);
        self.value()
    }

    /// `true` once the end value has been reached.
    pub fn is_done(&self) -> bool {
        self.t() >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
