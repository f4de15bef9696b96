use crate::animation::{ease::Ease, tween::Tween};

/// Smoothed follower of the scroll progress.
///
/// Every new target restarts an eased catch-up from the current value, so fast scrolling lags
/// behind by at most `lag_secs`.
#[derive(Clone, Debug)]
pub struct Scrub {
    lag_secs: f64,
    current: f64,
    tween: Option<Tween>,
}

impl Scrub {
    /// Catch-up curve applied to each retarget.
    pub const EASE: Ease = Ease::Power3Out;

    /// Follower starting at progress 0. A lag of zero applies targets immediately.
    pub fn new(lag_secs: f64) -> Self {
        Self {
            lag_secs: lag_secs.max(0.0),
            current: 0.0,
            tween: None,
        }
    }

    /// Smoothed progress.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// `true` while a catch-up is in flight.
    pub fn is_settling(&self) -> bool {
        self.tween.is_some()
    }

    /// Retarget. Returns the new value when applied immediately.
    pub fn set_target(&mut self, target: f64) -> Option<f64> {
        if self.lag_secs == 0.0 {
            self.current = target;
            self.tween = None;
            return Some(target);
        }
        match &self.tween {
            Some(tw) if tw.to == target => return None,
            None if self.current == target => return None,
            _ => {}
        }
        self.tween = Some(Tween::new(self.current, target, self.lag_secs, Self::EASE));
        None
    }

    /// Advance the catch-up. Returns the new value while settling, `None` when idle.
    pub fn tick(&mut self, dt_secs: f64) -> Option<f64> {
        let tween = self.tween.as_mut()?;
        self.current = tween.tick(dt_secs);
        if tween.is_done() {
            self.tween = None;
        }
        Some(self.current)
    }

    /// Jump to `value` without easing.
    pub fn snap(&mut self, value: f64) {
        self.current = value;
        self.tween = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scrub.rs"]
mod tests;
