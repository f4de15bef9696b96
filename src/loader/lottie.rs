use crate::foundation::error::{ReelError, ReelResult};

/// Top-level fields of a Lottie (Bodymovin) document needed to place it on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LottieHeader {
    /// Bodymovin version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<String>,
    /// Animation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
    /// In point (first frame).
    pub ip: f64,
    /// Out point (frame after the last one).
    pub op: f64,
    /// Frame rate.
    pub fr: f64,
    /// Composition width.
    #[serde(default)]
    pub w: u32,
    /// Composition height.
    #[serde(default)]
    pub h: u32,
}

impl LottieHeader {
    /// Parse from raw JSON bytes; unknown fields (layers, assets, ...) are ignored.
    pub fn from_slice(bytes: &[u8]) -> ReelResult<Self> {
        let header: Self = serde_json::from_slice(bytes)?;
        header.validate()?;
        Ok(header)
    }

    /// Whole frames between in and out point.
    pub fn total_frames(&self) -> u64 {
        (self.op - self.ip).floor().max(0.0) as u64
    }

    fn validate(&self) -> ReelResult<()> {
        if !(self.ip.is_finite() && self.op.is_finite()) {
            return Err(ReelError::validation("lottie ip/op must be finite"));
        }
        if !(self.fr.is_finite() && self.fr > 0.0) {
            return Err(ReelError::validation("lottie frame rate must be > 0"));
        }
        if self.total_frames() == 0 {
            return Err(ReelError::validation(format!(
                "lottie has no frames (ip={}, op={})",
                self.ip, self.op
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loader/lottie.rs"]
mod tests;
