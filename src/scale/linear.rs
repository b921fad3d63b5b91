use crate::foundation::{
    error::{VizjoinError, VizjoinResult},
    math::{lerp, normalize, ticks},
};

/// Affine map from a numeric domain `[d0, d1]` to a range `[r0, r1]`.
///
/// Values outside the domain extrapolate unless clamping is enabled. A zero-width domain maps
/// every input to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
    clamp: bool,
}

impl LinearScale {
    /// Build an unclamped linear scale.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> VizjoinResult<Self> {
        if domain.iter().chain(range.iter()).any(|v| !v.is_finite()) {
            return Err(VizjoinError::validation(
                "linear domain and range bounds must be finite",
            ));
        }
        Ok(Self {
            domain,
            range,
            clamp: false,
        })
    }

    /// Enable or disable clamping of outputs to the range.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Configured domain.
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Configured range.
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a domain value into the range.
    pub fn apply(&self, x: f64) -> f64 {
        let mut t = normalize(x, self.domain[0], self.domain[1]);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        lerp(self.range[0], self.range[1], t)
    }

    /// Map a range value back into the domain.
    pub fn invert(&self, y: f64) -> f64 {
        let mut t = normalize(y, self.range[0], self.range[1]);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        lerp(self.domain[0], self.domain[1], t)
    }

    /// Roughly `count` round values spanning the domain, for axis drawing. Counts above 1000
    /// are treated as 1000.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain[0], self.domain[1], count)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/linear.rs"]
mod tests;
