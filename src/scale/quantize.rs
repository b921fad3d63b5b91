use crate::foundation::error::{VizjoinError, VizjoinResult};

/// Continuous `[lo, hi]` cut into `n` equal segments, one output per segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuantizeScale<V> {
    domain: [f64; 2],
    thresholds: Vec<f64>,
    range: Vec<V>,
}

impl<V> QuantizeScale<V> {
    /// Build a quantize scale over `domain` with outputs `range`.
    pub fn new(domain: [f64; 2], range: Vec<V>) -> VizjoinResult<Self> {
        if !domain[0].is_finite() || !domain[1].is_finite() {
            return Err(VizjoinError::validation(
                "quantize domain bounds must be finite",
            ));
        }
        if range.is_empty() {
            return Err(VizjoinError::validation("quantize range must not be empty"));
        }
        let n = range.len();
        let [lo, hi] = domain;
        let thresholds = (1..n)
            .map(|i| lo + (hi - lo) * i as f64 / n as f64)
            .collect();
        Ok(Self {
            domain,
            thresholds,
            range,
        })
    }

    /// Segment boundaries (`range.len() - 1` values).
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Configured domain.
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Output for `x`; values below / above the domain saturate. `None` for NaN.
    pub fn apply(&self, x: f64) -> Option<&V> {
        if x.is_nan() {
            return None;
        }
        let i = self.thresholds.partition_point(|t| *t <= x);
        self.range.get(i)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/quantize.rs"]
mod tests;
