use crate::{
    foundation::core::Rgba8,
    foundation::error::{VizjoinError, VizjoinResult},
    foundation::math::normalize,
    scale::interpolate::Interpolator,
};

/// Numeric domain mapped onto a color ramp.
///
/// A domain given high-to-low (`[hi, lo]`) runs the ramp backwards, e.g. so that the largest
/// word counts get the darkest bars.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SequentialScale {
    domain: [f64; 2],
    interpolator: Interpolator,
}

impl SequentialScale {
    /// Build a sequential color scale.
    pub fn new(domain: [f64; 2], interpolator: Interpolator) -> VizjoinResult<Self> {
        if !domain[0].is_finite() || !domain[1].is_finite() {
            return Err(VizjoinError::validation(
                "sequential domain bounds must be finite",
            ));
        }
        interpolator.validate()?;
        Ok(Self {
            domain,
            interpolator,
        })
    }

    /// Configured domain (possibly reversed).
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Ramp used for the output.
    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// Color for `x`.
    pub fn apply(&self, x: f64) -> Rgba8 {
        self.interpolator
            .sample(normalize(x, self.domain[0], self.domain[1]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/sequential.rs"]
mod tests;
