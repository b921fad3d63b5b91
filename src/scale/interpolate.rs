use crate::foundation::{
    core::Rgba8,
    error::{VizjoinError, VizjoinResult},
};

// Inferno ramp sampled at t = 0.0, 0.1, ..., 1.0.
const INFERNO: [Rgba8; 11] = [
    Rgba8::rgb(0x00, 0x00, 0x04),
    Rgba8::rgb(0x16, 0x0b, 0x39),
    Rgba8::rgb(0x42, 0x0a, 0x68),
    Rgba8::rgb(0x6a, 0x17, 0x6e),
    Rgba8::rgb(0x93, 0x26, 0x67),
    Rgba8::rgb(0xbc, 0x37, 0x54),
    Rgba8::rgb(0xdd, 0x51, 0x3a),
    Rgba8::rgb(0xf3, 0x78, 0x19),
    Rgba8::rgb(0xfc, 0xa5, 0x0a),
    Rgba8::rgb(0xf6, 0xd7, 0x46),
    Rgba8::rgb(0xfc, 0xff, 0xa4),
];

/// Color ramp: normalized position `t` in `[0, 1]` to a color.
///
/// Inputs outside `[0, 1]` are clamped.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolator {
    /// Perceptually uniform black -> purple -> orange -> pale yellow ramp.
    Inferno,
    /// Evenly spaced stops, linearly blended in sRGB.
    Ramp(Vec<Rgba8>),
    /// Caller-provided function.
    #[serde(skip)]
    Custom(fn(f64) -> Rgba8),
}

impl PartialEq for Interpolator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Inferno, Self::Inferno) => true,
            (Self::Ramp(a), Self::Ramp(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Interpolator {
    /// Reject ramps without stops.
    pub fn validate(&self) -> VizjoinResult<()> {
        match self {
            Self::Ramp(stops) if stops.is_empty() => Err(VizjoinError::validation(
                "color ramp needs at least one stop",
            )),
            _ => Ok(()),
        }
    }

    /// Color at position `t`.
    pub fn sample(&self, t: f64) -> Rgba8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Inferno => sample_stops(&INFERNO, t),
            Self::Ramp(stops) => sample_stops(stops, t),
            Self::Custom(f) => f(t),
        }
    }
}

fn sample_stops(stops: &[Rgba8], t: f64) -> Rgba8 {
    match stops {
        [] => Rgba8::transparent(),
        [only] => *only,
        _ => {
            let pos = t * (stops.len() - 1) as f64;
            let i = (pos.floor() as usize).min(stops.len() - 2);
            stops[i].lerp(stops[i + 1], pos - i as f64)
        }
    }
}

/// `n` evenly spaced colors from `interpolator`, both ends included.
///
/// Used to derive a categorical palette from a continuous ramp.
pub fn sample_interpolator(interpolator: &Interpolator, n: usize) -> Vec<Rgba8> {
    match n {
        0 => Vec::new(),
        1 => vec![interpolator.sample(0.0)],
        _ => (0..n)
            .map(|i| interpolator.sample(i as f64 / (n - 1) as f64))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/interpolate.rs"]
mod tests;
