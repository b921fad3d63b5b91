use crate::{
    foundation::core::Vec2,
    foundation::error::VizjoinResult,
    scale::quantize::QuantizeScale,
};

/// Fewest petals a flower glyph gets.
pub const MIN_PETALS: usize = 5;
/// Most petals a flower glyph gets.
pub const MAX_PETALS: usize = 12;
/// Background circles around each glyph.
pub const SATELLITE_COUNT: usize = 5;
/// Distance of the background circles from the glyph centre (also their radius).
pub const SATELLITE_RADIUS: f64 = 30.0;

/// Petal rotations in degrees: `i * 360 / n`.
pub fn petal_rotations(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = 360.0 / n as f64;
    (0..n).map(|i| i as f64 * step).collect()
}

/// Offsets of `count` circles evenly spaced on a ring of `radius`, first one at angle 0.
pub fn satellite_offsets(count: usize, radius: f64) -> Vec<Vec2> {
    petal_rotations(count)
        .into_iter()
        .map(|deg| {
            let a = deg.to_radians();
            Vec2::new(radius * a.cos(), radius * a.sin())
        })
        .collect()
}

/// Value -> petal count over `MIN_PETALS..=MAX_PETALS`.
pub fn petal_count_scale(value_domain: [f64; 2]) -> VizjoinResult<QuantizeScale<usize>> {
    QuantizeScale::new(value_domain, (MIN_PETALS..=MAX_PETALS).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/glyph.rs"]
mod tests;
