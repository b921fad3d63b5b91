use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    foundation::core::Point,
    foundation::error::{VizjoinError, VizjoinResult},
    scale::band::BandScale,
    scale::linear::LinearScale,
};

/// Default angular gap between neighbouring bars, in radians.
pub const DEFAULT_PAD_ANGLE: f64 = 0.01;
/// Default distance between a bar's outer edge and its label arc.
pub const DEFAULT_LABEL_GAP: f64 = 10.0;

/// Annular sector occupied by one radial bar. Angles in radians, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArcSlot {
    /// Sector start.
    pub start_angle: f64,
    /// Sector end.
    pub end_angle: f64,
    /// Radius of the inner edge.
    pub inner_radius: f64,
    /// Radius of the outer edge.
    pub outer_radius: f64,
    /// Gap shared with the neighbours, half on each side.
    pub pad_angle: f64,
}

impl ArcSlot {
    /// Start and end after removing the pad; collapses to the mid angle when the pad is wider.
    pub fn padded_angles(&self) -> (f64, f64) {
        let half = self.pad_angle / 2.0;
        let (a, b) = (self.start_angle + half, self.end_angle - half);
        if a <= b {
            (a, b)
        } else {
            let mid = (self.start_angle + self.end_angle) / 2.0;
            (mid, mid)
        }
    }

    /// Mid-radius, mid-angle point relative to the chart centre.
    pub fn centroid(&self) -> Point {
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        let a = (self.start_angle + self.end_angle) / 2.0 - FRAC_PI_2;
        Point::new(r * a.cos(), r * a.sin())
    }

    /// Arc `gap` outside the bar along which a label is set.
    pub fn label_arc(&self, gap: f64) -> LabelArc {
        LabelArc {
            radius: self.outer_radius + gap,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
        }
    }
}

/// Circular arc used as a text path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LabelArc {
    /// Arc radius.
    pub radius: f64,
    /// Arc start.
    pub start_angle: f64,
    /// Arc end.
    pub end_angle: f64,
}

impl LabelArc {
    /// Arc length.
    pub fn length(&self) -> f64 {
        self.radius * (self.end_angle - self.start_angle)
    }

    /// Text start offset, in percent of the path, for a label of the given rendered length.
    pub fn start_offset_percent(&self, text_length: f64) -> f64 {
        let arc = self.length();
        if arc <= 0.0 {
            return 0.0;
        }
        let offset = ((arc - text_length) / 4.0).max(0.0);
        ((offset + arc / 2.0) / arc) * 100.0 - 50.0
    }
}

/// Keys around the full circle, values as bar length from an inner hole.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialLayout<K> {
    angle: BandScale<K>,
    radius: LinearScale,
    inner_radius: f64,
    pad_angle: f64,
    label_gap: f64,
}

impl<K> RadialLayout<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Band over `[0, 2pi]` aligned to 0 and a linear radius `value_domain -> [inner, outer]`.
    pub fn new(
        keys: impl IntoIterator<Item = K>,
        value_domain: [f64; 2],
        inner_radius: f64,
        outer_radius: f64,
    ) -> VizjoinResult<Self> {
        if !(inner_radius.is_finite() && outer_radius.is_finite())
            || inner_radius < 0.0
            || outer_radius < inner_radius
        {
            return Err(VizjoinError::validation(
                "radial layout needs 0 <= inner_radius <= outer_radius",
            ));
        }
        Ok(Self {
            angle: BandScale::new(keys, [0.0, TAU])?.with_align(0.0)?,
            radius: LinearScale::new(value_domain, [inner_radius, outer_radius])?,
            inner_radius,
            pad_angle: DEFAULT_PAD_ANGLE,
            label_gap: DEFAULT_LABEL_GAP,
        })
    }

    /// Replace the pad angle.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> VizjoinResult<Self> {
        if !(pad_angle.is_finite() && pad_angle >= 0.0) {
            return Err(VizjoinError::validation("pad_angle must be >= 0"));
        }
        self.pad_angle = pad_angle;
        Ok(self)
    }

    /// Replace the label gap.
    pub fn with_label_gap(mut self, gap: f64) -> Self {
        self.label_gap = gap;
        self
    }

    /// Angular scale.
    pub fn angle_scale(&self) -> &BandScale<K> {
        &self.angle
    }

    /// Radial scale.
    pub fn radius_scale(&self) -> &LinearScale {
        &self.radius
    }

    /// Sector for `key` with bar value `value`.
    pub fn slot(&self, key: &K, value: f64) -> VizjoinResult<ArcSlot> {
        let start = self.angle.position(key)?;
        Ok(ArcSlot {
            start_angle: start,
            end_angle: start + self.angle.bandwidth(),
            inner_radius: self.inner_radius,
            outer_radius: self.radius.apply(value),
            pad_angle: self.pad_angle,
        })
    }

    /// Label arc for `key` with bar value `value`.
    pub fn label_arc(&self, key: &K, value: f64) -> VizjoinResult<LabelArc> {
        Ok(self.slot(key, value)?.label_arc(self.label_gap))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/radial.rs"]
mod tests;
