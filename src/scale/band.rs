use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::foundation::error::{VizjoinError, VizjoinResult};

/// Discrete keys mapped to evenly sized slots of a pixel (or angle) interval.
///
/// Duplicate domain keys are ignored after their first occurrence. A reversed range (`r1 < r0`)
/// hands out slots from the top of the interval downward, which is how bottom-up rows are laid
/// out on screen.
#[derive(Clone, Debug)]
pub struct BandScale<K> {
    domain: Vec<K>,
    index: HashMap<K, usize>,
    range: [f64; 2],
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    // Derived by `rescale`.
    start: f64,
    step: f64,
    bandwidth: f64,
}

// `index` and the derived layout follow from the configured fields.
impl<K: PartialEq> PartialEq for BandScale<K> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.range == other.range
            && self.padding_inner == other.padding_inner
            && self.padding_outer == other.padding_outer
            && self.align == other.align
    }
}

impl<K> BandScale<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Build a band scale with no padding and centered alignment.
    pub fn new(domain: impl IntoIterator<Item = K>, range: [f64; 2]) -> VizjoinResult<Self> {
        if !range[0].is_finite() || !range[1].is_finite() {
            return Err(VizjoinError::validation("band range bounds must be finite"));
        }

        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for k in domain {
            if !index.contains_key(&k) {
                index.insert(k.clone(), keys.len());
                keys.push(k);
            }
        }
        if keys.is_empty() {
            return Err(VizjoinError::domain_empty("band scale needs at least one key"));
        }

        let mut scale = Self {
            domain: keys,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        scale.rescale();
        Ok(scale)
    }

    /// Set inner and outer padding to the same fraction `p` in `[0, 1)`.
    pub fn with_padding(self, p: f64) -> VizjoinResult<Self> {
        self.with_padding_inner(p)?.with_padding_outer(p)
    }

    /// Fraction of each step left empty between adjacent slots, in `[0, 1)`.
    pub fn with_padding_inner(mut self, p: f64) -> VizjoinResult<Self> {
        if !(0.0..1.0).contains(&p) {
            return Err(VizjoinError::validation(
                "band padding_inner must be in [0, 1)",
            ));
        }
        self.padding_inner = p;
        self.rescale();
        Ok(self)
    }

    /// Space before the first and after the last slot, in steps, in `[0, 1)`.
    pub fn with_padding_outer(mut self, p: f64) -> VizjoinResult<Self> {
        if !(0.0..1.0).contains(&p) {
            return Err(VizjoinError::validation(
                "band padding_outer must be in [0, 1)",
            ));
        }
        self.padding_outer = p;
        self.rescale();
        Ok(self)
    }

    /// Where leftover outer space goes: 0 = all after, 0.5 = split, 1 = all before.
    pub fn with_align(mut self, align: f64) -> VizjoinResult<Self> {
        if !(0.0..=1.0).contains(&align) {
            return Err(VizjoinError::validation("band align must be in [0, 1]"));
        }
        self.align = align;
        self.rescale();
        Ok(self)
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (lo, hi) = if self.range[1] < self.range[0] {
            (self.range[1], self.range[0])
        } else {
            (self.range[0], self.range[1])
        };
        let step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - step * (n - self.padding_inner)) * self.align;
        self.step = step;
        self.bandwidth = step * (1.0 - self.padding_inner);
    }

    fn is_reversed(&self) -> bool {
        self.range[1] < self.range[0]
    }

    /// Width of one slot.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent slots.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Domain keys in slot order.
    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    /// Configured range.
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Slot index of `key`, if it is in the domain.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Start of the slot assigned to `key`.
    pub fn position(&self, key: &K) -> VizjoinResult<f64> {
        let i = self.index_of(key).ok_or_else(|| {
            VizjoinError::unknown_category(format!("{key:?} is not in the band domain"))
        })?;
        let slot = if self.is_reversed() {
            self.domain.len() - 1 - i
        } else {
            i
        };
        Ok(self.start + self.step * slot as f64)
    }

    /// Middle of the slot assigned to `key`.
    pub fn center(&self, key: &K) -> VizjoinResult<f64> {
        Ok(self.position(key)? + self.bandwidth * 0.5)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/band.rs"]
mod tests;
