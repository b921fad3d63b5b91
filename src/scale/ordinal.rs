use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::foundation::error::{VizjoinError, VizjoinResult};

/// Positional category -> palette assignment.
///
/// The k-th domain key gets `palette[k % palette.len()]`. Nothing is re-sorted, so a category
/// keeps its color for as long as the domain order is unchanged.
#[derive(Clone, Debug)]
pub struct OrdinalScale<K, V> {
    domain: Vec<K>,
    index: HashMap<K, usize>,
    palette: Vec<V>,
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrdinalScale<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.palette == other.palette
    }
}

impl<K, V> OrdinalScale<K, V>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Build an ordinal scale. Duplicate domain keys keep their first position.
    pub fn new(domain: impl IntoIterator<Item = K>, palette: Vec<V>) -> VizjoinResult<Self> {
        if palette.is_empty() {
            return Err(VizjoinError::validation("ordinal palette must not be empty"));
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
            return Err(VizjoinError::domain_empty(
                "ordinal scale needs at least one key",
            ));
        }
        Ok(Self {
            domain: keys,
            index,
            palette,
        })
    }

    /// Domain keys in assignment order.
    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    /// Palette in assignment order.
    pub fn palette(&self) -> &[V] {
        &self.palette
    }

    /// Palette entry for `key`.
    pub fn get(&self, key: &K) -> VizjoinResult<&V> {
        let i = self.index.get(key).ok_or_else(|| {
            VizjoinError::unknown_category(format!("{key:?} is not in the ordinal domain"))
        })?;
        Ok(&self.palette[i % self.palette.len()])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/ordinal.rs"]
mod tests;
