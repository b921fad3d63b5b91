use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Distinct values of `f(item)` in first-appearance order.
///
/// This is how band and ordinal domains are derived from a dataset: the order only changes when
/// the dataset's own order does.
pub fn uniq_by<T, K>(items: &[T], f: impl Fn(&T) -> K) -> Vec<K>
where
    K: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut out = Vec::new();
    for item in items {
        let k = f(item);
        if seen.insert(k.clone()) {
            out.push(k);
        }
    }
    out
}

/// Number of items per distinct value of `f(item)`.
pub fn count_by<T, K>(items: &[T], f: impl Fn(&T) -> K) -> HashMap<K, usize>
where
    K: Eq + Hash,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(f(item)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
#[path = "../../tests/unit/data/group.rs"]
mod tests;
