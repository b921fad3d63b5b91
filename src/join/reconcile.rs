use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use crate::foundation::error::{VizjoinError, VizjoinResult};

/// Record of `next` whose key was not bound before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enter<K> {
    /// Record key.
    pub key: K,
    /// Position in `next`.
    pub next_index: usize,
    /// `true` for the second and later records sharing a key within `next`.
    pub shadow: bool,
}

/// Record of `next` matched to a previous binding with the same key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update<K> {
    /// Shared key.
    pub key: K,
    /// Position in `previous`.
    pub prev_index: usize,
    /// Position in `next`.
    pub next_index: usize,
}

/// Previous binding with no counterpart in `next`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exit<K> {
    /// Key of the departing binding.
    pub key: K,
    /// Position in `previous`.
    pub prev_index: usize,
}

/// A key that appeared more than once in one dataset.
///
/// Non-fatal: the first occurrence takes the UPDATE match, the rest ENTER as shadows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKeyWarning<K> {
    /// Repeated key.
    pub key: K,
    /// Number of records carrying it.
    pub occurrences: usize,
}

/// Enter/update/exit classification of one reconciliation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Join<K> {
    /// New records, in `next` order.
    pub enter: Vec<Enter<K>>,
    /// Matched records, in `next` order.
    pub update: Vec<Update<K>>,
    /// Departed bindings, in `previous` order.
    pub exit: Vec<Exit<K>>,
    /// Keys repeated within `next`, in first-appearance order.
    pub duplicates: Vec<DuplicateKeyWarning<K>>,
}

impl<K> Join<K> {
    /// `true` when nothing entered, updated or exited.
    pub fn is_empty(&self) -> bool {
        self.enter.is_empty() && self.update.is_empty() && self.exit.is_empty()
    }

    /// Keys of the exiting bindings.
    pub fn exit_keys(&self) -> impl Iterator<Item = &K> {
        self.exit.iter().map(|e| &e.key)
    }
}

/// Diff the keys bound previously against the records of `next`.
///
/// Runs in O(n + m) over a hash index of `previous`. A `None` key aborts the whole pass
/// with [`VizjoinError::MissingKey`].
pub fn reconcile<K, R, F>(previous: &[K], next: &[R], key_fn: F) -> VizjoinResult<Join<K>>
where
    K: Clone + Eq + Hash + Debug,
    F: Fn(&R) -> Option<K>,
{
    let mut next_keys = Vec::with_capacity(next.len());
    for (index, record) in next.iter().enumerate() {
        match key_fn(record) {
            Some(k) => next_keys.push(k),
            None => return Err(VizjoinError::MissingKey { index }),
        }
    }

    // Later duplicates in `previous` are left out of the index and fall through to EXIT.
    let mut index: HashMap<&K, usize> = HashMap::with_capacity(previous.len());
    for (i, k) in previous.iter().enumerate() {
        index.entry(k).or_insert(i);
    }
    let mut matched = vec![false; previous.len()];

    let mut seen: HashMap<&K, usize> = HashMap::with_capacity(next_keys.len());
    let mut repeated: Vec<&K> = Vec::new();
    let mut enter = Vec::new();
    let mut update = Vec::new();

    for (next_index, key) in next_keys.iter().enumerate() {
        match seen.entry(key) {
            Entry::Occupied(mut e) => {
                if *e.get() == 1 {
                    repeated.push(key);
                }
                *e.get_mut() += 1;
                enter.push(Enter {
                    key: key.clone(),
                    next_index,
                    shadow: true,
                });
                continue;
            }
            Entry::Vacant(e) => {
                e.insert(1);
            }
        }
        match index.get(key) {
            Some(&prev_index) => {
                matched[prev_index] = true;
                update.push(Update {
                    key: key.clone(),
                    prev_index,
                    next_index,
                });
            }
            None => enter.push(Enter {
                key: key.clone(),
                next_index,
                shadow: false,
            }),
        }
    }

    let exit = previous
        .iter()
        .enumerate()
        .filter(|(i, _)| !matched[*i])
        .map(|(prev_index, key)| Exit {
            key: key.clone(),
            prev_index,
        })
        .collect();

    let duplicates: Vec<DuplicateKeyWarning<K>> = repeated
        .into_iter()
        .map(|key| DuplicateKeyWarning {
            key: key.clone(),
            occurrences: seen.get(key).copied().unwrap_or(0),
        })
        .collect();
    for dup in &duplicates {
        tracing::warn!(
            key = ?dup.key,
            occurrences = dup.occurrences,
            "duplicate key in dataset, extra records enter as shadow elements"
        );
    }

    Ok(Join {
        enter,
        update,
        exit,
        duplicates,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/join/reconcile.rs"]
mod tests;
