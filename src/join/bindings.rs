use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    animation::attr::{Attr, AttrMap, AttrValue},
    animation::scheduler::AttrStore,
    foundation::core::ElementId,
    foundation::error::VizjoinResult,
    join::reconcile::reconcile,
};

/// Lifecycle phase of a bound element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Bound to a record of the current dataset.
    Live,
    /// Its key left the dataset; waiting for exit transitions before removal.
    Exiting,
}

/// One record identity bound to one visual primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundElement<K, R> {
    id: ElementId,
    key: K,
    datum: R,
    attrs: AttrMap,
    phase: Phase,
    shadow: bool,
}

impl<K, R> BoundElement<K, R> {
    /// Arena id.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Record key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Latest record bound to this element.
    pub fn datum(&self) -> &R {
        &self.datum
    }

    /// Currently displayed attribute values.
    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` for elements created for a repeated key.
    pub fn is_shadow(&self) -> bool {
        self.shadow
    }
}

/// Element ids produced by one [`Bindings::rebind`] pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rebind {
    /// Freshly created elements, in dataset order.
    pub enter: Vec<ElementId>,
    /// Elements whose datum was replaced, in dataset order.
    pub update: Vec<ElementId>,
    /// Elements now exiting, in previous binding order.
    pub exit: Vec<ElementId>,
    /// Number of repeated keys in the dataset.
    pub duplicates: usize,
}

/// Live index of bound elements: arena by id plus a key index.
#[derive(Clone, Debug)]
pub struct Bindings<K, R> {
    elements: BTreeMap<ElementId, BoundElement<K, R>>,
    by_key: HashMap<K, ElementId>,
    order: Vec<ElementId>,
    next_id: u64,
}

impl<K, R> Default for Bindings<K, R> {
    fn default() -> Self {
        Self {
            elements: BTreeMap::new(),
            by_key: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K, R> Bindings<K, R>
where
    K: Clone + Eq + Hash + Debug,
    R: Clone,
{
    /// Empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile `next` against the live elements and apply the result.
    ///
    /// On error nothing is changed.
    #[tracing::instrument(skip(self, next, key_fn), fields(records = next.len()))]
    pub fn rebind(
        &mut self,
        next: &[R],
        key_fn: impl Fn(&R) -> Option<K>,
    ) -> VizjoinResult<Rebind> {
        let (prev_ids, previous): (Vec<ElementId>, Vec<K>) = self
            .order
            .iter()
            .filter_map(|id| self.elements.get(id).map(|el| (*id, el.key.clone())))
            .unzip();

        let join = reconcile(&previous, next, &key_fn)?;

        let mut plan = Rebind {
            duplicates: join.duplicates.len(),
            ..Rebind::default()
        };
        let mut placed: Vec<(usize, ElementId)> =
            Vec::with_capacity(join.enter.len() + join.update.len());

        for exit in &join.exit {
            let id = prev_ids[exit.prev_index];
            if let Some(el) = self.elements.get_mut(&id) {
                el.phase = Phase::Exiting;
            }
            if self.by_key.get(&exit.key) == Some(&id) {
                self.by_key.remove(&exit.key);
            }
            plan.exit.push(id);
        }

        for update in &join.update {
            let id = prev_ids[update.prev_index];
            if let Some(el) = self.elements.get_mut(&id) {
                el.datum = next[update.next_index].clone();
            }
            placed.push((update.next_index, id));
            plan.update.push(id);
        }

        for enter in &join.enter {
            let id = ElementId(self.next_id);
            self.next_id += 1;
            self.elements.insert(
                id,
                BoundElement {
                    id,
                    key: enter.key.clone(),
                    datum: next[enter.next_index].clone(),
                    attrs: AttrMap::new(),
                    phase: Phase::Live,
                    shadow: enter.shadow,
                },
            );
            if !enter.shadow {
                self.by_key.insert(enter.key.clone(), id);
            }
            placed.push((enter.next_index, id));
            plan.enter.push(id);
        }

        placed.sort_by_key(|(i, _)| *i);
        self.order = placed.into_iter().map(|(_, id)| id).collect();

        tracing::debug!(
            enter = plan.enter.len(),
            update = plan.update.len(),
            exit = plan.exit.len(),
            duplicates = plan.duplicates,
            "rebind"
        );
        Ok(plan)
    }
}

impl<K, R> Bindings<K, R>
where
    K: Eq + Hash,
{
    /// Element bound to `key`, if live.
    pub fn element_for(&self, key: &K) -> Option<ElementId> {
        self.by_key.get(key).copied()
    }

    /// Element by id, live or exiting.
    pub fn get(&self, id: ElementId) -> Option<&BoundElement<K, R>> {
        self.elements.get(&id)
    }

    /// Live elements in dataset order.
    pub fn live(&self) -> impl Iterator<Item = &BoundElement<K, R>> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Ids of elements still exiting.
    pub fn exiting(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements
            .values()
            .filter(|el| el.phase == Phase::Exiting)
            .map(|el| el.id)
    }

    /// Every element, live or exiting, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundElement<K, R>> {
        self.elements.values()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when nothing is live.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop an element from the arena. Live elements also leave the key index.
    pub fn remove(&mut self, id: ElementId) -> Option<BoundElement<K, R>> {
        let el = self.elements.remove(&id)?;
        if el.phase == Phase::Live {
            self.order.retain(|other| *other != id);
            if self.by_key.get(&el.key) == Some(&id) {
                self.by_key.remove(&el.key);
            }
        }
        Some(el)
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.by_key.clear();
        self.order.clear();
    }
}

impl<K, R> AttrStore for Bindings<K, R> {
    fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    fn read_attr(&self, element: ElementId, attr: &Attr) -> Option<AttrValue> {
        self.elements
            .get(&element)
            .and_then(|el| el.attrs.get(attr))
            .copied()
    }

    fn write_attr(&mut self, element: ElementId, attr: &Attr, value: AttrValue) -> bool {
        match self.elements.get_mut(&element) {
            Some(el) => {
                el.attrs.insert_unchecked(attr.clone(), value);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/join/bindings.rs"]
mod tests;
