use std::collections::{BTreeMap, VecDeque};

use smallvec::SmallVec;

use crate::{
    animation::attr::{Attr, AttrMap, AttrValue},
    animation::transition::{
        OnEnd, Step, Transition, TransitionGroupId, TransitionOpts, TransitionState,
    },
    foundation::core::{ElementId, Millis},
    foundation::error::{VizjoinError, VizjoinResult},
};

/// Attribute storage the scheduler reads start values from and writes samples into.
pub trait AttrStore {
    /// `true` while `element` exists.
    fn contains(&self, element: ElementId) -> bool;

    /// Currently displayed value of `attr` on `element`.
    fn read_attr(&self, element: ElementId, attr: &Attr) -> Option<AttrValue>;

    /// Overwrite `attr` on `element`. Returns `false` if the element is gone.
    fn write_attr(&mut self, element: ElementId, attr: &Attr, value: AttrValue) -> bool;
}

impl AttrStore for BTreeMap<ElementId, AttrMap> {
    fn contains(&self, element: ElementId) -> bool {
        self.contains_key(&element)
    }

    fn read_attr(&self, element: ElementId, attr: &Attr) -> Option<AttrValue> {
        self.get(&element).and_then(|m| m.get(attr)).copied()
    }

    fn write_attr(&mut self, element: ElementId, attr: &Attr, value: AttrValue) -> bool {
        match self.get_mut(&element) {
            Some(m) => {
                m.insert_unchecked(attr.clone(), value);
                true
            }
            None => false,
        }
    }
}

/// A transition call whose every attribute reached its end value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Completion {
    /// Handle returned by `animate` / `chain`.
    pub group: TransitionGroupId,
    /// Animated element.
    pub element: ElementId,
    /// Clock time at which the last attribute landed.
    pub at: Millis,
}

/// Outcome of one [`Scheduler::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Calls completed during this tick, in completion order.
    pub completed: Vec<Completion>,
    /// Transitions dropped because their element disappeared.
    pub orphaned: usize,
    /// Transitions still scheduled or running afterwards.
    pub active: usize,
}

// Terminal group states kept for `group_state`; oldest ids are evicted first.
const SETTLED_HISTORY: usize = 1024;

struct Group {
    element: ElementId,
    start: Millis,
    pending: SmallVec<[Attr; 4]>,
    on_end: Option<OnEnd>,
    then: VecDeque<Step>,
    superseded: bool,
}

/// A delayed leg. Its start value is resolved when the clock reaches `start_time`.
struct Waiting {
    transition: Transition,
    from: Option<AttrValue>,
}

/// Owns every in-flight transition, keyed by (element, attribute).
///
/// Time is explicit: every call that depends on the clock takes `now`. A transition only takes
/// over its (element, attribute) pair when it starts, so a delayed call leaves the running one
/// alone until then.
#[derive(Default)]
pub struct Scheduler {
    active: BTreeMap<(ElementId, Attr), Transition>,
    waiting: BTreeMap<(ElementId, Attr), Vec<Waiting>>,
    groups: BTreeMap<TransitionGroupId, Group>,
    settled: BTreeMap<TransitionGroupId, TransitionState>,
    next_group: u64,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("active", &self.active.len())
            .field("waiting", &self.waiting_count())
            .field("groups", &self.groups.len())
            .finish()
    }
}

impl Scheduler {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start interpolating every attribute in `to` on `element`.
    ///
    /// Values in `from` are written when the call starts. For attributes absent from `from` the
    /// start value is the running transition's value at that moment, else the displayed value.
    /// Once started, the call supersedes any transition on the same (element, attribute).
    #[tracing::instrument(skip(self, store, from, to, opts), fields(element = %element))]
    pub fn animate<S: AttrStore + ?Sized>(
        &mut self,
        store: &mut S,
        element: ElementId,
        from: &AttrMap,
        to: &AttrMap,
        opts: TransitionOpts,
        now: Millis,
    ) -> VizjoinResult<TransitionGroupId> {
        from.validate()?;
        to.validate()?;
        opts.validate()?;
        self.start_group(store, element, from, to, opts, VecDeque::new(), now)
    }

    /// Run `steps` back to back; each starts at the exact end time of the previous one.
    ///
    /// Superseding any attribute of the running step drops the rest of the chain.
    pub fn chain<S: AttrStore + ?Sized>(
        &mut self,
        store: &mut S,
        element: ElementId,
        steps: impl IntoIterator<Item = Step>,
        now: Millis,
    ) -> VizjoinResult<TransitionGroupId> {
        let mut steps: VecDeque<Step> = steps.into_iter().collect();
        for step in &steps {
            step.validate()?;
        }
        let Some(first) = steps.pop_front() else {
            return Err(VizjoinError::validation("chain needs at least one step"));
        };
        self.start_group(store, element, &first.from, &first.to, first.opts, steps, now)
    }

    /// Write `value` immediately, superseding any transition on the pair.
    pub fn set<S: AttrStore + ?Sized>(
        &mut self,
        store: &mut S,
        element: ElementId,
        attr: Attr,
        value: impl Into<AttrValue>,
    ) -> VizjoinResult<()> {
        let value = value.into();
        value.check_for(&attr)?;
        if !store.contains(element) {
            return Err(unbound(element));
        }
        self.supersede(element, &attr);
        self.drop_waiting(element, &attr, None);
        store.write_attr(element, &attr, value);
        Ok(())
    }

    /// Advance every transition to `now`, firing completion callbacks and starting chained steps.
    #[tracing::instrument(skip(self, store))]
    pub fn tick<S: AttrStore + ?Sized>(
        &mut self,
        store: &mut S,
        now: Millis,
    ) -> VizjoinResult<TickReport> {
        let mut report = TickReport::default();
        loop {
            let mut finished = self.start_due(store, now)?;
            let mut landed: Vec<((ElementId, Attr), TransitionGroupId, Millis)> = Vec::new();
            let mut orphans: Vec<(ElementId, Attr)> = Vec::new();

            for (key, t) in self.active.iter_mut() {
                let value = t.sample(now)?;
                if !store.write_attr(key.0, &key.1, value) {
                    orphans.push(key.clone());
                    continue;
                }
                if t.progress(now) >= 1.0 {
                    t.state = TransitionState::Completed;
                    landed.push((key.clone(), t.group, t.end_time()));
                }
            }

            for key in orphans {
                if let Some(t) = self.active.remove(&key) {
                    self.detach(t.group, &key.1, true);
                    report.orphaned += 1;
                }
            }

            for (key, group, at) in landed {
                self.active.remove(&key);
                if let Some(g) = self.detach(group, &key.1, false) {
                    finished.push((group, g, at));
                }
            }
            let empty: Vec<TransitionGroupId> = self
                .groups
                .iter()
                .filter(|(_, g)| g.pending.is_empty() && g.start <= now)
                .map(|(id, _)| *id)
                .collect();
            for id in empty {
                if let Some(g) = self.groups.remove(&id) {
                    let at = g.start;
                    finished.push((id, g, at));
                }
            }
            finished.sort_by_key(|(id, _, _)| *id);

            let mut chained = false;
            for (id, mut group, at) in finished {
                self.settle(id, TransitionState::Completed);
                report.completed.push(Completion {
                    group: id,
                    element: group.element,
                    at,
                });
                if let Some(cb) = group.on_end.take() {
                    cb(group.element);
                }
                let Some(next) = group.then.pop_front() else {
                    continue;
                };
                if !store.contains(group.element) {
                    continue;
                }
                self.start_group(
                    store,
                    group.element,
                    &next.from,
                    &next.to,
                    next.opts,
                    group.then,
                    at,
                )?;
                chained = true;
            }

            if !chained {
                break;
            }
        }
        report.active = self.active_count();
        Ok(report)
    }

    /// Drop every transition on `element` without firing callbacks.
    pub fn cancel_element(&mut self, element: ElementId) -> usize {
        let keys: Vec<(ElementId, Attr)> = self
            .active
            .keys()
            .filter(|(e, _)| *e == element)
            .cloned()
            .collect();
        for key in &keys {
            self.active.remove(key);
        }
        let before = self.waiting_count();
        self.waiting.retain(|(e, _), _| *e != element);
        let dropped = keys.len() + before - self.waiting_count();

        let gone: Vec<TransitionGroupId> = self
            .groups
            .iter()
            .filter(|(_, g)| g.element == element)
            .map(|(id, _)| *id)
            .collect();
        for id in gone {
            self.groups.remove(&id);
            self.settle(id, TransitionState::Superseded);
        }
        dropped
    }

    /// Drop everything, including the terminal-state history.
    pub fn clear(&mut self) {
        self.active.clear();
        self.waiting.clear();
        self.groups.clear();
        self.settled.clear();
    }

    /// `true` while `element` has a scheduled, running or chained transition.
    pub fn is_animating(&self, element: ElementId) -> bool {
        self.groups.values().any(|g| g.element == element)
    }

    /// Number of live (element, attribute) transitions, scheduled ones included.
    pub fn active_count(&self) -> usize {
        self.active.len() + self.waiting_count()
    }

    /// Running transition on the pair, else the earliest one waiting for its start time.
    pub fn transition(&self, element: ElementId, attr: &Attr) -> Option<&Transition> {
        let key = (element, attr.clone());
        self.active.get(&key).or_else(|| {
            self.waiting
                .get(&key)
                .and_then(|w| w.iter().min_by(|a, b| order(&a.transition, &b.transition)))
                .map(|w| &w.transition)
        })
    }

    /// State of the live transition on the pair, if any.
    pub fn state_of(&self, element: ElementId, attr: &Attr) -> Option<TransitionState> {
        self.transition(element, attr).map(Transition::state)
    }

    /// State of the call behind `group`.
    ///
    /// A group is `Superseded` as soon as any of its attributes is taken over, even while its
    /// other attributes still run. Terminal states stay queryable for the most recent groups.
    pub fn group_state(&self, group: TransitionGroupId) -> Option<TransitionState> {
        if let Some(state) = self.settled.get(&group) {
            return Some(*state);
        }
        let g = self.groups.get(&group)?;
        if g.superseded {
            return Some(TransitionState::Superseded);
        }
        let running = self
            .active
            .values()
            .any(|t| t.group == group && t.state == TransitionState::Running);
        Some(if running {
            TransitionState::Running
        } else {
            TransitionState::Scheduled
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn start_group<S: AttrStore + ?Sized>(
        &mut self,
        store: &mut S,
        element: ElementId,
        from: &AttrMap,
        to: &AttrMap,
        opts: TransitionOpts,
        then: VecDeque<Step>,
        now: Millis,
    ) -> VizjoinResult<TransitionGroupId> {
        if !store.contains(element) {
            return Err(unbound(element));
        }
        let id = TransitionGroupId(self.next_group);
        let start_time = now.offset(opts.delay_ms);
        let delayed = opts.delay_ms > 0.0;

        let mut pending: SmallVec<[Attr; 4]> = SmallVec::new();
        if delayed {
            for (attr, end) in to.iter() {
                self.wait(element, attr, from.get(attr).copied(), *end, start_time, &opts, id);
                pending.push(attr.clone());
            }
            // `from`-only attributes are held for zero time at the start.
            for (attr, value) in from.iter().filter(|(a, _)| to.get(a).is_none()) {
                let hold = TransitionOpts {
                    duration_ms: 0.0,
                    delay_ms: opts.delay_ms,
                    easing: opts.easing,
                    on_end: None,
                };
                self.wait(element, attr, Some(*value), *value, start_time, &hold, id);
                pending.push(attr.clone());
            }
        } else {
            // Resolve start values before touching anything so failures leave no trace.
            let mut legs: Vec<(Attr, AttrValue, AttrValue)> = Vec::with_capacity(to.len());
            for (attr, end) in to.iter() {
                let start = match from.get(attr) {
                    Some(v) => *v,
                    None => self.current_value(store, element, attr, now)?.unwrap_or(*end),
                };
                legs.push((attr.clone(), start, *end));
            }

            for (attr, value) in from.iter() {
                self.supersede(element, attr);
                self.drop_waiting(element, attr, Some(id));
                store.write_attr(element, attr, *value);
            }

            for (attr, start, end) in legs {
                self.supersede(element, &attr);
                self.drop_waiting(element, &attr, Some(id));
                store.write_attr(element, &attr, start);
                self.active.insert(
                    (element, attr.clone()),
                    Transition {
                        element,
                        attribute: attr.clone(),
                        start_value: start,
                        end_value: end,
                        start_time,
                        duration_ms: opts.duration_ms,
                        easing: opts.easing,
                        group: id,
                        state: TransitionState::Running,
                    },
                );
                pending.push(attr);
            }
        }
        self.next_group += 1;

        tracing::trace!(
            group = id.0,
            attrs = pending.len(),
            duration_ms = opts.duration_ms,
            delay_ms = opts.delay_ms,
            "transition started"
        );
        self.groups.insert(
            id,
            Group {
                element,
                start: start_time,
                pending,
                on_end: opts.on_end,
                then,
                superseded: false,
            },
        );
        Ok(id)
    }

    #[allow(clippy::too_many_arguments)]
    fn wait(
        &mut self,
        element: ElementId,
        attr: &Attr,
        from: Option<AttrValue>,
        end: AttrValue,
        start_time: Millis,
        opts: &TransitionOpts,
        group: TransitionGroupId,
    ) {
        self.waiting
            .entry((element, attr.clone()))
            .or_default()
            .push(Waiting {
                transition: Transition {
                    element,
                    attribute: attr.clone(),
                    start_value: from.unwrap_or(end),
                    end_value: end,
                    start_time,
                    duration_ms: opts.duration_ms,
                    easing: opts.easing,
                    group,
                    state: TransitionState::Scheduled,
                },
                from,
            });
    }

    /// Promote waiting legs whose start time has come, in start order.
    ///
    /// A running transition that ends no later than the newcomer's start lands first; otherwise
    /// it is superseded and hands over its value at that start time.
    fn start_due<S: AttrStore + ?Sized>(
        &mut self,
        store: &mut S,
        now: Millis,
    ) -> VizjoinResult<Vec<(TransitionGroupId, Group, Millis)>> {
        let mut due: Vec<Waiting> = Vec::new();
        for list in self.waiting.values_mut() {
            let (ready, rest): (Vec<Waiting>, Vec<Waiting>) = std::mem::take(list)
                .into_iter()
                .partition(|w| w.transition.start_time <= now);
            *list = rest;
            due.extend(ready);
        }
        self.waiting.retain(|_, list| !list.is_empty());
        due.sort_by(|a, b| order(&a.transition, &b.transition));

        let mut finished = Vec::new();
        for w in due {
            let mut t = w.transition;
            let key = (t.element, t.attribute.clone());
            // An earlier start on this pair may already have cancelled it.
            if self
                .groups
                .get(&t.group)
                .is_none_or(|g| !g.pending.contains(&t.attribute))
            {
                continue;
            }
            let newer_running = self
                .active
                .get(&key)
                .is_some_and(|cur| cur.group > t.group);
            if newer_running || !store.contains(t.element) {
                self.detach(t.group, &t.attribute, true);
                continue;
            }

            let handover = match self.active.remove(&key) {
                Some(old) if old.progress(t.start_time) >= 1.0 => {
                    store.write_attr(t.element, &t.attribute, old.end_value);
                    if let Some(g) = self.detach(old.group, &t.attribute, false) {
                        finished.push((old.group, g, old.end_time()));
                    }
                    None
                }
                Some(old) => {
                    let v = old.sample(t.start_time)?;
                    self.detach(old.group, &t.attribute, true);
                    Some(v)
                }
                None => None,
            };
            self.drop_waiting(t.element, &t.attribute, Some(t.group));

            t.start_value = match w.from {
                Some(v) => v,
                None => match handover {
                    Some(v) => v,
                    None => match store.read_attr(t.element, &t.attribute) {
                        Some(v) => {
                            v.check_for(&t.attribute)?;
                            v
                        }
                        None => t.end_value,
                    },
                },
            };
            store.write_attr(t.element, &t.attribute, t.start_value);
            t.state = TransitionState::Running;
            self.active.insert(key, t);
        }
        Ok(finished)
    }

    /// Displayed value of the pair at `now`, following a running transition if there is one.
    fn current_value<S: AttrStore + ?Sized>(
        &self,
        store: &S,
        element: ElementId,
        attr: &Attr,
        now: Millis,
    ) -> VizjoinResult<Option<AttrValue>> {
        if let Some(running) = self.active.get(&(element, attr.clone())) {
            return running.sample(now).map(Some);
        }
        match store.read_attr(element, attr) {
            Some(v) => {
                v.check_for(attr)?;
                Ok(Some(v))
            }
            None => Ok(None),
        }
    }

    fn supersede(&mut self, element: ElementId, attr: &Attr) {
        if let Some(mut old) = self.active.remove(&(element, attr.clone())) {
            old.state = TransitionState::Superseded;
            self.detach(old.group, attr, true);
        }
    }

    /// Cancel waiting legs on the pair created before `newer` (all of them for `None`).
    fn drop_waiting(&mut self, element: ElementId, attr: &Attr, newer: Option<TransitionGroupId>) {
        let key = (element, attr.clone());
        let Some(list) = self.waiting.get_mut(&key) else {
            return;
        };
        let (gone, kept): (Vec<Waiting>, Vec<Waiting>) = std::mem::take(list)
            .into_iter()
            .partition(|w| newer.is_none_or(|n| w.transition.group < n));
        *list = kept;
        if list.is_empty() {
            self.waiting.remove(&key);
        }
        for w in gone {
            self.detach(w.transition.group, attr, true);
        }
    }

    /// Remove `attr` from its group. Returns the group once nothing is pending and it was
    /// never superseded.
    fn detach(&mut self, id: TransitionGroupId, attr: &Attr, superseded: bool) -> Option<Group> {
        let group = self.groups.get_mut(&id)?;
        group.pending.retain(|a| a != attr);
        if superseded {
            group.superseded = true;
            group.on_end = None;
            group.then.clear();
        }
        if !group.pending.is_empty() {
            return None;
        }
        let group = self.groups.remove(&id)?;
        if group.superseded {
            self.settle(id, TransitionState::Superseded);
            return None;
        }
        Some(group)
    }

    fn settle(&mut self, id: TransitionGroupId, state: TransitionState) {
        self.settled.insert(id, state);
        while self.settled.len() > SETTLED_HISTORY {
            self.settled.pop_first();
        }
    }

    fn waiting_count(&self) -> usize {
        self.waiting.values().map(Vec::len).sum()
    }
}

fn order(a: &Transition, b: &Transition) -> std::cmp::Ordering {
    a.start_time
        .0
        .total_cmp(&b.start_time.0)
        .then(a.group.cmp(&b.group))
}

fn unbound(element: ElementId) -> VizjoinError {
    VizjoinError::validation(format!("element {element} is not bound"))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
