use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    animation::attr::{Attr, AttrMap},
    animation::scheduler::{AttrStore, Scheduler, TickReport},
    chart::config::ChartConfig,
    foundation::core::{ElementId, Millis, Point},
    foundation::error::{VizjoinError, VizjoinResult},
    join::bindings::{Bindings, Phase, Rebind},
    pointer::coordinator::{Coordinator, Effects, HoverState, PointerEffect},
};

/// Maps records to visual attributes for one chart.
///
/// Implementations typically hold the scales rebuilt for the current dataset.
pub trait Encoder<R> {
    /// Attributes written when an element is created, before it animates to [`Encoder::target`].
    fn enter(&self, record: &R, index: usize) -> VizjoinResult<AttrMap>;

    /// Attributes a live element animates toward. `index` is the record's dataset position.
    fn target(&self, record: &R, index: usize) -> VizjoinResult<AttrMap>;

    /// Attributes an exiting element animates toward before removal. Empty removes it at once.
    fn exit(&self, _record: &R) -> VizjoinResult<AttrMap> {
        Ok(AttrMap::new())
    }

    /// Tooltip text for a hovered record.
    fn tooltip(&self, _record: &R) -> Vec<String> {
        Vec::new()
    }
}

/// Result of [`ChartInstance::render`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderReport {
    /// Element ids per join phase.
    pub plan: Rebind,
    /// Pointer effects caused by exiting elements.
    pub pointer: Effects,
}

/// Result of [`ChartInstance::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Scheduler outcome.
    pub transitions: TickReport,
    /// Exited elements dropped this frame.
    pub removed: Vec<ElementId>,
    /// Trailing tooltip move released this frame.
    pub pointer: Option<PointerEffect>,
}

/// One chart: live bindings, their transitions and the pointer state.
#[derive(Debug)]
pub struct ChartInstance<K, R> {
    config: ChartConfig,
    bindings: Bindings<K, R>,
    scheduler: Scheduler,
    pointer: Coordinator<R>,
}

impl<K, R> ChartInstance<K, R>
where
    K: Clone + Eq + Hash + Debug,
    R: Clone,
{
    /// Empty chart.
    pub fn new(config: ChartConfig) -> VizjoinResult<Self> {
        config.validate()?;
        Ok(Self {
            pointer: Coordinator::new(config.throttle_ms, config.tooltip_offset()),
            config,
            bindings: Bindings::new(),
            scheduler: Scheduler::new(),
        })
    }

    /// Bind `data` and start the enter/update/exit transitions.
    ///
    /// Every record is encoded before anything changes, so an error leaves the chart as it was.
    #[tracing::instrument(skip_all, fields(records = data.len()))]
    pub fn render<E: Encoder<R> + ?Sized>(
        &mut self,
        data: &[R],
        key_fn: impl Fn(&R) -> Option<K>,
        encoder: &E,
        now: Millis,
    ) -> VizjoinResult<RenderReport> {
        let mut enters = Vec::with_capacity(data.len());
        let mut targets = Vec::with_capacity(data.len());
        for (i, record) in data.iter().enumerate() {
            let enter = encoder.enter(record, i)?;
            enter.validate()?;
            let target = encoder.target(record, i)?;
            target.validate()?;
            enters.push(enter);
            targets.push(target);
        }
        let mut exits: HashMap<ElementId, AttrMap> = HashMap::with_capacity(self.bindings.len());
        for el in self.bindings.live() {
            let exit = encoder.exit(el.datum())?;
            exit.validate()?;
            exits.insert(el.id(), exit);
        }

        let plan = self.bindings.rebind(data, &key_fn)?;
        let index_of: HashMap<ElementId, usize> = self
            .bindings
            .live()
            .enumerate()
            .map(|(i, el)| (el.id(), i))
            .collect();

        let mut effects = Effects::new();
        for &id in &plan.exit {
            let removed = self.pointer.element_removed(id);
            self.apply_highlight(&removed)?;
            effects.extend(removed);
            let to = exits.remove(&id).unwrap_or_default();
            if to.is_empty() {
                self.scheduler.cancel_element(id);
                self.bindings.remove(id);
            } else {
                self.scheduler.animate(
                    &mut self.bindings,
                    id,
                    &AttrMap::new(),
                    &to,
                    self.config.transition.into(),
                    now,
                )?;
            }
        }

        for &id in &plan.enter {
            let Some(&i) = index_of.get(&id) else {
                continue;
            };
            self.scheduler.animate(
                &mut self.bindings,
                id,
                &enters[i],
                &targets[i],
                self.config.transition.into(),
                now,
            )?;
        }

        for &id in &plan.update {
            let Some(&i) = index_of.get(&id) else {
                continue;
            };
            self.scheduler.animate(
                &mut self.bindings,
                id,
                &AttrMap::new(),
                &targets[i],
                self.config.transition.into(),
                now,
            )?;
            if let Some(flash) = &self.config.update_flash {
                self.scheduler
                    .chain(&mut self.bindings, id, [flash.step()], now)?;
            }
        }

        tracing::debug!(
            enter = plan.enter.len(),
            update = plan.update.len(),
            exit = plan.exit.len(),
            animating = self.scheduler.active_count(),
            "render pass"
        );
        Ok(RenderReport {
            plan,
            pointer: effects,
        })
    }

    /// Advance transitions, drop finished exits and release a trailing tooltip move.
    pub fn tick(&mut self, now: Millis) -> VizjoinResult<FrameReport> {
        let transitions = self.scheduler.tick(&mut self.bindings, now)?;
        let removed: Vec<ElementId> = self
            .bindings
            .exiting()
            .filter(|id| !self.scheduler.is_animating(*id))
            .collect();
        for id in &removed {
            self.bindings.remove(*id);
        }
        Ok(FrameReport {
            transitions,
            removed,
            pointer: self.pointer.poll(now),
        })
    }

    /// Pointer entered `element`.
    pub fn pointer_enter(
        &mut self,
        element: ElementId,
        point: Point,
        now: Millis,
    ) -> VizjoinResult<Effects> {
        let Some(record) = self.hoverable(element)? else {
            return Ok(Effects::new());
        };
        let effects = self.pointer.pointer_enter(element, record, point, now);
        self.apply_highlight(&effects)?;
        Ok(effects)
    }

    /// Pointer moved over `element`.
    pub fn pointer_move(
        &mut self,
        element: ElementId,
        point: Point,
        now: Millis,
    ) -> VizjoinResult<Effects> {
        let Some(record) = self.hoverable(element)? else {
            return Ok(Effects::new());
        };
        let effects = self.pointer.pointer_move(element, record, point, now);
        self.apply_highlight(&effects)?;
        Ok(effects)
    }

    /// Pointer left `element`.
    pub fn pointer_leave(&mut self, element: ElementId) -> VizjoinResult<Effects> {
        let effects = self.pointer.pointer_leave(element);
        self.apply_highlight(&effects)?;
        Ok(effects)
    }

    /// Current hover.
    pub fn hover(&self) -> Option<&HoverState<R>> {
        self.pointer.hover()
    }

    /// Tooltip anchor for the current hover.
    pub fn tooltip_anchor(&self) -> Option<Point> {
        self.pointer.anchor()
    }

    /// Tooltip text for the current hover.
    pub fn tooltip_lines<E: Encoder<R> + ?Sized>(&self, encoder: &E) -> Vec<String> {
        self.pointer
            .hover()
            .map(|h| encoder.tooltip(&h.record))
            .unwrap_or_default()
    }

    /// Displayed attributes of `element`.
    pub fn attrs(&self, element: ElementId) -> Option<&AttrMap> {
        self.bindings.get(element).map(|el| el.attrs())
    }

    /// Live index.
    pub fn bindings(&self) -> &Bindings<K, R> {
        &self.bindings
    }

    /// Transition scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Drop all elements, transitions and hover state.
    pub fn teardown(&mut self) {
        self.scheduler.clear();
        self.pointer.teardown();
        self.bindings.clear();
        tracing::debug!("chart torn down");
    }

    fn hoverable(&self, element: ElementId) -> VizjoinResult<Option<R>> {
        match self.bindings.get(element) {
            Some(el) if el.phase() == Phase::Live => Ok(Some(el.datum().clone())),
            Some(_) => Ok(None),
            None => Err(VizjoinError::validation(format!(
                "element {element} is not bound"
            ))),
        }
    }

    fn apply_highlight(&mut self, effects: &[PointerEffect]) -> VizjoinResult<()> {
        let style = self.config.highlight;
        for effect in effects {
            match *effect {
                PointerEffect::Highlight(id) => {
                    self.scheduler
                        .set(&mut self.bindings, id, Attr::Stroke, style.stroke)?;
                }
                PointerEffect::Unhighlight(id) if self.bindings.contains(id) => {
                    self.scheduler
                        .set(&mut self.bindings, id, Attr::Stroke, style.idle_stroke)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/instance.rs"]
mod tests;
