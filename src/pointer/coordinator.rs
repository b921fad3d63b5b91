use smallvec::{SmallVec, smallvec};

use crate::{
    foundation::core::{ElementId, Millis, Point, Vec2},
    pointer::throttle::{DEFAULT_THROTTLE_MS, Throttle},
};

/// Default distance from the pointer to the tooltip's top-left corner.
pub const DEFAULT_TOOLTIP_OFFSET: Vec2 = Vec2::new(15.0, 15.0);

/// The single hovered record of a chart instance.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverState<R> {
    /// Element that was entered. Hover stays pinned to it until leave.
    pub element: ElementId,
    /// Record captured at enter time.
    pub record: R,
    /// Last pointer position that reached the tooltip.
    pub point: Point,
}

/// Visual side effect requested from the drawing layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEffect {
    /// Apply the hover highlight to the element.
    Highlight(ElementId),
    /// Remove the hover highlight from the element.
    Unhighlight(ElementId),
    /// Show or move the tooltip to `anchor`.
    TooltipMoved {
        /// Pointer position plus the tooltip offset.
        anchor: Point,
    },
    /// Hide the tooltip.
    TooltipHidden,
}

/// Effects produced by one pointer event.
pub type Effects = SmallVec<[PointerEffect; 3]>;

/// Hover, highlight and tooltip bookkeeping for one chart instance.
#[derive(Clone, Debug)]
pub struct Coordinator<R> {
    hover: Option<HoverState<R>>,
    moves: Throttle<Point>,
    offset: Vec2,
}

impl<R> Default for Coordinator<R> {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS, DEFAULT_TOOLTIP_OFFSET)
    }
}

impl<R> Coordinator<R> {
    /// Coordinator with its move throttle and tooltip offset.
    pub fn new(throttle_ms: f64, tooltip_offset: Vec2) -> Self {
        Self {
            hover: None,
            moves: Throttle::new(throttle_ms),
            offset: tooltip_offset,
        }
    }

    /// Current hover state.
    pub fn hover(&self) -> Option<&HoverState<R>> {
        self.hover.as_ref()
    }

    /// Element currently highlighted. At most one.
    pub fn highlighted(&self) -> Option<ElementId> {
        self.hover.as_ref().map(|h| h.element)
    }

    /// Tooltip anchor for the current hover.
    pub fn anchor(&self) -> Option<Point> {
        self.hover.as_ref().map(|h| h.point + self.offset)
    }

    /// Pointer entered `element`. A different hovered element is left first.
    pub fn pointer_enter(
        &mut self,
        element: ElementId,
        record: R,
        point: Point,
        now: Millis,
    ) -> Effects {
        let mut effects = Effects::new();
        if let Some(current) = &mut self.hover {
            if current.element == element {
                current.point = point;
                self.moves.cancel();
                effects.push(PointerEffect::TooltipMoved {
                    anchor: point + self.offset,
                });
                return effects;
            }
            effects.push(PointerEffect::Unhighlight(current.element));
        }

        self.moves.reset();
        self.moves.call(point, now);
        self.hover = Some(HoverState {
            element,
            record,
            point,
        });
        effects.push(PointerEffect::Highlight(element));
        effects.push(PointerEffect::TooltipMoved {
            anchor: point + self.offset,
        });
        effects
    }

    /// Pointer moved over `element`.
    ///
    /// On the hovered element only the point changes, throttled. Anywhere else this is an
    /// implicit leave-then-enter carrying `record`.
    pub fn pointer_move(
        &mut self,
        element: ElementId,
        record: R,
        point: Point,
        now: Millis,
    ) -> Effects {
        if self.highlighted() != Some(element) {
            return self.pointer_enter(element, record, point, now);
        }
        match self.moves.call(point, now) {
            Some(p) => smallvec![self.move_to(p)],
            None => Effects::new(),
        }
    }

    /// Pointer left `element`. Ignored unless it is the hovered one.
    pub fn pointer_leave(&mut self, element: ElementId) -> Effects {
        if self.highlighted() != Some(element) {
            return Effects::new();
        }
        self.clear()
    }

    /// Release a throttled trailing move.
    pub fn poll(&mut self, now: Millis) -> Option<PointerEffect> {
        let point = self.moves.poll(now)?;
        self.hover.as_ref()?;
        Some(self.move_to(point))
    }

    /// Element is gone; drop the hover if it pointed there.
    pub fn element_removed(&mut self, element: ElementId) -> Effects {
        self.pointer_leave(element)
    }

    /// Forget all state without emitting effects.
    pub fn teardown(&mut self) {
        self.hover = None;
        self.moves.reset();
    }

    fn move_to(&mut self, point: Point) -> PointerEffect {
        if let Some(h) = &mut self.hover {
            h.point = point;
        }
        PointerEffect::TooltipMoved {
            anchor: point + self.offset,
        }
    }

    fn clear(&mut self) -> Effects {
        self.moves.cancel();
        match self.hover.take() {
            Some(h) => smallvec![
                PointerEffect::Unhighlight(h.element),
                PointerEffect::TooltipHidden
            ],
            None => Effects::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/coordinator.rs"]
mod tests;
