use crate::{
    animation::attr::{Attr, AttrMap, AttrValue},
    animation::ease::{Ease, Easing},
    foundation::core::{ElementId, Millis},
    foundation::error::{VizjoinError, VizjoinResult},
};

/// Callback fired once when every attribute of a transition call has completed.
///
/// Superseded calls drop their callback without invoking it.
pub type OnEnd = Box<dyn FnOnce(ElementId)>;

/// Handle of one `animate` / `chain` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionGroupId(pub u64);

/// Lifecycle of a single (element, attribute) transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    /// Registered, waiting for its delay to elapse.
    Scheduled,
    /// Interpolating on every tick.
    Running,
    /// Reached its end value. Terminal.
    Completed,
    /// Replaced by a newer transition on the same pair, or its element went away. Terminal.
    Superseded,
}

/// Serializable timing configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Interpolation length.
    pub duration_ms: f64,
    /// Wait before the transition starts.
    pub delay_ms: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250.0,
            delay_ms: 0.0,
            ease: Ease::default(),
        }
    }
}

impl TransitionConfig {
    /// Config with the given duration and default ease.
    pub fn millis(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Replace the ease.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Replace the delay.
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Durations must be finite and non-negative.
    pub fn validate(&self) -> VizjoinResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(VizjoinError::validation(
                "transition duration_ms must be finite and >= 0",
            ));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(VizjoinError::validation(
                "transition delay_ms must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Runtime options for one transition call.
pub struct TransitionOpts {
    pub(crate) duration_ms: f64,
    pub(crate) delay_ms: f64,
    pub(crate) easing: Easing,
    pub(crate) on_end: Option<OnEnd>,
}

impl TransitionOpts {
    /// Options with the given duration and default easing.
    pub fn millis(duration_ms: f64) -> Self {
        TransitionConfig::millis(duration_ms).into()
    }

    /// Replace the easing (named or custom).
    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Set the start delay.
    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Register a completion callback.
    pub fn on_end(mut self, f: impl FnOnce(ElementId) + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    pub(crate) fn validate(&self) -> VizjoinResult<()> {
        TransitionConfig {
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms,
            ease: Ease::Linear,
        }
        .validate()
    }
}

impl From<TransitionConfig> for TransitionOpts {
    fn from(value: TransitionConfig) -> Self {
        Self {
            duration_ms: value.duration_ms,
            delay_ms: value.delay_ms,
            easing: Easing::Named(value.ease),
            on_end: None,
        }
    }
}

impl std::fmt::Debug for TransitionOpts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionOpts")
            .field("duration_ms", &self.duration_ms)
            .field("delay_ms", &self.delay_ms)
            .field("easing", &self.easing)
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// One step of a chained sequence on an element.
#[derive(Debug)]
pub struct Step {
    /// Values written when the step starts.
    pub from: AttrMap,
    /// Values the step interpolates toward.
    pub to: AttrMap,
    /// Timing and callback.
    pub opts: TransitionOpts,
}

impl Step {
    /// Step toward `to` from whatever the element currently shows.
    pub fn to(to: AttrMap, opts: impl Into<TransitionOpts>) -> Self {
        Self {
            from: AttrMap::new(),
            to,
            opts: opts.into(),
        }
    }

    /// Step that first writes `from`, then interpolates to `to`.
    pub fn from_to(from: AttrMap, to: AttrMap, opts: impl Into<TransitionOpts>) -> Self {
        Self {
            from,
            to,
            opts: opts.into(),
        }
    }

    pub(crate) fn validate(&self) -> VizjoinResult<()> {
        self.from.validate()?;
        self.to.validate()?;
        self.opts.validate()
    }
}

/// Time-bounded interpolation of one attribute on one element.
#[derive(Clone, Debug)]
pub struct Transition {
    /// Target element.
    pub element: ElementId,
    /// Target attribute.
    pub attribute: Attr,
    /// Value at `start_time`.
    pub start_value: AttrValue,
    /// Value at `start_time + duration_ms`.
    pub end_value: AttrValue,
    /// Clock time at which interpolation begins (after any delay).
    pub start_time: Millis,
    /// Interpolation length.
    pub duration_ms: f64,
    /// Easing curve.
    pub easing: Easing,
    pub(crate) group: TransitionGroupId,
    pub(crate) state: TransitionState,
}

impl Transition {
    /// Current lifecycle state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Clock time at which the end value is reached.
    pub fn end_time(&self) -> Millis {
        self.start_time.offset(self.duration_ms)
    }

    /// Elapsed fraction `clamp((now - start) / duration, 0, 1)`; zero duration is complete.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration_ms <= 0.0 {
            return if now >= self.start_time { 1.0 } else { 0.0 };
        }
        (now.since(self.start_time) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`; exactly `end_value` once complete.
    pub fn sample(&self, now: Millis) -> VizjoinResult<AttrValue> {
        let f = self.progress(now);
        if f >= 1.0 {
            return Ok(self.end_value);
        }
        self.start_value
            .interpolate(&self.end_value, self.easing.apply(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
