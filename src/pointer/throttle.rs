use crate::foundation::core::Millis;

/// Default pointer-move interval.
pub const DEFAULT_THROTTLE_MS: f64 = 10.0;

/// Leading + trailing edge rate limiter driven by an explicit clock.
///
/// A call outside the window fires immediately. Calls inside the window replace the pending
/// value, which [`Throttle::poll`] releases once the window has elapsed, so the last value of a
/// burst is never lost.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    interval_ms: f64,
    last_fired: Option<Millis>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Throttle with the given window; negative or non-finite windows collapse to zero.
    pub fn new(interval_ms: f64) -> Self {
        let interval_ms = if interval_ms.is_finite() {
            interval_ms.max(0.0)
        } else {
            0.0
        };
        Self {
            interval_ms,
            last_fired: None,
            pending: None,
        }
    }

    /// Window length.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    fn open(&self, now: Millis) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now.since(last) >= self.interval_ms,
        }
    }

    /// Offer a value. Returns it back when it should fire now.
    pub fn call(&mut self, value: T, now: Millis) -> Option<T> {
        if self.open(now) {
            self.last_fired = Some(now);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Release the trailing value once its window has elapsed.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        if self.pending.is_some() && self.open(now) {
            self.last_fired = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Clock time at which the pending value becomes releasable.
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref()?;
        Some(self.last_fired.map_or(Millis::ZERO, |l| l.offset(self.interval_ms)))
    }

    /// `true` while a trailing value waits.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard the pending value.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Forget the pending value and the last firing time.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_fired = None;
    }
}

impl<T> Default for Throttle<T> {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/throttle.rs"]
mod tests;
