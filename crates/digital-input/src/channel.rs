//! One digital input channel: configuration, published state, debouncer.

use crate::debounce::Debouncer;

/// A single debounced input and the values the registry mirrors.
///
/// Only the debounce period is writable from outside the crate; the state
/// fields change exclusively through sampling and reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    debounce_ms: u32,
    published: bool,
    counter: u32,
    debouncer: Debouncer,
}

impl Channel {
    pub(crate) const fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            published: false,
            counter: 0,
            debouncer: Debouncer::new(),
        }
    }

    pub(crate) fn reset(&mut self, debounce_ms: u32) {
        *self = Self::new(debounce_ms);
    }

    /// Feed a raw sample; `true` if the debounced state changed.
    pub(crate) fn feed(&mut self, level: bool, now: u32) -> bool {
        self.debouncer.feed(level, now, self.debounce_ms)
    }

    /// Copy the debounced state to the published state.
    ///
    /// Returns `true` if the published state changed. The counter counts
    /// inactive→active transitions only and wraps at `u32::MAX`.
    pub(crate) fn reconcile(&mut self) -> bool {
        let debounced = self.debouncer.debounced();
        if debounced == self.published {
            return false;
        }
        self.published = debounced;
        if debounced {
            self.counter = self.counter.wrapping_add(1);
        }
        true
    }

    /// Last state reported to the registry.
    pub fn state(&self) -> bool {
        self.published
    }

    /// Number of published inactive→active transitions.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Debounce period in milliseconds.
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Set the debounce period. Takes effect on the next sample.
    pub fn set_debounce_ms(&mut self, ms: u32) {
        self.debounce_ms = ms;
    }

    /// Most recent unfiltered sample.
    pub fn raw_state(&self) -> bool {
        self.debouncer.raw()
    }

    /// Current filtered state, not yet necessarily published.
    pub fn debounced_state(&self) -> bool {
        self.debouncer.debounced()
    }

    /// Tick at which the raw level last changed.
    pub fn candidate_start(&self) -> u32 {
        self.debouncer.candidate_start()
    }

    #[cfg(test)]
    pub(crate) fn with_counter(mut self, counter: u32) -> Self {
        self.counter = counter;
        self
    }
}
