//! Stability-window debouncer.
//!
//! A new level is accepted only after the raw input has held it for the
//! whole threshold. Every raw edge restarts the window, so an input that
//! keeps bouncing faster than the threshold never changes the debounced
//! state:
//!
//! ```text
//! raw        ‾‾|_|‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
//!              ^ ^ window restarts on each edge
//! debounced  ____________________|‾‾‾‾   accepted once held >= threshold
//! ```
//!
//! Ticks are a free-running `u32` millisecond counter; durations go through
//! [`platform::elapsed_ms`] so a counter wrap inside a window is harmless.

use platform::elapsed_ms;

/// Per-channel debounce timing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Debouncer {
    raw: bool,
    candidate_start: u32,
    debounced: bool,
}

impl Debouncer {
    /// Inactive, with the window anchored at tick 0.
    pub const fn new() -> Self {
        Self {
            raw: false,
            candidate_start: 0,
            debounced: false,
        }
    }

    /// Ingest one raw sample taken at tick `now`.
    ///
    /// Returns `true` if the debounced state changed on this call. With a
    /// threshold of 0 a new level is accepted on the sample that first shows it.
    pub fn feed(&mut self, level: bool, now: u32, threshold_ms: u32) -> bool {
        if level != self.raw {
            self.candidate_start = now;
            self.raw = level;
        }

        if self.debounced != level && elapsed_ms(self.candidate_start, now) >= threshold_ms {
            self.debounced = level;
            return true;
        }

        false
    }

    /// Most recent unfiltered sample.
    pub fn raw(&self) -> bool {
        self.raw
    }

    /// Tick at which the raw level last changed.
    pub fn candidate_start(&self) -> u32 {
        self.candidate_start
    }

    /// Filtered state.
    pub fn debounced(&self) -> bool {
        self.debounced
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    const T: u32 = 100;

    #[test]
    fn test_accepts_after_threshold() {
        let mut d = Debouncer::new();
        assert!(!d.feed(true, 1000, T));
        assert!(!d.feed(true, 1099, T));
        assert!(d.feed(true, 1100, T));
        assert!(d.debounced());
    }

    #[test]
    fn test_change_reported_once() {
        let mut d = Debouncer::new();
        d.feed(true, 0, T);
        assert!(d.feed(true, 100, T));
        assert!(!d.feed(true, 200, T));
        assert!(!d.feed(true, 300, T));
    }

    #[test]
    fn test_bounce_restarts_window() {
        let mut d = Debouncer::new();
        d.feed(true, 0, T);
        d.feed(false, 30, T);
        d.feed(true, 40, T);
        // 120 ms after the first edge but only 80 ms after the last one.
        assert!(!d.feed(true, 120, T));
        assert!(d.feed(true, 140, T));
    }

    #[test]
    fn test_candidate_start_tracks_every_edge() {
        let mut d = Debouncer::new();
        d.feed(true, 10, T);
        assert_eq!(d.candidate_start(), 10);
        d.feed(true, 20, T);
        assert_eq!(d.candidate_start(), 10);
        d.feed(false, 25, T);
        assert_eq!(d.candidate_start(), 25);
        assert!(!d.raw());
        assert!(!d.debounced());
    }

    #[test]
    fn test_zero_threshold_accepts_immediately() {
        let mut d = Debouncer::new();
        assert!(d.feed(true, 5, 0));
        assert!(d.feed(false, 5, 0));
    }

    #[test]
    fn test_release_is_debounced_too() {
        let mut d = Debouncer::new();
        d.feed(true, 0, T);
        d.feed(true, 100, T);
        assert!(!d.feed(false, 150, T));
        assert!(d.debounced());
        assert!(d.feed(false, 250, T));
        assert!(!d.debounced());
    }

    #[test]
    fn test_window_across_tick_wrap() {
        let mut d = Debouncer::new();
        let start = u32::MAX - 49;
        d.feed(true, start, T);
        assert!(!d.feed(true, 20, T)); // 70 ms elapsed
        assert!(d.feed(true, 50, T)); // 100 ms elapsed
    }

    #[test]
    fn test_reset() {
        let mut d = Debouncer::new();
        d.feed(true, 0, 0);
        d.reset();
        assert_eq!(d, Debouncer::new());
    }
}
