//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits
//! for use in unit and integration tests and in the desktop simulation.

#![cfg(any(test, feature = "std"))]

use core::cell::Cell;

use crate::{InputPin, TickSource};

/// Mock tick counter.
///
/// Interior mutability lets a test keep a `&MockTicks` while the code under
/// test owns another reference to the same clock.
#[derive(Debug, Default)]
pub struct MockTicks {
    now: Cell<u32>,
}

impl MockTicks {
    /// Create a clock reading `start`.
    pub fn new(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Jump to an absolute tick value.
    pub fn set(&self, now: u32) {
        self.now.set(now);
    }

    /// Advance by `ms`, wrapping at `u32::MAX` like a hardware counter.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl TickSource for MockTicks {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Error returned by a [`MockPin`] read that was scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

/// Maximum number of scripted reads a [`MockPin`] holds.
pub const MOCK_PIN_DEPTH: usize = 32;

/// Mock input pin with a scripted sequence of reads.
///
/// Each read pops the next scripted result. Once the script is exhausted the
/// pin keeps reporting the last level it returned.
pub struct MockPin {
    script: heapless::Deque<Result<bool, MockPinError>, MOCK_PIN_DEPTH>,
    level: bool,
    reads: usize,
}

impl MockPin {
    /// Create a pin resting at `level`.
    pub fn new(level: bool) -> Self {
        Self {
            script: heapless::Deque::new(),
            level,
            reads: 0,
        }
    }

    /// Queue a level for a future read.
    pub fn push_level(&mut self, level: bool) -> Result<(), bool> {
        self.script.push_back(Ok(level)).map_err(|_| level)
    }

    /// Queue a failing read.
    pub fn push_error(&mut self) -> Result<(), MockPinError> {
        self.script
            .push_back(Err(MockPinError))
            .map_err(|_| MockPinError)
    }

    /// Change the resting level and drop any scripted reads.
    pub fn set_level(&mut self, level: bool) {
        self.script.clear();
        self.level = level;
    }

    /// Number of reads performed so far.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Default for MockPin {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputPin for MockPin {
    type Error = MockPinError;

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads = self.reads.wrapping_add(1);
        match self.script.pop_front() {
            Some(Ok(level)) => {
                self.level = level;
                Ok(level)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.level),
        }
    }
}
