//! Platform tick counter.
//!
//! The debounce engine measures stability windows in milliseconds from a
//! free-running `u32` counter. The counter wraps roughly every 49.7 days, so
//! every duration must be computed with [`elapsed_ms`] (modular subtraction),
//! never with plain `-`.

/// Monotonic millisecond tick counter that wraps at `u32::MAX`.
pub trait TickSource {
    /// Current tick count in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds from `start` to `now`, correct across one counter wrap.
#[inline]
pub fn elapsed_ms(start: u32, now: u32) -> u32 {
    now.wrapping_sub(start)
}

/// Tick source backed by the Embassy time driver.
///
/// On hardware the driver is the MCU timer selected by the firmware's
/// `embassy-time` tick-rate feature; on desktop it is embassy-time's `std`
/// driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTicks;

impl EmbassyTicks {
    /// Create a tick source reading [`embassy_time::Instant::now`].
    pub const fn new() -> Self {
        Self
    }
}

impl TickSource for EmbassyTicks {
    #[allow(clippy::cast_possible_truncation)] // truncation to u32 is the wraparound
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
