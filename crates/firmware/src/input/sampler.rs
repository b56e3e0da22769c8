//! GPIO sampling front end.
//!
//! Reads every button pin once per tick and hands the logical levels to the
//! debounce engine. A failed read skips that channel for the tick; the
//! channel keeps its previous candidate, so a flaky line looks like a missing
//! sample rather than an edge.

use digital_input::DigitalInputs;
use platform::{InputPin, Polarity, TickSource};

/// Reads `N` button pins and maps them to logical active levels.
pub struct ButtonSampler<P, const N: usize> {
    pins: [P; N],
    polarity: Polarity,
    read_errors: u32,
}

impl<P: InputPin, const N: usize> ButtonSampler<P, N> {
    /// Wrap the board's button pins. Index `i` feeds channel `i`.
    pub fn new(pins: [P; N], polarity: Polarity) -> Self {
        Self {
            pins,
            polarity,
            read_errors: 0,
        }
    }

    /// Read every pin once.
    ///
    /// `None` marks a pin whose read failed this tick.
    #[cfg_attr(not(any(feature = "defmt", feature = "tracing")), allow(unused_variables))]
    pub fn read_levels(&mut self) -> [Option<bool>; N] {
        let mut levels = [None; N];
        for (index, (pin, level)) in self.pins.iter_mut().zip(levels.iter_mut()).enumerate() {
            match pin.state() {
                Ok(state) => *level = Some(self.polarity.is_active(state)),
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Button{} read failed", index);
                    #[cfg(feature = "tracing")]
                    tracing::warn!(channel = index, "button read failed");
                    self.read_errors = self.read_errors.wrapping_add(1);
                }
            }
        }
        levels
    }

    /// Feed previously read levels into `inputs`, skipping failed reads.
    pub fn feed_levels<T: TickSource>(levels: &[Option<bool>; N], inputs: &mut DigitalInputs<T, N>) {
        for (index, level) in levels.iter().enumerate() {
            if let Some(level) = level {
                inputs.feed_sample(index, *level);
            }
        }
    }

    /// Read every pin and feed the result into `inputs`.
    pub fn sample_into<T: TickSource>(&mut self, inputs: &mut DigitalInputs<T, N>) {
        let levels = self.read_levels();
        Self::feed_levels(&levels, inputs);
    }

    /// Pin polarity in use.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Total failed pin reads since construction (wrapping).
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }

    /// Mutable access to the wrapped pins.
    pub fn pins_mut(&mut self) -> &mut [P; N] {
        &mut self.pins
    }

    /// Return the wrapped pins.
    pub fn into_pins(self) -> [P; N] {
        self.pins
    }
}
