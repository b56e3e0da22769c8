//! GPIO input abstraction layer
//!
//! Raw, unfiltered digital input lines. Debouncing happens further up in the
//! `digital-input` crate; this layer only answers "what level is the pin at
//! right now".

/// Input pin operations
pub trait InputPin {
    /// Error type
    type Error;

    /// Read pin state
    fn is_high(&mut self) -> Result<bool, Self::Error>;

    /// Read pin state (inverted)
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|v| !v)
    }

    /// Read pin state as a [`PinState`]
    fn state(&mut self) -> Result<PinState, Self::Error> {
        self.is_high().map(PinState::from)
    }
}

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Which electrical level means "pressed".
///
/// Buttons wired to ground with an internal pull-up read low while pressed
/// and are [`Polarity::ActiveLow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High level = active
    #[default]
    ActiveHigh,
    /// Low level = active (pull-up wiring)
    ActiveLow,
}

impl Polarity {
    /// Map an electrical level to the logical active state.
    pub fn is_active(self, state: PinState) -> bool {
        match self {
            Self::ActiveHigh => state == PinState::High,
            Self::ActiveLow => state == PinState::Low,
        }
    }
}

/// Adapter from an `embedded-hal` 1.0 input pin to [`InputPin`].
///
/// Board HAL pins (embassy-stm32 `Input`, `ExtiInput`, ...) implement
/// `embedded_hal::digital::InputPin`; wrapping them here keeps the rest of
/// the workspace independent of any particular HAL.
pub struct HalInput<P> {
    pin: P,
}

impl<P> HalInput<P> {
    /// Wrap a HAL pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Return the wrapped HAL pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for HalInput<P> {
    type Error = P::Error;

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}
