//! Fluent builder API for input pipeline configuration.
//!
//! Holds the non-pin configuration (debounce period, sampling and publishing
//! cadence, pin polarity). GPIO objects are passed directly to
//! [`ButtonSampler::new`](super::ButtonSampler::new), which keeps the builder
//! free of HAL generics.
//!
//! # Usage
//!
//! ```
//! use firmware::input::builder::InputBuilder;
//! use platform::Polarity;
//!
//! let config = InputBuilder::buttons()
//!     .debounce_ms(50)
//!     .sample_period_ms(2)
//!     .reconcile_period_ms(100)
//!     .polarity(Polarity::ActiveLow)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.debounce_ms(), 50);
//! ```

use digital_input::{DigitalInputs, DEFAULT_DEBOUNCE_MS};
use embassy_time::Duration;
use platform::{Polarity, TickSource};

/// Default raw sampling period.
pub const DEFAULT_SAMPLE_PERIOD_MS: u32 = 5;

/// Default publishing period.
pub const DEFAULT_RECONCILE_PERIOD_MS: u32 = 100;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Rejected input configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `sample_period_ms` was 0
    ZeroSamplePeriod,
    /// `reconcile_period_ms` was shorter than `sample_period_ms`
    ReconcileFasterThanSampling,
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSamplePeriod => write!(f, "sample period must be at least 1 ms"),
            Self::ReconcileFasterThanSampling => {
                write!(f, "reconcile period must not be shorter than the sample period")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// InputBuilder — main builder struct
// ---------------------------------------------------------------------------

/// Fluent builder for the button input pipeline.
///
/// Call [`InputBuilder::buttons()`] to start, chain configuration methods,
/// and finish with [`InputBuilder::build()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBuilder {
    debounce_ms: u32,
    sample_period_ms: u32,
    reconcile_period_ms: u32,
    polarity: Polarity,
}

impl InputBuilder {
    /// Start building a button pipeline.
    ///
    /// Defaults: 100 ms debounce, 5 ms sampling, 100 ms publishing,
    /// active-low pins (internal pull-up, switch to ground).
    pub fn buttons() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            sample_period_ms: DEFAULT_SAMPLE_PERIOD_MS,
            reconcile_period_ms: DEFAULT_RECONCILE_PERIOD_MS,
            polarity: Polarity::ActiveLow,
        }
    }

    /// Set the default debounce period in milliseconds.
    ///
    /// Applied to every channel at initialization; the registry may change
    /// it per channel afterwards.
    #[must_use]
    pub fn debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set how often raw pin levels are sampled.
    #[must_use]
    pub fn sample_period_ms(mut self, ms: u32) -> Self {
        self.sample_period_ms = ms;
        self
    }

    /// Set how often debounced state is published to the registry.
    #[must_use]
    pub fn reconcile_period_ms(mut self, ms: u32) -> Self {
        self.reconcile_period_ms = ms;
        self
    }

    /// Set which pin level means "pressed".
    #[must_use]
    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<InputConfig, ConfigError> {
        if self.sample_period_ms == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        if self.reconcile_period_ms < self.sample_period_ms {
            return Err(ConfigError::ReconcileFasterThanSampling);
        }
        Ok(InputConfig {
            debounce_ms: self.debounce_ms,
            sample_period: Duration::from_millis(u64::from(self.sample_period_ms)),
            reconcile_period: Duration::from_millis(u64::from(self.reconcile_period_ms)),
            polarity: self.polarity,
        })
    }
}

impl Default for InputBuilder {
    fn default() -> Self {
        Self::buttons()
    }
}

// ---------------------------------------------------------------------------
// InputConfig — validated result
// ---------------------------------------------------------------------------

/// Validated input pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    debounce_ms: u32,
    sample_period: Duration,
    reconcile_period: Duration,
    polarity: Polarity,
}

impl InputConfig {
    /// Default debounce period in milliseconds.
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Raw sampling period.
    pub fn sample_period(&self) -> Duration {
        self.sample_period
    }

    /// Publishing period.
    pub fn reconcile_period(&self) -> Duration {
        self.reconcile_period
    }

    /// Pin polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Channel storage using this configuration's debounce default.
    pub fn inputs<T: TickSource, const N: usize>(&self, ticks: T) -> DigitalInputs<T, N> {
        DigitalInputs::with_default_debounce(ticks, self.debounce_ms)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use platform::mocks::MockTicks;

    #[test]
    fn test_defaults() {
        let config = InputBuilder::buttons().build().unwrap();
        assert_eq!(config.debounce_ms(), 100);
        assert_eq!(config.sample_period(), Duration::from_millis(5));
        assert_eq!(config.reconcile_period(), Duration::from_millis(100));
        assert_eq!(config.polarity(), Polarity::ActiveLow);
        assert_eq!(InputBuilder::default(), InputBuilder::buttons());
    }

    #[test]
    fn test_zero_sample_period_rejected() {
        assert_eq!(
            InputBuilder::buttons().sample_period_ms(0).build(),
            Err(ConfigError::ZeroSamplePeriod)
        );
    }

    #[test]
    fn test_reconcile_faster_than_sampling_rejected() {
        assert_eq!(
            InputBuilder::buttons()
                .sample_period_ms(20)
                .reconcile_period_ms(10)
                .build(),
            Err(ConfigError::ReconcileFasterThanSampling)
        );
    }

    #[test]
    fn test_equal_periods_allowed() {
        assert!(InputBuilder::buttons()
            .sample_period_ms(10)
            .reconcile_period_ms(10)
            .build()
            .is_ok());
    }

    #[test]
    fn test_inputs_use_configured_debounce() {
        let config = InputBuilder::buttons().debounce_ms(30).build().unwrap();
        let ticks = MockTicks::new(0);
        let inputs: DigitalInputs<_, 2> = config.inputs(&ticks);
        assert_eq!(inputs.default_debounce_ms(), 30);
        assert!(inputs.channels().iter().all(|c| c.debounce_ms() == 30));
    }
}
