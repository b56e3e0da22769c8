//! Button input pipeline.
//!
//! ```text
//! pins ──ButtonSampler──▶ SharedInputs(DigitalInputs) ──reconcile──▶ ObjectRegistry
//!        sample_loop (fast)                              reconcile_loop (slow)
//! ```
//!
//! The two loops run at independent cadences and only meet inside
//! [`SharedInputs`], whose blocking mutex serializes access to the channel
//! state. On hardware that mutex is a critical section, so sampling may also
//! be driven from an interrupt handler.
//!
//! A fluent [`builder`] API declares debounce and timing without touching
//! platform-specific code at the call site.
//!
//! # Example
//!
//! ```no_run
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use firmware::input::{run_inputs, ButtonSampler, InputBuilder, SharedInputs};
//! use firmware::LoggingRegistry;
//! use platform::{EmbassyTicks, InputPin};
//!
//! async fn input_task<P: InputPin>(pins: [P; 2]) {
//!     let Ok(config) = InputBuilder::buttons().debounce_ms(50).build() else { return };
//!     let mut registry = LoggingRegistry::new();
//!     let shared: SharedInputs<NoopRawMutex, _, 2> =
//!         SharedInputs::new(config.inputs(EmbassyTicks::new()));
//!     if shared.initialize(&mut registry).is_err() {
//!         return;
//!     }
//!     let mut sampler = ButtonSampler::new(pins, config.polarity());
//!     run_inputs(&shared, &mut sampler, &mut registry, &config).await;
//! }
//! ```

/// Fluent builder API for configuring the input pipeline.
pub mod builder;
pub mod sampler;
pub mod shared;
pub mod tasks;

pub use builder::{ConfigError, InputBuilder, InputConfig};
pub use sampler::ButtonSampler;
pub use shared::SharedInputs;
pub use tasks::{reconcile_loop, run_inputs, sample_loop};
