//! Debounced digital inputs published as IPSO Digital Input objects.
//!
//! Raw, noisy input levels go in through [`DigitalInputs::feed_sample`];
//! stable states, activation counts and change notifications come out through
//! [`DigitalInputs::reconcile_all`] into an [`lwm2m::ObjectRegistry`].
//!
//! ```text
//! GPIO sampler ──feed_sample──▶ Debouncer ──debounced──▶ reconcile_all ──resource_changed──▶ registry
//!   (fast)                      (per channel)              (slow)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use digital_input::DigitalInputs;
//! use lwm2m::ObjectRegistry;
//! use platform::EmbassyTicks;
//!
//! fn run<R: ObjectRegistry>(registry: &mut R) -> Result<(), digital_input::InitError> {
//!     let mut buttons: DigitalInputs<_, 2> = DigitalInputs::new(EmbassyTicks::new());
//!     buttons.initialize(registry)?;
//!
//!     buttons.feed_sample(0, true); // from the sampling loop
//!     buttons.reconcile_all(registry); // from the publish loop
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `defmt`: log through defmt (hardware)
//! - `tracing`: log through tracing (desktop)
//! - `std`: `std::error::Error` impls

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(feature = "std")]
extern crate std;

pub mod channel;
pub mod config;
pub mod debounce;
pub mod object;

pub use channel::Channel;
pub use config::{BUTTON_INSTANCES, DEFAULT_DEBOUNCE_MS};
pub use debounce::Debouncer;
pub use object::{DigitalInputs, InitError, InitStage, RESOURCES};

/// The reference board's two buttons.
pub type Buttons<T> = DigitalInputs<T, BUTTON_INSTANCES>;
