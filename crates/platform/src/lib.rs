//! Hardware Abstraction Layer (HAL) for the digital input monitor
//!
//! This crate provides the trait seams the monitor needs from the board,
//! enabling development and testing without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate)
//!         ↓
//! Feature Layers (digital-input, lwm2m)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (Embassy time driver + board HAL pins)
//! ```
//!
//! # Abstractions
//!
//! - [`TickSource`] - Free-running millisecond tick counter (wraps at `u32::MAX`)
//! - [`InputPin`] - Raw digital input line
//! - [`Polarity`] - Electrical level to logical "active" mapping
//!
//! # Features
//!
//! - `std`: Enable standard library support and the [`mocks`] module
//! - `hardware`: Physical hardware target marker
//! - `defmt`: Enable defmt derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{InputPin, Polarity, TickSource};
//!
//! fn sample<P: InputPin, T: TickSource>(pin: &mut P, ticks: &T) -> Option<(bool, u32)> {
//!     let active = Polarity::ActiveLow.is_active(pin.is_high().ok()?.into());
//!     Some((active, ticks.now_ms()))
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod gpio;
pub mod mocks;
pub mod time;

pub use gpio::{HalInput, InputPin, PinState, Polarity};
pub use time::{elapsed_ms, EmbassyTicks, TickSource};
