//! Digital Input Monitor Firmware
//!
//! Samples button GPIO lines, debounces them and publishes their state as
//! IPSO Digital Input objects through the device-management client.
//!
//! # Architecture
//!
//! This firmware follows a layered architecture:
//!
//! ```text
//! Application Layer (input loops, registry wiring)
//!         ↓
//! Feature Layers (digital-input, lwm2m)
//!         ↓
//! Platform HAL (platform crate: pins, tick source)
//!         ↓
//! Hardware (Embassy time driver, board HAL)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for a Cortex-M target (defmt logging, 32.768 kHz ticks)
//! - `emulator` - Build for desktop (tokio, tracing, std time driver)
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ## Emulator Target
//!
//! ```bash
//! cargo run -p firmware --example bounce_simulation --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)]
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod input;
pub mod registry;

#[cfg(feature = "hardware")]
pub mod hardware;

// Re-export key types
pub use input::{ButtonSampler, InputBuilder, InputConfig, SharedInputs};
pub use registry::LoggingRegistry;
