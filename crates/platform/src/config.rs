//! Application configuration and constants
//!
//! Central naming and version values. Log banners and registry endpoint
//! names should reference these constants rather than hardcoding values.

/// The application name
pub const APP_NAME: &str = "Digital Input Monitor";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of physical button inputs on the reference board.
pub const BUTTON_COUNT: usize = 2;

/// Startup banner
pub const fn banner() -> &'static str {
    "Digital Input Monitor - debounced IPSO digital inputs"
}
