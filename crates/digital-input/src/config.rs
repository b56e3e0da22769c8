//! Digital input object constants.

/// Debounce period applied to every channel at initialization.
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Channel count of the reference board.
pub const BUTTON_INSTANCES: usize = platform::config::BUTTON_COUNT;

/// Object name registered with the LwM2M client.
pub const OBJECT_NAME: &str = "Button";

/// Resource name of the debounced state.
pub const STATE_NAME: &str = "State";

/// Resource name of the activation counter.
pub const COUNTER_NAME: &str = "Counter";

/// Resource name of the debounce period.
pub const DEBOUNCE_NAME: &str = "Debounce";
