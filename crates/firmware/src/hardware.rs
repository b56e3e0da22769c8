//! Hardware wiring for the two-button reference board.
//!
//! # Pin assignments
//!
//! These constants document the target PCB assignment; change them to match
//! your board before flashing.
//!
//! | Signal   | Instance | MCU pin | Notes                        |
//! |----------|----------|---------|------------------------------|
//! | Button0  | 3200/0   | PA0     | Active-low, internal pull-up |
//! | Button1  | 3200/1   | PA1     | Active-low, internal pull-up |
//!
//! # Locking
//!
//! Channel state lives behind a [`CriticalSectionRawMutex`] so the sampler
//! may run from an EXTI handler as well as from a thread-mode task. Each
//! locked section is one `feed_sample` per pin or one reconcile pass over two
//! channels, a handful of compares and at most two registry callbacks.
//!
//! # Usage
//!
//! ```ignore
//! static BUTTONS: StaticCell<BoardButtons> = StaticCell::new();
//!
//! let config = InputBuilder::buttons().build()?;
//! let buttons = BUTTONS.init(board_buttons(&config));
//! buttons.initialize(&mut registry)?;
//! let mut sampler = ButtonSampler::new([HalInput::new(pa0), HalInput::new(pa1)], config.polarity());
//! run_inputs(buttons, &mut sampler, &mut registry, &config).await;
//! ```

use digital_input::BUTTON_INSTANCES;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use platform::EmbassyTicks;

use crate::input::{InputConfig, SharedInputs};

/// Channel storage shared with interrupt context.
pub type HardwareInputs<T, const N: usize> = SharedInputs<CriticalSectionRawMutex, T, N>;

/// The reference board's buttons on the Embassy time driver.
pub type BoardButtons = HardwareInputs<EmbassyTicks, BUTTON_INSTANCES>;

/// Build the board's shared button state from `config`.
pub fn board_buttons(config: &InputConfig) -> BoardButtons {
    #[cfg(feature = "defmt")]
    defmt::info!(
        "{=str}: {=usize} buttons, debounce {=u32} ms",
        platform::config::banner(),
        BUTTON_INSTANCES,
        config.debounce_ms()
    );
    SharedInputs::new(config.inputs(EmbassyTicks::new()))
}
