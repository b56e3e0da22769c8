//! Bounce simulation - two buttons with contact chatter on the desktop
//!
//! Demonstrates:
//! - Builder-configured sampling and publishing cadence
//! - Debounce filtering of a chattering switch
//! - State notifications through the logging registry
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run -p firmware --example bounce_simulation --features emulator
//! ```

use std::convert::Infallible;
use std::time::Duration as StdDuration;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::Instant;
use firmware::input::{run_inputs, ButtonSampler, InputBuilder, SharedInputs};
use firmware::LoggingRegistry;
use platform::{EmbassyTicks, InputPin};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Active-low switch pressed during `[press_ms, release_ms)` of the run,
/// chattering for `bounce_ms` after each transition.
struct ChatteringSwitch {
    origin: Instant,
    press_ms: u64,
    release_ms: u64,
    bounce_ms: u64,
}

impl ChatteringSwitch {
    fn new(press_ms: u64, release_ms: u64, bounce_ms: u64) -> Self {
        Self {
            origin: Instant::now(),
            press_ms,
            release_ms,
            bounce_ms,
        }
    }

    fn pressed_at(&self, t: u64) -> bool {
        let settled = t >= self.press_ms && t < self.release_ms;
        let since_edge = if t >= self.release_ms {
            t.saturating_sub(self.release_ms)
        } else if t >= self.press_ms {
            t.saturating_sub(self.press_ms)
        } else {
            return false;
        };
        if since_edge < self.bounce_ms {
            // 3 ms chatter period
            (since_edge / 3) % 2 == 0
        } else {
            settled
        }
    }
}

impl InputPin for ChatteringSwitch {
    type Error = Infallible;

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let t = self.origin.elapsed().as_millis();
        Ok(!self.pressed_at(t))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("{} v{}", platform::config::APP_NAME, platform::config::APP_VERSION);

    let config = InputBuilder::buttons()
        .debounce_ms(25)
        .sample_period_ms(2)
        .reconcile_period_ms(50)
        .build()?;

    let mut registry = LoggingRegistry::new();
    let inputs: SharedInputs<NoopRawMutex, _, 2> = SharedInputs::new(config.inputs(EmbassyTicks::new()));
    inputs.initialize(&mut registry)?;

    // Button0: one press with 20 ms of chatter. Button1: a tap too short to survive.
    let mut sampler = ButtonSampler::new(
        [ChatteringSwitch::new(200, 700, 20), ChatteringSwitch::new(400, 415, 6)],
        config.polarity(),
    );

    let _ = tokio::time::timeout(
        StdDuration::from_millis(1_000),
        run_inputs(&inputs, &mut sampler, &mut registry, &config),
    )
    .await;

    inputs.lock(|inputs| {
        for (index, channel) in inputs.channels().iter().enumerate() {
            info!(
                channel = index,
                state = channel.state(),
                counter = channel.counter(),
                "final"
            );
        }
    });
    info!(notifications = registry.notifications(), "simulation finished");
    Ok(())
}
