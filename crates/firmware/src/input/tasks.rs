//! Periodic sampling and publishing loops.
//!
//! Both loops are plain `async fn`s so the caller decides how to spawn them:
//! an `#[embassy_executor::task]` wrapper on hardware, `tokio` on the
//! desktop, or [`run_inputs`] to join both into one future.

use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Ticker};
use lwm2m::ObjectRegistry;
use platform::{InputPin, TickSource};

use super::{ButtonSampler, InputConfig, SharedInputs};

/// Sample every pin each `period`. Never returns.
pub async fn sample_loop<M, T, P, const N: usize>(
    inputs: &SharedInputs<M, T, N>,
    sampler: &mut ButtonSampler<P, N>,
    period: Duration,
) where
    M: RawMutex,
    T: TickSource,
    P: InputPin,
{
    #[cfg(feature = "defmt")]
    defmt::info!("Button sampling every {} ms", period.as_millis());
    #[cfg(feature = "tracing")]
    tracing::info!(period_ms = period.as_millis(), "button sampling started");

    let mut ticker = Ticker::every(period);
    loop {
        inputs.sample_from(sampler);
        ticker.next().await;
    }
}

/// Publish debounced changes to `registry` each `period`. Never returns.
pub async fn reconcile_loop<M, T, R, const N: usize>(
    inputs: &SharedInputs<M, T, N>,
    registry: &mut R,
    period: Duration,
) where
    M: RawMutex,
    T: TickSource,
    R: ObjectRegistry + ?Sized,
{
    #[cfg(feature = "defmt")]
    defmt::info!("Button publishing every {} ms", period.as_millis());
    #[cfg(feature = "tracing")]
    tracing::info!(period_ms = period.as_millis(), "button publishing started");

    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        inputs.reconcile_all(registry);
    }
}

/// Run both loops with the cadences from `config`. Never returns.
///
/// `inputs` must already be initialized; until then reconcile passes publish
/// nothing.
pub async fn run_inputs<M, T, P, R, const N: usize>(
    inputs: &SharedInputs<M, T, N>,
    sampler: &mut ButtonSampler<P, N>,
    registry: &mut R,
    config: &InputConfig,
) where
    M: RawMutex,
    T: TickSource,
    P: InputPin,
    R: ObjectRegistry + ?Sized,
{
    join(
        sample_loop(inputs, sampler, config.sample_period()),
        reconcile_loop(inputs, registry, config.reconcile_period()),
    )
    .await;
}
