//! End-to-end scenarios: sampling, reconciliation and registry traffic for
//! the reference two-button board.
//!
//! Run with: cargo test -p digital-input --test end_to_end
// Test file: unwrap/indexing/arithmetic are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation
)]

use digital_input::{Buttons, DEFAULT_DEBOUNCE_MS};
use lwm2m::mocks::{MockRegistry, Notification};
use lwm2m::{ipso, InstanceId, ObjectHandler, ResourceValue};
use platform::mocks::MockTicks;

fn ready(ticks: &MockTicks) -> (Buttons<&MockTicks>, MockRegistry) {
    let mut registry = MockRegistry::new();
    let mut buttons = Buttons::new(ticks);
    assert!(buttons.initialize(&mut registry).is_ok());
    (buttons, registry)
}

/// Press with one bounce, held past the 100 ms window.
#[test]
fn test_bounced_press_published_once() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);
    assert_eq!(DEFAULT_DEBOUNCE_MS, 100);

    buttons.feed_sample(0, true);
    ticks.set(30);
    buttons.feed_sample(0, false); // bounce
    ticks.set(40);
    buttons.feed_sample(0, true);
    assert!(!buttons.channels()[0].debounced_state());

    ticks.set(145);
    buttons.feed_sample(0, true);
    assert!(buttons.channels()[0].debounced_state());
    assert_eq!(buttons.channels()[0].candidate_start(), 40);

    assert_eq!(buttons.reconcile_all(&mut registry), 1);
    let channel = &buttons.channels()[0];
    assert!(channel.state());
    assert_eq!(channel.counter(), 1);
    assert_eq!(
        registry.notifications(),
        &[Notification {
            object: ipso::DIGITAL_INPUT,
            instance: InstanceId(0),
            resource: ipso::DIGITAL_INPUT_STATE,
        }]
    );
}

/// At t=139 the window since the last bounce (t=40) is only 99 ms.
#[test]
fn test_press_not_accepted_before_window() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);
    buttons.feed_sample(0, true);
    ticks.set(30);
    buttons.feed_sample(0, false);
    ticks.set(40);
    buttons.feed_sample(0, true);
    ticks.set(139);
    buttons.feed_sample(0, true);

    assert_eq!(buttons.reconcile_all(&mut registry), 0);
    assert!(!buttons.channels()[0].state());
}

#[test]
fn test_second_reconcile_is_silent() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);
    buttons.feed_sample(1, true);
    ticks.advance(100);
    buttons.feed_sample(1, true);

    assert_eq!(buttons.reconcile_all(&mut registry), 1);
    assert_eq!(buttons.reconcile_all(&mut registry), 0);
    assert_eq!(registry.notifications().len(), 1);
}

/// inactive → active → inactive → active counts 2.
#[test]
fn test_activation_counter_edge_only() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);

    for level in [true, false, true] {
        buttons.feed_sample(0, level);
        ticks.advance(100);
        buttons.feed_sample(0, level);
        buttons.reconcile_all(&mut registry);
    }

    assert_eq!(buttons.channels()[0].counter(), 2);
    assert!(buttons.channels()[0].state());
    assert_eq!(registry.notifications().len(), 3);
}

/// Stable interval that crosses the 32-bit tick wrap.
#[test]
fn test_window_across_tick_wraparound() {
    let ticks = MockTicks::new(u32::MAX - 60);
    let (mut buttons, mut registry) = ready(&ticks);

    buttons.feed_sample(0, true);
    ticks.advance(99);
    buttons.feed_sample(0, true);
    assert!(!buttons.channels()[0].debounced_state());

    ticks.advance(1);
    buttons.feed_sample(0, true);
    assert!(buttons.channels()[0].debounced_state());
    assert_eq!(buttons.reconcile_all(&mut registry), 1);
}

#[test]
fn test_channels_are_independent() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);

    buttons.feed_sample(0, true);
    ticks.advance(50);
    buttons.feed_sample(1, true);
    ticks.advance(50);
    buttons.feed_sample(0, true);
    buttons.feed_sample(1, true);

    assert_eq!(buttons.reconcile_all(&mut registry), 1);
    assert!(buttons.channels()[0].state());
    assert!(!buttons.channels()[1].state());
}

#[test]
fn test_out_of_range_channel_is_noop() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);
    let before = buttons.channels().to_vec();

    buttons.feed_sample(2, true);
    ticks.advance(1000);
    buttons.feed_sample(2, true);

    assert_eq!(buttons.channels(), before.as_slice());
    assert_eq!(buttons.reconcile_all(&mut registry), 0);
    assert!(registry.notifications().is_empty());
}

/// A server lowers one channel's debounce period at runtime.
#[test]
fn test_runtime_debounce_write_through_registry() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);

    assert!(registry
        .server_write(
            &mut buttons,
            InstanceId(1),
            ipso::DIGITAL_INPUT_DEBOUNCE_PERIOD,
            ResourceValue::Integer(10),
        )
        .is_ok());

    buttons.feed_sample(1, true);
    ticks.advance(10);
    buttons.feed_sample(1, true);
    assert_eq!(buttons.reconcile_all(&mut registry), 1);

    assert_eq!(
        registry.server_read(&buttons, InstanceId(1), ipso::DIGITAL_INPUT_COUNTER),
        Ok(ResourceValue::Integer(1))
    );
    assert_eq!(
        buttons.read(InstanceId(1), ipso::DIGITAL_INPUT_DEBOUNCE_PERIOD),
        Ok(ResourceValue::Integer(10))
    );
}

#[test]
fn test_reinitialize_restores_defaults() {
    let ticks = MockTicks::new(0);
    let (mut buttons, mut registry) = ready(&ticks);
    if let Some(channel) = buttons.describe_channel_mut(0) {
        channel.set_debounce_ms(1);
    }
    buttons.feed_sample(0, true);
    ticks.advance(1);
    buttons.feed_sample(0, true);
    buttons.reconcile_all(&mut registry);

    assert!(buttons.initialize(&mut registry).is_ok());
    for channel in buttons.channels() {
        assert_eq!(channel.debounce_ms(), DEFAULT_DEBOUNCE_MS);
        assert_eq!(channel.counter(), 0);
        assert!(!channel.state());
    }
}
