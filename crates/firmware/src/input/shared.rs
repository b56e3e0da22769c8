//! Channel state shared between the sampling and publishing loops.
//!
//! Both loops touch the same [`DigitalInputs`]; every access goes through a
//! blocking mutex so a sample can never interleave with a reconcile pass.
//! Pick the raw mutex to match the execution context:
//!
//! | Raw mutex                  | Use when                                      |
//! |----------------------------|-----------------------------------------------|
//! | `CriticalSectionRawMutex`  | sampling also runs from an interrupt handler |
//! | `ThreadModeRawMutex`       | both loops run on the thread-mode executor   |
//! | `NoopRawMutex`             | single-threaded host tests and emulator      |
//!
//! The lock is never held across an `.await`.

use core::cell::RefCell;

use digital_input::{DigitalInputs, InitError};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use lwm2m::ObjectRegistry;
use platform::{InputPin, TickSource};

use super::ButtonSampler;

/// Mutex-guarded [`DigitalInputs`].
pub struct SharedInputs<M: RawMutex, T, const N: usize> {
    inner: Mutex<M, RefCell<DigitalInputs<T, N>>>,
}

impl<M: RawMutex, T: TickSource, const N: usize> SharedInputs<M, T, N> {
    /// Wrap channel storage.
    pub const fn new(inputs: DigitalInputs<T, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(inputs)),
        }
    }

    /// Run `f` with exclusive access to the channel storage.
    pub fn lock<R>(&self, f: impl FnOnce(&mut DigitalInputs<T, N>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// See [`DigitalInputs::initialize`].
    pub fn initialize<R: ObjectRegistry + ?Sized>(&self, registry: &mut R) -> Result<(), InitError> {
        self.lock(|inputs| inputs.initialize(registry))
    }

    /// See [`DigitalInputs::feed_sample`].
    pub fn feed_sample(&self, id: usize, level: bool) {
        self.lock(|inputs| inputs.feed_sample(id, level));
    }

    /// See [`DigitalInputs::reconcile_all`].
    ///
    /// Published state is updated under the lock; registry notifications are
    /// raised after it is released, so the registry may read channel values
    /// back through [`SharedInputs::lock`] and never runs inside a critical
    /// section.
    pub fn reconcile_all<R: ObjectRegistry + ?Sized>(&self, registry: &mut R) -> usize {
        let changes = self.lock(|inputs| inputs.publish_pending());
        DigitalInputs::<T, N>::notify_published(&changes, registry)
    }

    /// Read every pin of `sampler`, then feed the levels under one lock.
    ///
    /// Pin reads happen outside the lock so a slow GPIO expander does not
    /// extend the critical section.
    pub fn sample_from<P: InputPin>(&self, sampler: &mut ButtonSampler<P, N>) {
        let levels = sampler.read_levels();
        self.lock(|inputs| ButtonSampler::<P, N>::feed_levels(&levels, inputs));
    }

    /// Consume the wrapper and return the channel storage.
    pub fn into_inner(self) -> DigitalInputs<T, N> {
        self.inner.into_inner().into_inner()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use lwm2m::mocks::MockRegistry;
    use lwm2m::{
        InstanceId, ObjectDefinition, ObjectHandler, ObjectId, RegistryError, ResourceDefinition, ResourceId,
        ResourceValue,
    };
    use platform::mocks::{MockPin, MockTicks};
    use platform::Polarity;

    /// Registry that reads the changed value back, as an observe response
    /// would.
    struct ReadBackRegistry<'a, T: TickSource> {
        shared: &'a SharedInputs<NoopRawMutex, T, 2>,
        values: std::vec::Vec<Result<ResourceValue, RegistryError>>,
    }

    impl<T: TickSource> ObjectRegistry for ReadBackRegistry<'_, T> {
        fn define_object(&mut self, _: &ObjectDefinition) -> Result<(), RegistryError> {
            Ok(())
        }

        fn define_resource(&mut self, _: ObjectId, _: &ResourceDefinition) -> Result<(), RegistryError> {
            Ok(())
        }

        fn create_object_instance(&mut self, _: ObjectId, _: InstanceId) -> Result<(), RegistryError> {
            Ok(())
        }

        fn create_resource(&mut self, _: ObjectId, _: InstanceId, _: ResourceId) -> Result<(), RegistryError> {
            Ok(())
        }

        fn resource_changed(&mut self, _: ObjectId, instance: InstanceId, resource: ResourceId) {
            let value = self.shared.lock(|inputs| inputs.read(instance, resource));
            self.values.push(value);
        }
    }

    #[test]
    fn test_shared_pipeline_publishes_press() {
        let ticks = MockTicks::new(0);
        let shared: SharedInputs<NoopRawMutex, _, 2> =
            SharedInputs::new(DigitalInputs::with_default_debounce(&ticks, 10));
        let mut registry = MockRegistry::new();
        shared.initialize(&mut registry).unwrap();

        let mut sampler = ButtonSampler::new([MockPin::new(true), MockPin::new(false)], Polarity::ActiveLow);
        shared.sample_from(&mut sampler);
        ticks.advance(10);
        shared.sample_from(&mut sampler);

        assert_eq!(shared.reconcile_all(&mut registry), 1);
        let inputs = shared.into_inner();
        assert!(!inputs.channels()[0].state());
        assert!(inputs.channels()[1].state());
        assert_eq!(inputs.channels()[1].counter(), 1);
    }

    #[test]
    fn test_reconcile_before_initialize_is_silent() {
        let ticks = MockTicks::new(0);
        let shared: SharedInputs<NoopRawMutex, _, 2> = SharedInputs::new(DigitalInputs::with_default_debounce(&ticks, 0));
        let mut registry = MockRegistry::new();

        shared.feed_sample(0, true);
        assert_eq!(shared.reconcile_all(&mut registry), 0);
        assert!(registry.notifications().is_empty());
        assert!(shared.lock(|inputs| inputs.channels()[0].debounced_state()));
    }

    #[test]
    fn test_registry_can_read_back_during_notification() {
        let ticks = MockTicks::new(0);
        let shared: SharedInputs<NoopRawMutex, _, 2> =
            SharedInputs::new(DigitalInputs::with_default_debounce(&ticks, 0));
        let mut registry = ReadBackRegistry {
            shared: &shared,
            values: std::vec::Vec::new(),
        };
        shared.initialize(&mut registry).unwrap();

        shared.feed_sample(0, true);
        assert_eq!(shared.reconcile_all(&mut registry), 1);
        assert_eq!(registry.values, [Ok(ResourceValue::Boolean(true))]);
    }
}
