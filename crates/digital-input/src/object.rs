//! The IPSO Digital Input object: channel storage, registration, sampling
//! and reconciliation.
//!
//! # Entry points
//!
//! | Call                               | Cadence          | Touches                     |
//! |------------------------------------|------------------|-----------------------------|
//! | [`DigitalInputs::initialize`]      | once at startup  | registry, all channels      |
//! | [`DigitalInputs::feed_sample`]     | every raw sample | one channel's debouncer     |
//! | [`DigitalInputs::reconcile_all`]   | every publish    | published state, registry   |
//!
//! All three are synchronous and non-blocking. The struct does no locking:
//! callers that sample from interrupt context and reconcile from a main loop
//! must serialize access themselves (the firmware crate wraps it in a
//! critical-section mutex).

use lwm2m::{
    ipso, InstanceId, ObjectDefinition, ObjectHandler, ObjectId, ObjectRegistry, Operations,
    RegistryError, ResourceDefinition, ResourceId, ResourceType, ResourceValue,
};
use platform::TickSource;

use crate::channel::Channel;
use crate::config::{COUNTER_NAME, DEBOUNCE_NAME, DEFAULT_DEBOUNCE_MS, OBJECT_NAME, STATE_NAME};

/// Resources every channel instance exposes.
pub const RESOURCES: [ResourceDefinition; 3] = [
    ResourceDefinition {
        id: ipso::DIGITAL_INPUT_STATE,
        name: STATE_NAME,
        kind: ResourceType::Boolean,
        min_instances: 0,
        max_instances: 1,
        operations: Operations::ReadOnly,
    },
    ResourceDefinition {
        id: ipso::DIGITAL_INPUT_COUNTER,
        name: COUNTER_NAME,
        kind: ResourceType::Integer,
        min_instances: 0,
        max_instances: 1,
        operations: Operations::ReadOnly,
    },
    ResourceDefinition {
        id: ipso::DIGITAL_INPUT_DEBOUNCE_PERIOD,
        name: DEBOUNCE_NAME,
        kind: ResourceType::Integer,
        min_instances: 0,
        max_instances: 1,
        operations: Operations::ReadWrite,
    },
];

/// Registration step that failed during [`DigitalInputs::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStage {
    /// Defining the object type
    DefineObject,
    /// Defining a resource type
    DefineResource(ResourceId),
    /// Creating an object instance
    CreateInstance(InstanceId),
    /// Creating a resource within an instance
    CreateResource(InstanceId, ResourceId),
}

impl core::fmt::Display for InitStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DefineObject => write!(f, "define object {}", ipso::DIGITAL_INPUT),
            Self::DefineResource(r) => write!(f, "define resource {r}"),
            Self::CreateInstance(i) => write!(f, "create instance {i}"),
            Self::CreateResource(i, r) => write!(f, "create resource {i}/{r}"),
        }
    }
}

/// Object registration failed; the monitor must not be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitError {
    /// Step that was rejected
    pub stage: InitStage,
    /// Error reported by the registry
    pub source: RegistryError,
}

impl InitError {
    fn at(stage: InitStage) -> impl FnOnce(RegistryError) -> Self {
        move |source| Self { stage, source }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "registration failed at {}: {}", self.stage, self.source)
    }
}

/// `N` debounced digital inputs published as IPSO Digital Input instances
/// `0..N`.
///
/// Channel storage is a fixed array owned by this struct and is never
/// reallocated, so channel ids and registry instance ids stay valid for the
/// life of the value.
pub struct DigitalInputs<T, const N: usize> {
    ticks: T,
    default_debounce_ms: u32,
    channels: [Channel; N],
    registered: bool,
}

impl<T: TickSource, const N: usize> DigitalInputs<T, N> {
    const INSTANCE_IDS_FIT: () = assert!(N <= u16::MAX as usize, "channel count exceeds u16 instance ids");

    /// Create `N` channels with [`DEFAULT_DEBOUNCE_MS`].
    pub fn new(ticks: T) -> Self {
        Self::with_default_debounce(ticks, DEFAULT_DEBOUNCE_MS)
    }

    /// Create `N` channels with a board-specific default debounce period.
    ///
    /// [`DigitalInputs::initialize`] and [`DigitalInputs::reset`] restore
    /// this value.
    pub fn with_default_debounce(ticks: T, debounce_ms: u32) -> Self {
        let () = Self::INSTANCE_IDS_FIT;
        Self {
            ticks,
            default_debounce_ms: debounce_ms,
            channels: [Channel::new(debounce_ms); N],
            registered: false,
        }
    }

    /// Register the object with `registry` and reset every channel.
    ///
    /// Registration happens on the first successful call only; later calls
    /// just reset channel state, so calling this again is harmless. On error
    /// the object stays unregistered and [`DigitalInputs::reconcile_all`]
    /// publishes nothing.
    pub fn initialize<R: ObjectRegistry + ?Sized>(&mut self, registry: &mut R) -> Result<(), InitError> {
        if !self.registered {
            if let Err(e) = self.register(registry) {
                #[cfg(feature = "defmt")]
                defmt::error!("Digital input registration failed: {}", e);
                #[cfg(feature = "tracing")]
                tracing::error!(error = %e, "digital input registration failed");
                return Err(e);
            }
            self.registered = true;
        }
        self.reset();
        Ok(())
    }

    fn register<R: ObjectRegistry + ?Sized>(&self, registry: &mut R) -> Result<(), InitError> {
        let object = ipso::DIGITAL_INPUT;
        registry
            .define_object(&self.object_definition())
            .map_err(InitError::at(InitStage::DefineObject))?;
        for resource in &RESOURCES {
            registry
                .define_resource(object, resource)
                .map_err(InitError::at(InitStage::DefineResource(resource.id)))?;
        }

        for index in 0..N {
            let instance = instance_id(index);
            registry
                .create_object_instance(object, instance)
                .map_err(InitError::at(InitStage::CreateInstance(instance)))?;
            for resource in &RESOURCES {
                registry
                    .create_resource(object, instance, resource.id)
                    .map_err(InitError::at(InitStage::CreateResource(instance, resource.id)))?;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Digital input object registered: {=usize} instances", N);
        #[cfg(feature = "tracing")]
        tracing::debug!(instances = N, "digital input object registered");
        Ok(())
    }

    /// The object type definition registered for this channel count.
    pub fn object_definition(&self) -> ObjectDefinition {
        ObjectDefinition {
            id: ipso::DIGITAL_INPUT,
            name: OBJECT_NAME,
            min_instances: 0,
            max_instances: instance_id(N).0,
        }
    }

    /// Zero all runtime state and restore the default debounce period.
    pub fn reset(&mut self) {
        let debounce_ms = self.default_debounce_ms;
        for channel in &mut self.channels {
            channel.reset(debounce_ms);
        }
    }

    /// Feed one raw sample for channel `id`.
    ///
    /// Out-of-range ids are ignored: nothing is mutated and nothing is
    /// reported.
    pub fn feed_sample(&mut self, id: usize, level: bool) {
        let Some(channel) = self.channels.get_mut(id) else {
            return;
        };
        let now = self.ticks.now_ms();
        if channel.feed(level, now) {
            #[cfg(feature = "defmt")]
            defmt::trace!("Channel {=usize} debounced -> {=bool} @ {=u32}", id, level, now);
            #[cfg(feature = "tracing")]
            tracing::trace!(channel = id, level, tick = now, "debounced state changed");
        }
    }

    /// Publish every channel whose debounced state differs from its
    /// published state.
    ///
    /// Each published change bumps the counter on activation and raises one
    /// State change notification. Unchanged channels are silent. Returns the
    /// number of channels published.
    pub fn reconcile_all<R: ObjectRegistry + ?Sized>(&mut self, registry: &mut R) -> usize {
        let changes = self.publish_pending();
        Self::notify_published(&changes, registry)
    }

    /// First half of [`DigitalInputs::reconcile_all`]: copy debounced state
    /// to published state without touching the registry.
    ///
    /// Entry `i` is `Some(state)` when channel `i` changed. All `None` before
    /// registration.
    pub fn publish_pending(&mut self) -> [Option<bool>; N] {
        let mut changes = [None; N];
        if !self.registered {
            return changes;
        }
        for (channel, change) in self.channels.iter_mut().zip(changes.iter_mut()) {
            if channel.reconcile() {
                *change = Some(channel.state());
            }
        }
        changes
    }

    /// Second half of [`DigitalInputs::reconcile_all`]: raise one State
    /// notification per changed channel.
    ///
    /// Needs no access to channel storage, so callers sharing the storage
    /// behind a lock can notify after releasing it.
    #[cfg_attr(not(any(feature = "defmt", feature = "tracing")), allow(unused_variables))]
    pub fn notify_published<R: ObjectRegistry + ?Sized>(changes: &[Option<bool>; N], registry: &mut R) -> usize {
        let mut published = 0_usize;
        for (index, change) in changes.iter().enumerate() {
            let Some(state) = *change else {
                continue;
            };
            published = published.saturating_add(1);

            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Button{=usize} {=str}",
                button_number(index),
                if state { "On" } else { "Off" }
            );
            #[cfg(feature = "tracing")]
            tracing::debug!(
                channel = index,
                button = button_number(index),
                state,
                "digital input published"
            );

            registry.resource_changed(
                ipso::DIGITAL_INPUT,
                instance_id(index),
                ipso::DIGITAL_INPUT_STATE,
            );
        }
        published
    }

    /// Read access to channel `id`, or `None` if out of range.
    pub fn describe_channel(&self, id: usize) -> Option<&Channel> {
        self.channels.get(id)
    }

    /// Configuration access to channel `id`, or `None` if out of range.
    ///
    /// Only the debounce period can be changed through the returned
    /// reference.
    pub fn describe_channel_mut(&mut self, id: usize) -> Option<&mut Channel> {
        self.channels.get_mut(id)
    }

    /// All channels in id order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Number of channels (`N`).
    pub const fn channel_count(&self) -> usize {
        N
    }

    /// Returns `true` once the object has been registered.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Debounce period restored by [`DigitalInputs::reset`].
    pub fn default_debounce_ms(&self) -> u32 {
        self.default_debounce_ms
    }

    /// The tick source samples are timestamped with.
    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    fn channel_for(&self, instance: InstanceId) -> Result<&Channel, RegistryError> {
        self.channels
            .get(usize::from(instance.0))
            .ok_or(RegistryError::NotFound)
    }
}

impl<T: TickSource, const N: usize> ObjectHandler for DigitalInputs<T, N> {
    fn object_id(&self) -> ObjectId {
        ipso::DIGITAL_INPUT
    }

    fn read(&self, instance: InstanceId, resource: ResourceId) -> Result<ResourceValue, RegistryError> {
        let channel = self.channel_for(instance)?;
        match resource {
            ipso::DIGITAL_INPUT_STATE => Ok(ResourceValue::Boolean(channel.state())),
            ipso::DIGITAL_INPUT_COUNTER => Ok(ResourceValue::Integer(i64::from(channel.counter()))),
            ipso::DIGITAL_INPUT_DEBOUNCE_PERIOD => {
                Ok(ResourceValue::Integer(i64::from(channel.debounce_ms())))
            }
            _ => Err(RegistryError::NotFound),
        }
    }

    fn write(
        &mut self,
        instance: InstanceId,
        resource: ResourceId,
        value: ResourceValue,
    ) -> Result<(), RegistryError> {
        let channel = self
            .channels
            .get_mut(usize::from(instance.0))
            .ok_or(RegistryError::NotFound)?;
        match resource {
            ipso::DIGITAL_INPUT_DEBOUNCE_PERIOD => {
                let ResourceValue::Integer(ms) = value else {
                    return Err(RegistryError::TypeMismatch);
                };
                let ms = u32::try_from(ms).map_err(|_| RegistryError::OutOfRange)?;
                channel.set_debounce_ms(ms);
                Ok(())
            }
            ipso::DIGITAL_INPUT_STATE | ipso::DIGITAL_INPUT_COUNTER => {
                Err(RegistryError::MethodNotAllowed)
            }
            _ => Err(RegistryError::NotFound),
        }
    }
}

/// One-based button label used in log output ("Button1", "Button2").
#[cfg_attr(not(any(test, feature = "defmt", feature = "tracing")), allow(dead_code))]
const fn button_number(index: usize) -> usize {
    index.saturating_add(1)
}

/// Registry instance id of channel `index`.
#[allow(clippy::cast_possible_truncation)] // N <= u16::MAX, checked by INSTANCE_IDS_FIT
fn instance_id(index: usize) -> InstanceId {
    InstanceId(index as u16)
}
