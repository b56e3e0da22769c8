//! Stand-in object registry that logs instead of talking to a server.
//!
//! Accepts every registration and records how many change notifications it
//! has seen. Used by the emulator build and by boards brought up before the
//! network stack is available.

use lwm2m::{InstanceId, ObjectDefinition, ObjectId, ObjectRegistry, RegistryError, ResourceDefinition, ResourceId};

/// Registry that accepts everything and logs each call.
#[derive(Debug, Default)]
pub struct LoggingRegistry {
    registrations: usize,
    notifications: u32,
}

impl LoggingRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            registrations: 0,
            notifications: 0,
        }
    }

    /// Successful registration calls so far.
    pub fn registrations(&self) -> usize {
        self.registrations
    }

    /// Change notifications received so far (wrapping).
    pub fn notifications(&self) -> u32 {
        self.notifications
    }
}

#[cfg_attr(not(any(feature = "defmt", feature = "tracing")), allow(unused_variables))]
impl ObjectRegistry for LoggingRegistry {
    fn define_object(&mut self, object: &ObjectDefinition) -> Result<(), RegistryError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("define object {} ({=str})", object.id, object.name);
        #[cfg(feature = "tracing")]
        tracing::debug!(object = %object.id, name = object.name, "define object");
        self.registrations = self.registrations.wrapping_add(1);
        Ok(())
    }

    fn define_resource(&mut self, object: ObjectId, resource: &ResourceDefinition) -> Result<(), RegistryError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("define resource {}/{} ({=str})", object, resource.id, resource.name);
        #[cfg(feature = "tracing")]
        tracing::debug!(%object, resource = %resource.id, name = resource.name, "define resource");
        self.registrations = self.registrations.wrapping_add(1);
        Ok(())
    }

    fn create_object_instance(&mut self, object: ObjectId, instance: InstanceId) -> Result<(), RegistryError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("create instance {}/{}", object, instance);
        #[cfg(feature = "tracing")]
        tracing::debug!(%object, %instance, "create instance");
        self.registrations = self.registrations.wrapping_add(1);
        Ok(())
    }

    fn create_resource(
        &mut self,
        object: ObjectId,
        instance: InstanceId,
        resource: ResourceId,
    ) -> Result<(), RegistryError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("create resource {}/{}/{}", object, instance, resource);
        #[cfg(feature = "tracing")]
        tracing::trace!(%object, %instance, %resource, "create resource");
        self.registrations = self.registrations.wrapping_add(1);
        Ok(())
    }

    fn resource_changed(&mut self, object: ObjectId, instance: InstanceId, resource: ResourceId) {
        #[cfg(feature = "defmt")]
        defmt::info!("changed {}/{}/{}", object, instance, resource);
        #[cfg(feature = "tracing")]
        tracing::info!(%object, %instance, %resource, "resource changed");
        self.notifications = self.notifications.wrapping_add(1);
    }
}
