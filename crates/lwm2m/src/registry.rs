//! Registry and handler traits.

use crate::ids::{InstanceId, ObjectId, ResourceId};
use crate::resource::{ObjectDefinition, ResourceDefinition, ResourceValue};

/// Errors reported by the object registry or by an object handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// The object, resource or instance is already registered
    AlreadyDefined,
    /// The object or resource type has not been defined
    Undefined,
    /// Instance index beyond the object's maximum, or registry storage full
    CapacityExceeded,
    /// No such object instance or resource
    NotFound,
    /// Operation not permitted on this resource (e.g. write to read-only)
    MethodNotAllowed,
    /// Value type does not match the resource type
    TypeMismatch,
    /// Value outside the range the resource accepts
    OutOfRange,
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlreadyDefined => write!(f, "already defined"),
            Self::Undefined => write!(f, "object or resource not defined"),
            Self::CapacityExceeded => write!(f, "instance capacity exceeded"),
            Self::NotFound => write!(f, "instance or resource not found"),
            Self::MethodNotAllowed => write!(f, "operation not allowed on resource"),
            Self::TypeMismatch => write!(f, "value type does not match resource type"),
            Self::OutOfRange => write!(f, "value out of range"),
        }
    }
}

/// The device-management client's object registry.
///
/// Registration calls happen once at startup; a failure there leaves the
/// object model half-built and must be treated as fatal by the caller.
/// [`ObjectRegistry::resource_changed`] is fire-and-forget.
pub trait ObjectRegistry {
    /// Register an object type.
    fn define_object(&mut self, object: &ObjectDefinition) -> Result<(), RegistryError>;

    /// Register a resource of an already defined object type.
    fn define_resource(
        &mut self,
        object: ObjectId,
        resource: &ResourceDefinition,
    ) -> Result<(), RegistryError>;

    /// Create an instance of a defined object type.
    fn create_object_instance(
        &mut self,
        object: ObjectId,
        instance: InstanceId,
    ) -> Result<(), RegistryError>;

    /// Create a defined resource within an existing object instance.
    fn create_resource(
        &mut self,
        object: ObjectId,
        instance: InstanceId,
        resource: ResourceId,
    ) -> Result<(), RegistryError>;

    /// Report that a resource value changed so observers are notified.
    fn resource_changed(&mut self, object: ObjectId, instance: InstanceId, resource: ResourceId);
}

/// Value access the registry uses to serve reads and writes for one object
/// type.
///
/// Implementors own the backing storage; the registry never holds references
/// into it.
pub trait ObjectHandler {
    /// The object type this handler serves.
    fn object_id(&self) -> ObjectId;

    /// Current value of `resource` in `instance`.
    fn read(&self, instance: InstanceId, resource: ResourceId)
        -> Result<ResourceValue, RegistryError>;

    /// Apply a server write to `resource` in `instance`.
    fn write(
        &mut self,
        instance: InstanceId,
        resource: ResourceId,
        value: ResourceValue,
    ) -> Result<(), RegistryError>;
}

impl<R: ObjectRegistry + ?Sized> ObjectRegistry for &mut R {
    fn define_object(&mut self, object: &ObjectDefinition) -> Result<(), RegistryError> {
        (**self).define_object(object)
    }

    fn define_resource(
        &mut self,
        object: ObjectId,
        resource: &ResourceDefinition,
    ) -> Result<(), RegistryError> {
        (**self).define_resource(object, resource)
    }

    fn create_object_instance(
        &mut self,
        object: ObjectId,
        instance: InstanceId,
    ) -> Result<(), RegistryError> {
        (**self).create_object_instance(object, instance)
    }

    fn create_resource(
        &mut self,
        object: ObjectId,
        instance: InstanceId,
        resource: ResourceId,
    ) -> Result<(), RegistryError> {
        (**self).create_resource(object, instance, resource)
    }

    fn resource_changed(&mut self, object: ObjectId, instance: InstanceId, resource: ResourceId) {
        (**self).resource_changed(object, instance, resource);
    }
}
