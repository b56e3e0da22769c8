//! In-memory registry for tests and desktop simulation.
//!
//! [`MockRegistry`] behaves like a strict LwM2M client object store: it
//! checks that objects are defined before their resources, that instances
//! stay within `max_instances`, and that nothing is registered twice. Every
//! accepted call is recorded so tests can assert on the exact registration
//! and notification sequence.

#![cfg(any(test, feature = "std"))]

use heapless::Vec;

use crate::ids::{InstanceId, ObjectId, ResourceId};
use crate::registry::{ObjectHandler, ObjectRegistry, RegistryError};
use crate::resource::{ObjectDefinition, ResourceDefinition, ResourceValue};

/// Maximum object types the mock registry stores.
pub const MAX_OBJECTS: usize = 4;
/// Maximum resource definitions across all object types.
pub const MAX_RESOURCE_DEFINITIONS: usize = 16;
/// Maximum object instances across all object types.
pub const MAX_INSTANCES: usize = 16;
/// Maximum created resources across all instances.
pub const MAX_RESOURCES: usize = 64;
/// Maximum recorded change notifications.
pub const MAX_NOTIFICATIONS: usize = 64;

/// Registration step, used to target failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryStep {
    /// [`ObjectRegistry::define_object`]
    DefineObject,
    /// [`ObjectRegistry::define_resource`]
    DefineResource,
    /// [`ObjectRegistry::create_object_instance`]
    CreateObjectInstance,
    /// [`ObjectRegistry::create_resource`]
    CreateResource,
}

/// A recorded [`ObjectRegistry::resource_changed`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    /// Object type
    pub object: ObjectId,
    /// Object instance
    pub instance: InstanceId,
    /// Resource that changed
    pub resource: ResourceId,
}

/// Strict, recording object registry.
#[derive(Default)]
pub struct MockRegistry {
    objects: Vec<ObjectDefinition, MAX_OBJECTS>,
    resource_definitions: Vec<(ObjectId, ResourceDefinition), MAX_RESOURCE_DEFINITIONS>,
    instances: Vec<(ObjectId, InstanceId), MAX_INSTANCES>,
    resources: Vec<(ObjectId, InstanceId, ResourceId), MAX_RESOURCES>,
    notifications: Vec<Notification, MAX_NOTIFICATIONS>,
    dropped_notifications: usize,
    registration_calls: usize,
    fail_next: Option<(RegistryStep, RegistryError)>,
}

impl MockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call of `step` fail with `error`.
    pub fn fail_next(&mut self, step: RegistryStep, error: RegistryError) {
        self.fail_next = Some((step, error));
    }

    /// Look up an object definition.
    pub fn object(&self, object: ObjectId) -> Option<&ObjectDefinition> {
        self.objects.iter().find(|o| o.id == object)
    }

    /// Look up a resource definition.
    pub fn resource_definition(
        &self,
        object: ObjectId,
        resource: ResourceId,
    ) -> Option<&ResourceDefinition> {
        self.resource_definitions
            .iter()
            .find(|(o, r)| *o == object && r.id == resource)
            .map(|(_, r)| r)
    }

    /// Returns `true` if `instance` of `object` was created.
    pub fn has_instance(&self, object: ObjectId, instance: InstanceId) -> bool {
        self.instances.contains(&(object, instance))
    }

    /// Returns `true` if `resource` was created in `instance` of `object`.
    pub fn has_resource(&self, object: ObjectId, instance: InstanceId, resource: ResourceId) -> bool {
        self.resources.contains(&(object, instance, resource))
    }

    /// Number of created object instances of `object`.
    pub fn instance_count(&self, object: ObjectId) -> usize {
        self.instances.iter().filter(|(o, _)| *o == object).count()
    }

    /// Successful registration calls so far (define + create).
    pub fn registration_calls(&self) -> usize {
        self.registration_calls
    }

    /// Change notifications recorded so far, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Notifications that did not fit in the recording buffer.
    pub fn dropped_notifications(&self) -> usize {
        self.dropped_notifications
    }

    /// Forget recorded notifications.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
        self.dropped_notifications = 0;
    }

    /// Serve a server read through `handler`, as the client would.
    ///
    /// The resource must exist in the registry and the handler must answer
    /// with a value of the defined type.
    pub fn server_read<H: ObjectHandler + ?Sized>(
        &self,
        handler: &H,
        instance: InstanceId,
        resource: ResourceId,
    ) -> Result<ResourceValue, RegistryError> {
        let object = handler.object_id();
        let definition = self.existing_resource(object, instance, resource)?;
        let value = handler.read(instance, resource)?;
        if value.kind() == definition.kind {
            Ok(value)
        } else {
            Err(RegistryError::TypeMismatch)
        }
    }

    /// Serve a server write through `handler`, as the client would.
    ///
    /// Read-only resources and values of the wrong type are rejected before
    /// the handler is called.
    pub fn server_write<H: ObjectHandler + ?Sized>(
        &self,
        handler: &mut H,
        instance: InstanceId,
        resource: ResourceId,
        value: ResourceValue,
    ) -> Result<(), RegistryError> {
        let object = handler.object_id();
        let definition = self.existing_resource(object, instance, resource)?;
        if !definition.operations.is_writable() {
            return Err(RegistryError::MethodNotAllowed);
        }
        if value.kind() != definition.kind {
            return Err(RegistryError::TypeMismatch);
        }
        handler.write(instance, resource, value)
    }

    fn existing_resource(
        &self,
        object: ObjectId,
        instance: InstanceId,
        resource: ResourceId,
    ) -> Result<&ResourceDefinition, RegistryError> {
        if !self.has_resource(object, instance, resource) {
            return Err(RegistryError::NotFound);
        }
        self.resource_definition(object, resource)
            .ok_or(RegistryError::Undefined)
    }

    fn injected(&mut self, step: RegistryStep) -> Result<(), RegistryError> {
        match self.fail_next {
            Some((target, error)) if target == step => {
                self.fail_next = None;
                Err(error)
            }
            _ => Ok(()),
        }
    }

    fn accepted(&mut self) {
        self.registration_calls = self.registration_calls.saturating_add(1);
    }
}

impl ObjectRegistry for MockRegistry {
    fn define_object(&mut self, object: &ObjectDefinition) -> Result<(), RegistryError> {
        self.injected(RegistryStep::DefineObject)?;
        if self.object(object.id).is_some() {
            return Err(RegistryError::AlreadyDefined);
        }
        self.objects
            .push(*object)
            .map_err(|_| RegistryError::CapacityExceeded)?;
        self.accepted();
        Ok(())
    }

    fn define_resource(
        &mut self,
        object: ObjectId,
        resource: &ResourceDefinition,
    ) -> Result<(), RegistryError> {
        self.injected(RegistryStep::DefineResource)?;
        if self.object(object).is_none() {
            return Err(RegistryError::Undefined);
        }
        if self.resource_definition(object, resource.id).is_some() {
            return Err(RegistryError::AlreadyDefined);
        }
        self.resource_definitions
            .push((object, *resource))
            .map_err(|_| RegistryError::CapacityExceeded)?;
        self.accepted();
        Ok(())
    }

    fn create_object_instance(
        &mut self,
        object: ObjectId,
        instance: InstanceId,
    ) -> Result<(), RegistryError> {
        self.injected(RegistryStep::CreateObjectInstance)?;
        let max = self
            .object(object)
            .ok_or(RegistryError::Undefined)?
            .max_instances;
        if instance.0 >= max {
            return Err(RegistryError::CapacityExceeded);
        }
        if self.has_instance(object, instance) {
            return Err(RegistryError::AlreadyDefined);
        }
        self.instances
            .push((object, instance))
            .map_err(|_| RegistryError::CapacityExceeded)?;
        self.accepted();
        Ok(())
    }

    fn create_resource(
        &mut self,
        object: ObjectId,
        instance: InstanceId,
        resource: ResourceId,
    ) -> Result<(), RegistryError> {
        self.injected(RegistryStep::CreateResource)?;
        if self.resource_definition(object, resource).is_none() {
            return Err(RegistryError::Undefined);
        }
        if !self.has_instance(object, instance) {
            return Err(RegistryError::NotFound);
        }
        if self.has_resource(object, instance, resource) {
            return Err(RegistryError::AlreadyDefined);
        }
        self.resources
            .push((object, instance, resource))
            .map_err(|_| RegistryError::CapacityExceeded)?;
        self.accepted();
        Ok(())
    }

    fn resource_changed(&mut self, object: ObjectId, instance: InstanceId, resource: ResourceId) {
        let notification = Notification {
            object,
            instance,
            resource,
        };
        if self.notifications.push(notification).is_err() {
            self.dropped_notifications = self.dropped_notifications.saturating_add(1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::resource::{Operations, ResourceType};

    const OBJ: ObjectId = ObjectId(3200);
    const RO: ResourceId = ResourceId(5500);
    const RW: ResourceId = ResourceId(5503);

    fn object() -> ObjectDefinition {
        ObjectDefinition {
            id: OBJ,
            name: "Button",
            min_instances: 0,
            max_instances: 2,
        }
    }

    fn resource(id: ResourceId, kind: ResourceType, operations: Operations) -> ResourceDefinition {
        ResourceDefinition {
            id,
            name: "r",
            kind,
            min_instances: 0,
            max_instances: 1,
            operations,
        }
    }

    /// Single-instance handler holding one bool and one integer.
    struct Cell {
        flag: bool,
        value: i64,
    }

    impl ObjectHandler for Cell {
        fn object_id(&self) -> ObjectId {
            OBJ
        }

        fn read(&self, _: InstanceId, resource: ResourceId) -> Result<ResourceValue, RegistryError> {
            match resource {
                RO => Ok(ResourceValue::Boolean(self.flag)),
                RW => Ok(ResourceValue::Integer(self.value)),
                _ => Err(RegistryError::NotFound),
            }
        }

        fn write(
            &mut self,
            _: InstanceId,
            resource: ResourceId,
            value: ResourceValue,
        ) -> Result<(), RegistryError> {
            match (resource, value) {
                (RW, ResourceValue::Integer(v)) => {
                    self.value = v;
                    Ok(())
                }
                _ => Err(RegistryError::MethodNotAllowed),
            }
        }
    }

    fn populated() -> MockRegistry {
        let mut reg = MockRegistry::new();
        reg.define_object(&object()).unwrap();
        reg.define_resource(OBJ, &resource(RO, ResourceType::Boolean, Operations::ReadOnly))
            .unwrap();
        reg.define_resource(OBJ, &resource(RW, ResourceType::Integer, Operations::ReadWrite))
            .unwrap();
        reg.create_object_instance(OBJ, InstanceId(0)).unwrap();
        reg.create_resource(OBJ, InstanceId(0), RO).unwrap();
        reg.create_resource(OBJ, InstanceId(0), RW).unwrap();
        reg
    }

    #[test]
    fn test_duplicate_object_rejected() {
        let mut reg = MockRegistry::new();
        reg.define_object(&object()).unwrap();
        assert_eq!(reg.define_object(&object()), Err(RegistryError::AlreadyDefined));
    }

    #[test]
    fn test_resource_requires_object() {
        let mut reg = MockRegistry::new();
        let r = resource(RO, ResourceType::Boolean, Operations::ReadOnly);
        assert_eq!(reg.define_resource(OBJ, &r), Err(RegistryError::Undefined));
    }

    #[test]
    fn test_instance_limit_enforced() {
        let mut reg = MockRegistry::new();
        reg.define_object(&object()).unwrap();
        reg.create_object_instance(OBJ, InstanceId(1)).unwrap();
        assert_eq!(
            reg.create_object_instance(OBJ, InstanceId(2)),
            Err(RegistryError::CapacityExceeded)
        );
        assert_eq!(reg.instance_count(OBJ), 1);
    }

    #[test]
    fn test_injected_failure_is_one_shot() {
        let mut reg = MockRegistry::new();
        reg.fail_next(RegistryStep::DefineObject, RegistryError::CapacityExceeded);
        assert_eq!(reg.define_object(&object()), Err(RegistryError::CapacityExceeded));
        assert_eq!(reg.define_object(&object()), Ok(()));
        assert_eq!(reg.registration_calls(), 1);
    }

    #[test]
    fn test_server_read_and_write() {
        let reg = populated();
        let mut cell = Cell {
            flag: true,
            value: 5,
        };
        assert_eq!(
            reg.server_read(&cell, InstanceId(0), RO),
            Ok(ResourceValue::Boolean(true))
        );
        reg.server_write(&mut cell, InstanceId(0), RW, ResourceValue::Integer(42))
            .unwrap();
        assert_eq!(cell.value, 42);
    }

    #[test]
    fn test_server_write_read_only_rejected() {
        let reg = populated();
        let mut cell = Cell {
            flag: false,
            value: 0,
        };
        assert_eq!(
            reg.server_write(&mut cell, InstanceId(0), RO, ResourceValue::Boolean(true)),
            Err(RegistryError::MethodNotAllowed)
        );
        assert!(!cell.flag);
    }

    #[test]
    fn test_server_write_type_mismatch_rejected() {
        let reg = populated();
        let mut cell = Cell {
            flag: false,
            value: 0,
        };
        assert_eq!(
            reg.server_write(&mut cell, InstanceId(0), RW, ResourceValue::Boolean(true)),
            Err(RegistryError::TypeMismatch)
        );
    }

    #[test]
    fn test_server_read_missing_instance() {
        let reg = populated();
        let cell = Cell {
            flag: false,
            value: 0,
        };
        assert_eq!(
            reg.server_read(&cell, InstanceId(1), RO),
            Err(RegistryError::NotFound)
        );
    }

    #[test]
    fn test_notifications_recorded_in_order() {
        let mut reg = populated();
        reg.resource_changed(OBJ, InstanceId(0), RO);
        reg.resource_changed(OBJ, InstanceId(1), RO);
        assert_eq!(reg.notifications().len(), 2);
        assert_eq!(reg.notifications()[1].instance, InstanceId(1));
        reg.clear_notifications();
        assert!(reg.notifications().is_empty());
    }
}
