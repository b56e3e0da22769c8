//! Object and resource definitions.

use crate::ids::{ObjectId, ResourceId};

/// Value type of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceType {
    /// `true` / `false`
    Boolean,
    /// Signed 64-bit integer
    Integer,
}

/// Operations a server may perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operations {
    /// Read / observe only
    ReadOnly,
    /// Read / observe and write
    ReadWrite,
}

impl Operations {
    /// Returns `true` if a server write is permitted.
    pub fn is_writable(self) -> bool {
        matches!(self, Self::ReadWrite)
    }
}

/// A resource value as exchanged with the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceValue {
    /// Boolean resource value
    Boolean(bool),
    /// Integer resource value
    Integer(i64),
}

impl ResourceValue {
    /// The [`ResourceType`] this value carries.
    pub fn kind(self) -> ResourceType {
        match self {
            Self::Boolean(_) => ResourceType::Boolean,
            Self::Integer(_) => ResourceType::Integer,
        }
    }
}

/// Object type registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObjectDefinition {
    /// Object identifier
    pub id: ObjectId,
    /// Human-readable object name
    pub name: &'static str,
    /// Minimum number of instances
    pub min_instances: u16,
    /// Maximum number of instances
    pub max_instances: u16,
}

/// Resource registration within an object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResourceDefinition {
    /// Resource identifier
    pub id: ResourceId,
    /// Human-readable resource name
    pub name: &'static str,
    /// Value type
    pub kind: ResourceType,
    /// Minimum resource instances per object instance
    pub min_instances: u16,
    /// Maximum resource instances per object instance
    pub max_instances: u16,
    /// Permitted server operations
    pub operations: Operations,
}
