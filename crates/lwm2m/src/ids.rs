//! Object, instance and resource identifiers.

/// LwM2M object identifier (e.g. 3200 = IPSO Digital Input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct ObjectId(pub u16);

/// Object instance index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct InstanceId(pub u16);

/// Resource identifier within an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct ResourceId(pub u16);

impl core::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl core::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// IPSO Smart Object identifiers used by this firmware.
pub mod ipso {
    use super::{ObjectId, ResourceId};

    /// IPSO Digital Input object.
    pub const DIGITAL_INPUT: ObjectId = ObjectId(3200);

    /// Current debounced state (Boolean, read-only).
    pub const DIGITAL_INPUT_STATE: ResourceId = ResourceId(5500);

    /// Number of inactive→active transitions (Integer, read-only).
    pub const DIGITAL_INPUT_COUNTER: ResourceId = ResourceId(5501);

    /// Debounce period in milliseconds (Integer, read-write).
    pub const DIGITAL_INPUT_DEBOUNCE_PERIOD: ResourceId = ResourceId(5503);
}
