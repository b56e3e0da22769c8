//! LwM2M object model seam.
//!
//! The device-management client (object/resource registry, observation,
//! transport) lives outside this workspace. This crate is the narrow
//! interface the monitor talks to:
//!
//! ```text
//! digital-input ──ObjectRegistry──▶ LwM2M client ──▶ network
//!       ▲                                │
//!       └────────ObjectHandler───────────┘  (server reads / writes)
//! ```
//!
//! - [`ObjectRegistry`] is consumed: define objects and resources, create
//!   instances, report changes.
//! - [`ObjectHandler`] is exposed: the client calls back into the object to
//!   read current values and apply writes, instead of mirroring raw memory.
//!
//! Identifiers for the IPSO objects used by the firmware are in [`ipso`].

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod mocks;
pub mod registry;
pub mod resource;

pub use ids::{ipso, InstanceId, ObjectId, ResourceId};
pub use registry::{ObjectHandler, ObjectRegistry, RegistryError};
pub use resource::{ObjectDefinition, Operations, ResourceDefinition, ResourceType, ResourceValue};
