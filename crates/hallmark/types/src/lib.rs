//! # hallmark-types
//!
//! Shared vocabulary for the Hallmark provenance registries.
//!
//! Every registry operation receives a [`CallContext`] from its host
//! environment: the calling [`Principal`] and the current [`Sequence`]
//! (block height). Neither value is ever computed by the registries
//! themselves.
//!
//! Records are fixed-shape structs. Materials and designs are keyed by
//! dense sequential identifiers starting at 1; artisans are keyed by
//! principal.

#![deny(unsafe_code)]

pub mod context;
pub mod error;
pub mod ids;
pub mod records;

pub use context::CallContext;
pub use error::{RegistryError, RegistryResult};
pub use ids::{DesignId, MaterialId, Principal, Sequence};
pub use records::{ArtisanRecord, DesignRecord, MaterialRecord};
