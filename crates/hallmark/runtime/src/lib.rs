//! # hallmark-runtime
//!
//! Host side of the Hallmark registries.
//!
//! The registries expect their environment to supply the caller and the
//! current sequence for every call. This crate is that environment for
//! local use: a [`Deployment`] orders [`Transaction`]s, rejects sequence
//! regressions, journals a [`Receipt`] for every applied call, and can be
//! saved to and restored from a JSON [`Snapshot`].
//!
//! [`Host`] wraps a deployment for shared use across threads.

#![deny(unsafe_code)]

pub mod call;
pub mod config;
pub mod deployment;
pub mod error;
pub mod host;
pub mod journal;
pub mod snapshot;

pub use call::{Call, Outcome, Query, QueryResponse, Receipt, RegistryKind, Transaction};
pub use config::{DeploymentConfig, DEFAULT_DEPLOYER};
pub use deployment::Deployment;
pub use error::{Result, RuntimeError};
pub use host::Host;
pub use journal::{Journal, JournalError};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

pub use hallmark_registry::{NewDesign, NewMaterial};
pub use hallmark_types::{
    ArtisanRecord, CallContext, DesignId, DesignRecord, MaterialId, MaterialRecord, Principal,
    RegistryError, Sequence,
};
