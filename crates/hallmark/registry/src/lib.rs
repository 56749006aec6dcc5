//! # hallmark-registry
//!
//! The three provenance registries.
//!
//! - **ArtisanRegistry** — principal → artisan profile; admin-only register
//!   and verify.
//! - **MaterialRegistry** — sequential id → certified material; admin-only.
//! - **DesignRegistry** — sequential id → design; open to any caller, who is
//!   recorded as the design's artisan.
//!
//! All mutations take `&mut self` and either apply completely or return an
//! error with state untouched. Admin-gated registries each own an
//! [`AdminGate`]; none of them call one another.

#![deny(unsafe_code)]

pub mod artisan;
pub mod design;
pub mod material;
pub mod table;

pub use artisan::ArtisanRegistry;
pub use design::{DesignRegistry, NewDesign};
pub use material::{MaterialRegistry, NewMaterial};
pub use table::{SequentialId, SequentialTable, TableError};

pub use hallmark_gate::AdminGate;
