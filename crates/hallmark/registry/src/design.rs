//! Design registration.
//!
//! Any caller may register a design and is recorded as its artisan. The
//! registry still carries an admin, but the only thing the admin can do is
//! hand the role on.

use hallmark_gate::AdminGate;
use hallmark_types::{CallContext, DesignId, DesignRecord, MaterialId, Principal, RegistryResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::table::{SequentialTable, TableError};

/// Arguments to [`DesignRegistry::register`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDesign {
    pub name: String,
    pub description: String,
    pub image_uri: String,
    /// Material ids are not checked against the material registry.
    pub materials: Vec<MaterialId>,
}

impl NewDesign {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_uri: impl Into<String>,
        materials: Vec<MaterialId>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_uri: image_uri.into(),
            materials,
        }
    }
}

/// Designs keyed by dense [`DesignId`]s.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRegistry {
    gate: AdminGate,
    designs: SequentialTable<DesignId, DesignRecord>,
}

impl DesignRegistry {
    pub fn new(deployer: Principal) -> Self {
        Self {
            gate: AdminGate::new(deployer),
            designs: SequentialTable::new(),
        }
    }

    /// Register a design on behalf of the caller. Never fails.
    pub fn register(&mut self, ctx: &CallContext, design: NewDesign) -> DesignId {
        let id = self.designs.append(DesignRecord {
            name: design.name,
            description: design.description,
            image_uri: design.image_uri,
            artisan: ctx.caller.clone(),
            registration_date: ctx.sequence,
            materials: design.materials,
        });

        info!(id = %id, artisan = %ctx.caller, at = %ctx.sequence, "Design registered");
        id
    }

    pub fn details(&self, id: DesignId) -> Option<DesignRecord> {
        self.designs.get(id)
    }

    pub fn count(&self) -> u64 {
        self.designs.count()
    }

    pub fn admin(&self) -> &Principal {
        self.gate.admin()
    }

    pub fn transfer_admin(&mut self, ctx: &CallContext, new_admin: Principal) -> RegistryResult<()> {
        self.gate.transfer(&ctx.caller, new_admin)
    }

    pub fn check_consistency(&self) -> Result<(), TableError> {
        self.designs.check_dense()
    }
}
