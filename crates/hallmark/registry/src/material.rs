//! Material certification.

use hallmark_gate::AdminGate;
use hallmark_types::{CallContext, MaterialId, MaterialRecord, Principal, RegistryResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::table::{SequentialTable, TableError};

/// Arguments to [`MaterialRegistry::certify`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaterial {
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub purity: String,
    pub origin: String,
}

impl NewMaterial {
    pub fn new(
        name: impl Into<String>,
        material_type: impl Into<String>,
        purity: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            material_type: material_type.into(),
            purity: purity.into(),
            origin: origin.into(),
        }
    }
}

/// Admin-certified materials keyed by dense [`MaterialId`]s.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRegistry {
    gate: AdminGate,
    materials: SequentialTable<MaterialId, MaterialRecord>,
}

impl MaterialRegistry {
    pub fn new(deployer: Principal) -> Self {
        Self {
            gate: AdminGate::new(deployer),
            materials: SequentialTable::new(),
        }
    }

    /// Certify a material. The caller is recorded as certifier.
    ///
    /// A denied call does not consume an id.
    pub fn certify(&mut self, ctx: &CallContext, material: NewMaterial) -> RegistryResult<MaterialId> {
        self.gate.authorize(&ctx.caller)?;

        let id = self.materials.append(MaterialRecord {
            name: material.name,
            material_type: material.material_type,
            purity: material.purity,
            origin: material.origin,
            certification_date: ctx.sequence,
            certifier: ctx.caller.clone(),
        });

        info!(id = %id, certifier = %ctx.caller, at = %ctx.sequence, "Material certified");
        Ok(id)
    }

    pub fn details(&self, id: MaterialId) -> Option<MaterialRecord> {
        self.materials.get(id)
    }

    pub fn count(&self) -> u64 {
        self.materials.count()
    }

    pub fn admin(&self) -> &Principal {
        self.gate.admin()
    }

    pub fn transfer_admin(&mut self, ctx: &CallContext, new_admin: Principal) -> RegistryResult<()> {
        self.gate.transfer(&ctx.caller, new_admin)
    }

    /// Check the table loaded from storage still has dense ids.
    pub fn check_consistency(&self) -> Result<(), TableError> {
        self.materials.check_dense()
    }
}
