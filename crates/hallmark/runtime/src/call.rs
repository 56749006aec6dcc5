//! Transactions, queries and their results.

use hallmark_registry::{NewDesign, NewMaterial};
use hallmark_types::{
    ArtisanRecord, CallContext, DesignId, DesignRecord, MaterialId, MaterialRecord, Principal,
    RegistryError, Sequence,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which registry an admin operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    Artisan,
    Material,
    Design,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 3] = [
        RegistryKind::Artisan,
        RegistryKind::Material,
        RegistryKind::Design,
    ];
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegistryKind::Artisan => "artisan",
            RegistryKind::Material => "material",
            RegistryKind::Design => "design",
        };
        f.write_str(name)
    }
}

/// A state-changing registry operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Call {
    RegisterArtisan { name: String, credentials: String },
    VerifyArtisan { artisan: Principal },
    CertifyMaterial(NewMaterial),
    RegisterDesign(NewDesign),
    TransferAdmin {
        registry: RegistryKind,
        new_admin: Principal,
    },
}

impl Call {
    /// Short operation name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Call::RegisterArtisan { .. } => "register_artisan",
            Call::VerifyArtisan { .. } => "verify_artisan",
            Call::CertifyMaterial(_) => "certify_material",
            Call::RegisterDesign(_) => "register_design",
            Call::TransferAdmin { .. } => "transfer_admin",
        }
    }
}

/// A call together with the inputs the host environment supplies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub caller: Principal,
    pub sequence: Sequence,
    pub call: Call,
}

impl Transaction {
    pub fn new(caller: impl Into<Principal>, sequence: u64, call: Call) -> Self {
        Self {
            caller: caller.into(),
            sequence: Sequence(sequence),
            call,
        }
    }

    pub fn context(&self) -> CallContext {
        CallContext {
            caller: self.caller.clone(),
            sequence: self.sequence,
        }
    }
}

/// What a successful call produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    ArtisanRegistered,
    ArtisanVerified,
    MaterialCertified { id: MaterialId },
    DesignRegistered { id: DesignId },
    AdminTransferred,
}

/// Journal entry for one applied transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Position in the journal, starting at 0. Never reused.
    pub index: u64,
    pub caller: Principal,
    pub sequence: Sequence,
    pub call: Call,
    pub result: std::result::Result<Outcome, RegistryError>,
}

impl Receipt {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Convert the recorded result into a `RuntimeError` on failure.
    pub fn into_result(self) -> crate::Result<Outcome> {
        self.result.map_err(Into::into)
    }
}

/// A read-only registry lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Query {
    ArtisanDetails { artisan: Principal },
    IsVerified { artisan: Principal },
    MaterialDetails { id: MaterialId },
    MaterialCount,
    DesignDetails { id: DesignId },
    DesignCount,
    Admin { registry: RegistryKind },
}

/// Answer to a [`Query`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Artisan(Option<ArtisanRecord>),
    Material(Option<MaterialRecord>),
    Design(Option<DesignRecord>),
    Verified(bool),
    Count(u64),
    Admin(Principal),
}
