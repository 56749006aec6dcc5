//! Artisan identity verification.
//!
//! Profiles are keyed by principal. Only the admin may register or verify,
//! and `register` always keys the profile by the caller, so the profile
//! being written is the admin's own.

use std::collections::BTreeMap;

use hallmark_gate::AdminGate;
use hallmark_types::{ArtisanRecord, CallContext, Principal, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Principal-keyed registry of artisan profiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtisanRegistry {
    gate: AdminGate,
    artisans: BTreeMap<Principal, ArtisanRecord>,
}

impl ArtisanRegistry {
    pub fn new(deployer: Principal) -> Self {
        Self {
            gate: AdminGate::new(deployer),
            artisans: BTreeMap::new(),
        }
    }

    /// Register (or overwrite) the caller's own profile, unverified.
    pub fn register(
        &mut self,
        ctx: &CallContext,
        name: impl Into<String>,
        credentials: impl Into<String>,
    ) -> RegistryResult<()> {
        self.gate.authorize(&ctx.caller)?;

        let record = ArtisanRecord::unverified(name, credentials);
        info!(artisan = %ctx.caller, name = %record.name, "Artisan registered");
        self.artisans.insert(ctx.caller.clone(), record);
        Ok(())
    }

    /// Mark `artisan` verified as of the current sequence.
    pub fn verify(&mut self, ctx: &CallContext, artisan: &Principal) -> RegistryResult<()> {
        self.gate.authorize(&ctx.caller)?;

        let record = self
            .artisans
            .get_mut(artisan)
            .ok_or_else(|| RegistryError::NotFound(format!("artisan {artisan}")))?;
        record.mark_verified(ctx.sequence);

        info!(artisan = %artisan, at = %ctx.sequence, "Artisan verified");
        Ok(())
    }

    /// False for principals with no profile.
    pub fn is_verified(&self, artisan: &Principal) -> bool {
        self.artisans
            .get(artisan)
            .map(|record| record.verified)
            .unwrap_or(false)
    }

    pub fn details(&self, artisan: &Principal) -> Option<ArtisanRecord> {
        self.artisans.get(artisan).cloned()
    }

    pub fn len(&self) -> usize {
        self.artisans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artisans.is_empty()
    }

    pub fn admin(&self) -> &Principal {
        self.gate.admin()
    }

    pub fn transfer_admin(&mut self, ctx: &CallContext, new_admin: Principal) -> RegistryResult<()> {
        self.gate.transfer(&ctx.caller, new_admin)
    }
}
