//! # hallmark-gate
//!
//! Single-writer authorization capability.
//!
//! An [`AdminGate`] holds exactly one admin principal. Admin-only operations
//! call [`AdminGate::authorize`] before touching state; the admin can hand
//! the role to any other principal with [`AdminGate::transfer`].
//!
//! Each registry embeds its own gate. There is no process-wide admin.

#![deny(unsafe_code)]

use hallmark_types::{Principal, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Holds the current admin and authorizes callers against it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminGate {
    admin: Principal,
}

impl AdminGate {
    /// Create a gate whose admin is the deploying principal.
    pub fn new(deployer: Principal) -> Self {
        Self { admin: deployer }
    }

    /// The current admin.
    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Succeeds iff `caller` is the current admin.
    pub fn authorize(&self, caller: &Principal) -> RegistryResult<()> {
        if *caller == self.admin {
            Ok(())
        } else {
            warn!(caller = %caller, admin = %self.admin, "Admin authorization denied");
            Err(RegistryError::NotAuthorized {
                caller: caller.clone(),
            })
        }
    }

    /// Hand the admin role to `new_admin`.
    ///
    /// Any principal is accepted, including one nobody controls; transferring
    /// to such a principal locks admin operations for good.
    pub fn transfer(&mut self, caller: &Principal, new_admin: Principal) -> RegistryResult<()> {
        self.authorize(caller)?;
        info!(from = %self.admin, to = %new_admin, "Admin transferred");
        self.admin = new_admin;
        Ok(())
    }
}
