use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::Principal;

/// Errors returned by registry operations.
///
/// Both variants leave registry state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryError {
    /// Caller is not the current admin.
    #[error("not authorized: {caller} is not the admin")]
    NotAuthorized { caller: Principal },

    /// Referenced key has no record.
    #[error("not found: {0}")]
    NotFound(String),
}

impl RegistryError {
    /// Numeric code reported on chain (`err u100`, `err u101`).
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::NotAuthorized { .. } => 100,
            RegistryError::NotFound(_) => 101,
        }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
