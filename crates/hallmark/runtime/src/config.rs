//! Deployment configuration.

use hallmark_types::Principal;
use serde::{Deserialize, Serialize};

/// Principal that deploys the registries when none is configured.
pub const DEFAULT_DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Configuration for a [`crate::Deployment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Initial admin of every registry.
    pub deployer: Principal,

    /// Reject transactions whose sequence is below the last applied one.
    pub enforce_monotonic_sequence: bool,

    /// Keep at most this many receipts. `None` keeps everything.
    pub journal_capacity: Option<usize>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            deployer: Principal::new(DEFAULT_DEPLOYER),
            enforce_monotonic_sequence: true,
            journal_capacity: None,
        }
    }
}

impl DeploymentConfig {
    pub fn with_deployer(deployer: impl Into<Principal>) -> Self {
        Self {
            deployer: deployer.into(),
            ..Self::default()
        }
    }
}
