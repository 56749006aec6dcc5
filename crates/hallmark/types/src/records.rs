//! Fixed-shape records stored by the registries.

use serde::{Deserialize, Serialize};

use crate::ids::{MaterialId, Principal, Sequence};

/// Artisan profile, keyed by the artisan's principal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtisanRecord {
    pub name: String,
    /// Once true, stays true. There is no unverify operation.
    pub verified: bool,
    /// `Sequence::ZERO` until the first successful verification.
    pub verification_date: Sequence,
    pub credentials: String,
}

impl ArtisanRecord {
    /// A freshly registered, not yet verified profile.
    pub fn unverified(name: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verified: false,
            verification_date: Sequence::ZERO,
            credentials: credentials.into(),
        }
    }

    /// Mark the profile verified at `at`. Re-verifying re-stamps the date.
    pub fn mark_verified(&mut self, at: Sequence) {
        self.verified = true;
        self.verification_date = at;
    }
}

/// Certified material, keyed by [`MaterialId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub purity: String,
    pub origin: String,
    pub certification_date: Sequence,
    pub certifier: Principal,
}

/// Registered design, keyed by [`crate::DesignId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub name: String,
    pub description: String,
    pub image_uri: String,
    pub artisan: Principal,
    pub registration_date: Sequence,
    /// Stored verbatim. Not checked against the material registry.
    pub materials: Vec<MaterialId>,
}
