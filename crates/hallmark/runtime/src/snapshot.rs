//! Snapshot export and restore.
//!
//! A snapshot is the persisted layout of a deployment: the three tables with
//! their counters and admins, plus the journal and the last applied
//! sequence. Snapshots are plain JSON documents.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use hallmark_registry::{ArtisanRegistry, DesignRegistry, MaterialRegistry};
use hallmark_types::Sequence;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::DeploymentConfig;
use crate::deployment::Deployment;
use crate::error::{Result, RuntimeError};
use crate::journal::Journal;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable image of a [`Deployment`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub config: DeploymentConfig,
    pub artisans: ArtisanRegistry,
    pub materials: MaterialRegistry,
    pub designs: DesignRegistry,
    pub journal: Journal,
    pub last_sequence: Option<Sequence>,
}

impl Deployment {
    /// Capture the full state of this deployment.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            created_at: Utc::now(),
            config: self.config.clone(),
            artisans: self.artisans.clone(),
            materials: self.materials.clone(),
            designs: self.designs.clone(),
            journal: self.journal.clone(),
            last_sequence: self.last_sequence,
        }
    }

    /// Rebuild a deployment from a snapshot, checking it is consistent.
    pub fn restore(snapshot: Snapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RuntimeError::Snapshot(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        snapshot
            .materials
            .check_consistency()
            .map_err(|e| RuntimeError::Snapshot(format!("material table: {e}")))?;
        snapshot
            .designs
            .check_consistency()
            .map_err(|e| RuntimeError::Snapshot(format!("design table: {e}")))?;
        snapshot
            .journal
            .check_consistency()
            .map_err(|e| RuntimeError::Snapshot(format!("journal: {e}")))?;
        if snapshot.journal.capacity() != snapshot.config.journal_capacity {
            return Err(RuntimeError::Snapshot(format!(
                "journal capacity {:?} does not match configured {:?}",
                snapshot.journal.capacity(),
                snapshot.config.journal_capacity
            )));
        }

        Ok(Self {
            config: snapshot.config,
            artisans: snapshot.artisans,
            materials: snapshot.materials,
            designs: snapshot.designs,
            journal: snapshot.journal,
            last_sequence: snapshot.last_sequence,
        })
    }

    /// Write a snapshot of this deployment to `path` as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        fs::write(path, json)?;
        info!(path = %path.display(), "Snapshot saved");
        Ok(())
    }

    /// Load a deployment from a snapshot file written by [`Deployment::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        let deployment = Self::restore(snapshot)?;
        info!(
            path = %path.display(),
            materials = deployment.materials.count(),
            designs = deployment.designs.count(),
            "Snapshot loaded"
        );
        Ok(deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{Call, Transaction};
    use hallmark_registry::NewMaterial;

    #[test]
    fn test_restore_rejects_unknown_version() {
        let mut snapshot = Deployment::default().snapshot();
        snapshot.version = 99;
        let err = Deployment::restore(snapshot).unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot version"));
    }

    #[test]
    fn test_restore_rejects_counter_drift() {
        let mut deployment = Deployment::default();
        let admin = deployment.config().deployer.clone();
        deployment
            .apply(Transaction::new(
                admin,
                1,
                Call::CertifyMaterial(NewMaterial::new("Gold", "Metal", "24K", "South Africa")),
            ))
            .unwrap();

        let mut json = serde_json::to_value(deployment.snapshot()).unwrap();
        json["materials"]["materials"]["last_id"] = serde_json::json!(4);
        let snapshot: Snapshot = serde_json::from_value(json).unwrap();

        let err = Deployment::restore(snapshot).unwrap_err();
        assert!(matches!(err, RuntimeError::Snapshot(_)));
    }

    fn with_receipts(count: u64) -> Deployment {
        let mut deployment = Deployment::default();
        let admin = deployment.config().deployer.clone();
        for seq in 0..count {
            deployment
                .apply(Transaction::new(
                    admin.clone(),
                    seq,
                    Call::CertifyMaterial(NewMaterial::new("Gold", "Metal", "24K", "South Africa")),
                ))
                .unwrap();
        }
        deployment
    }

    fn restore_json(json: serde_json::Value) -> Result<Deployment> {
        let snapshot: Snapshot = serde_json::from_value(json).unwrap();
        Deployment::restore(snapshot)
    }

    #[test]
    fn test_restore_rejects_receipt_at_max_index() {
        let mut json = serde_json::to_value(with_receipts(1).snapshot()).unwrap();
        json["journal"]["entries"][0]["index"] = serde_json::json!(u64::MAX);

        let err = restore_json(json).unwrap_err();
        assert!(matches!(err, RuntimeError::Snapshot(ref msg) if msg.starts_with("journal:")));
    }

    #[test]
    fn test_restore_rejects_exhausted_journal() {
        let mut json = serde_json::to_value(Deployment::default().snapshot()).unwrap();
        json["journal"]["next_index"] = serde_json::json!(u64::MAX);

        let err = restore_json(json).unwrap_err();
        assert!(matches!(err, RuntimeError::Snapshot(ref msg) if msg.contains("exhausted")));
    }

    #[test]
    fn test_restore_rejects_out_of_order_journal() {
        let mut json = serde_json::to_value(with_receipts(2).snapshot()).unwrap();
        json["journal"]["entries"][1]["index"] = serde_json::json!(0);

        assert!(matches!(restore_json(json), Err(RuntimeError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_journal_over_capacity() {
        let mut json = serde_json::to_value(with_receipts(3).snapshot()).unwrap();
        json["journal"]["capacity"] = serde_json::json!(2);
        json["config"]["journal_capacity"] = serde_json::json!(2);

        assert!(matches!(restore_json(json), Err(RuntimeError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_capacity_disagreement() {
        let mut json = serde_json::to_value(with_receipts(1).snapshot()).unwrap();
        json["config"]["journal_capacity"] = serde_json::json!(10);

        let err = restore_json(json).unwrap_err();
        assert!(matches!(err, RuntimeError::Snapshot(ref msg) if msg.contains("capacity")));
    }

    #[test]
    fn test_restore_keeps_matching_capacity() {
        let mut deployment = Deployment::new(DeploymentConfig {
            journal_capacity: Some(2),
            ..DeploymentConfig::default()
        });
        let admin = deployment.config().deployer.clone();
        for seq in 0..4 {
            deployment
                .apply(Transaction::new(
                    admin.clone(),
                    seq,
                    Call::RegisterArtisan {
                        name: "Alice".into(),
                        credentials: "Silversmith".into(),
                    },
                ))
                .unwrap();
        }

        let restored = Deployment::restore(deployment.snapshot()).unwrap();
        assert_eq!(restored.journal().capacity(), Some(2));
        assert_eq!(restored.journal().len(), 2);
        assert_eq!(restored.journal().next_index(), 4);
    }
}
