use hallmark_registry::{ArtisanRegistry, DesignRegistry, MaterialRegistry};
use hallmark_types::{Principal, RegistryResult, Sequence};
use tracing::{debug, info, warn};

use crate::call::{Call, Outcome, Query, QueryResponse, Receipt, RegistryKind, Transaction};
use crate::config::DeploymentConfig;
use crate::error::{Result, RuntimeError};
use crate::journal::Journal;

/// One deployment of the three registries plus its host-side bookkeeping.
///
/// The deployment plays the part of the host ledger: it orders
/// transactions, hands each registry its call context, and journals the
/// result. The registries themselves never see each other.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub(crate) config: DeploymentConfig,
    pub(crate) artisans: ArtisanRegistry,
    pub(crate) materials: MaterialRegistry,
    pub(crate) designs: DesignRegistry,
    pub(crate) journal: Journal,
    pub(crate) last_sequence: Option<Sequence>,
}

impl Deployment {
    /// Deploy fresh registries, all administered by `config.deployer`.
    pub fn new(config: DeploymentConfig) -> Self {
        let deployer = config.deployer.clone();
        info!(deployer = %deployer, "Registries deployed");
        Self {
            artisans: ArtisanRegistry::new(deployer.clone()),
            materials: MaterialRegistry::new(deployer.clone()),
            designs: DesignRegistry::new(deployer),
            journal: Journal::new(config.journal_capacity),
            last_sequence: None,
            config,
        }
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    pub fn artisans(&self) -> &ArtisanRegistry {
        &self.artisans
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn designs(&self) -> &DesignRegistry {
        &self.designs
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Sequence of the most recently applied transaction.
    pub fn last_sequence(&self) -> Option<Sequence> {
        self.last_sequence
    }

    /// Apply one transaction.
    ///
    /// A registry rejection is a normal outcome: it is journaled and returned
    /// inside the receipt. `Err` is only returned when the transaction is
    /// refused before reaching a registry (sequence regression or a full
    /// journal), in which case nothing is journaled.
    pub fn apply(&mut self, tx: Transaction) -> Result<Receipt> {
        if self.config.enforce_monotonic_sequence {
            if let Some(last) = self.last_sequence {
                if tx.sequence < last {
                    warn!(last = %last, got = %tx.sequence, "Transaction sequence regressed");
                    return Err(RuntimeError::SequenceRegression {
                        last,
                        got: tx.sequence,
                    });
                }
            }
        }

        self.journal.check_room()?;

        let result = self.dispatch(&tx);
        match &result {
            Ok(outcome) => {
                debug!(op = tx.call.name(), caller = %tx.caller, ?outcome, "Transaction applied")
            }
            Err(err) => {
                info!(op = tx.call.name(), caller = %tx.caller, code = err.code(), error = %err, "Transaction rejected")
            }
        }

        self.last_sequence = Some(tx.sequence);
        let receipt = self.journal.append(Receipt {
            index: 0,
            caller: tx.caller,
            sequence: tx.sequence,
            call: tx.call,
            result,
        })?;
        Ok(receipt)
    }

    fn dispatch(&mut self, tx: &Transaction) -> RegistryResult<Outcome> {
        let ctx = tx.context();
        match &tx.call {
            Call::RegisterArtisan { name, credentials } => {
                self.artisans.register(&ctx, name.clone(), credentials.clone())?;
                Ok(Outcome::ArtisanRegistered)
            }
            Call::VerifyArtisan { artisan } => {
                self.artisans.verify(&ctx, artisan)?;
                Ok(Outcome::ArtisanVerified)
            }
            Call::CertifyMaterial(material) => {
                let id = self.materials.certify(&ctx, material.clone())?;
                Ok(Outcome::MaterialCertified { id })
            }
            Call::RegisterDesign(design) => {
                let id = self.designs.register(&ctx, design.clone());
                Ok(Outcome::DesignRegistered { id })
            }
            Call::TransferAdmin {
                registry,
                new_admin,
            } => {
                let new_admin = new_admin.clone();
                match registry {
                    RegistryKind::Artisan => self.artisans.transfer_admin(&ctx, new_admin)?,
                    RegistryKind::Material => self.materials.transfer_admin(&ctx, new_admin)?,
                    RegistryKind::Design => self.designs.transfer_admin(&ctx, new_admin)?,
                }
                Ok(Outcome::AdminTransferred)
            }
        }
    }

    /// Answer a read-only query.
    pub fn query(&self, query: &Query) -> QueryResponse {
        debug!(?query, "Query");
        match query {
            Query::ArtisanDetails { artisan } => QueryResponse::Artisan(self.artisans.details(artisan)),
            Query::IsVerified { artisan } => QueryResponse::Verified(self.artisans.is_verified(artisan)),
            Query::MaterialDetails { id } => QueryResponse::Material(self.materials.details(*id)),
            Query::MaterialCount => QueryResponse::Count(self.materials.count()),
            Query::DesignDetails { id } => QueryResponse::Design(self.designs.details(*id)),
            Query::DesignCount => QueryResponse::Count(self.designs.count()),
            Query::Admin { registry } => QueryResponse::Admin(self.admin(*registry).clone()),
        }
    }

    /// Current admin of one registry.
    pub fn admin(&self, registry: RegistryKind) -> &Principal {
        match registry {
            RegistryKind::Artisan => self.artisans.admin(),
            RegistryKind::Material => self.materials.admin(),
            RegistryKind::Design => self.designs.admin(),
        }
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self::new(DeploymentConfig::default())
    }
}
