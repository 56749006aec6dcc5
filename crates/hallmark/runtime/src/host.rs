use std::sync::{Arc, RwLock};

use crate::call::{Query, QueryResponse, Receipt, Transaction};
use crate::config::DeploymentConfig;
use crate::deployment::Deployment;
use crate::error::{Result, RuntimeError};
use crate::snapshot::Snapshot;

/// Shareable handle to a deployment.
///
/// Transactions run one at a time under the write lock, so each is applied
/// whole before the next one starts. Queries share the read lock.
#[derive(Clone)]
pub struct Host {
    deployment: Arc<RwLock<Deployment>>,
}

impl Host {
    pub fn new(config: DeploymentConfig) -> Self {
        Self::from_deployment(Deployment::new(config))
    }

    pub fn from_deployment(deployment: Deployment) -> Self {
        Self {
            deployment: Arc::new(RwLock::new(deployment)),
        }
    }

    /// Apply a transaction. See [`Deployment::apply`].
    pub fn submit(&self, tx: Transaction) -> Result<Receipt> {
        let mut deployment = self.deployment.write().map_err(|_| RuntimeError::LockError)?;
        deployment.apply(tx)
    }

    pub fn query(&self, query: &Query) -> Result<QueryResponse> {
        let deployment = self.deployment.read().map_err(|_| RuntimeError::LockError)?;
        Ok(deployment.query(query))
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        let deployment = self.deployment.read().map_err(|_| RuntimeError::LockError)?;
        Ok(deployment.snapshot())
    }

    /// Journal receipts from `from`, at most `limit` (0 = no limit).
    pub fn receipts(&self, from: u64, limit: usize) -> Result<Vec<Receipt>> {
        let deployment = self.deployment.read().map_err(|_| RuntimeError::LockError)?;
        Ok(deployment.journal().range(from, limit))
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(DeploymentConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::Call;
    use hallmark_registry::NewDesign;
    use std::thread;

    #[test]
    fn test_concurrent_submissions_get_dense_ids() {
        let host = Host::default();
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let host = host.clone();
                thread::spawn(move || {
                    for i in 0..10 {
                        host.submit(Transaction::new(
                            format!("artisan-{n}"),
                            0,
                            Call::RegisterDesign(NewDesign::new(format!("d{n}-{i}"), "", "", vec![])),
                        ))
                        .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(host.query(&Query::DesignCount).unwrap(), QueryResponse::Count(80));
        let snapshot = host.snapshot().unwrap();
        assert!(snapshot.designs.check_consistency().is_ok());
        assert_eq!(host.receipts(0, 0).unwrap().len(), 80);
    }
}
