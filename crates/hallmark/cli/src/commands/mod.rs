//! Command implementations

pub mod admin;
pub mod artisan;
pub mod design;
pub mod journal;
pub mod material;

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use hallmark_runtime::{Call, Deployment, Outcome, Principal, Receipt, Sequence, Transaction};
use std::path::PathBuf;
use tracing::debug;

/// Everything a command needs from the global flags.
pub struct Session {
    pub state_path: PathBuf,
    pub format: OutputFormat,
    pub caller: Option<Principal>,
    pub sequence: Option<u64>,
}

impl Session {
    /// Load the deployment from the state file.
    pub fn load(&self) -> CliResult<Deployment> {
        if !self.state_path.exists() {
            return Err(CliError::InvalidInput(format!(
                "no state at {}; run `hallmark init` first",
                self.state_path.display()
            )));
        }
        Ok(Deployment::load(&self.state_path)?)
    }

    fn caller(&self) -> CliResult<Principal> {
        self.caller.clone().ok_or_else(|| {
            CliError::InvalidInput("a caller is required (--caller or default_caller)".into())
        })
    }

    /// Apply `call` as the session caller, save, and surface registry
    /// rejections as errors. The rejected call is still journaled.
    pub fn submit(&self, call: Call) -> CliResult<(Receipt, Outcome)> {
        let mut deployment = self.load()?;
        let sequence = self
            .sequence
            .or(deployment.last_sequence().map(Sequence::value))
            .unwrap_or(0);
        let tx = Transaction::new(self.caller()?, sequence, call);
        debug!(op = tx.call.name(), caller = %tx.caller, sequence = %tx.sequence, "Submitting");

        let receipt = deployment.apply(tx)?;
        deployment.save(&self.state_path)?;
        let outcome = receipt.clone().into_result()?;
        Ok((receipt, outcome))
    }
}
