//! Error types for hallmark-runtime.

use hallmark_types::{RegistryError, Sequence};
use thiserror::Error;

use crate::journal::JournalError;

/// Errors raised by the deployment host.
///
/// Registry failures are not errors at this layer: they are recorded in the
/// transaction's receipt. `Registry` only surfaces when a caller asks for the
/// failure to be propagated (see [`crate::Receipt::into_result`]).
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A registry rejected the call.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Transaction sequence went backwards.
    #[error("sequence regression: last applied {last}, got {got}")]
    SequenceRegression { last: Sequence, got: Sequence },

    /// The journal cannot take another receipt.
    #[error("journal error: {0}")]
    Journal(#[from] JournalError),

    /// Snapshot is malformed or inconsistent.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while reading or writing a snapshot.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lock error")]
    LockError,
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
