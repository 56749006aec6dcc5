use serde::{Deserialize, Serialize};

use crate::ids::{Principal, Sequence};

/// The two inputs the host environment supplies to every registry call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Who is calling (the transaction sender).
    pub caller: Principal,
    /// Current block height at the time of the call.
    pub sequence: Sequence,
}

impl CallContext {
    pub fn new(caller: impl Into<Principal>, sequence: u64) -> Self {
        Self {
            caller: caller.into(),
            sequence: Sequence(sequence),
        }
    }
}
