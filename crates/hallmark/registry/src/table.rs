//! Dense, append-only table keyed by sequential identifiers.
//!
//! Holds both the records and the scalar counter. The only way to add a
//! record is [`SequentialTable::append`], which bumps the counter and inserts
//! in one step, so ids come out as `1, 2, 3, ...` with no gaps.

use std::collections::BTreeMap;

use hallmark_types::{DesignId, MaterialId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier type handed out by a [`SequentialTable`].
pub trait SequentialId: Copy + Ord {
    fn from_raw(raw: u64) -> Self;
    fn raw(self) -> u64;
}

impl SequentialId for MaterialId {
    fn from_raw(raw: u64) -> Self {
        MaterialId(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl SequentialId for DesignId {
    fn from_raw(raw: u64) -> Self {
        DesignId(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

/// Inconsistencies detected when checking a table loaded from storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("counter is {counter} but table holds {rows} records")]
    CountMismatch { counter: u64, rows: usize },

    #[error("id {0} is outside 1..=counter")]
    IdOutOfRange(u64),
}

/// Records plus the counter that assigns their ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize + Ord, V: Serialize",
    deserialize = "K: Deserialize<'de> + Ord, V: Deserialize<'de>"
))]
pub struct SequentialTable<K, V> {
    last_id: u64,
    records: BTreeMap<K, V>,
}

impl<K: SequentialId, V: Clone> SequentialTable<K, V> {
    pub fn new() -> Self {
        Self {
            last_id: 0,
            records: BTreeMap::new(),
        }
    }

    /// Assign the next id to `record` and store it.
    pub fn append(&mut self, record: V) -> K {
        let id = K::from_raw(self.last_id + 1);
        self.records.insert(id, record);
        self.last_id = id.raw();
        id
    }

    pub fn get(&self, id: K) -> Option<V> {
        self.records.get(&id).cloned()
    }

    /// Number of ids handed out so far.
    pub fn count(&self) -> u64 {
        self.last_id
    }

    /// Check the dense-id invariant: keys are exactly `1..=counter`.
    pub fn check_dense(&self) -> Result<(), TableError> {
        if self.records.len() as u64 != self.last_id {
            return Err(TableError::CountMismatch {
                counter: self.last_id,
                rows: self.records.len(),
            });
        }
        for id in self.records.keys() {
            let raw = id.raw();
            if raw == 0 || raw > self.last_id {
                return Err(TableError::IdOutOfRange(raw));
            }
        }
        Ok(())
    }
}

impl<K: SequentialId, V: Clone> Default for SequentialTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
