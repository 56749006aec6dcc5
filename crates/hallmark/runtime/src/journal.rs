//! Append-only journal of transaction receipts.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::call::Receipt;

/// Ways a journal can be inconsistent or full.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("journal index {index} out of order (expected {expected:?})")]
    OutOfOrder { index: u64, expected: Option<u64> },

    #[error("journal next index {next} does not follow last receipt {last}")]
    NextIndexMismatch { next: u64, last: u64 },

    #[error("journal holds {len} receipts but capacity is {capacity}")]
    OverCapacity { len: usize, capacity: usize },

    #[error("journal index space exhausted")]
    Exhausted,
}

/// Receipts in application order.
///
/// With a capacity set, the oldest receipts are dropped once the journal is
/// full. Indices keep counting up regardless.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    next_index: u64,
    entries: VecDeque<Receipt>,
    #[serde(default)]
    capacity: Option<usize>,
}

impl Journal {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            next_index: 0,
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Index the next appended receipt will get.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Fails when no further index can be handed out.
    pub(crate) fn check_room(&self) -> Result<u64, JournalError> {
        self.next_index.checked_add(1).ok_or(JournalError::Exhausted)
    }

    pub(crate) fn append(&mut self, mut receipt: Receipt) -> Result<Receipt, JournalError> {
        let next = self.check_room()?;
        receipt.index = self.next_index;
        self.next_index = next;

        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return Ok(receipt);
            }
            while self.entries.len() >= capacity {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(receipt.clone());
        Ok(receipt)
    }

    /// Receipts with `index >= from`, at most `limit` of them (0 = no limit).
    pub fn range(&self, from: u64, limit: usize) -> Vec<Receipt> {
        let iter = self.entries.iter().filter(|r| r.index >= from).cloned();
        if limit == 0 {
            iter.collect()
        } else {
            iter.take(limit).collect()
        }
    }

    pub fn get(&self, index: u64) -> Option<&Receipt> {
        let first = self.entries.front()?.index;
        let offset = index.checked_sub(first)?;
        self.entries.get(usize::try_from(offset).ok()?)
    }

    pub fn last(&self) -> Option<&Receipt> {
        self.entries.back()
    }

    /// Number of receipts currently retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn check_consistency(&self) -> Result<(), JournalError> {
        if let Some(capacity) = self.capacity {
            if self.entries.len() > capacity {
                return Err(JournalError::OverCapacity {
                    len: self.entries.len(),
                    capacity,
                });
            }
        }

        let mut expected = self.entries.front().map(|r| r.index);
        for receipt in &self.entries {
            if Some(receipt.index) != expected {
                return Err(JournalError::OutOfOrder {
                    index: receipt.index,
                    expected,
                });
            }
            expected = receipt.index.checked_add(1);
        }
        if let Some(last) = self.entries.back() {
            if expected != Some(self.next_index) {
                return Err(JournalError::NextIndexMismatch {
                    next: self.next_index,
                    last: last.index,
                });
            }
        }

        self.check_room().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{Call, Outcome};
    use hallmark_types::{Principal, Sequence};

    fn receipt(seq: u64) -> Receipt {
        Receipt {
            index: u64::MAX,
            caller: Principal::new("alice"),
            sequence: Sequence(seq),
            call: Call::RegisterArtisan {
                name: "Alice".into(),
                credentials: "Silversmith".into(),
            },
            result: Ok(Outcome::ArtisanRegistered),
        }
    }

    #[test]
    fn test_append_assigns_indices() {
        let mut journal = Journal::new(None);
        assert_eq!(journal.append(receipt(1)).unwrap().index, 0);
        assert_eq!(journal.append(receipt(2)).unwrap().index, 1);
        assert_eq!(journal.len(), 2);
        assert_eq!(journal.get(1).unwrap().sequence, Sequence(2));
        assert!(journal.check_consistency().is_ok());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut journal = Journal::new(Some(2));
        for seq in 0..5 {
            journal.append(receipt(seq)).unwrap();
        }

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.next_index(), 5);
        assert!(journal.get(2).is_none());
        assert_eq!(journal.get(3).unwrap().sequence, Sequence(3));
        assert!(journal.check_consistency().is_ok());
    }

    #[test]
    fn test_range() {
        let mut journal = Journal::new(None);
        for seq in 0..6 {
            journal.append(receipt(seq)).unwrap();
        }

        let indices: Vec<u64> = journal.range(2, 3).iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
        assert_eq!(journal.range(4, 0).len(), 2);
        assert!(journal.range(10, 0).is_empty());
    }

    #[test]
    fn test_append_refuses_when_exhausted() {
        let mut journal = Journal::new(None);
        journal.next_index = u64::MAX;

        assert_eq!(journal.append(receipt(1)), Err(JournalError::Exhausted));
        assert!(journal.is_empty());
        assert_eq!(journal.next_index(), u64::MAX);
    }

    #[test]
    fn test_consistency_rejects_bad_indices() {
        let mut journal = Journal::new(None);
        journal.append(receipt(1)).unwrap();
        journal.append(receipt(2)).unwrap();

        let mut gap = journal.clone();
        gap.entries[1].index = 5;
        assert!(matches!(
            gap.check_consistency(),
            Err(JournalError::OutOfOrder { index: 5, .. })
        ));

        let mut stale = journal.clone();
        stale.next_index = 7;
        assert_eq!(
            stale.check_consistency(),
            Err(JournalError::NextIndexMismatch { next: 7, last: 1 })
        );

        let mut top = Journal::new(None);
        top.entries.push_back(Receipt {
            index: u64::MAX,
            ..receipt(1)
        });
        top.next_index = u64::MAX;
        assert!(matches!(
            top.check_consistency(),
            Err(JournalError::NextIndexMismatch { .. })
        ));
    }

    #[test]
    fn test_consistency_rejects_full_index_space_and_overflowing_capacity() {
        let mut empty = Journal::new(None);
        empty.next_index = u64::MAX;
        assert_eq!(empty.check_consistency(), Err(JournalError::Exhausted));

        let mut journal = Journal::new(None);
        for seq in 0..3 {
            journal.append(receipt(seq)).unwrap();
        }
        journal.capacity = Some(2);
        assert_eq!(
            journal.check_consistency(),
            Err(JournalError::OverCapacity {
                len: 3,
                capacity: 2
            })
        );
    }
}
