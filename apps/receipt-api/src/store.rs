//! # Receipt Store
//!
//! Keeps the points computed for each processed receipt, keyed by a generated
//! identifier, for the lifetime of the process.
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  worker 1 ── insert ──┐                                                 │
//! │  worker 2 ── get ─────┼──► RwLock<HashMap<Uuid, ScoreRecord>>           │
//! │  worker N ── get ─────┘                                                 │
//! │                                                                         │
//! │  Lookups share the read lock; inserts take the write lock briefly.     │
//! │  No update or delete exists, so a stored record never changes.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored association between a receipt identifier and its points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub points: u64,
    pub created_at: DateTime<Utc>,
}

/// Store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A thread panicked while holding the lock.
    #[error("receipt store lock poisoned")]
    Poisoned,
}

/// Identifier → points storage.
///
/// Implementations assign the identifier, so callers cannot collide.
pub trait ReceiptStore: Send + Sync {
    /// Stores `points` under a fresh identifier and returns the new record.
    fn insert(&self, points: u64) -> Result<ScoreRecord, StoreError>;

    /// Looks up a record by identifier.
    fn get(&self, id: &Uuid) -> Result<Option<ScoreRecord>, StoreError>;

    /// Number of stored records.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|len| len == 0)
    }
}

/// Process-local [`ReceiptStore`]; wiped on restart.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    records: RwLock<HashMap<Uuid, ScoreRecord>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, points: u64) -> Result<ScoreRecord, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;

        // Never overwrite an existing record.
        loop {
            if let Entry::Vacant(slot) = records.entry(Uuid::new_v4()) {
                let record = ScoreRecord {
                    id: *slot.key(),
                    points,
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                return Ok(record);
            }
        }
    }

    fn get(&self, id: &Uuid) -> Result<Option<ScoreRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(id).cloned())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.len())
    }
}
