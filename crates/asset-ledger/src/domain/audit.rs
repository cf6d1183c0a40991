//! # Audit Log
//!
//! Append-only, in-process history of Create/Update mutations.
//!
//! The log is derived data. It is never written to the world state and lives
//! exactly as long as the execution context that owns it: a restart starts
//! from an empty log. There is no eviction and no size bound.
//!
//! Unlike the world state, callers of the log are not assumed to be
//! serialized, so a single mutex guards both append and snapshot.

use parking_lot::Mutex;

use super::entities::AuditRecord;

#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Mutex<Vec<AuditRecord>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; returns the new length.
    pub fn append(&self, record: AuditRecord) -> usize {
        let mut entries = self.entries.lock();
        entries.push(record);
        entries.len()
    }

    /// Immutable copy of the whole log at call time.
    pub fn snapshot(&self) -> Vec<AuditRecord> {
        self.entries.lock().clone()
    }

    /// Entries referencing `asset_id`, in append order.
    pub fn entries_for(&self, asset_id: &str) -> Vec<AuditRecord> {
        self.entries
            .lock()
            .iter()
            .filter(|record| record.asset.id == asset_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop every entry, as a restart of the execution context would.
    /// Returns how many entries were discarded.
    pub fn reset(&self) -> usize {
        let mut entries = self.entries.lock();
        let discarded = entries.len();
        entries.clear();
        discarded
    }
}
