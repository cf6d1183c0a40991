//! # Outbound Ports (Driven Ports)
//!
//! Interfaces the host execution context implements for the contract.
//!
//! Production: `RocksDbWorldState` (feature `rocksdb`)
//! Testing: `InMemoryWorldState`

use chrono::{DateTime, Utc};

use crate::domain::errors::StoreError;

/// `(key, value)` pair returned by a range scan.
pub type StateEntry = (String, Vec<u8>);

/// Ordered key-value world state keyed by asset identifier.
///
/// The store is assumed already consistent; the contract only relies on:
/// - `get_state` distinguishing absent (`None`) from present-but-empty (`Some(vec![])`)
/// - `get_state_by_range` yielding entries in lexical key order
pub trait WorldStateStore: Send + Sync {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError>;

    /// Entries with `start_key <= key < end_key`.
    ///
    /// An empty `start_key` or `end_key` leaves that side open, so
    /// `get_state_by_range("", "")` is a scan of the whole namespace.
    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<Vec<StateEntry>, StoreError>;
}

impl<S: WorldStateStore + ?Sized> WorldStateStore for Box<S> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).put_state(key, value)
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).delete_state(key)
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<Vec<StateEntry>, StoreError> {
        (**self).get_state_by_range(start_key, end_key)
    }
}

/// Wall-clock source for audit timestamps (injectable for replay tests).
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Lookup of previously executed transactions kept by the execution context.
pub trait TransactionLookup: Send + Sync {
    /// Raw JSON of the transaction, `None` if the id is unknown.
    fn get_transaction(&self, tx_id: &str) -> Result<Option<Vec<u8>>, StoreError>;
}
