//! # Adapters
//!
//! Implementations of the outbound ports.

pub mod infra;
pub mod storage;

pub use infra::{FixedTimeSource, InMemoryTransactionJournal, SystemTimeSource};
pub use storage::InMemoryWorldState;
#[cfg(feature = "rocksdb")]
pub use storage::{RocksDbConfig, RocksDbWorldState};
