//! World State Adapters
//!
//! Implementations of the `WorldStateStore` trait.

mod memory;
#[cfg(feature = "rocksdb")]
mod rocksdb;

pub use self::memory::InMemoryWorldState;
#[cfg(feature = "rocksdb")]
pub use self::rocksdb::{RocksDbConfig, RocksDbWorldState};
