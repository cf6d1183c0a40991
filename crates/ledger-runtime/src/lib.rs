//! # Ledger Runtime
//!
//! Hosts one execution context for the asset ledger contract: a world state,
//! the audit log, the transaction journal and a clock. Invocations are
//! executed strictly one at a time, in arrival order.

pub mod config;
pub mod runtime;

pub use config::{ConfigError, RuntimeConfig, StoreBackend};
pub use runtime::{LedgerRuntime, RuntimeError};
