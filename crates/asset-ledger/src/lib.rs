//! # Asset Ledger Contract
//!
//! A deterministic state machine over an ordered key-value world state.
//! Every write goes through the canonical encoder so that independent
//! re-executions of the same transaction produce byte-identical state.
//!
//! ## Architecture
//!
//! ```text
//! caller ──ContractInvocation──→ [LedgerDispatcher]
//!                                       │
//!                                       ↓
//!                              [AssetLedgerContract] ──append──→ [AuditLog]
//!                                       │                     (in-process)
//!                               canonical encode
//!                                       ↓
//!                              [WorldStateStore]
//!                         (InMemory / RocksDB adapter)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Existence | An asset exists iff a Create succeeded and no Delete followed |
//! | 2 | Canonical Writes | Stored bytes are sorted-key JSON, independent of field order |
//! | 3 | No Partial Mutation | Encode, then write, then append audit |
//! | 4 | Audit Append-Only | The audit log only grows until explicitly reset |
//! | 5 | Create/Update Audited | Exactly one audit entry per Create or Update; none for Transfer/Delete |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, errors, canonical codec, audit log
//! - `ports/` - Inbound API trait, outbound store/time/journal traits
//! - `adapters/` - In-memory and RocksDB world state, time sources, journal
//! - `service/` - `AssetLedgerContract` implementing the API
//! - `ipc/` - Named-function invocation dispatcher and payloads
//!
//! ## Usage
//!
//! ```ignore
//! use asset_ledger::{AssetLedgerApi, AssetLedgerContract, InMemoryWorldState, TransactionContext};
//!
//! let mut contract = AssetLedgerContract::new(InMemoryWorldState::new());
//! let ctx = TransactionContext::new("tx-1", chrono::Utc::now());
//!
//! contract.create_asset(&ctx, "A1", "BMW", "Sport", "a@x.com", "h1")?;
//! let previous = contract.transfer_asset(&ctx, "A1", "b@x.com")?;
//! assert_eq!(previous, "a@x.com");
//! ```

pub mod adapters;
pub mod domain;
pub mod ipc;
pub mod ports;
pub mod service;

pub use adapters::{FixedTimeSource, InMemoryTransactionJournal, InMemoryWorldState, SystemTimeSource};
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbConfig, RocksDbWorldState};
pub use domain::audit::AuditLog;
pub use domain::codec::{canonical_bytes, decode, encode};
pub use domain::entities::{
    Asset, AuditMethod, AuditRecord, ListedAsset, TransactionContext, default_seed_assets,
};
pub use domain::errors::{DecodeError, ErrorKind, LedgerError, StoreError};
pub use ipc::{ContractInvocation, InvocationResponse, InvocationStatus, InvokeError, LedgerDispatcher};
pub use ports::inbound::AssetLedgerApi;
pub use ports::outbound::{TimeSource, TransactionLookup, WorldStateStore};
pub use service::AssetLedgerContract;
