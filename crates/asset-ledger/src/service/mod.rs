//! # Asset Ledger Contract Service
//!
//! The state machine implementing `AssetLedgerApi` over an injected
//! `WorldStateStore`.
//!
//! ## Write Path
//!
//! Every mutation follows the same order so that a failure can never leave
//! an audit entry pointing at a write that did not happen:
//!
//! 1. Check the precondition (exists / absent)
//! 2. Canonical-encode the full record
//! 3. Put to the world state
//! 4. Append to the audit log (Create/Update only)

mod operations;

use std::sync::Arc;

use crate::domain::audit::AuditLog;
use crate::domain::codec::encode;
use crate::domain::entities::Asset;
use crate::domain::errors::LedgerError;
use crate::ports::outbound::{TransactionLookup, WorldStateStore};

/// The asset ledger contract.
///
/// Owns its world-state handle and shares the audit log with whoever built
/// it. The audit log's lifetime is the execution context's lifetime.
pub struct AssetLedgerContract<S: WorldStateStore> {
    pub(crate) store: S,
    pub(crate) audit_log: Arc<AuditLog>,
    pub(crate) transactions: Option<Arc<dyn TransactionLookup>>,
}

impl<S: WorldStateStore> AssetLedgerContract<S> {
    /// Contract with a fresh, empty audit log.
    pub fn new(store: S) -> Self {
        Self::with_audit_log(store, Arc::new(AuditLog::new()))
    }

    pub fn with_audit_log(store: S, audit_log: Arc<AuditLog>) -> Self {
        Self {
            store,
            audit_log,
            transactions: None,
        }
    }

    /// Enable `get_transaction_details` against the host's journal.
    pub fn with_transaction_lookup(mut self, lookup: Arc<dyn TransactionLookup>) -> Self {
        self.transactions = Some(lookup);
        self
    }

    pub fn audit_log(&self) -> &Arc<AuditLog> {
        &self.audit_log
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Raw value under `id`, treating an empty value as absent.
    pub(crate) fn load(&self, id: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.store.get_state(id)?.filter(|bytes| !bytes.is_empty()))
    }

    /// Encode fully before touching the store.
    pub(crate) fn write_asset(&mut self, asset: &Asset) -> Result<(), LedgerError> {
        let bytes = encode(asset)?;
        self.store.put_state(&asset.id, &bytes)?;
        Ok(())
    }
}
