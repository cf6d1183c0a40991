use crate::domain::errors::StoreError;
use crate::ports::outbound::TransactionLookup;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Transaction journal kept by the execution context for `GetTransactionDetails`.
///
/// Like the audit log it lives in memory for the lifetime of the host.
#[derive(Debug, Default)]
pub struct InMemoryTransactionJournal {
    transactions: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryTransactionJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the JSON of an executed transaction. A repeated id overwrites.
    pub fn record(&self, tx_id: impl Into<String>, details: Vec<u8>) {
        self.transactions.write().insert(tx_id.into(), details);
    }

    pub fn len(&self) -> usize {
        self.transactions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.read().is_empty()
    }
}

impl TransactionLookup for InMemoryTransactionJournal {
    fn get_transaction(&self, tx_id: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.transactions.read().get(tx_id).cloned())
    }
}
