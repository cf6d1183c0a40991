use crate::domain::errors::StoreError;
use crate::ports::outbound::{StateEntry, WorldStateStore};
use std::collections::BTreeMap;
use std::ops::Bound;

/// In-memory world state for unit tests and ephemeral runs.
///
/// Backed by a `BTreeMap`, so range scans come out in lexical key order
/// like the production store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryWorldState {
    data: BTreeMap<String, Vec<u8>>,
}

impl InMemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl WorldStateStore for InMemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.data.remove(key);
        Ok(())
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<Vec<StateEntry>, StoreError> {
        // BTreeMap::range panics on an inverted range
        if !start_key.is_empty() && !end_key.is_empty() && start_key >= end_key {
            return Ok(Vec::new());
        }

        let lower = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key)
        };
        let upper = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key)
        };

        Ok(self
            .data
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
