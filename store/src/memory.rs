//! In-memory snapshot store for tests and embedded hosts.

use crate::{SnapshotStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// A mutex-guarded in-memory [`SnapshotStore`].
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn put_snapshot(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        blobs.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn get_snapshot(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        blobs
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn delete_snapshot(&self, key: &str) -> Result<(), StoreError> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_round_trip() {
        let store = MemoryStore::new();
        store.put_snapshot("ledger", b"state").unwrap();
        assert_eq!(store.get_snapshot("ledger").unwrap(), b"state");
    }

    #[test]
    fn test_put_replaces() {
        let store = MemoryStore::new();
        store.put_snapshot("ledger", b"old").unwrap();
        store.put_snapshot("ledger", b"new").unwrap();
        assert_eq!(store.get_snapshot("ledger").unwrap(), b"new");
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_snapshot("absent"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete_snapshot("absent").is_ok());
    }
}
