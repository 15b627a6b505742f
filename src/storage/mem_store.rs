use crate::error::{FeeMarketError, Result};
use crate::storage::KVStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory store backend for tests and tooling.
pub struct MemStore {
    inner: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl KVStore for MemStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| FeeMarketError::Database("Memory store lock poisoned".to_string()))?;
        Ok(inner.get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| FeeMarketError::Database("Memory store lock poisoned".to_string()))?;
        inner.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemStore::new();
        assert_eq!(store.get(b"missing").unwrap(), None);
        store.set(b"key", b"value").unwrap();
        assert_eq!(store.get(b"key").unwrap(), Some(b"value".to_vec()));
    }

    #[test]
    fn test_release_is_a_no_op() {
        let store = MemStore::new();
        store.set(b"key", b"value").unwrap();
        store.release();
        assert_eq!(store.get(b"key").unwrap(), Some(b"value".to_vec()));
    }
}
