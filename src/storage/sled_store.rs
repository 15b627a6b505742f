use crate::error::{FeeMarketError, Result};
use crate::storage::KVStore;
use log::info;
use sled::{Db, Tree};
use std::path::Path;

// Tree name holding all fee market keys
const FEEMARKET_TREE: &str = "feemarket";

/// Production store backend over an embedded sled tree.
pub struct SledStore {
    // The Db handle keeps the underlying database open for flushing
    _db: Db,
    tree: Tree,
}

impl SledStore {
    /// Open (or create) the fee market tree in the database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<SledStore> {
        let db = sled::open(path.as_ref())
            .map_err(|e| FeeMarketError::Database(format!("Failed to open database: {e}")))?;
        let tree = db.open_tree(FEEMARKET_TREE).map_err(|e| {
            FeeMarketError::Database(format!("Failed to open fee market tree: {e}"))
        })?;
        info!(
            "Opened fee market store at {}",
            path.as_ref().to_string_lossy()
        );
        Ok(SledStore { _db: db, tree })
    }
}

impl KVStore for SledStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let value = self
            .tree
            .get(key)
            .map_err(|e| FeeMarketError::Database(format!("Failed to get value: {e}")))?;
        Ok(value.map(|v| v.to_vec()))
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.tree
            .insert(key, value)
            .map_err(|e| FeeMarketError::Database(format!("Failed to set value: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SledStore::open(temp_dir.path().join("feemarket_db")).unwrap();

        assert_eq!(store.get(b"missing").unwrap(), None);
        store.set(b"key", b"value").unwrap();
        assert_eq!(store.get(b"key").unwrap(), Some(b"value".to_vec()));

        store.set(b"key", b"other").unwrap();
        assert_eq!(store.get(b"key").unwrap(), Some(b"other".to_vec()));
    }
}
