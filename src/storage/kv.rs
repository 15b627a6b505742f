use crate::error::Result;

/// Key-value store capability the keeper operates over.
///
/// The host execution context owns the store for the duration of one
/// block or transaction scope; the keeper takes a handle per call and
/// never retains it. The keeper adds no locking of its own, so a handle
/// must be safe at whatever concurrency level the host invokes it.
pub trait KVStore {
    /// Read the value stored under `key`, or `None` if the key is unset
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Hook for pool-backed store handles; the keeper calls this on its
    /// fast paths once it is done reading. Plain stores leave the
    /// default no-op.
    fn release(&self) {}
}
