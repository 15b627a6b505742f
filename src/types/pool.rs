use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// A concurrency-safe free-list of reusable record instances.
///
/// Decoded Params/State records are requested millions of times per
/// block across a live network; recycling instances through a pool keeps
/// that traffic off the allocator. The pool is a free-list, not a queue:
/// `get` returns any previously released instance, or a fresh one from
/// the factory when the list is empty. It cannot fail and never blocks
/// beyond the free-list lock.
pub struct Pool<T> {
    free: Mutex<Vec<T>>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Pool<T> {
    /// Create a pool whose `factory` produces ready-to-decode-into
    /// instances with nested containers pre-allocated.
    pub fn new(factory: impl Fn() -> T + Send + Sync + 'static) -> Pool<T> {
        Pool {
            free: Mutex::new(Vec::new()),
            factory: Box::new(factory),
        }
    }

    /// Take an instance from the pool, building one if none is free.
    ///
    /// The returned guard owns the instance until it is dropped or
    /// explicitly released; release-exactly-once is enforced by move
    /// semantics.
    pub fn get(&self) -> Pooled<'_, T> {
        let value = match self.free.lock() {
            Ok(mut free) => free.pop().unwrap_or_else(|| (self.factory)()),
            Err(_) => {
                log::error!("Failed to acquire lock on object pool free-list");
                (self.factory)()
            }
        };
        Pooled {
            value: Some(value),
            pool: self,
        }
    }

    /// Number of instances currently sitting idle in the free-list
    pub fn idle(&self) -> usize {
        match self.free.lock() {
            Ok(free) => free.len(),
            Err(_) => {
                log::error!("Failed to acquire lock on object pool free-list");
                0
            }
        }
    }

    fn put(&self, value: T) {
        match self.free.lock() {
            Ok(mut free) => free.push(value),
            Err(_) => {
                // A poisoned free-list drops the instance rather than
                // risking the list's integrity
                log::error!("Failed to acquire lock on object pool free-list; dropping instance");
            }
        }
    }
}

/// A pooled instance on loan from a [`Pool`].
///
/// Dereferences to the underlying value; returns it to the pool on drop.
pub struct Pooled<'a, T> {
    // Some for the guard's whole life; taken exactly once on drop
    value: Option<T>,
    pool: &'a Pool<T>,
}

impl<T> Pooled<'_, T> {
    /// Return the instance to the pool.
    ///
    /// Dropping the guard does the same; this form just makes the intent
    /// explicit at call sites.
    pub fn release(self) {}
}

impl<T> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
            .as_ref()
            .expect("Pooled value should always be present before drop")
    }
}

impl<T> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
            .as_mut()
            .expect("Pooled value should always be present before drop")
    }
}

impl<T> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.put(value);
        }
    }
}
