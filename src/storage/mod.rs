//! Key-value storage backends
//!
//! This module defines the store capability the keeper operates over,
//! plus a sled-backed production implementation and an in-memory
//! implementation for tests and tooling.

pub mod kv;
pub mod mem_store;
pub mod sled_store;

pub use kv::KVStore;
pub use mem_store::MemStore;
pub use sled_store::SledStore;
