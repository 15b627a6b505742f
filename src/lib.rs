//! # Feemarket - Dynamic Fee Market State Access
//!
//! State-access layer for a dynamic, self-adjusting transaction fee
//! market (an AIMD-style controller in the EIP-1559 family). The module
//! persists two pieces of consensus-critical state: rarely-written
//! controller *params* (gains and bounds) and frequently-mutated live
//! *state* (base gas price, learning rate, and a sliding window of
//! recent block gas usage).
//!
//! Every transaction touches this state at least twice (pre-execution
//! check, post-execution update), so the read path must not allocate
//! per call. The crate's core is a typed object pool layered under a
//! conventional get/set keeper:
//!
//! - `types/`: the persisted records, the fixed-precision decimal they
//!   are built from, and the generic [`types::Pool`] free-list whose
//!   move-only handles make "release exactly once" a compile-time
//!   property
//! - `keeper/`: the sole authorized access path to the store, with a
//!   plain decode path and a pooled fast path per record
//! - `storage/`: the key-value store capability plus sled-backed and
//!   in-memory implementations
//! - `error/`, `config/`, `utils/`, `cli/`: error types, process
//!   settings, serialization and address helpers, and a small
//!   inspection CLI
//!
//! The fee-adjustment arithmetic itself, fee deduction, and governance
//! message handling live outside this crate; they consume the keeper at
//! its interface boundary.

pub mod cli;
pub mod config;
pub mod error;
pub mod keeper;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{FeeMarketError, Result};
pub use keeper::{AccountKeeper, DenomResolver, Keeper, HEIGHT_NOT_ENABLED};
pub use storage::{KVStore, MemStore, SledStore};
pub use types::{Dec, DecCoin, Params, Pool, Pooled, State, SAMPLE_WINDOW};
pub use utils::{convert_address, hash_pub_key, validate_address};
