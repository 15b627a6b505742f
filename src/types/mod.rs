//! Data model for the fee market module
//!
//! This module contains the persisted record types, the fixed-precision
//! decimal they are built from, and the object pool that recycles
//! decoded instances on the transaction hot path.

pub mod coin;
pub mod dec;
pub mod params;
pub mod pool;
pub mod state;

pub use coin::DecCoin;
pub use dec::{Dec, DECIMAL_PLACES};
pub use params::Params;
pub use pool::{Pool, Pooled};
pub use state::{State, SAMPLE_WINDOW};
