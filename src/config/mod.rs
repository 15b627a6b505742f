//! Configuration management
//!
//! Process-level settings for the fee market tooling: the data
//! directory holding the store and the default fee denomination.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
