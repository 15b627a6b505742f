//! Command-line interface for inspecting and seeding fee market state

pub mod commands;

pub use commands::{Command, Opt};
