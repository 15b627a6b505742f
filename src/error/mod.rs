//! Error handling for the fee market module
//!
//! This module provides the error types for all fee market state-access
//! operations.

use std::fmt;

/// Result type alias for fee market operations
pub type Result<T> = std::result::Result<T, FeeMarketError>;

/// Error types for fee market state-access operations
#[derive(Debug, Clone)]
pub enum FeeMarketError {
    /// Stored bytes do not decode as a valid record
    MalformedRecord(String),
    /// Enabled-height marker is not a parseable integer
    InvalidHeight(String),
    /// Denomination conversion requested with no resolver installed
    ResolverNotConfigured,
    /// Authority address failed validation at construction time
    InvalidAuthority(String),
    /// Database-related errors
    Database(String),
    /// Serialization errors on the encode path
    Serialization(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for FeeMarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeMarketError::MalformedRecord(msg) => write!(f, "Malformed record: {msg}"),
            FeeMarketError::InvalidHeight(msg) => write!(f, "Invalid enabled height: {msg}"),
            FeeMarketError::ResolverNotConfigured => {
                write!(f, "Denom resolver is not configured")
            }
            FeeMarketError::InvalidAuthority(addr) => {
                write!(f, "Invalid authority address: {addr}")
            }
            FeeMarketError::Database(msg) => write!(f, "Database error: {msg}"),
            FeeMarketError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            FeeMarketError::Config(msg) => write!(f, "Configuration error: {msg}"),
            FeeMarketError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for FeeMarketError {}

impl From<std::io::Error> for FeeMarketError {
    fn from(err: std::io::Error) -> Self {
        FeeMarketError::Io(err.to_string())
    }
}

impl From<sled::Error> for FeeMarketError {
    fn from(err: sled::Error) -> Self {
        FeeMarketError::Database(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for FeeMarketError {
    fn from(err: bincode::error::EncodeError) -> Self {
        FeeMarketError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for FeeMarketError {
    fn from(err: bincode::error::DecodeError) -> Self {
        FeeMarketError::MalformedRecord(err.to_string())
    }
}
