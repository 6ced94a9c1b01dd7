//! # Store Errors
//!
//! What callers of the store can see go wrong.
//!
//! Cart transitions never fail, so only the operations layered on top
//! (catalog lookups, checkout) produce errors. Configuration has its own
//! error type because it fails before any store exists.

use prohibition_core::{CoreError, ValidationError};
use thiserror::Error;

/// Configuration errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },

    /// The values parsed but do not form a valid checkout policy.
    #[error("Invalid checkout policy: {0}")]
    Policy(#[from] ValidationError),
}

/// Errors returned by [`crate::CartStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Domain failure (unknown product, empty cart at checkout).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
