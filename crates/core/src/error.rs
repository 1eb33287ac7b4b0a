//! Error types for census
//!
//! "Not found" is deliberately absent: a point lookup that matches nothing
//! returns `Ok(None)`. The variants here are misuse conditions only.

use thiserror::Error;

/// Result alias used across all census crates
pub type CensusResult<T> = Result<T, CensusError>;

/// Errors raised by the store, the query service and configuration parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CensusError {
    /// An argument or configuration value was rejected
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable explanation
        reason: String,
    },

    /// The store was queried before it was ever initialized
    #[error("store is not initialized")]
    NotInitialized,
}

impl CensusError {
    /// Build an `InvalidInput` error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CensusError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for `InvalidInput`
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CensusError::InvalidInput { .. })
    }

    /// True for `NotInitialized`
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, CensusError::NotInitialized)
    }
}
