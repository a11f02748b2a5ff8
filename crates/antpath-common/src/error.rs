//! Error types for Antpath
//!
//! Provides a unified error type and the lookup error variants

use thiserror::Error;

/// Result type alias using AcoError
pub type Result<T> = std::result::Result<T, AcoError>;

/// Unified error type for Antpath operations
///
/// Every variant is fatal for the current run. The engine never retries.
#[derive(Debug, Error)]
pub enum AcoError {
    // Desirability requested for an edge that cannot be traversed
    #[error("Invalid edge {from} -> {to}: weight {weight} is not strictly positive")]
    InvalidEdge {
        from: String,
        to: String,
        weight: f64,
    },

    // Selection invoked without any candidate
    #[error("Selection error: no candidate edges leaving {from}")]
    Selection { from: String },

    // Reinforcement cannot normalize by this length
    #[error("Degenerate path: cannot reinforce with length {length}")]
    DegeneratePath { length: f64 },

    // Identifier mismatch between matrix and tables
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Unknown point or actor identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown point: {0}")]
    UnknownPoint(String),

    #[error("Matrix index out of range: {index} (dimension {dimension})")]
    UnknownIndex { index: usize, dimension: usize },

    #[error("Unknown actor: {0}")]
    UnknownActor(String),
}

impl AcoError {
    /// Shorthand for configuration failures
    pub fn config(msg: impl Into<String>) -> Self {
        AcoError::Config(msg.into())
    }
}

impl From<serde_json::Error> for AcoError {
    fn from(err: serde_json::Error) -> Self {
        AcoError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AcoError {
    fn from(err: std::io::Error) -> Self {
        AcoError::Storage(err.to_string())
    }
}

impl From<anyhow::Error> for AcoError {
    fn from(err: anyhow::Error) -> Self {
        AcoError::Internal(err.to_string())
    }
}
