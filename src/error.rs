//! Error types for parsing formats, numbers, and configuration.

use thiserror::Error;

/// Errors produced while configuring an axis graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A numeric label format could not be parsed.
    #[error("invalid axis format {spec:?}: {reason}")]
    InvalidFormat {
        /// The rejected format string.
        spec: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// A string could not be parsed as a number.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    /// JSON configuration or data could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
