//! Error types for the decay-cluster library.

use thiserror::Error;

/// Result type alias for clustering operations.
pub type Result<T> = std::result::Result<T, ClusterError>;

/// Errors that can occur while loading region tables or clustering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A NaN- or infinity-bearing feature point reached the cluster engine.
    #[error("non-finite feature point at input index {index}")]
    NonFiniteFeature { index: usize },

    /// The table header is unusable.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// A data row could not be parsed.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// An I/O failure while reading the source table.
    #[error("i/o error: {0}")]
    Io(String),
}
