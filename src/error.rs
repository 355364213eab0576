//! Error types for MargaNav

use crate::stream::FixStreamError;

/// Result type alias
pub type Result<T> = std::result::Result<T, NavError>;

/// MargaNav error types
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// The routing collaborator returned no candidate routes
    #[error("no routes found")]
    EmptyCandidateSet,

    /// Route index outside the candidate set
    #[error("route index {index} out of range for {len} candidates")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of candidates in the set
        len: usize,
    },

    /// The fix stream cannot deliver positions
    #[error("location unavailable: {0}")]
    LocationUnavailable(FixStreamError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed route data from the routing collaborator
    #[error("malformed route data: {0}")]
    Wire(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        NavError::Wire(e.to_string())
    }
}
