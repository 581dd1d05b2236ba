//! Crate-level error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for backdrop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while registering routes or fabricating responses
#[derive(Debug, Error)]
pub enum Error {
    /// URL pattern rejected at registration time
    #[error("invalid URL pattern `{pattern}`: {reason}")]
    Pattern { pattern: String, reason: String },

    /// Response payload could not be serialized to JSON
    #[error("failed to serialize response payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Stub configuration could not be parsed, loaded or mounted
    #[error(transparent)]
    Config(#[from] ConfigError),
}
