//! Error types for stub configuration.

use thiserror::Error;

/// Errors raised while parsing, loading or validating stub files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension maps to no known stub format
    #[error("unknown stub file type: {0}")]
    UnknownFileType(String),

    /// Stub file could not be read
    #[error("failed to read stub file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed glob pattern handed to the loader
    #[error("invalid stub glob `{pattern}`: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A stub declares more than one of body, error and items
    #[error("stub for `{pattern}` declares more than one reply source")]
    AmbiguousReply { pattern: String },
}
