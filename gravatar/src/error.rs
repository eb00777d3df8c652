//! Error types for URL construction.

use thiserror::Error;

/// Errors raised while building a Gravatar URL or loading its configuration.
#[derive(Debug, Error)]
pub enum GravatarError {
    /// A setter received a value outside its contract (e.g. size out of range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested charset is unknown or cannot encode the hash input.
    #[error("encoding failure: {0}")]
    Encoding(String),

    /// A configuration value is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration JSON is malformed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Gravatar operations.
pub type GravatarResult<T> = Result<T, GravatarError>;
