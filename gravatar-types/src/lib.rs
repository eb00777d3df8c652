//! Option types for Gravatar image URLs.
//!
//! Every option maps to the literal string the avatar host expects:
//! - [`Protocol`]: the scheme prefix placed before the host
//! - [`Rating`]: the `r` query parameter
//! - [`DefaultImage`]: the `d` query parameter for built-in fallbacks
//!
//! Each type displays as its literal, parses back from it case-insensitively,
//! and serializes to it with serde.

mod options;

pub use options::{DefaultImage, Protocol, Rating};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when parsing option values from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown protocol: {0} (expected http, https or none)")]
    UnknownProtocol(String),

    #[error("unknown rating: {0} (expected g, pg, r or x)")]
    UnknownRating(String),

    #[error("unknown default image: {0}")]
    UnknownDefaultImage(String),
}
