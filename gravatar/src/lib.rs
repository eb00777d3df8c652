//! Gravatar avatar URL construction.
//!
//! This crate turns an email address into the URL of its Gravatar image:
//! - The address is trimmed, lowercased, encoded with a single-byte charset
//!   (Windows-1252 by default) and hashed with MD5 into the identity hash
//! - [`Gravatar`] accumulates protocol, size, rating and default-image options
//!   and serializes them behind `s.gravatar.com/avatar/<hash>`
//! - [`GravatarConfig`] carries a reusable set of defaults, loadable from JSON
//! - The [`legacy`] functions cover the one-call helpers of older releases
//!
//! Nothing here performs network I/O; the output is just a string.
//!
//! ```
//! use gravatar::{Gravatar, Protocol, Rating};
//!
//! let url = Gravatar::for_email("example@example.com")
//!     .with_protocol(Some(Protocol::Https))
//!     .with_rating(Some(Rating::Pg))
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     url,
//!     "https://s.gravatar.com/avatar/23463b99b62a72f26ed677cc556c44e8?r=pg"
//! );
//! ```

mod builder;
mod charset;
mod config;
mod error;
mod hash;
pub mod legacy;

pub use builder::{Gravatar, GRAVATAR_IMAGE_BASE_URL, MAX_SIZE, MIN_SIZE};
pub use charset::Charset;
pub use config::GravatarConfig;
pub use error::{GravatarError, GravatarResult};
pub use gravatar_types::{DefaultImage, Protocol, Rating};
pub use hash::{identity_hash, identity_hash_with, EMPTY_IDENTITY_HASH};
