//! One-call helpers kept from the static API of earlier releases.
//!
//! These are thin wrappers over [`Gravatar`]. Parameters follow the builder's
//! ordering and separator rules: the first one is introduced by `?`, every
//! later one by `&`.

use crate::builder::Gravatar;
use crate::error::GravatarResult;
use gravatar_types::{DefaultImage, Protocol, Rating};

/// Scheme-relative avatar URL with no options.
///
/// # Errors
///
/// Fails with `Encoding` only if the default charset cannot be resolved,
/// which does not happen with the built-in tables.
pub fn image_url<'a>(email: impl Into<Option<&'a str>>) -> GravatarResult<String> {
    Gravatar::for_email(email).build()
}

/// Avatar URL for a square image of `size` pixels.
///
/// # Errors
///
/// Fails with `InvalidArgument` if `size` is outside `1..=2048`.
pub fn image_url_with_size<'a>(
    email: impl Into<Option<&'a str>>,
    size: u32,
) -> GravatarResult<String> {
    Gravatar::for_email(email).with_size(Some(size))?.build()
}

/// Sized avatar URL with a built-in fallback image.
pub fn image_url_with_default<'a>(
    email: impl Into<Option<&'a str>>,
    size: u32,
    default_image: DefaultImage,
) -> GravatarResult<String> {
    Gravatar::for_email(email)
        .with_size(Some(size))?
        .with_default_image(Some(default_image))
        .build()
}

/// Sized, rated avatar URL with a built-in fallback image.
pub fn image_url_with_rating<'a>(
    email: impl Into<Option<&'a str>>,
    size: u32,
    default_image: DefaultImage,
    rating: Rating,
) -> GravatarResult<String> {
    Gravatar::for_email(email)
        .with_size(Some(size))?
        .with_default_image(Some(default_image))
        .with_rating(Some(rating))
        .build()
}

/// Avatar URL with an explicit protocol and no other options.
pub fn image_url_with_protocol<'a>(
    email: impl Into<Option<&'a str>>,
    protocol: Protocol,
) -> GravatarResult<String> {
    Gravatar::for_email(email)
        .with_protocol(Some(protocol))
        .build()
}
