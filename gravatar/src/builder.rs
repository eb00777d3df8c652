//! Fluent builder assembling the avatar URL.
//!
//! The URL has the shape
//! `<protocol prefix>s.gravatar.com/avatar/<identity hash>[?k=v&k=v...]`.
//! Query parameters are emitted in the order they were first set; setting a
//! parameter again replaces its value without moving it, and clearing it
//! removes it. Values are percent-encoded over the bytes of the builder's
//! charset using RFC 3986 rules: only the unreserved characters
//! `A-Z a-z 0-9 - . _ ~` are kept, a space becomes `%20` and `*` becomes `%2A`.
//! This is not `application/x-www-form-urlencoded`, which writes a space as
//! `+`, keeps `*` and escapes `~`.
//!
//! [`Gravatar::build`] only reads the builder, so one builder can be adjusted
//! and built repeatedly.

use crate::charset::Charset;
use crate::error::{GravatarError, GravatarResult};
use crate::hash::hash_counting;
use gravatar_types::{DefaultImage, Protocol, Rating};
use tracing::{debug, warn};

/// Host and path every avatar URL starts with after the protocol prefix.
pub const GRAVATAR_IMAGE_BASE_URL: &str = "s.gravatar.com/avatar/";

/// Smallest image edge length the host serves, in pixels.
pub const MIN_SIZE: u32 = 1;

/// Largest image edge length the host serves, in pixels.
pub const MAX_SIZE: u32 = 2048;

const PARAM_DEFAULT: &str = "d";
const PARAM_RATING: &str = "r";
const PARAM_SIZE: &str = "s";

/// Accumulates URL options for one email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gravatar {
    email: Option<String>,
    protocol: Protocol,
    /// Keys are unique; order is insertion order.
    parameters: Vec<(&'static str, String)>,
    /// Resolved at build time; `None` means Windows-1252.
    charset_label: Option<String>,
}

impl Gravatar {
    /// Starts a builder for `email` with a scheme-relative protocol and no
    /// query parameters.
    #[must_use]
    pub fn for_email<'a>(email: impl Into<Option<&'a str>>) -> Self {
        Self {
            email: email.into().map(str::to_owned),
            protocol: Protocol::default(),
            parameters: Vec::new(),
            charset_label: None,
        }
    }

    // ── Chaining setters ──────────────────────────────────────────

    /// Sets the protocol. `None` keeps the current one.
    #[must_use]
    pub fn with_protocol(mut self, protocol: Option<Protocol>) -> Self {
        self.set_protocol(protocol);
        self
    }

    /// Sets or clears the `r` parameter.
    #[must_use]
    pub fn with_rating(mut self, rating: Option<Rating>) -> Self {
        self.set_rating(rating);
        self
    }

    /// Sets or clears the `s` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GravatarError::InvalidArgument`] if `size` is outside
    /// `MIN_SIZE..=MAX_SIZE`.
    pub fn with_size(mut self, size: Option<u32>) -> GravatarResult<Self> {
        self.set_size(size)?;
        Ok(self)
    }

    /// Sets the `d` parameter to a built-in fallback, or clears it.
    #[must_use]
    pub fn with_default_image(mut self, image: Option<DefaultImage>) -> Self {
        self.set_default_image(image);
        self
    }

    /// Sets the `d` parameter to a caller-hosted fallback image URL, or
    /// clears it.
    #[must_use]
    pub fn with_default_image_url(mut self, url: Option<&str>) -> Self {
        self.set_default_image_url(url);
        self
    }

    /// Uses `charset` for hashing and percent-encoding.
    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset_label = Some(charset.name().to_string());
        self
    }

    /// Uses the charset named by `label`. The label is resolved by
    /// [`Gravatar::build`], which fails if it is unknown.
    #[must_use]
    pub fn with_charset_label(mut self, label: impl Into<String>) -> Self {
        self.charset_label = Some(label.into());
        self
    }

    // ── In-place setters ──────────────────────────────────────────

    /// In-place form of [`Gravatar::with_protocol`].
    pub fn set_protocol(&mut self, protocol: Option<Protocol>) -> &mut Self {
        if let Some(protocol) = protocol {
            self.protocol = protocol;
        }
        self
    }

    /// In-place form of [`Gravatar::with_rating`].
    pub fn set_rating(&mut self, rating: Option<Rating>) -> &mut Self {
        self.put(PARAM_RATING, rating.map(|r| r.code().to_string()));
        self
    }

    /// In-place form of [`Gravatar::with_size`]. On error the builder is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GravatarError::InvalidArgument`] if `size` is out of range.
    pub fn set_size(&mut self, size: Option<u32>) -> GravatarResult<&mut Self> {
        if let Some(size) = size {
            check_size(size)?;
        }
        self.put(PARAM_SIZE, size.map(|s| s.to_string()));
        Ok(self)
    }

    /// In-place form of [`Gravatar::with_default_image`].
    pub fn set_default_image(&mut self, image: Option<DefaultImage>) -> &mut Self {
        self.put(PARAM_DEFAULT, image.map(|d| d.code().to_string()));
        self
    }

    /// In-place form of [`Gravatar::with_default_image_url`].
    pub fn set_default_image_url(&mut self, url: Option<&str>) -> &mut Self {
        self.put(PARAM_DEFAULT, url.map(str::to_owned));
        self
    }

    // ── Accessors ─────────────────────────────────────────────────

    /// The address as given, before normalization.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Charset label set on this builder, if any.
    #[must_use]
    pub fn charset_label(&self) -> Option<&str> {
        self.charset_label.as_deref()
    }

    /// Query parameters in emission order, unencoded.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Assembles the URL from the current state.
    ///
    /// # Errors
    ///
    /// Returns [`GravatarError::Encoding`] if the charset label cannot be
    /// resolved.
    pub fn build(&self) -> GravatarResult<String> {
        let charset = match &self.charset_label {
            Some(label) => Charset::for_label(label)?,
            None => Charset::default(),
        };
        let (hash, mut replaced) = hash_counting(self.email(), &charset);

        let mut url = String::with_capacity(
            self.protocol.prefix().len() + GRAVATAR_IMAGE_BASE_URL.len() + hash.len() + 64,
        );
        url.push_str(self.protocol.prefix());
        url.push_str(GRAVATAR_IMAGE_BASE_URL);
        url.push_str(&hash);

        for (i, (key, value)) in self.parameters.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            let (bytes, lossy) = charset.encode_counting(value);
            replaced += lossy;
            url.push_str(&urlencoding::encode_binary(&bytes));
        }

        if replaced > 0 {
            warn!(
                "{} character(s) not representable in {}, replaced with '?'",
                replaced,
                charset.name()
            );
        }

        debug!(
            "Built gravatar URL for hash {} with {} parameter(s)",
            hash,
            self.parameters.len()
        );
        Ok(url)
    }

    /// Replaces `key` in place, appends it, or removes it when `value` is `None`.
    fn put(&mut self, key: &'static str, value: Option<String>) {
        let existing = self.parameters.iter().position(|(k, _)| *k == key);
        match (existing, value) {
            (Some(idx), Some(value)) => self.parameters[idx].1 = value,
            (None, Some(value)) => self.parameters.push((key, value)),
            (Some(idx), None) => {
                self.parameters.remove(idx);
            }
            (None, None) => {}
        }
    }
}

impl<'a> From<&'a str> for Gravatar {
    fn from(email: &'a str) -> Self {
        Self::for_email(email)
    }
}

/// Rejects sizes the host will not serve.
pub(crate) fn check_size(size: u32) -> GravatarResult<()> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GravatarError::InvalidArgument(format!(
            "size needs to be within {MIN_SIZE} and {MAX_SIZE}, got {size}"
        )))
    }
}
