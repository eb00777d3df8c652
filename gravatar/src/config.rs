//! Reusable URL defaults, loadable from JSON.
//!
//! ```json
//! {
//!   "protocol": "https",
//!   "size": 80,
//!   "rating": "pg",
//!   "default_image": "identicon",
//!   "charset": "windows-1252"
//! }
//! ```
//!
//! Every field is optional. `default_image` takes either a built-in code or a
//! fallback image URL.

use crate::builder::{check_size, Gravatar};
use crate::charset::Charset;
use crate::error::{GravatarError, GravatarResult};
use gravatar_types::{DefaultImage, Protocol, Rating};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Defaults applied to every builder created from this configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GravatarConfig {
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Built-in code (`"404"`, `"mm"`, ...) or fallback image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_image: Option<String>,
    /// WHATWG label of the single-byte charset used for hashing.
    pub charset: String,
}

impl Default for GravatarConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::default(),
            size: None,
            rating: None,
            default_image: None,
            charset: Charset::default().name().to_string(),
        }
    }
}

impl GravatarConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json_str(json: &str) -> GravatarResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> GravatarResult<Self> {
        let path = path.as_ref();
        debug!("Loading gravatar config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks the size range and that the charset resolves.
    ///
    /// # Errors
    ///
    /// Returns [`GravatarError::Config`] for an out-of-range size and
    /// [`GravatarError::Encoding`] for an unusable charset.
    pub fn validate(&self) -> GravatarResult<()> {
        if let Some(size) = self.size {
            check_size(size).map_err(|_| {
                GravatarError::Config(format!(
                    "size {size} is outside {}..={}",
                    crate::MIN_SIZE,
                    crate::MAX_SIZE
                ))
            })?;
        }
        Charset::for_label(&self.charset)?;
        Ok(())
    }

    /// Starts a builder for `email` seeded with these defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn builder<'a>(&self, email: impl Into<Option<&'a str>>) -> GravatarResult<Gravatar> {
        self.validate()?;

        let mut gravatar = Gravatar::for_email(email)
            .with_protocol(Some(self.protocol))
            .with_charset_label(self.charset.as_str());
        gravatar.set_size(self.size)?;
        gravatar.set_rating(self.rating);
        if let Some(value) = &self.default_image {
            match value.parse::<DefaultImage>() {
                Ok(image) => {
                    debug!("Using built-in default image '{}'", image);
                    gravatar.set_default_image(Some(image));
                }
                Err(_) => {
                    debug!("Using fallback image URL {}", value);
                    gravatar.set_default_image_url(Some(value));
                }
            }
        }
        Ok(gravatar)
    }
}
