//! Closed option enumerations and their wire literals.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheme placed in front of the avatar host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain `http://`.
    Http,
    /// Encrypted `https://`.
    Https,
    /// Scheme-relative `://`; the embedding page decides.
    #[default]
    None,
}

impl Protocol {
    /// Every protocol in declaration order.
    pub const ALL: [Protocol; 3] = [Self::Http, Self::Https, Self::None];

    /// The literal prepended to the URL before the host.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Http => "http://",
            Self::Https => "https://",
            Self::None => "://",
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted) || p.prefix() == wanted)
            .ok_or_else(|| Error::UnknownProtocol(s.to_string()))
    }
}

/// Self-assigned audience rating of an avatar.
///
/// Only `G` images are served unless a higher rating is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Suitable for display on all websites with any audience type.
    G,
    /// May contain rude gestures, provocatively dressed individuals, the
    /// lesser swear words, or mild violence.
    Pg,
    /// May contain harsh profanity, intense violence, nudity, or hard drug use.
    R,
    /// May contain hardcore sexual imagery or extremely disturbing violence.
    X,
}

impl Rating {
    /// Every rating, least to most restrictive audience.
    pub const ALL: [Rating; 4] = [Self::G, Self::Pg, Self::R, Self::X];

    /// The `r` parameter value.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Pg => "pg",
            Self::R => "r",
            Self::X => "x",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownRating(s.to_string()))
    }
}

/// Built-in image served when no avatar is registered for the hash.
///
/// Most of these generate a themed image from the hash itself, so the same
/// address always gets the same fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultImage {
    /// Serve nothing; respond with HTTP 404.
    #[serde(rename = "404")]
    FourOhFour,
    /// Cartoon-style silhouette of a person (does not vary by hash).
    #[serde(rename = "mm")]
    MysteryMan,
    /// Geometric pattern.
    #[serde(rename = "identicon")]
    Identicon,
    /// Generated monster with varying colors and faces.
    #[serde(rename = "monsterid")]
    MonsterId,
    /// Generated faces with differing features and backgrounds.
    #[serde(rename = "wavatar")]
    Wavatar,
    /// 8-bit arcade-style pixelated face.
    #[serde(rename = "retro")]
    Retro,
    /// Transparent PNG.
    #[serde(rename = "blank")]
    Blank,
}

impl DefaultImage {
    /// Every built-in fallback in declaration order.
    pub const ALL: [DefaultImage; 7] = [
        Self::FourOhFour,
        Self::MysteryMan,
        Self::Identicon,
        Self::MonsterId,
        Self::Wavatar,
        Self::Retro,
        Self::Blank,
    ];

    /// The `d` parameter value.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FourOhFour => "404",
            Self::MysteryMan => "mm",
            Self::Identicon => "identicon",
            Self::MonsterId => "monsterid",
            Self::Wavatar => "wavatar",
            Self::Retro => "retro",
            Self::Blank => "blank",
        }
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DefaultImage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownDefaultImage(s.to_string()))
    }
}
