//! Argument handling for the `gravatar-url` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gravatar::{Gravatar, GravatarConfig, Protocol, Rating};
use tracing::debug;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gravatar-url")]
#[command(about = "Print the Gravatar image URL for an email address")]
pub struct Args {
    /// Email address to look up
    pub email: String,

    /// Protocol prefix: http, https or none (scheme-relative)
    #[arg(short, long)]
    pub protocol: Option<Protocol>,

    /// Image size in pixels (1-2048)
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Highest rating to allow: g, pg, r or x
    #[arg(short, long)]
    pub rating: Option<Rating>,

    /// Fallback when no avatar exists: a built-in code (404, mm, identicon,
    /// monsterid, wavatar, retro, blank) or an image URL
    #[arg(short, long = "default")]
    pub default_image: Option<String>,

    /// Charset label used for hashing (defaults to windows-1252)
    #[arg(long)]
    pub charset: Option<String>,

    /// JSON file with default options; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Merges the config file (if any) with the flags.
    pub fn config(&self) -> Result<GravatarConfig> {
        let mut config = match &self.config {
            Some(path) => GravatarConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GravatarConfig::default(),
        };

        if let Some(protocol) = self.protocol {
            config.protocol = protocol;
        }
        if self.size.is_some() {
            config.size = self.size;
        }
        if self.rating.is_some() {
            config.rating = self.rating;
        }
        if self.default_image.is_some() {
            config.default_image = self.default_image.clone();
        }
        if let Some(charset) = &self.charset {
            config.charset = charset.clone();
        }
        debug!("Effective config: {:?}", config);
        Ok(config)
    }

    /// Builder for the requested address with every option applied.
    pub fn gravatar(&self) -> Result<Gravatar> {
        let config = self.config()?;
        config
            .builder(self.email.as_str())
            .context("Invalid gravatar options")
    }

    /// The final URL.
    pub fn url(&self) -> Result<String> {
        self.gravatar()?
            .build()
            .context("Failed to build gravatar URL")
    }
}
