//! Single-byte text encoding applied before hashing and percent-encoding.
//!
//! The avatar host hashes addresses as Windows-1252 bytes, so hashing UTF-8
//! bytes gives a different identity for any non-ASCII address. The charset is
//! still selectable for hosts that expect a different Latin variant.

use crate::error::{GravatarError, GravatarResult};
use encoding_rs::{EncoderResult, Encoding, WINDOWS_1252};
use std::fmt;

/// Byte substituted for characters the charset cannot represent.
const REPLACEMENT: u8 = b'?';

/// A single-byte, ASCII-compatible text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// Resolves a WHATWG encoding label such as `"cp1252"` or `"latin1"`.
    ///
    /// # Errors
    ///
    /// Returns [`GravatarError::Encoding`] if the label is unknown or names a
    /// multi-byte or non-ASCII-compatible encoding.
    pub fn for_label(label: &str) -> GravatarResult<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            GravatarError::Encoding(format!("unknown charset label '{label}'"))
        })?;
        Self::from_encoding(encoding)
    }

    /// Wraps an encoding, rejecting anything that is not single-byte.
    ///
    /// # Errors
    ///
    /// Returns [`GravatarError::Encoding`] for multi-byte encodings.
    pub fn from_encoding(encoding: &'static Encoding) -> GravatarResult<Self> {
        if !encoding.is_single_byte() || !encoding.is_ascii_compatible() {
            return Err(GravatarError::Encoding(format!(
                "{} is not a single-byte ASCII-compatible charset",
                encoding.name()
            )));
        }
        Ok(Self(encoding))
    }

    /// Canonical name of the encoding (e.g. `windows-1252`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Encodes `text`, replacing unrepresentable characters with `?`.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        self.encode_counting(text).0
    }

    /// Like [`Charset::encode`], also returning how many characters were
    /// replaced.
    pub(crate) fn encode_counting(&self, text: &str) -> (Vec<u8>, usize) {
        let mut encoder = self.0.new_encoder();
        // Single-byte output never exceeds the UTF-8 input length.
        let mut out = vec![0u8; text.len()];
        let mut written = 0;
        let mut rest = text;
        let mut replaced = 0usize;

        loop {
            let (result, read, wrote) =
                encoder.encode_from_utf8_without_replacement(rest, &mut out[written..], true);
            written += wrote;
            rest = &rest[read..];
            match result {
                EncoderResult::InputEmpty => break,
                EncoderResult::Unmappable(_) => {
                    if written == out.len() {
                        out.push(REPLACEMENT);
                    } else {
                        out[written] = REPLACEMENT;
                    }
                    written += 1;
                    replaced += 1;
                }
                EncoderResult::OutputFull => out.resize(out.len() + rest.len().max(1), 0),
            }
        }
        out.truncate(written);
        (out, replaced)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self(WINDOWS_1252)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
