//! Identity hash: the MD5 of the normalized address.

use crate::charset::Charset;
use md5::{Digest, Md5};

/// Identity hash of an absent or blank address (MD5 of zero bytes).
pub const EMPTY_IDENTITY_HASH: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// Computes the identity hash of `email` using Windows-1252.
///
/// An absent address hashes like the empty string.
#[must_use]
pub fn identity_hash<'a>(email: impl Into<Option<&'a str>>) -> String {
    identity_hash_with(email, &Charset::default())
}

/// Computes the identity hash of `email` over the bytes of `charset`.
#[must_use]
pub fn identity_hash_with<'a>(email: impl Into<Option<&'a str>>, charset: &Charset) -> String {
    hash_counting(email.into(), charset).0
}

/// Hash plus the number of characters `charset` had to replace.
pub(crate) fn hash_counting(email: Option<&str>, charset: &Charset) -> (String, usize) {
    let normalized = normalize(email);
    let (bytes, replaced) = charset.encode_counting(&normalized);

    let mut hasher = Md5::new();
    hasher.update(bytes);
    let hash = hasher.finalize();

    (hex::encode(hash), replaced)
}

/// Trims and lowercases; the mapping is locale-independent.
fn normalize(email: Option<&str>) -> String {
    email.unwrap_or_default().trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_absent_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize(Some("  MiXeD@Example.COM\t\n")), "mixed@example.com");
    }

    #[test]
    fn hash_counting_reports_unmappable_characters() {
        let (hash, replaced) = hash_counting(Some("snow☃@example.com"), &Charset::default());
        assert_eq!(hash, identity_hash("snow?@example.com"));
        assert_eq!(replaced, 1);
    }

    #[test]
    fn normalize_lowercases_non_ascii() {
        assert_eq!(normalize(Some("ÄNNE@EXAMPLE.COM")), "änne@example.com");
    }
}
