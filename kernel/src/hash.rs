//! Content hashing with domain separation.
//!
//! Every artifact kind hashes under its own null-terminated domain prefix so
//! identical payload bytes from different kinds never produce the same digest.
//! Algorithm: SHA-256, rendered as `"sha256:<hex>"`.

use sha2::{Digest, Sha256};

/// Algorithm tag carried by every [`ContentHash`] this crate produces.
pub const HASH_ALGORITHM: &str = "sha256";

/// Digest tagged with the algorithm that produced it, `"sha256:<hex>"`.
///
/// Ordering is lexicographic over the rendered string, so `ContentHash` can
/// key a `BTreeMap` (state identity, report indices).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    rendered: String,
    tag_len: usize,
}

impl ContentHash {
    /// Parse a rendered hash.
    ///
    /// Accepts `tag:digest` where the tag is non-empty and the digest is
    /// non-empty lowercase hex. Anything else is `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (tag, digest) = s.split_once(':')?;
        let digest_ok = !digest.is_empty()
            && digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if tag.is_empty() || !digest_ok {
            return None;
        }
        Some(Self {
            rendered: s.to_owned(),
            tag_len: tag.len(),
        })
    }

    /// Algorithm tag, e.g. `"sha256"`.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.rendered[..self.tag_len]
    }

    /// Hex digest without the tag.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.rendered[self.tag_len + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Compute the canonical hash of `data` under `domain`.
///
/// Digest input is `domain || data`. Callers are responsible for passing a
/// null-terminated domain constant so that prefixes cannot run into payloads.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        rendered: format!("{HASH_ALGORITHM}:{digest}"),
        tag_len: HASH_ALGORITHM.len(),
    }
}
