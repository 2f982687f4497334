use std::array::TryFromSliceError;

use serde::{Deserialize, Serialize};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// The size of a content fingerprint in bytes.
///
/// Fingerprints are BLAKE3 digests, which are 256 bits (32 bytes) long.
pub const FINGERPRINT_SIZE: usize = 32;

/// A cryptographic fingerprint of the underlying content of a creative work.
///
/// A fingerprint is the BLAKE3 digest of the work's content bytes, not of
/// any storage locator that happens to point at them. Two submissions of
/// the same content always produce the same fingerprint regardless of where
/// the content is stored, which is what allows duplicate registrations to
/// be detected.
///
/// # Examples
///
/// ```rust
/// use folio_common::ContentFingerprint;
///
/// let fingerprint = ContentFingerprint::of(b"a short story");
/// assert_eq!(fingerprint, ContentFingerprint::of(b"a short story"));
/// ```
#[derive(
    FromBytes,
    Immutable,
    KnownLayout,
    Serialize,
    Deserialize,
    Clone,
    Default,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[repr(transparent)]
pub struct ContentFingerprint(#[serde(with = "serde_bytes")] [u8; FINGERPRINT_SIZE]);

impl ContentFingerprint {
    /// Computes the fingerprint of the given content bytes.
    pub fn of(content: &[u8]) -> Self {
        Self(blake3::hash(content).into())
    }

    /// Computes a fingerprint over a sequence of content chunks.
    pub fn of_iter<'a, I>(chunks: I) -> Self
    where
        I: Iterator<Item = &'a [u8]>,
    {
        let mut hasher = blake3::Hasher::new();
        for chunk in chunks {
            hasher.update(chunk);
        }
        Self(hasher.finalize().into())
    }

    /// The raw digest bytes.
    pub fn bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }
}

impl From<[u8; FINGERPRINT_SIZE]> for ContentFingerprint {
    fn from(value: [u8; FINGERPRINT_SIZE]) -> Self {
        ContentFingerprint(value)
    }
}

impl TryFrom<&[u8]> for ContentFingerprint {
    type Error = TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Ok(ContentFingerprint(value.try_into()?))
    }
}

impl std::fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", base58::ToBase58::to_base58(self.0.as_slice()))
    }
}
