//! The attestation payload and identity recovery.

use crate::AttestationError;
use folio_common::{ContentFingerprint, PartyId};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use serde::{Deserialize, Serialize};

/// Domain separation tag mixed into every attested digest.
///
/// Signatures are produced over `blake3(DOMAIN_TAG || fingerprint)`, never
/// over the bare fingerprint. Interoperating implementations must prepend
/// the identical tag; without it a signature produced for an unrelated
/// message scheme could be replayed as a content attestation.
pub const DOMAIN_TAG: &[u8] = b"folio/content-attestation/v1";

/// The length of the compact ECDSA signature carried by an attestation.
pub const ATTESTATION_SIGNATURE_SIZE: usize = 64;

/// Computes the domain-separated digest that attestations sign.
pub fn attested_digest(fingerprint: &ContentFingerprint) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN_TAG);
    hasher.update(fingerprint.bytes());
    hasher.finalize().into()
}

/// A recoverable signature over the domain-separated digest of a content
/// fingerprint.
///
/// The attestation does not name its signer. The signer's [`PartyId`] is
/// recovered from the signature together with the fingerprint being
/// attested, so an attestation made for one fingerprint is useless for any
/// other.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContentAttestation {
    /// Compact (r, s) signature bytes.
    #[serde(with = "serde_bytes")]
    signature: [u8; ATTESTATION_SIGNATURE_SIZE],
    /// Recovery id disambiguating the candidate public keys.
    recovery: u8,
}

impl ContentAttestation {
    /// Assembles an attestation from raw signature parts.
    pub fn from_parts(signature: [u8; ATTESTATION_SIGNATURE_SIZE], recovery: u8) -> Self {
        ContentAttestation {
            signature,
            recovery,
        }
    }

    /// Recovers the identity that signed the given fingerprint.
    ///
    /// Fails closed: malformed signatures, out-of-range recovery ids and
    /// digests that do not yield a valid curve point are all reported as
    /// errors, never as a panic.
    pub fn recover(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<PartyId, AttestationError> {
        let signature = Signature::from_slice(&self.signature)
            .map_err(|_| AttestationError::MalformedSignature)?;
        let recovery = RecoveryId::from_byte(self.recovery)
            .ok_or(AttestationError::InvalidRecoveryId(self.recovery))?;
        let key = VerifyingKey::recover_from_prehash(
            &attested_digest(fingerprint),
            &signature,
            recovery,
        )
        .map_err(|_| AttestationError::UnrecoverableIdentity)?;

        Ok(PartyId::from_public_key(key.to_encoded_point(true).as_bytes()))
    }
}
