//! Attestation signing.

use crate::{ATTESTATION_SIGNATURE_SIZE, AttestationError, ContentAttestation, attested_digest};
use folio_common::{ContentFingerprint, PartyId};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::rand_core::CryptoRngCore;

/// A secp256k1 signing key that can attest content fingerprints.
///
/// This lives on the submitting side of the boundary: the ledger core only
/// ever consumes [`ContentAttestation`]s, it never holds signing keys.
#[derive(Clone)]
pub struct AttestationSigner(SigningKey);

impl AttestationSigner {
    /// Generates a fresh signing key from the given randomness source.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        AttestationSigner(SigningKey::random(rng))
    }

    /// The identity this signer's attestations recover to.
    pub fn party_id(&self) -> PartyId {
        let key = self.0.verifying_key();
        PartyId::from_public_key(key.to_encoded_point(true).as_bytes())
    }

    /// Produces an attestation over the given fingerprint.
    pub fn attest(
        &self,
        fingerprint: &ContentFingerprint,
    ) -> Result<ContentAttestation, AttestationError> {
        let (signature, recovery) = self
            .0
            .sign_prehash_recoverable(&attested_digest(fingerprint))
            .map_err(|error| AttestationError::SigningFailed(error.to_string()))?;
        let bytes: [u8; ATTESTATION_SIGNATURE_SIZE] = signature
            .to_bytes()
            .as_slice()
            .try_into()
            .map_err(|_| AttestationError::MalformedSignature)?;

        Ok(ContentAttestation::from_parts(bytes, recovery.to_byte()))
    }
}

impl From<SigningKey> for AttestationSigner {
    fn from(key: SigningKey) -> Self {
        AttestationSigner(key)
    }
}

impl std::fmt::Debug for AttestationSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AttestationSigner")
            .field(&self.party_id())
            .finish()
    }
}
