use crate::{Capability, CapabilityStore};
use folio_common::{ContentFingerprint, PartyId};
use folio_credentials::ContentAttestation;
use tracing::debug;

/// Verification of content attestations against a capability store.
///
/// Implementations must be pure with respect to ledger state: a verifier
/// reads the capability store and nothing else, and never mutates anything.
pub trait ContentVerifier {
    /// Returns the attesting identity iff `attestation` was produced over
    /// `fingerprint` by a party that currently holds `required`, and
    /// `None` otherwise.
    fn attested_party(
        &self,
        fingerprint: &ContentFingerprint,
        attestation: &ContentAttestation,
        required: &Capability,
    ) -> Option<PartyId>;

    /// Returns `true` iff `attestation` was produced over `fingerprint` by
    /// a party that currently holds `required`.
    fn verify(
        &self,
        fingerprint: &ContentFingerprint,
        attestation: &ContentAttestation,
        required: &Capability,
    ) -> bool {
        self.attested_party(fingerprint, attestation, required)
            .is_some()
    }
}

/// The standard [`ContentVerifier`]: recovers the attesting identity and
/// checks it against a [`CapabilityStore`].
///
/// Fails closed. A malformed signature, an unrecoverable identity and a
/// missing capability all yield `false`; no error escapes that a caller
/// could catch and bypass.
#[derive(Clone, Debug, Default)]
pub struct AttestationVerifier<S: CapabilityStore> {
    capabilities: S,
}

impl<S: CapabilityStore> AttestationVerifier<S> {
    /// Creates a verifier over the given capability store.
    pub fn new(capabilities: S) -> Self {
        AttestationVerifier { capabilities }
    }
}

impl<S: CapabilityStore> ContentVerifier for AttestationVerifier<S> {
    fn attested_party(
        &self,
        fingerprint: &ContentFingerprint,
        attestation: &ContentAttestation,
        required: &Capability,
    ) -> Option<PartyId> {
        let attester = match attestation.recover(fingerprint) {
            Ok(attester) => attester,
            Err(error) => {
                debug!(%fingerprint, %error, "rejected unrecoverable attestation");
                return None;
            }
        };

        self.capabilities
            .has_capability(&attester, required)
            .then_some(attester)
    }
}
