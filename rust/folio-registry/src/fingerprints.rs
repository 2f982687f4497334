use crate::AlreadyClaimedError;
use folio_common::ContentFingerprint;
use std::collections::HashSet;

/// The set of all content fingerprints ever claimed.
///
/// Membership is write-once: a claim either inserts the fingerprint or
/// fails without mutating anything, and a present fingerprint can never be
/// claimed again. [`FingerprintRegistry::release`] lets a workflow that
/// claims before its last fallible step undo the claim on failure; it is
/// not a public unregistration facility. The standard mint workflow orders
/// its steps so the claim itself is the last fallible one and commits or
/// fails atomically without it.
#[derive(Clone, Debug, Default)]
pub struct FingerprintRegistry {
    claimed: HashSet<ContentFingerprint>,
}

impl FingerprintRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims `fingerprint`.
    ///
    /// Fails with [`AlreadyClaimedError`] and performs no mutation when the
    /// fingerprint is already present.
    pub fn claim(&mut self, fingerprint: &ContentFingerprint) -> Result<(), AlreadyClaimedError> {
        if !self.claimed.insert(fingerprint.clone()) {
            return Err(AlreadyClaimedError(fingerprint.clone()));
        }
        Ok(())
    }

    /// Undoes a claim made earlier in a workflow whose later step failed.
    pub fn release(&mut self, fingerprint: &ContentFingerprint) {
        self.claimed.remove(fingerprint);
    }

    /// Whether `fingerprint` has been claimed.
    pub fn is_claimed(&self, fingerprint: &ContentFingerprint) -> bool {
        self.claimed.contains(fingerprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_claims_a_fingerprint_exactly_once() {
        let mut registry = FingerprintRegistry::new();
        let fingerprint = ContentFingerprint::of(b"a debut novel");

        assert!(registry.claim(&fingerprint).is_ok());
        assert_eq!(
            registry.claim(&fingerprint),
            Err(AlreadyClaimedError(fingerprint))
        );
    }

    #[test]
    fn it_rejects_a_repeat_claim_by_anyone_including_the_original_registrant() {
        let mut registry = FingerprintRegistry::new();
        let fingerprint = ContentFingerprint::of(b"a debut novel");

        registry.claim(&fingerprint).unwrap();
        // No claimant identity is recorded; the original registrant is
        // refused just like anybody else.
        assert!(registry.claim(&fingerprint).is_err());
    }

    #[test]
    fn it_releases_a_rolled_back_claim() {
        let mut registry = FingerprintRegistry::new();
        let fingerprint = ContentFingerprint::of(b"an abandoned mint");

        registry.claim(&fingerprint).unwrap();
        registry.release(&fingerprint);

        assert!(!registry.is_claimed(&fingerprint));
        assert!(registry.claim(&fingerprint).is_ok());
    }

    #[test]
    fn it_keeps_failed_claims_side_effect_free() {
        let mut registry = FingerprintRegistry::new();
        let first = ContentFingerprint::of(b"first");

        registry.claim(&first).unwrap();
        let _ = registry.claim(&first);

        assert!(registry.is_claimed(&first));
    }
}
