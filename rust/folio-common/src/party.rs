use serde::{Deserialize, Serialize};

/// The size of a party identifier in bytes.
pub const PARTY_ID_SIZE: usize = 32;

/// The identity of a participating party (creator, collaborator or
/// beneficiary).
///
/// A `PartyId` is the BLAKE3 digest of the party's public signing key, as
/// recovered by the credentials layer. It is an opaque value: the core
/// never interprets it beyond equality and ordering. Ordering is total and
/// deterministic (lexicographic over the digest bytes), which the royalty
/// ledger relies on when breaking ties during remainder assignment.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[repr(transparent)]
pub struct PartyId(#[serde(with = "serde_bytes")] [u8; PARTY_ID_SIZE]);

impl PartyId {
    /// Derives a party identifier from the party's public key bytes.
    pub fn from_public_key(key_bytes: &[u8]) -> Self {
        Self(blake3::hash(key_bytes).into())
    }

    /// The raw identifier bytes.
    pub fn bytes(&self) -> &[u8; PARTY_ID_SIZE] {
        &self.0
    }
}

impl From<[u8; PARTY_ID_SIZE]> for PartyId {
    fn from(value: [u8; PARTY_ID_SIZE]) -> Self {
        PartyId(value)
    }
}

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "z{}", base58::ToBase58::to_base58(self.0.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_orders_identifiers_by_digest_bytes() {
        let low = PartyId::from([0u8; PARTY_ID_SIZE]);
        let high = PartyId::from([0xff; PARTY_ID_SIZE]);
        assert!(low < high);
    }

    #[test]
    fn it_derives_distinct_identities_from_distinct_keys() {
        assert_ne!(
            PartyId::from_public_key(b"key one"),
            PartyId::from_public_key(b"key two")
        );
    }
}
