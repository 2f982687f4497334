use crate::ShareSetError;
use folio_common::PartyId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The number of basis points making up a whole: 10000 = 100.00%.
pub const TOTAL_SHARE_BPS: u16 = 10_000;

/// One collaborator's fixed share of a work's royalties, in basis points.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollaboratorShare {
    /// The collaborating party.
    pub party: PartyId,
    /// The party's share in basis points.
    pub share: u16,
}

impl CollaboratorShare {
    /// Constructs a share entry.
    pub fn new(party: PartyId, share: u16) -> Self {
        CollaboratorShare { party, share }
    }
}

/// A validated set of collaborator shares.
///
/// Constructing a `ShareSet` proves the share invariants: non-empty, no
/// duplicate collaborators, shares summing to exactly
/// [`TOTAL_SHARE_BPS`]. The set is fixed for the lifetime of its work -
/// adding a collaborator is a new-version operation outside this core.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<CollaboratorShare>", into = "Vec<CollaboratorShare>")]
pub struct ShareSet(Vec<CollaboratorShare>);

impl ShareSet {
    /// Validates `shares` into a `ShareSet`.
    pub fn new(shares: Vec<CollaboratorShare>) -> Result<Self, ShareSetError> {
        if shares.is_empty() {
            return Err(ShareSetError::Empty);
        }

        let mut seen = HashSet::with_capacity(shares.len());
        for entry in &shares {
            if !seen.insert(entry.party) {
                return Err(ShareSetError::DuplicateCollaborator(entry.party));
            }
        }

        let total: u64 = shares.iter().map(|entry| u64::from(entry.share)).sum();
        if total != u64::from(TOTAL_SHARE_BPS) {
            return Err(ShareSetError::WrongTotal(total));
        }

        Ok(ShareSet(shares))
    }

    /// The shares in their original order.
    pub fn entries(&self) -> &[CollaboratorShare] {
        &self.0
    }

    /// The collaborating parties in share order.
    pub fn parties(&self) -> impl Iterator<Item = PartyId> + '_ {
        self.0.iter().map(|entry| entry.party)
    }

    /// The party that absorbs rounding remainders: the holder of the
    /// largest share, ties broken by the lowest party identifier.
    pub fn remainder_recipient(&self) -> PartyId {
        self.0
            .iter()
            .max_by_key(|entry| (entry.share, std::cmp::Reverse(entry.party)))
            .map(|entry| entry.party)
            .expect("share set is never empty")
    }
}

impl TryFrom<Vec<CollaboratorShare>> for ShareSet {
    type Error = ShareSetError;

    fn try_from(shares: Vec<CollaboratorShare>) -> Result<Self, Self::Error> {
        ShareSet::new(shares)
    }
}

impl From<ShareSet> for Vec<CollaboratorShare> {
    fn from(value: ShareSet) -> Self {
        value.0
    }
}
