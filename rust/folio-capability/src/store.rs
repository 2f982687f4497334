use crate::Capability;
use folio_common::{ConditionalSync, PartyId, SharedCell};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Read-only lookup into an externally administered capability store.
///
/// Granting and revoking capabilities is role administration and happens
/// outside the ledger core; the core only asks whether a party currently
/// holds a capability.
pub trait CapabilityStore: ConditionalSync {
    /// Returns `true` if `party` currently holds `capability`.
    fn has_capability(&self, party: &PartyId, capability: &Capability) -> bool;
}

impl<S> CapabilityStore for Arc<S>
where
    S: CapabilityStore + ?Sized,
{
    fn has_capability(&self, party: &PartyId, capability: &Capability) -> bool {
        (**self).has_capability(party, capability)
    }
}

/// A trivial implementation of [`CapabilityStore`] - backed by a [`HashMap`]
/// - where all grants are kept in memory and never persisted.
///
/// Clones share the same underlying table, so a deployment can hand one
/// clone to the verifier and keep another for administration.
#[derive(Clone, Default)]
pub struct MemoryCapabilityStore {
    grants: Arc<SharedCell<HashMap<PartyId, HashSet<Capability>>>>,
}

impl MemoryCapabilityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `capability` to `party`.
    pub fn grant(&self, party: PartyId, capability: Capability) {
        self.grants.write().entry(party).or_default().insert(capability);
    }

    /// Revokes `capability` from `party`, if held.
    pub fn revoke(&self, party: &PartyId, capability: &Capability) {
        if let Some(held) = self.grants.write().get_mut(party) {
            held.remove(capability);
        }
    }
}

impl CapabilityStore for MemoryCapabilityStore {
    fn has_capability(&self, party: &PartyId, capability: &Capability) -> bool {
        self.grants
            .read()
            .get(party)
            .is_some_and(|held| held.contains(capability))
    }
}
