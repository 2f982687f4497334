//! Capability-based authorization for the Folio ledger.
//!
//! A [`Capability`] is an authorization tag held by a party. Who holds
//! which capability is administered outside the ledger core; the core only
//! consumes the read-only [`CapabilityStore`] lookup. The
//! [`AttestationVerifier`] composes that lookup with identity recovery to
//! answer the one question registration cares about: was this fingerprint
//! attested by a party that currently holds the required capability?

mod capability;
pub use capability::*;

mod store;
pub use store::*;

mod verifier;
pub use verifier::*;
