#![warn(missing_docs)]

//! Work records and the content fingerprint registry.
//!
//! A [`WorkRecord`] is the immutable provenance record of one creative
//! work: who created it, when, what content it fingerprints to, and which
//! lifecycle flags (registration, verification, dispute) have been set.
//! Records are created once and never deleted.
//!
//! The [`FingerprintRegistry`] enforces the global uniqueness that makes a
//! fingerprint a usable identity: once claimed, a fingerprint can never be
//! claimed again - not even by its original registrant.

mod record;
pub use record::*;

mod store;
pub use store::*;

mod fingerprints;
pub use fingerprints::*;

mod error;
pub use error::*;
