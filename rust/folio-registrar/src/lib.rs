#![warn(missing_docs)]

//! Registration orchestration for the Folio provenance and royalty ledger.
//!
//! The [`Registrar`] is the public-facing workflow over the component
//! crates: it validates collaborator shares, verifies content
//! attestations, claims fingerprints, creates work records, initializes
//! royalty accounting and publishes events - each public operation as one
//! indivisible unit of work.
//!
//! ```rust
//! use folio_capability::{AttestationVerifier, Capability, MemoryCapabilityStore};
//! use folio_common::ContentFingerprint;
//! use folio_credentials::AttestationSigner;
//! use folio_ledger::CollaboratorShare;
//! use folio_registrar::{MemoryEventSink, Registrar};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let capabilities = MemoryCapabilityStore::new();
//! let mut registrar = Registrar::new(
//!     AttestationVerifier::new(capabilities.clone()),
//!     capabilities.clone(),
//!     MemoryEventSink::new(),
//! );
//!
//! // An artist with the verified-artist capability attests their work...
//! let artist = AttestationSigner::generate(&mut rand::rngs::OsRng);
//! capabilities.grant(artist.party_id(), Capability::verified_artist());
//! let fingerprint = ContentFingerprint::of(b"the finished master");
//!
//! // ...and mints it with a sole 100% share.
//! let work_id = registrar.mint(
//!     "Night Drive",
//!     "bafyreib...xyz",
//!     fingerprint.clone(),
//!     vec![CollaboratorShare::new(artist.party_id(), 10_000)],
//!     &artist.attest(&fingerprint)?,
//! )?;
//!
//! // Royalties accumulate and distribute deterministically.
//! registrar.deposit(work_id, 1000)?;
//! let payouts = registrar.distribute(work_id)?;
//! assert_eq!(payouts, vec![(artist.party_id(), 1000)]);
//! # Ok(())
//! # }
//! ```

mod registrar;
pub use registrar::*;

mod events;
pub use events::*;

mod error;
pub use error::*;
