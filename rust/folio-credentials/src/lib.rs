#![warn(missing_docs)]

//! Content attestations for the Folio ledger.
//!
//! A registration is only accepted when it carries an attestation: a
//! recoverable secp256k1 ECDSA signature over a domain-separated digest of
//! the content fingerprint. Because the signature is recoverable, the
//! signing identity does not travel with the submission - it is recovered
//! from `(fingerprint, attestation)` and then checked against the
//! capability store by the verification layer.
//!
//! ```rust
//! use folio_common::ContentFingerprint;
//! use folio_credentials::AttestationSigner;
//!
//! # fn main() -> Result<(), folio_credentials::AttestationError> {
//! let signer = AttestationSigner::generate(&mut rand::rngs::OsRng);
//! let fingerprint = ContentFingerprint::of(b"an unreleased single");
//!
//! let attestation = signer.attest(&fingerprint)?;
//! assert_eq!(attestation.recover(&fingerprint)?, signer.party_id());
//! # Ok(())
//! # }
//! ```

mod attestation;
pub use attestation::*;

mod signer;
pub use signer::*;

mod error;
pub use error::*;
