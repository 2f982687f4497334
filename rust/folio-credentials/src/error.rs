use thiserror::Error;

/// Errors that can occur while producing or verifying content attestations.
#[derive(Error, Debug)]
pub enum AttestationError {
    /// The signature bytes do not form a valid secp256k1 ECDSA signature.
    #[error("Malformed attestation signature")]
    MalformedSignature,

    /// The recovery id is outside the valid range.
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// No public key could be recovered from the signature and digest.
    #[error("Unrecoverable signing identity")]
    UnrecoverableIdentity,

    /// An error occurred during the signing operation.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
