use folio_common::{ContentFingerprint, PartyId, WorkId};
use folio_ledger::ShareSetError;
use folio_registry::UnknownWorkError;
use thiserror::Error;

/// Errors that can occur while minting a new work.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MintError {
    /// The proposed collaborator shares violate a share invariant.
    #[error("Invalid share set: {0}")]
    InvalidShareSet(#[from] ShareSetError),

    /// The attestation does not establish a party holding the required
    /// capability.
    #[error("Content attestation not authorized for {0}")]
    UnauthorizedContent(ContentFingerprint),

    /// The fingerprint was already claimed by an earlier registration.
    #[error("Duplicate content: {0}")]
    DuplicateContent(ContentFingerprint),
}

/// Errors that can occur in the trusted-verification step.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The work identifier does not name any known work.
    #[error("Unknown work: {0}")]
    UnknownWork(WorkId),

    /// The caller does not hold the work-verifier capability.
    #[error("Party {0} is not authorized to verify works")]
    NotAuthorized(PartyId),
}

impl From<UnknownWorkError> for VerifyError {
    fn from(error: UnknownWorkError) -> Self {
        VerifyError::UnknownWork(error.0)
    }
}
