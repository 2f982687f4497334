use folio_common::{ContentFingerprint, Timestamp, WorkId};
use thiserror::Error;

/// The fingerprint has already been claimed by an earlier registration.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Fingerprint already registered: {0}")]
pub struct AlreadyClaimedError(
    /// The fingerprint that was already present.
    pub ContentFingerprint,
);

/// The work identifier does not name any known work.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown work: {0}")]
pub struct UnknownWorkError(
    /// The identifier that failed to resolve.
    pub WorkId,
);

/// Errors that can occur while completing copyright registration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// The work identifier does not name any known work.
    #[error("Unknown work: {0}")]
    UnknownWork(WorkId),

    /// The work's registration was already completed.
    #[error("Work already registered: {0}")]
    AlreadyRegistered(WorkId),

    /// The requested expiry is not strictly in the future.
    #[error("Invalid expiry {expires_at:?}: not after registration time {now:?}")]
    InvalidExpiry {
        /// The rejected expiry timestamp.
        expires_at: Timestamp,
        /// The registration time it was compared against.
        now: Timestamp,
    },

    /// The caller is neither the creator nor an authorized delegate.
    #[error("Not authorized to register work {0}")]
    NotAuthorized(WorkId),
}
