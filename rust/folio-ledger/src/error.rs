use folio_common::{PartyId, WorkId};
use thiserror::Error;

/// Ways in which a proposed collaborator share set can be invalid.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShareSetError {
    /// A work must have at least one collaborator.
    #[error("Share set is empty")]
    Empty,

    /// Each collaborator may appear at most once.
    #[error("Duplicate collaborator in share set: {0}")]
    DuplicateCollaborator(PartyId),

    /// Shares must sum to exactly 10000 basis points.
    #[error("Shares sum to {0} basis points, expected 10000")]
    WrongTotal(u64),
}

/// The common error type used by the royalty ledger.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// The proposed share set violates a share invariant.
    #[error("Invalid share set: {0}")]
    InvalidShareSet(#[from] ShareSetError),

    /// The work identifier has no ledger entry.
    #[error("Unknown work: {0}")]
    UnknownWork(WorkId),

    /// Distribution was requested with a zero accumulated balance.
    #[error("Nothing to distribute for {0}")]
    NothingToDistribute(WorkId),

    /// A deposit would push the accumulated balance past `u128::MAX`.
    #[error("Deposit of {amount} overflows the accumulated balance for {work_id}")]
    BalanceOverflow {
        /// The work whose balance would overflow.
        work_id: WorkId,
        /// The rejected deposit amount.
        amount: u128,
    },

    /// A withdrawal asked for more than the pending balance holds.
    #[error(
        "Insufficient pending balance for {party} on {work_id}: requested {requested}, available {available}"
    )]
    InsufficientPending {
        /// The work whose pending balance was debited.
        work_id: WorkId,
        /// The beneficiary being debited.
        party: PartyId,
        /// The amount requested.
        requested: u128,
        /// The amount actually available.
        available: u128,
    },
}
