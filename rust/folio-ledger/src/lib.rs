#![warn(missing_docs)]

//! Royalty accounting for registered works.
//!
//! Each work carries a fixed set of collaborator shares, expressed in basis
//! points that sum to exactly [`TOTAL_SHARE_BPS`]. Incoming payments
//! accumulate against the work until a distribution pass splits the whole
//! balance into per-collaborator pending balances. Distribution is
//! deterministic and conserves every unit: floor division assigns each
//! collaborator their share, and the rounding remainder goes to the
//! collaborator holding the largest share (ties to the lowest party
//! identifier) rather than being burnt.

mod share;
pub use share::*;

mod ledger;
pub use ledger::*;

mod error;
pub use error::*;
