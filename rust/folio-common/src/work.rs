use serde::{Deserialize, Serialize};

/// The identifier assigned to the first work ever created.
pub const FIRST_WORK_ID: WorkId = WorkId(1);

/// The identity of a registered creative work.
///
/// Work identifiers are assigned by a monotonically increasing sequence at
/// creation time and are never reused, even across failed registrations.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[repr(transparent)]
pub struct WorkId(u64);

impl WorkId {
    /// The identifier that follows this one in the sequence.
    pub fn next(&self) -> WorkId {
        WorkId(self.0 + 1)
    }
}

impl From<u64> for WorkId {
    fn from(value: u64) -> Self {
        WorkId(value)
    }
}

impl From<WorkId> for u64 {
    fn from(value: WorkId) -> Self {
        value.0
    }
}

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "work:{}", self.0)
    }
}
