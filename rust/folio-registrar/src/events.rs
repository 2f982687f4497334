//! Append-only event records for external observers.

use folio_common::{ContentFingerprint, PartyId, SharedCell, Timestamp, WorkId};
use folio_ledger::Payout;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// An event describing a committed state transition.
///
/// Events are emitted after the transition commits. Emission is
/// at-least-once, best-effort logging for subscribers - not a guaranteed
/// message bus, and never consulted by the core itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A new work was created.
    Minted {
        /// The attested creator.
        creator: PartyId,
        /// The assigned work identifier.
        work_id: WorkId,
        /// The claimed content fingerprint.
        fingerprint: ContentFingerprint,
    },
    /// Copyright registration was completed for a work.
    Registered {
        /// The registered work.
        work_id: WorkId,
        /// When copyright protection lapses.
        expires_at: Timestamp,
    },
    /// An accumulated balance was distributed to collaborators.
    Distributed {
        /// The work whose balance was distributed.
        work_id: WorkId,
        /// The total amount distributed.
        total: u128,
        /// The per-beneficiary payouts.
        payouts: Vec<Payout>,
    },
    /// A dispute was filed against a work.
    Disputed {
        /// The disputed work.
        work_id: WorkId,
        /// The party filing the dispute.
        complainant: PartyId,
        /// Free-form description supplied by the complainant.
        reason: String,
    },
    /// A work passed the trusted-verification step.
    Verified {
        /// The verified work.
        work_id: WorkId,
    },
    /// A collaborator was added by an external new-version flow.
    ///
    /// No operation in this core emits this variant; share sets are fixed
    /// at creation. It exists so external flows share the sink's event
    /// vocabulary.
    CollaboratorAdded {
        /// The affected work.
        work_id: WorkId,
        /// The added collaborator.
        collaborator: PartyId,
    },
}

/// A consumer of [`LedgerEvent`]s.
pub trait EventSink {
    /// Delivers one event. Must not fail; delivery problems are the
    /// sink's own concern.
    fn emit(&self, event: &LedgerEvent);
}

/// The default [`EventSink`]: structured log records via `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &LedgerEvent) {
        match event {
            LedgerEvent::Minted {
                creator,
                work_id,
                fingerprint,
            } => info!(%creator, %work_id, %fingerprint, "minted work"),
            LedgerEvent::Registered {
                work_id,
                expires_at,
            } => info!(%work_id, ?expires_at, "registered work"),
            LedgerEvent::Distributed {
                work_id, total, ..
            } => info!(%work_id, total, "distributed royalties"),
            LedgerEvent::Disputed {
                work_id,
                complainant,
                ..
            } => info!(%work_id, %complainant, "dispute filed"),
            LedgerEvent::Verified { work_id } => info!(%work_id, "work verified"),
            LedgerEvent::CollaboratorAdded {
                work_id,
                collaborator,
            } => info!(%work_id, %collaborator, "collaborator added"),
        }
    }
}

/// An [`EventSink`] that retains every event in memory.
///
/// Clones share the same buffer, so a test can keep one clone while the
/// registrar owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryEventSink {
    events: Arc<SharedCell<Vec<LedgerEvent>>>,
}

impl MemoryEventSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events emitted so far, in emission order.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.read().clone()
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: &LedgerEvent) {
        self.events.write().push(event.clone());
    }
}
