use crate::{RegisterError, Registration, UnknownWorkError, WorkRecord};
use folio_common::{ContentFingerprint, FIRST_WORK_ID, PartyId, Timestamp, WorkId};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// An injectable source of work identifiers.
///
/// Identifiers must be strictly increasing and never reused. The trait
/// exists so tests can substitute a deterministic sequence.
pub trait WorkIdSequence {
    /// Returns the next identifier, advancing the sequence.
    fn next_id(&mut self) -> WorkId;
}

/// The default [`WorkIdSequence`]: a monotonic counter starting at
/// [`FIRST_WORK_ID`].
#[derive(Clone, Debug)]
pub struct MonotonicSequence {
    next: WorkId,
}

impl MonotonicSequence {
    /// A sequence that starts at the given identifier.
    pub fn starting_at(first: WorkId) -> Self {
        MonotonicSequence { next: first }
    }
}

impl Default for MonotonicSequence {
    fn default() -> Self {
        Self::starting_at(FIRST_WORK_ID)
    }
}

impl WorkIdSequence for MonotonicSequence {
    fn next_id(&mut self) -> WorkId {
        let id = self.next;
        self.next = self.next.next();
        id
    }
}

/// The table of all [`WorkRecord`]s, keyed by monotonically assigned
/// identifier, together with the informational reputation counters.
#[derive(Debug)]
pub struct WorkRecordStore<Seq = MonotonicSequence>
where
    Seq: WorkIdSequence,
{
    sequence: Seq,
    records: BTreeMap<WorkId, WorkRecord>,
    reputation: HashMap<PartyId, u64>,
}

impl Default for WorkRecordStore<MonotonicSequence> {
    fn default() -> Self {
        Self::with_sequence(MonotonicSequence::default())
    }
}

impl WorkRecordStore<MonotonicSequence> {
    /// Creates an empty store with the default monotonic sequence.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Seq: WorkIdSequence> WorkRecordStore<Seq> {
    /// Creates an empty store with an injected identifier sequence.
    pub fn with_sequence(sequence: Seq) -> Self {
        WorkRecordStore {
            sequence,
            records: BTreeMap::new(),
            reputation: HashMap::new(),
        }
    }

    /// Creates a new work record and returns its assigned identifier.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        title: String,
        creator: PartyId,
        storage_locator: String,
        fingerprint: ContentFingerprint,
        collaborators: Vec<PartyId>,
        created_at: Timestamp,
    ) -> WorkId {
        let work_id = self.sequence.next_id();
        let record = WorkRecord::new(
            work_id,
            title,
            creator,
            created_at,
            storage_locator,
            fingerprint,
            collaborators,
        );
        let displaced = self.records.insert(work_id, record);
        assert!(
            displaced.is_none(),
            "work id sequence produced duplicate identifier {work_id}"
        );
        work_id
    }

    /// Looks up a work record.
    pub fn work(&self, work_id: WorkId) -> Option<&WorkRecord> {
        self.records.get(&work_id)
    }

    /// Completes copyright registration of a work.
    ///
    /// `caller` must be the work's creator, unless `delegated` indicates
    /// the orchestrator has established the caller as an authorized
    /// delegate. The expiry must be strictly after `now` (the registration
    /// time). On success the registration fields are set together and the
    /// creator's reputation counter is incremented (saturating).
    pub fn register(
        &mut self,
        work_id: WorkId,
        caller: PartyId,
        delegated: bool,
        expires_at: Timestamp,
        now: Timestamp,
    ) -> Result<(), RegisterError> {
        let record = self
            .records
            .get_mut(&work_id)
            .ok_or(RegisterError::UnknownWork(work_id))?;

        if caller != record.creator() && !delegated {
            return Err(RegisterError::NotAuthorized(work_id));
        }
        if record.registration().is_some() {
            return Err(RegisterError::AlreadyRegistered(work_id));
        }
        if expires_at <= now {
            return Err(RegisterError::InvalidExpiry { expires_at, now });
        }

        record.complete_registration(Registration {
            registered_at: now,
            expires_at,
        });
        let creator = record.creator();
        let reputation = self.reputation.entry(creator).or_insert(0);
        *reputation = reputation.saturating_add(1);

        debug!(%work_id, ?expires_at, "registered work");
        Ok(())
    }

    /// Marks a work as confirmed by the trusted-verification step.
    ///
    /// Append-only: once set the flag never clears, and repeated calls are
    /// no-ops.
    pub fn mark_verified(&mut self, work_id: WorkId) -> Result<(), UnknownWorkError> {
        let record = self
            .records
            .get_mut(&work_id)
            .ok_or(UnknownWorkError(work_id))?;
        record.set_verified();
        Ok(())
    }

    /// Records that a dispute has been filed against a work.
    ///
    /// Append-only and non-blocking: the flag never clears and no other
    /// operation consults it.
    pub fn file_dispute(&mut self, work_id: WorkId) -> Result<(), UnknownWorkError> {
        let record = self
            .records
            .get_mut(&work_id)
            .ok_or(UnknownWorkError(work_id))?;
        record.set_disputed();
        Ok(())
    }

    /// The informational reputation counter for a creator.
    ///
    /// Counts successful registrations. Never consulted for access
    /// control.
    pub fn reputation(&self, creator: &PartyId) -> u64 {
        self.reputation.get(creator).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator() -> PartyId {
        PartyId::from_public_key(b"creator key")
    }

    fn sample_work(store: &mut WorkRecordStore) -> WorkId {
        store.create(
            "Nocturne in Blue".into(),
            creator(),
            "bafy...locator".into(),
            ContentFingerprint::of(b"nocturne in blue, master recording"),
            vec![creator()],
            Timestamp::from_unix_seconds(1_700_000_000),
        )
    }

    #[test]
    fn it_assigns_strictly_increasing_identifiers() {
        let mut store = WorkRecordStore::new();
        let first = sample_work(&mut store);
        let second = store.create(
            "Nocturne in Grey".into(),
            creator(),
            "bafy...other".into(),
            ContentFingerprint::of(b"a different recording"),
            vec![creator()],
            Timestamp::from_unix_seconds(1_700_000_001),
        );

        assert_eq!(first, FIRST_WORK_ID);
        assert!(second > first);
    }

    #[test]
    fn it_registers_a_work_once() {
        let mut store = WorkRecordStore::new();
        let work_id = sample_work(&mut store);
        let now = Timestamp::from_unix_seconds(1_700_000_100);
        let expires_at = now.plus_seconds(60 * 60 * 24 * 365);

        store
            .register(work_id, creator(), false, expires_at, now)
            .unwrap();

        let registration = store.work(work_id).unwrap().registration().copied().unwrap();
        assert_eq!(registration.expires_at, expires_at);
        assert_eq!(registration.registered_at, now);

        // A repeat attempt fails and leaves the original expiry untouched.
        let result = store.register(work_id, creator(), false, now.plus_seconds(5), now);
        assert_eq!(result, Err(RegisterError::AlreadyRegistered(work_id)));
        assert_eq!(
            store.work(work_id).unwrap().registration().unwrap().expires_at,
            expires_at
        );
    }

    #[test]
    fn it_rejects_an_expiry_that_is_not_in_the_future() {
        let mut store = WorkRecordStore::new();
        let work_id = sample_work(&mut store);
        let now = Timestamp::from_unix_seconds(1_700_000_100);

        let past = store.register(work_id, creator(), false, Timestamp::from_unix_seconds(1), now);
        assert!(matches!(past, Err(RegisterError::InvalidExpiry { .. })));

        // Exactly "now" is not strictly in the future either.
        let boundary = store.register(work_id, creator(), false, now, now);
        assert!(matches!(boundary, Err(RegisterError::InvalidExpiry { .. })));
    }

    #[test]
    fn it_refuses_registration_by_a_stranger() {
        let mut store = WorkRecordStore::new();
        let work_id = sample_work(&mut store);
        let now = Timestamp::from_unix_seconds(1_700_000_100);
        let stranger = PartyId::from_public_key(b"somebody else");

        let result = store.register(work_id, stranger, false, now.plus_seconds(10), now);
        assert_eq!(result, Err(RegisterError::NotAuthorized(work_id)));

        // The same caller passes once the orchestrator vouches for them as
        // a delegate.
        store
            .register(work_id, stranger, true, now.plus_seconds(10), now)
            .unwrap();
    }

    #[test]
    fn it_counts_registrations_toward_reputation() {
        let mut store = WorkRecordStore::new();
        let work_id = sample_work(&mut store);
        let now = Timestamp::from_unix_seconds(1_700_000_100);

        assert_eq!(store.reputation(&creator()), 0);
        store
            .register(work_id, creator(), false, now.plus_seconds(10), now)
            .unwrap();
        assert_eq!(store.reputation(&creator()), 1);
    }

    #[test]
    fn it_keeps_dispute_and_verification_flags_append_only() {
        let mut store = WorkRecordStore::new();
        let work_id = sample_work(&mut store);

        store.mark_verified(work_id).unwrap();
        store.file_dispute(work_id).unwrap();
        store.file_dispute(work_id).unwrap();

        let record = store.work(work_id).unwrap();
        assert!(record.is_verified());
        assert!(record.is_disputed());
    }

    #[test]
    fn it_reports_unknown_works() {
        let mut store = WorkRecordStore::new();
        let missing = WorkId::from(404);

        assert_eq!(store.file_dispute(missing), Err(UnknownWorkError(missing)));
        assert_eq!(store.mark_verified(missing), Err(UnknownWorkError(missing)));
    }
}
