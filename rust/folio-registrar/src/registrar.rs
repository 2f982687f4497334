use crate::{EventSink, LedgerEvent, MintError, VerifyError};
use folio_capability::{Capability, CapabilityStore, ContentVerifier};
use folio_common::{
    ContentFingerprint, PartyId, Timestamp, WorkId,
    time::{Clock, SystemClock},
};
use folio_credentials::ContentAttestation;
use folio_ledger::{CollaboratorShare, LedgerError, Payout, RoyaltyLedger, ShareSet};
use folio_registry::{
    FingerprintRegistry, MonotonicSequence, RegisterError, UnknownWorkError, WorkIdSequence,
    WorkRecord, WorkRecordStore,
};

/// The registration orchestrator.
///
/// Composes the attestation verifier, fingerprint registry, work record
/// store and royalty ledger into the public workflow. Every mutating
/// operation takes `&mut self`, so execution is serial by construction:
/// one full operation completes before the next begins. A deployment that
/// serves many independent callers wraps the registrar in a
/// [`folio_common::SharedCell`] and write-locks per call; there is no
/// finer-grained locking to get wrong.
pub struct Registrar<V, C, E, Seq = MonotonicSequence>
where
    V: ContentVerifier,
    C: CapabilityStore,
    E: EventSink,
    Seq: WorkIdSequence,
{
    verifier: V,
    capabilities: C,
    events: E,
    clock: Box<dyn Clock>,
    fingerprints: FingerprintRegistry,
    works: WorkRecordStore<Seq>,
    ledger: RoyaltyLedger,
}

impl<V, C, E> Registrar<V, C, E>
where
    V: ContentVerifier,
    C: CapabilityStore,
    E: EventSink,
{
    /// Creates a registrar with the system clock and the default work id
    /// sequence.
    pub fn new(verifier: V, capabilities: C, events: E) -> Self {
        Self::with_parts(
            verifier,
            capabilities,
            events,
            WorkRecordStore::new(),
            Box::new(SystemClock),
        )
    }
}

impl<V, C, E, Seq> Registrar<V, C, E, Seq>
where
    V: ContentVerifier,
    C: CapabilityStore,
    E: EventSink,
    Seq: WorkIdSequence,
{
    /// Creates a registrar from explicitly injected parts.
    pub fn with_parts(
        verifier: V,
        capabilities: C,
        events: E,
        works: WorkRecordStore<Seq>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Registrar {
            verifier,
            capabilities,
            events,
            clock,
            fingerprints: FingerprintRegistry::new(),
            works,
            ledger: RoyaltyLedger::new(),
        }
    }

    /// Mints a new work.
    ///
    /// The steps run in a fixed order so that any failure leaves no side
    /// effects: share validation and attestation verification are pure
    /// reads, and the fingerprint claim is the last fallible step - once
    /// it succeeds, record creation and ledger initialization cannot fail
    /// (the share set is already proven valid), so a claimed fingerprint
    /// always commits together with its work record and ledger entry.
    pub fn mint(
        &mut self,
        title: impl Into<String>,
        storage_locator: impl Into<String>,
        fingerprint: ContentFingerprint,
        shares: Vec<CollaboratorShare>,
        attestation: &ContentAttestation,
    ) -> Result<WorkId, MintError> {
        let shares = ShareSet::new(shares)?;

        let creator = self
            .verifier
            .attested_party(&fingerprint, attestation, &Capability::verified_artist())
            .ok_or_else(|| MintError::UnauthorizedContent(fingerprint.clone()))?;

        self.fingerprints
            .claim(&fingerprint)
            .map_err(|_| MintError::DuplicateContent(fingerprint.clone()))?;

        let work_id = self.works.create(
            title.into(),
            creator,
            storage_locator.into(),
            fingerprint.clone(),
            shares.parties().collect(),
            self.clock.now(),
        );
        self.ledger.initialize(work_id, shares);

        self.events.emit(&LedgerEvent::Minted {
            creator,
            work_id,
            fingerprint,
        });
        Ok(work_id)
    }

    /// Completes copyright registration of a work.
    ///
    /// `caller` must be the work's creator or hold the
    /// registration-delegate capability, and `expires_at` must be strictly
    /// in the future.
    pub fn register(
        &mut self,
        work_id: WorkId,
        caller: PartyId,
        expires_at: Timestamp,
    ) -> Result<(), RegisterError> {
        let delegated = self
            .capabilities
            .has_capability(&caller, &Capability::registration_delegate());
        let now = self.clock.now();
        self.works
            .register(work_id, caller, delegated, expires_at, now)?;

        self.events.emit(&LedgerEvent::Registered {
            work_id,
            expires_at,
        });
        Ok(())
    }

    /// Adds a payment to a work's accumulated royalty balance.
    pub fn deposit(&mut self, work_id: WorkId, amount: u128) -> Result<(), LedgerError> {
        self.ledger.deposit(work_id, amount)
    }

    /// Distributes a work's entire accumulated balance among its
    /// collaborators and returns the payouts.
    pub fn distribute(&mut self, work_id: WorkId) -> Result<Vec<Payout>, LedgerError> {
        let payouts = self.ledger.distribute(work_id)?;
        let total = payouts.iter().map(|(_, amount)| amount).sum();

        self.events.emit(&LedgerEvent::Distributed {
            work_id,
            total,
            payouts: payouts.clone(),
        });
        Ok(payouts)
    }

    /// Records a dispute against a work.
    ///
    /// Log-only and non-blocking: the dispute is recorded and published,
    /// and no subsequent deposit or distribution is affected.
    pub fn file_dispute(
        &mut self,
        work_id: WorkId,
        complainant: PartyId,
        reason: impl Into<String>,
    ) -> Result<(), UnknownWorkError> {
        self.works.file_dispute(work_id)?;
        self.events.emit(&LedgerEvent::Disputed {
            work_id,
            complainant,
            reason: reason.into(),
        });
        Ok(())
    }

    /// Marks a work as verified.
    ///
    /// This is the trusted-verification step: `caller` must hold the
    /// work-verifier capability. Creators cannot verify their own works by
    /// construction unless they also hold that capability.
    pub fn mark_verified(
        &mut self,
        work_id: WorkId,
        caller: PartyId,
    ) -> Result<(), VerifyError> {
        if !self
            .capabilities
            .has_capability(&caller, &Capability::work_verifier())
        {
            return Err(VerifyError::NotAuthorized(caller));
        }
        self.works.mark_verified(work_id)?;
        self.events.emit(&LedgerEvent::Verified { work_id });
        Ok(())
    }

    /// Debits a beneficiary's pending balance on behalf of the external
    /// payout system.
    pub fn debit_pending(
        &mut self,
        work_id: WorkId,
        party: &PartyId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.ledger.debit(work_id, party, amount)
    }

    /// Looks up a work record.
    pub fn work(&self, work_id: WorkId) -> Option<&WorkRecord> {
        self.works.work(work_id)
    }

    /// Whether a fingerprint has ever been claimed.
    pub fn is_claimed(&self, fingerprint: &ContentFingerprint) -> bool {
        self.fingerprints.is_claimed(fingerprint)
    }

    /// A work's accumulated, not yet distributed balance.
    pub fn accrued(&self, work_id: WorkId) -> Result<u128, LedgerError> {
        self.ledger.accrued(work_id)
    }

    /// A beneficiary's withdrawable balance for a work.
    pub fn pending(&self, work_id: WorkId, party: &PartyId) -> u128 {
        self.ledger.pending(work_id, party)
    }

    /// A creator's informational reputation counter.
    pub fn reputation(&self, creator: &PartyId) -> u64 {
        self.works.reputation(creator)
    }
}
