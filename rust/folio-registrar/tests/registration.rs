//! End-to-end registration workflow tests.

use folio_capability::{AttestationVerifier, Capability, MemoryCapabilityStore};
use folio_common::{
    ContentFingerprint, PartyId, Timestamp,
    time::{Clock, ManualClock},
};
use folio_credentials::AttestationSigner;
use folio_ledger::CollaboratorShare;
use folio_registrar::{
    LedgerEvent, MemoryEventSink, MintError, Registrar, VerifyError,
};
use folio_registry::{RegisterError, WorkRecordStore};
use testresult::TestResult;

type TestRegistrar =
    Registrar<AttestationVerifier<MemoryCapabilityStore>, MemoryCapabilityStore, MemoryEventSink>;

struct Harness {
    registrar: TestRegistrar,
    capabilities: MemoryCapabilityStore,
    events: MemoryEventSink,
    clock: ManualClock,
}

fn harness() -> Harness {
    let capabilities = MemoryCapabilityStore::new();
    let events = MemoryEventSink::new();
    let clock = ManualClock::at(Timestamp::from_unix_seconds(1_700_000_000));
    let registrar = Registrar::with_parts(
        AttestationVerifier::new(capabilities.clone()),
        capabilities.clone(),
        events.clone(),
        WorkRecordStore::new(),
        Box::new(clock.clone()),
    );
    Harness {
        registrar,
        capabilities,
        events,
        clock,
    }
}

fn verified_artist(capabilities: &MemoryCapabilityStore) -> AttestationSigner {
    let artist = AttestationSigner::generate(&mut rand::rngs::OsRng);
    capabilities.grant(artist.party_id(), Capability::verified_artist());
    artist
}

fn sole_share(party: PartyId) -> Vec<CollaboratorShare> {
    vec![CollaboratorShare::new(party, 10_000)]
}

#[test]
fn it_mints_a_work_and_records_its_provenance() -> TestResult {
    let mut h = harness();
    let artist = verified_artist(&h.capabilities);
    let fingerprint = ContentFingerprint::of(b"an etching, first state");

    let work_id = h.registrar.mint(
        "First State",
        "bafy...etching",
        fingerprint.clone(),
        sole_share(artist.party_id()),
        &artist.attest(&fingerprint)?,
    )?;

    let record = h.registrar.work(work_id).expect("record exists");
    assert_eq!(record.title(), "First State");
    assert_eq!(record.creator(), artist.party_id());
    assert_eq!(record.fingerprint(), &fingerprint);
    assert_eq!(record.created_at(), Timestamp::from_unix_seconds(1_700_000_000));
    assert!(record.registration().is_none());
    assert!(h.registrar.is_claimed(&fingerprint));

    assert_eq!(
        h.events.events(),
        vec![LedgerEvent::Minted {
            creator: artist.party_id(),
            work_id,
            fingerprint,
        }]
    );
    Ok(())
}

#[test]
fn it_refuses_to_mint_the_same_content_twice_even_for_another_party() -> TestResult {
    let mut h = harness();
    let first = verified_artist(&h.capabilities);
    let second = verified_artist(&h.capabilities);
    let fingerprint = ContentFingerprint::of(b"the contested recording");

    h.registrar.mint(
        "Original",
        "bafy...one",
        fingerprint.clone(),
        sole_share(first.party_id()),
        &first.attest(&fingerprint)?,
    )?;

    // A second mint of the same fingerprint fails regardless of title,
    // shares or who signs it - including a fully authorized other party.
    let result = h.registrar.mint(
        "Copycat",
        "bafy...two",
        fingerprint.clone(),
        sole_share(second.party_id()),
        &second.attest(&fingerprint)?,
    );
    assert_eq!(result, Err(MintError::DuplicateContent(fingerprint.clone())));

    // And the original registrant is refused just the same.
    let result = h.registrar.mint(
        "Reissue",
        "bafy...three",
        fingerprint.clone(),
        sole_share(first.party_id()),
        &first.attest(&fingerprint)?,
    );
    assert_eq!(result, Err(MintError::DuplicateContent(fingerprint)));
    Ok(())
}

#[test]
fn it_refuses_unattested_or_uncapable_submissions() -> TestResult {
    let mut h = harness();
    let unverified = AttestationSigner::generate(&mut rand::rngs::OsRng);
    let fingerprint = ContentFingerprint::of(b"an unverified upload");

    let result = h.registrar.mint(
        "No Capability",
        "bafy...nope",
        fingerprint.clone(),
        sole_share(unverified.party_id()),
        &unverified.attest(&fingerprint)?,
    );

    assert_eq!(result, Err(MintError::UnauthorizedContent(fingerprint.clone())));
    // A failed mint leaves no side effects: the fingerprint stays
    // claimable.
    assert!(!h.registrar.is_claimed(&fingerprint));
    Ok(())
}

#[test]
fn it_validates_shares_before_touching_any_state() -> TestResult {
    let mut h = harness();
    let artist = verified_artist(&h.capabilities);
    let fingerprint = ContentFingerprint::of(b"badly split work");

    let result = h.registrar.mint(
        "Bad Split",
        "bafy...split",
        fingerprint.clone(),
        vec![CollaboratorShare::new(artist.party_id(), 9_999)],
        &artist.attest(&fingerprint)?,
    );

    assert!(matches!(result, Err(MintError::InvalidShareSet(_))));
    assert!(!h.registrar.is_claimed(&fingerprint));
    assert!(h.events.events().is_empty());
    Ok(())
}

#[test]
fn it_registers_once_with_a_future_expiry() -> TestResult {
    let mut h = harness();
    let artist = verified_artist(&h.capabilities);
    let fingerprint = ContentFingerprint::of(b"registered work");
    let work_id = h.registrar.mint(
        "Registered",
        "bafy...reg",
        fingerprint.clone(),
        sole_share(artist.party_id()),
        &artist.attest(&fingerprint)?,
    )?;

    let now = h.clock.now();

    // A past expiry is rejected.
    let result = h
        .registrar
        .register(work_id, artist.party_id(), Timestamp::from_unix_seconds(1));
    assert!(matches!(result, Err(RegisterError::InvalidExpiry { .. })));

    // A future expiry succeeds and sets both registration fields at once.
    let expires_at = now.plus_seconds(70 * 365 * 24 * 60 * 60);
    h.registrar.register(work_id, artist.party_id(), expires_at)?;
    let registration = h
        .registrar
        .work(work_id)
        .and_then(|record| record.registration().copied())
        .expect("registration set");
    assert_eq!(registration.registered_at, now);
    assert_eq!(registration.expires_at, expires_at);
    assert_eq!(h.registrar.reputation(&artist.party_id()), 1);

    // A repeat call fails and leaves the original expiry unchanged.
    let result = h
        .registrar
        .register(work_id, artist.party_id(), now.plus_seconds(10));
    assert_eq!(result, Err(RegisterError::AlreadyRegistered(work_id)));
    assert_eq!(
        h.registrar
            .work(work_id)
            .and_then(|record| record.registration().copied())
            .expect("registration kept")
            .expires_at,
        expires_at
    );
    Ok(())
}

#[test]
fn it_lets_a_delegate_register_on_the_creators_behalf() -> TestResult {
    let mut h = harness();
    let artist = verified_artist(&h.capabilities);
    let agent = AttestationSigner::generate(&mut rand::rngs::OsRng);
    let fingerprint = ContentFingerprint::of(b"delegated work");
    let work_id = h.registrar.mint(
        "Delegated",
        "bafy...del",
        fingerprint.clone(),
        sole_share(artist.party_id()),
        &artist.attest(&fingerprint)?,
    )?;
    let expires_at = h.clock.now().plus_seconds(1000);

    // A stranger is refused...
    let result = h.registrar.register(work_id, agent.party_id(), expires_at);
    assert_eq!(result, Err(RegisterError::NotAuthorized(work_id)));

    // ...until granted the delegate capability.
    h.capabilities
        .grant(agent.party_id(), Capability::registration_delegate());
    h.registrar.register(work_id, agent.party_id(), expires_at)?;
    Ok(())
}

#[test]
fn it_gates_the_trusted_verification_step_on_a_capability() -> TestResult {
    let mut h = harness();
    let artist = verified_artist(&h.capabilities);
    let fingerprint = ContentFingerprint::of(b"to be verified");
    let work_id = h.registrar.mint(
        "Verified Later",
        "bafy...ver",
        fingerprint.clone(),
        sole_share(artist.party_id()),
        &artist.attest(&fingerprint)?,
    )?;

    // The creator cannot verify their own work without the capability.
    let result = h.registrar.mark_verified(work_id, artist.party_id());
    assert_eq!(result, Err(VerifyError::NotAuthorized(artist.party_id())));

    let inspector = PartyId::from_public_key(b"trusted inspector");
    h.capabilities.grant(inspector, Capability::work_verifier());
    h.registrar.mark_verified(work_id, inspector)?;

    assert!(h.registrar.work(work_id).expect("record").is_verified());
    Ok(())
}

#[test]
fn it_advances_work_ids_monotonically_across_mixed_outcomes() -> TestResult {
    let mut h = harness();
    let artist = verified_artist(&h.capabilities);

    let first_print = ContentFingerprint::of(b"print one");
    let first = h.registrar.mint(
        "Print One",
        "bafy...p1",
        first_print.clone(),
        sole_share(artist.party_id()),
        &artist.attest(&first_print)?,
    )?;

    // A failed duplicate mint consumes no identifier.
    let _ = h.registrar.mint(
        "Print One Again",
        "bafy...p1b",
        first_print.clone(),
        sole_share(artist.party_id()),
        &artist.attest(&first_print)?,
    );

    let second_print = ContentFingerprint::of(b"print two");
    let second = h.registrar.mint(
        "Print Two",
        "bafy...p2",
        second_print.clone(),
        sole_share(artist.party_id()),
        &artist.attest(&second_print)?,
    )?;

    assert_eq!(u64::from(second), u64::from(first) + 1);
    Ok(())
}
