use folio_common::{ContentFingerprint, PartyId, Timestamp, WorkId};
use serde::{Deserialize, Serialize};

/// Completed-registration state of a [`WorkRecord`].
///
/// Existence of this value is the registration flag; the expiry timestamp
/// is only meaningful once registration has happened, so the two are one
/// field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    /// When registration was completed.
    pub registered_at: Timestamp,
    /// When copyright protection lapses.
    pub expires_at: Timestamp,
}

/// The provenance record of one creative work.
///
/// All fields except the lifecycle flags are immutable after creation. The
/// record is never deleted; a disputed work keeps its full history and
/// gains an append-only flag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WorkRecord {
    work_id: WorkId,
    title: String,
    creator: PartyId,
    created_at: Timestamp,
    storage_locator: String,
    fingerprint: ContentFingerprint,
    collaborators: Vec<PartyId>,
    registration: Option<Registration>,
    verified: bool,
    disputed: bool,
}

impl WorkRecord {
    pub(crate) fn new(
        work_id: WorkId,
        title: String,
        creator: PartyId,
        created_at: Timestamp,
        storage_locator: String,
        fingerprint: ContentFingerprint,
        collaborators: Vec<PartyId>,
    ) -> Self {
        WorkRecord {
            work_id,
            title,
            creator,
            created_at,
            storage_locator,
            fingerprint,
            collaborators,
            registration: None,
            verified: false,
            disputed: false,
        }
    }

    /// The work's identifier.
    pub fn work_id(&self) -> WorkId {
        self.work_id
    }

    /// The work's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The party that created (minted) the work.
    pub fn creator(&self) -> PartyId {
        self.creator
    }

    /// When the record was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Opaque locator into the external content-addressed storage layer.
    ///
    /// The core never validates or fetches this; identity comes from the
    /// fingerprint, not from where the content happens to live.
    pub fn storage_locator(&self) -> &str {
        &self.storage_locator
    }

    /// The fingerprint of the work's underlying content.
    pub fn fingerprint(&self) -> &ContentFingerprint {
        &self.fingerprint
    }

    /// The collaborating parties, including the creator where applicable.
    pub fn collaborators(&self) -> &[PartyId] {
        &self.collaborators
    }

    /// Completed registration, if any.
    pub fn registration(&self) -> Option<&Registration> {
        self.registration.as_ref()
    }

    /// Whether the trusted-verification step has confirmed this work.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Whether a dispute has been filed against this work.
    pub fn is_disputed(&self) -> bool {
        self.disputed
    }

    pub(crate) fn complete_registration(&mut self, registration: Registration) {
        self.registration = Some(registration);
    }

    pub(crate) fn set_verified(&mut self) {
        self.verified = true;
    }

    pub(crate) fn set_disputed(&mut self) {
        self.disputed = true;
    }
}
