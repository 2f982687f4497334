use serde::{Deserialize, Serialize};

/// An authorization tag held by a party.
///
/// Capabilities are opaque to the core - it only ever asks whether a party
/// holds one. The well-known tags used by the registration workflow are
/// exposed as constructors; deployments are free to mint their own tags for
/// external concerns.
#[derive(Serialize, Deserialize, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Capability(String);

impl Capability {
    /// Required to attest content for registration.
    pub fn verified_artist() -> Self {
        Capability("verified-artist".into())
    }

    /// May complete copyright registration on behalf of a work's creator.
    pub fn registration_delegate() -> Self {
        Capability("registration-delegate".into())
    }

    /// May mark a work as verified in the trusted-verification step.
    pub fn work_verifier() -> Self {
        Capability("work-verifier".into())
    }

    /// The capability's tag.
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Capability {
    fn from(tag: &str) -> Self {
        Capability(tag.into())
    }
}

impl From<String> for Capability {
    fn from(tag: String) -> Self {
        Capability(tag)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
