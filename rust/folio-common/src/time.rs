//! Cross-platform time utilities.
//!
//! The ledger core works in whole seconds since the Unix epoch. The
//! [`Timestamp`] newtype keeps comparisons explicit and lets tests pin
//! time without touching the system clock.

use serde::{Deserialize, Serialize};

/// A point in time, in whole seconds since the Unix epoch.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Constructs a timestamp from seconds since the Unix epoch.
    pub fn from_unix_seconds(seconds: u64) -> Self {
        Timestamp(seconds)
    }

    /// Seconds since the Unix epoch.
    pub fn unix_seconds(&self) -> u64 {
        self.0
    }

    /// This timestamp advanced by the given number of seconds.
    pub fn plus_seconds(&self, seconds: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(seconds))
    }
}

impl From<u64> for Timestamp {
    fn from(seconds: u64) -> Self {
        Timestamp(seconds)
    }
}

/// Returns the current system time as a [`Timestamp`].
///
/// Uses `std::time::SystemTime::now()` on native and `web_time` on WASM.
#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> Timestamp {
    let elapsed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    Timestamp(elapsed.as_secs())
}

/// Returns the current system time as a [`Timestamp`].
///
/// Uses `std::time::SystemTime::now()` on native and `web_time` on WASM.
#[cfg(target_arch = "wasm32")]
pub fn now() -> Timestamp {
    let elapsed = web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .unwrap_or_default();
    Timestamp(elapsed.as_secs())
}

/// An injectable time source.
///
/// The ledger core validates copyright expiry against "now"; injecting the
/// clock keeps that check deterministic in tests.
pub trait Clock: crate::ConditionalSync {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// The default [`Clock`], backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        now()
    }
}

/// A [`Clock`] pinned to a manually advanced instant.
#[cfg(any(test, feature = "helpers"))]
#[derive(Clone, Debug, Default)]
pub struct ManualClock(std::sync::Arc<crate::SharedCell<Timestamp>>);

#[cfg(any(test, feature = "helpers"))]
impl ManualClock {
    /// A clock reporting the given instant until told otherwise.
    pub fn at(now: Timestamp) -> Self {
        ManualClock(std::sync::Arc::new(crate::SharedCell::new(now)))
    }

    /// Moves the clock to the given instant.
    pub fn set(&self, now: Timestamp) {
        *self.0.write() = now;
    }

    /// Advances the clock by the given number of seconds.
    pub fn advance(&self, seconds: u64) {
        let mut now = self.0.write();
        *now = now.plus_seconds(seconds);
    }
}

#[cfg(any(test, feature = "helpers"))]
impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.0.read()
    }
}
