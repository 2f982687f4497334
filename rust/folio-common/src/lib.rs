#![warn(missing_docs)]

//! This crate constitutes a library of light weight primitives that are
//! shared across the other Folio crates: content fingerprints, party and
//! work identifiers, time helpers and cross-target synchronization bounds.

mod fingerprint;
pub use fingerprint::*;

mod party;
pub use party::*;

mod work;
pub use work::*;

mod sync;
pub use sync::*;

pub mod time;
pub use time::Timestamp;
