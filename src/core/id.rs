//! Card identity and id issuing.
//!
//! Every card instance carries a unique `CardId`. Ids are issued
//! monotonically and never reused — a burned card's id stays retired for
//! the life of the process.
//!
//! Issuing goes through an explicit `IdIssuer` service handed to whatever
//! spawns cards (deck seeding, tests) instead of a global counter, so
//! tests and multiple independent games can each own their own sequence.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
///
/// Identifies one physical card across its whole lifecycle: pool,
/// containers, the in-play stack, and finally elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic card id source.
///
/// Shared by reference wherever cards are created. The counter is atomic
/// so a shared issuer stays sound if the surrounding game ever threads;
/// the engine itself runs on a single logical update cycle.
#[derive(Debug, Default)]
pub struct IdIssuer {
    next: AtomicU32,
}

impl IdIssuer {
    /// Create an issuer starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next fresh id. Ids are never reissued.
    pub fn issue(&self) -> CardId {
        CardId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }
}
