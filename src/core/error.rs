//! Fatal engine errors.
//!
//! Recoverable failures (a full container, an absent id, an unmatchable
//! allocation token) are ordinary `bool`/`Option` returns. `EngineError`
//! is reserved for internal-consistency violations that indicate a bug in
//! the engine itself and must not be silently swallowed.

use thiserror::Error;

/// Non-recoverable internal-consistency errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The weighted draw walked every group without selecting one despite
    /// a positive total weight. Indicates a total-weight computation bug.
    #[error("weighted draw selected no group (total weight {total_weight}, draw {draw})")]
    WeightedDrawMismatch { total_weight: u32, draw: u32 },

    /// A weighted burn was requested against a hand with no active cards.
    #[error("cannot burn a card from an empty hand")]
    EmptyHand,

    /// A merge was requested with the wrong number of cards in the merger.
    #[error("merge requires exactly two cards, found {count}")]
    MergeArity { count: usize },
}
