//! # arith-cards
//!
//! Card pool allocation and hand consolidation engine for an arithmetic
//! card-matching game. An external generator produces ordered token
//! sequences (numerals and operator codes); this crate binds them to
//! concrete card instances drawn from a shared free pool, enforces
//! exclusive capacity-bounded ownership across gameplay zones, and runs
//! the hand rules: duplicate consolidation, weighted elimination, and
//! two-card merging.
//!
//! ## Design Principles
//!
//! 1. **Explicit ordering**: every observable iteration order (pool
//!    tie-breaks, group layout, draw) is a documented insertion or
//!    `(kind, token)` order, never incidental map order.
//!
//! 2. **Injected services**: id issuing and randomness are passed in
//!    (`IdIssuer`, `GameRng`), not ambient — tests seed and replay.
//!
//! 3. **Ownership by construction**: cards move between the pool,
//!    containers, and the in-play stack by value; the exclusive-owner
//!    invariant and the one-allocation-at-a-time rule fall out of
//!    `&mut` receivers rather than runtime checks.
//!
//! ## Modules
//!
//! - `core`: card ids, container keys, RNG, fatal errors
//! - `cards`: the token domain and the card entity
//! - `containers`: bounded zones, the shared pool, deck seeding
//! - `alloc`: binding token sequences to free cards
//! - `hand`: consolidation, weighted burn, merging
//! - `events`: publish/subscribe hub for observable card mutations

pub mod alloc;
pub mod cards;
pub mod containers;
pub mod core;
pub mod events;
pub mod hand;

// Re-export commonly used types
pub use crate::core::{
    CardId, ContainerKey, ContainerKind, EngineError, GameRng, GameRngState, IdIssuer, OwnerKind,
};

pub use crate::cards::{
    Card, CardState, Owner, TokenKind, NUMERAL_MAX, NUMERAL_MIN, OP_ADD, OP_DIV, OP_MUL, OP_SUB,
};

pub use crate::containers::{seed_deck, CardContainer, CardPool};

pub use crate::alloc::{bind_tokens, CardStack};

pub use crate::hand::{
    burn_merged, consolidate, group_by_token, merge, validate_placement, weighted_burn, TokenGroup,
};

pub use crate::events::{CardEvent, EventHub, SubscriptionId};
