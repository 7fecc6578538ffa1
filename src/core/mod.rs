//! Core engine types: card identity, container keys, RNG, errors.
//!
//! These are the building blocks the rest of the engine is written
//! against. Nothing here knows about tokens or game rules.

pub mod error;
pub mod id;
pub mod key;
pub mod rng;

pub use error::EngineError;
pub use id::{CardId, IdIssuer};
pub use key::{ContainerKey, ContainerKind, OwnerKind};
pub use rng::{GameRng, GameRngState};
