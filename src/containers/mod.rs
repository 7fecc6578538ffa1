//! Containers: bounded gameplay zones and the shared free pool.
//!
//! ## Key Types
//!
//! - `CardContainer`: capacity-bounded, unique-membership card holder
//!   with documented insertion-order iteration
//! - `CardPool`: the unbounded set of free cards, disjoint from every
//!   container
//! - `seed_deck`: fills a deck with its starting cards

pub mod container;
pub mod deck;
pub mod pool;

pub use container::CardContainer;
pub use deck::seed_deck;
pub use pool::CardPool;
