//! Card system: the token domain and the card entity.
//!
//! ## Key Types
//!
//! - `TokenKind`: semantic classification of a token value
//! - `Card`: a card instance with identity, derived weight, and state
//! - `CardState`: visual/interaction state
//! - `Owner`: exclusive ownership tag (pool, container, or in flight)

pub mod card;
pub mod token;

pub use card::{Card, CardState, Owner};
pub use token::{TokenKind, NUMERAL_MAX, NUMERAL_MIN, OP_ADD, OP_DIV, OP_MUL, OP_SUB};
