//! Hand rules: consolidation, weighted elimination, and merging.
//!
//! ## Key Operations
//!
//! - `group_by_token` / `consolidate`: collapse duplicate cards into
//!   single visible representatives in canonical `(kind, token)` order
//! - `weighted_burn`: eliminate one card with probability proportional
//!   to its group's total weight
//! - `burn_merged`: unconditionally eliminate merged multi-digit cards
//! - `merge` / `validate_placement`: the two-card merger zone rules

pub mod burn;
pub mod consolidate;
pub mod merge;

pub use burn::{burn_merged, weighted_burn};
pub use consolidate::{consolidate, group_by_token, TokenGroup};
pub use merge::{merge, validate_placement};
