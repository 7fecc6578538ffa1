//! Binding token sequences to free cards.
//!
//! The expression generator emits an ordered token sequence; this binder
//! claims one concrete pool card per matchable token. Greedy, single
//! pass, no backtracking, bounded `O(pool × tokens)` work with no
//! suspension point — the `&mut CardPool` receiver serializes allocation
//! cycles against a pool at the language level.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Card;
use crate::containers::CardPool;
use crate::core::CardId;

use super::stack::CardStack;

/// Bind an ordered token sequence to concrete free cards.
///
/// Walks the request in reverse (the generator emits left-to-right and
/// the placement layer pops LIFO, so the returned stack replays the
/// original order). Each token claims the first pool card, in pool
/// insertion order, with a matching value that was not already claimed
/// within this call. An unmatchable token is skipped silently — a
/// partial or empty result is a valid, weaker move, not an error.
pub fn bind_tokens(tokens: &[i32], pool: &mut CardPool) -> CardStack {
    let mut claimed: SmallVec<[CardId; 8]> = SmallVec::new();
    let mut stack = CardStack::new();

    for &token in tokens.iter().rev() {
        let matched = pool
            .cards()
            .find(|card| card.token() == token && !claimed.contains(&card.id()))
            .map(Card::id);

        if let Some(card) = matched.and_then(|id| pool.claim(id)) {
            debug!(card = %card.id(), token, "bound token to pool card");
            claimed.push(card.id());
            stack.push(card);
        } else {
            debug!(token, "no free card matches token, skipping");
        }
    }

    stack
}
