//! The shared free pool.
//!
//! Cards not currently held by any container sit in the `CardPool`,
//! waiting to be claimed by the next allocation. The pool is unbounded
//! and disjoint from every container: cards move in and out by value and
//! are retagged on each transfer, so pool ∩ container = ∅ holds by
//! construction.
//!
//! Like the containers, the pool keeps an insertion-order index. The
//! allocator's tie-break among equal-valued cards is this order — an
//! explicit, stable contract rather than incidental map iteration.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::alloc::CardStack;
use crate::cards::{Card, Owner};
use crate::core::CardId;

/// The set of currently free (unassigned) cards.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: FxHashMap<CardId, Card>,
    order: Vec<CardId>,
}

impl CardPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a card to the pool, retagging it as pool-owned.
    pub fn put(&mut self, mut card: Card) {
        debug_assert!(
            !self.cards.contains_key(&card.id()),
            "card {} already pooled",
            card.id()
        );
        card.set_owner(Owner::Pool);
        self.order.push(card.id());
        self.cards.insert(card.id(), card);
    }

    /// Claim a card out of the pool. The card leaves pool ownership.
    pub fn claim(&mut self, id: CardId) -> Option<Card> {
        let mut card = self.cards.remove(&id)?;
        self.order.retain(|&other| other != id);
        card.set_owner(Owner::None);
        Some(card)
    }

    /// Bulk-return an in-play stack to the pool and clear it.
    ///
    /// Runs before each allocation cycle. An already-empty stack is a
    /// no-op, so a cycle that never placed its cards cannot be
    /// double-counted.
    pub fn reclaim(&mut self, stack: &mut CardStack) {
        if stack.is_empty() {
            return;
        }

        let count = stack.len();
        while let Some(card) = stack.pop() {
            self.put(card);
        }
        debug!(count, pool_size = self.len(), "returned in-play cards to pool");
    }

    /// Iterate the pooled cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Pooled card ids in insertion order.
    #[must_use]
    pub fn ordered_ids(&self) -> &[CardId] {
        &self.order
    }

    /// Look up a pooled card.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check whether a card id is pooled.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of free cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pool empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
