//! The in-play card stack.
//!
//! Allocation produces a LIFO stack of owned cards. The binder pushes in
//! reversed request order, so popping replays the request left-to-right —
//! the placement layer consumes moves one pop at a time.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::CardId;

/// LIFO stack of cards bound to the current move.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Pop the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Peek at the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Ids of the stacked cards, bottom to top.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// Number of stacked cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the stack empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
