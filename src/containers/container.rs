//! Capacity-bounded card containers.
//!
//! A `CardContainer` is a gameplay zone: a mapping from card id to card,
//! unique by id, never holding more than its fixed capacity. Alongside
//! the map it keeps an explicit insertion-order index — everywhere the
//! engine iterates a container (grouping, tie-breaking, draw) the order
//! is insertion order, documented rather than accidental.
//!
//! Zone-specific side effects (enemy hands conceal their cards, hand
//! removal reactivates a consolidated card) dispatch on the container's
//! `ContainerKey` instead of a subclass hierarchy.

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::cards::{Card, CardState, Owner};
use crate::core::{CardId, ContainerKey, ContainerKind, OwnerKind};
use crate::events::EventHub;

/// A capacity-bounded holder of cards.
#[derive(Clone, Debug)]
pub struct CardContainer {
    key: ContainerKey,
    capacity: usize,
    cards: FxHashMap<CardId, Card>,
    order: Vec<CardId>,
}

impl CardContainer {
    /// Create an empty container. Capacity is fixed for its lifetime.
    #[must_use]
    pub fn new(key: ContainerKey, capacity: usize) -> Self {
        Self {
            key,
            capacity,
            cards: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Add a card, taking ownership of it.
    ///
    /// Fails when the container is at capacity or the id is already
    /// present; the rejected card is handed back unchanged and the
    /// container is not mutated. On success the card is retagged as
    /// owned by this container; enemy hands also conceal it.
    pub fn add(&mut self, mut card: Card, events: &mut EventHub) -> Result<(), Card> {
        if self.cards.len() >= self.capacity {
            warn!(
                container = %self.key,
                capacity = self.capacity,
                "cannot add card: container at capacity"
            );
            return Err(card);
        }
        if self.cards.contains_key(&card.id()) {
            warn!(container = %self.key, card = %card.id(), "card already in container");
            return Err(card);
        }

        card.set_owner(Owner::Container(self.key));
        if self.key.kind == ContainerKind::Hand && self.key.owner == OwnerKind::Enemy {
            card.set_state(CardState::EnemyHand, events);
        }

        self.order.push(card.id());
        self.cards.insert(card.id(), card);
        Ok(())
    }

    /// Remove a card by id, handing it back to the caller.
    ///
    /// Returns `None` (and no mutation) when the id is absent. Hand
    /// removal reactivates the card and clears its duplicate badge;
    /// leaving an enemy hand also reveals it as placed.
    pub fn remove(&mut self, id: CardId, events: &mut EventHub) -> Option<Card> {
        let Some(mut card) = self.cards.remove(&id) else {
            warn!(container = %self.key, card = %id, "card not in container");
            return None;
        };
        self.order.retain(|&other| other != id);

        card.set_owner(Owner::None);
        if self.key.kind == ContainerKind::Hand {
            card.set_active(true);
            card.set_duplicates(0, events);
            if self.key.owner == OwnerKind::Enemy {
                card.set_state(CardState::Placed, events);
            }
        }
        Some(card)
    }

    /// Draw the most recently inserted card, revealed and pickable.
    pub fn draw(&mut self, events: &mut EventHub) -> Option<Card> {
        let Some(&id) = self.order.last() else {
            warn!(container = %self.key, "no cards left to draw");
            return None;
        };
        let mut card = self.remove(id, events)?;
        card.set_token_visible(true);
        card.set_state(CardState::Normal, events);
        Some(card)
    }

    /// Value-semantics copy of the held cards, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.order
            .iter()
            .filter_map(|id| self.cards.get(id))
            .cloned()
            .collect()
    }

    /// Transition every held card to the given state.
    pub fn set_all_states(&mut self, state: CardState, events: &mut EventHub) {
        for id in &self.order {
            if let Some(card) = self.cards.get_mut(id) {
                card.set_state(state, events);
            }
        }
    }

    /// Iterate the held cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Held card ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    /// Look up a held card.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Mutable access to a held card.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Check whether a card id is held here.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the container empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The fixed capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// This container's zone identity.
    #[must_use]
    pub fn key(&self) -> ContainerKey {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdIssuer;

    fn hand(owner: OwnerKind, capacity: usize) -> CardContainer {
        CardContainer::new(ContainerKey::new(ContainerKind::Hand, owner), capacity)
    }

    fn spawn(issuer: &IdIssuer, token: i32, events: &mut EventHub) -> Card {
        Card::new(issuer, token, true, CardState::Normal, 0, events)
    }

    #[test]
    fn test_add_and_remove() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 10);

        let card = spawn(&issuer, 5, &mut events);
        let id = card.id();

        assert!(container.add(card, &mut events).is_ok());
        assert_eq!(container.len(), 1);
        assert!(container.contains(id));
        assert_eq!(
            container.get(id).map(Card::owner),
            Some(Owner::Container(container.key()))
        );

        let removed = container.remove(id, &mut events);
        assert_eq!(removed.map(|c| c.id()), Some(id));
        assert!(container.is_empty());
    }

    #[test]
    fn test_capacity_rejection_returns_card() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 2);

        for token in [1, 2] {
            assert!(container.add(spawn(&issuer, token, &mut events), &mut events).is_ok());
        }

        let overflow = spawn(&issuer, 3, &mut events);
        let overflow_id = overflow.id();
        let rejected = container.add(overflow, &mut events);

        assert_eq!(rejected.map_err(|c| c.id()), Err(overflow_id));
        assert_eq!(container.len(), 2);
        assert!(!container.contains(overflow_id));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 10);

        let card = spawn(&issuer, 5, &mut events);
        let duplicate = card.clone();

        assert!(container.add(card, &mut events).is_ok());
        assert!(container.add(duplicate, &mut events).is_err());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_remove_absent_id() {
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 10);

        assert!(container.remove(CardId::new(99), &mut events).is_none());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 10);

        let card = spawn(&issuer, 5, &mut events);
        let id = card.id();
        container.add(card, &mut events).ok();

        let mut snapshot = container.snapshot();
        snapshot[0].set_state(CardState::Highlighted, &mut events);
        snapshot.clear();

        assert_eq!(container.get(id).map(Card::state), Some(CardState::Normal));
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_insertion_order_iteration() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 10);

        let tokens = [7, 3, 9, 1];
        for token in tokens {
            container.add(spawn(&issuer, token, &mut events), &mut events).ok();
        }

        let seen: Vec<i32> = container.cards().map(Card::token).collect();
        assert_eq!(seen, tokens);
    }

    #[test]
    fn test_draw_takes_most_recent() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut deck = CardContainer::new(
            ContainerKey::new(ContainerKind::Deck, OwnerKind::Player),
            10,
        );

        for token in [1, 2, 3] {
            let mut card = spawn(&issuer, token, &mut events);
            card.set_token_visible(false);
            card.set_state(CardState::NonPickable, &mut events);
            deck.add(card, &mut events).ok();
        }

        let drawn = deck.draw(&mut events).unwrap();
        assert_eq!(drawn.token(), 3);
        assert!(drawn.is_token_visible());
        assert_eq!(drawn.state(), CardState::Normal);
        assert_eq!(deck.len(), 2);

        deck.draw(&mut events);
        deck.draw(&mut events);
        assert!(deck.draw(&mut events).is_none());
    }

    #[test]
    fn test_enemy_hand_conceals_and_reveals() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Enemy, 10);

        let card = spawn(&issuer, 5, &mut events);
        let id = card.id();

        container.add(card, &mut events).ok();
        assert_eq!(
            container.get(id).map(Card::state),
            Some(CardState::EnemyHand)
        );

        let removed = container.remove(id, &mut events).unwrap();
        assert_eq!(removed.state(), CardState::Placed);
    }

    #[test]
    fn test_hand_removal_resets_consolidation() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 10);

        let card = spawn(&issuer, 5, &mut events);
        let id = card.id();
        container.add(card, &mut events).ok();

        {
            let held = container.get_mut(id).unwrap();
            held.set_active(false);
            held.set_duplicates(3, &mut events);
        }

        let removed = container.remove(id, &mut events).unwrap();
        assert!(removed.is_active());
        assert_eq!(removed.duplicates(), 0);
    }

    #[test]
    fn test_set_all_states() {
        let issuer = IdIssuer::new();
        let mut events = EventHub::new();
        let mut container = hand(OwnerKind::Player, 10);

        for token in [1, 2, 3] {
            container.add(spawn(&issuer, token, &mut events), &mut events).ok();
        }

        container.set_all_states(CardState::NonPickable, &mut events);

        assert!(container
            .cards()
            .all(|card| card.state() == CardState::NonPickable));
    }
}
