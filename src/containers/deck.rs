//! Deck seeding.
//!
//! Fills a deck container with its starting cards: numerals cycling
//! through `0..9`, with a random operator interleaved every second
//! numeral. Everything is created face-down and non-pickable until drawn.

use tracing::debug;

use crate::cards::{token, Card, CardState};
use crate::core::{GameRng, IdIssuer};
use crate::events::EventHub;

use super::container::CardContainer;

/// Seed a deck with its starting spread of numeral and operator cards.
///
/// The numeral count is half the deck's capacity, rounded up; operators
/// are sampled uniformly over the four codes. Returns the number of
/// cards actually added.
pub fn seed_deck(
    deck: &mut CardContainer,
    issuer: &IdIssuer,
    rng: &mut GameRng,
    events: &mut EventHub,
) -> usize {
    let numerals = deck.capacity() - deck.capacity() / 2;
    let mut added = 0;

    for i in 0..numerals {
        let numeral = (i % 9) as i32;
        if spawn_into(deck, issuer, numeral, events) {
            added += 1;
        }

        if i % 2 == 0 {
            let operator = token::OP_ADD + rng.gen_below(4) as i32;
            if spawn_into(deck, issuer, operator, events) {
                added += 1;
            }
        }
    }

    debug!(deck = %deck.key(), added, "seeded deck");
    added
}

fn spawn_into(
    deck: &mut CardContainer,
    issuer: &IdIssuer,
    token: i32,
    events: &mut EventHub,
) -> bool {
    let card = Card::new(issuer, token, false, CardState::NonPickable, 0, events);
    deck.add(card, events).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TokenKind;
    use crate::core::{ContainerKey, ContainerKind, OwnerKind};

    fn deck(capacity: usize) -> CardContainer {
        CardContainer::new(
            ContainerKey::new(ContainerKind::Deck, OwnerKind::Player),
            capacity,
        )
    }

    #[test]
    fn test_seeded_cards_are_face_down() {
        let issuer = IdIssuer::new();
        let mut rng = GameRng::new(42);
        let mut events = EventHub::new();
        let mut deck = deck(50);

        let added = seed_deck(&mut deck, &issuer, &mut rng, &mut events);

        assert_eq!(added, deck.len());
        assert!(added > 0);
        for card in deck.cards() {
            assert_eq!(card.state(), CardState::NonPickable);
            assert!(!card.is_token_visible());
            assert_ne!(card.kind(), TokenKind::IllegalToken);
        }
    }

    #[test]
    fn test_seed_mix() {
        let issuer = IdIssuer::new();
        let mut rng = GameRng::new(42);
        let mut events = EventHub::new();
        let mut deck = deck(50);

        seed_deck(&mut deck, &issuer, &mut rng, &mut events);

        let numerals = deck
            .cards()
            .filter(|c| c.kind() != TokenKind::Symbol)
            .count();
        let operators = deck
            .cards()
            .filter(|c| c.kind() == TokenKind::Symbol)
            .count();

        // 25 numerals cycling 0..9, one operator per even index: 13.
        assert_eq!(numerals, 25);
        assert_eq!(operators, 13);

        for card in deck.cards() {
            if card.kind() == TokenKind::Symbol {
                assert!((token::OP_ADD..=token::OP_DIV).contains(&card.token()));
            } else {
                assert!((0..9).contains(&card.token()));
            }
        }
    }

    #[test]
    fn test_seed_respects_capacity() {
        let issuer = IdIssuer::new();
        let mut rng = GameRng::new(42);
        let mut events = EventHub::new();
        let mut deck = deck(4);

        let added = seed_deck(&mut deck, &issuer, &mut rng, &mut events);

        assert!(added <= 4);
        assert!(deck.len() <= deck.capacity());
    }

    #[test]
    fn test_seed_is_deterministic_per_seed() {
        let make = |seed| {
            let issuer = IdIssuer::new();
            let mut rng = GameRng::new(seed);
            let mut events = EventHub::new();
            let mut deck = deck(50);
            seed_deck(&mut deck, &issuer, &mut rng, &mut events);
            deck.cards().map(Card::token).collect::<Vec<_>>()
        };

        assert_eq!(make(7), make(7));
    }
}
