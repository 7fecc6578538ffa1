//! Hand consolidation: duplicate grouping and canonical ordering.
//!
//! A hand shows one card per distinct token value. Grouping partitions
//! the hand by token in container insertion order; the first member of
//! each group is its representative and stays visible with a duplicate
//! badge, the rest are hidden. Groups are ordered by `(kind, token)`
//! ascending — the canonical layout order, and the walk order of the
//! weighted elimination draw.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::TokenKind;
use crate::containers::CardContainer;
use crate::core::CardId;
use crate::events::EventHub;

/// One token-value group within a hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGroup {
    /// The shared token value.
    pub token: i32,
    /// Kind of the first-encountered member.
    pub kind: TokenKind,
    /// First member in container order; the card that stays visible.
    pub representative: CardId,
    /// Every member, in container order. Never empty.
    pub members: SmallVec<[CardId; 4]>,
    /// Sum of every member's weight, not just the representative's.
    pub total_weight: u32,
}

impl TokenGroup {
    /// Number of cards collapsed into this group.
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Partition a hand by token value, in canonical `(kind, token)` order.
#[must_use]
pub fn group_by_token(hand: &CardContainer) -> Vec<TokenGroup> {
    let mut index: FxHashMap<i32, usize> = FxHashMap::default();
    let mut groups: Vec<TokenGroup> = Vec::new();

    for card in hand.cards() {
        match index.get(&card.token()) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.members.push(card.id());
                group.total_weight += card.weight();
            }
            None => {
                index.insert(card.token(), groups.len());
                groups.push(TokenGroup {
                    token: card.token(),
                    kind: card.kind(),
                    representative: card.id(),
                    members: SmallVec::from_slice(&[card.id()]),
                    total_weight: card.weight(),
                });
            }
        }
    }

    groups.sort_by_key(|group| (group.kind, group.token));
    groups
}

/// Collapse duplicate cards into single visible representatives.
///
/// Each group's representative stays active with `duplicates` set to the
/// group size; every other member is deactivated and its badge cleared.
pub fn consolidate(hand: &mut CardContainer, events: &mut EventHub) {
    let groups = group_by_token(hand);

    for group in &groups {
        for &id in &group.members {
            let is_representative = id == group.representative;
            if let Some(card) = hand.get_mut(id) {
                card.set_active(is_representative);
                let badge = if is_representative {
                    group.count() as u32
                } else {
                    0
                };
                card.set_duplicates(badge, events);
            }
        }
    }
}
