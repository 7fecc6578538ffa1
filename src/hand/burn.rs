//! Card elimination: the weighted burn and the forced merged-card burn.
//!
//! The weighted burn removes one card per invocation, chosen among the
//! hand's token groups with probability proportional to each group's
//! total weight. The draw source is injected so tests can validate the
//! distribution and replay exact scenarios.

use tracing::{debug, error};

use crate::cards::TokenKind;
use crate::containers::CardContainer;
use crate::core::{CardId, EngineError, GameRng};
use crate::events::{CardEvent, EventHub};

use super::consolidate::group_by_token;

/// Eliminate one card from the hand by weighted draw.
///
/// Groups the hand, walks the groups in canonical `(kind, token)` order,
/// and draws one uniform integer in `[0, total)` where `total` sums the
/// qualifying groups' weights. The first group whose cumulative weight
/// strictly exceeds the draw loses its visible representative —
/// permanently; the id is never reissued.
///
/// A group qualifies if it still has an active member. An empty hand is
/// `EngineError::EmptyHand`; walking every group without a selection is
/// `EngineError::WeightedDrawMismatch`, an internal-consistency failure
/// that callers must surface, not swallow.
pub fn weighted_burn(
    hand: &mut CardContainer,
    rng: &mut GameRng,
    events: &mut EventHub,
) -> Result<CardId, EngineError> {
    let groups = group_by_token(hand);

    // (visible member, group total weight), in canonical order.
    let candidates: Vec<(CardId, u32)> = groups
        .iter()
        .filter_map(|group| {
            group
                .members
                .iter()
                .copied()
                .find(|&id| hand.get(id).map_or(false, |card| card.is_active()))
                .map(|id| (id, group.total_weight))
        })
        .collect();

    if candidates.is_empty() {
        return Err(EngineError::EmptyHand);
    }

    let total_weight: u32 = candidates.iter().map(|(_, weight)| weight).sum();
    let draw = rng.gen_below(total_weight);

    let mut cumulative = 0u32;
    for (id, group_weight) in candidates {
        cumulative += group_weight;
        if draw < cumulative {
            hand.remove(id, events);
            events.publish(&CardEvent::CardBurned { card: id });
            debug!(card = %id, draw, total_weight, "weighted burn");
            return Ok(id);
        }
    }

    error!(total_weight, draw, "weighted draw selected no group");
    Err(EngineError::WeightedDrawMismatch { total_weight, draw })
}

/// Eliminate every merged multi-digit card, bypassing the weighted draw.
///
/// Returns the burned ids in container order.
pub fn burn_merged(hand: &mut CardContainer, events: &mut EventHub) -> Vec<CardId> {
    let merged: Vec<CardId> = hand
        .cards()
        .filter(|card| card.kind() == TokenKind::ManyDigits)
        .map(|card| card.id())
        .collect();

    for &id in &merged {
        hand.remove(id, events);
        events.publish(&CardEvent::CardBurned { card: id });
        debug!(card = %id, "burned merged card");
    }
    merged
}
