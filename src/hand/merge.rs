//! The merger zone: combining two cards into one.
//!
//! Two single-digit cards placed in the merger combine into one card
//! whose token is their sum. The surviving card is tagged as a merge
//! product — multi-digit results report `ManyDigits` and are swept by
//! the forced burn on the next consolidation trigger.

use tracing::debug;

use crate::cards::{Card, CardState, TokenKind};
use crate::containers::CardContainer;
use crate::core::{CardId, EngineError};
use crate::events::{CardEvent, EventHub};

/// Merge the two cards in the merger.
///
/// The first-placed card absorbs the second: its token becomes the sum
/// (all-or-nothing — an out-of-range sum leaves it errored but
/// consistent), its state returns to Normal, and it is tagged a merge
/// product. The second card is burned. The survivor is removed from the
/// merger and handed back for placement in a hand.
pub fn merge(merger: &mut CardContainer, events: &mut EventHub) -> Result<Card, EngineError> {
    let count = merger.len();
    if count != 2 {
        return Err(EngineError::MergeArity { count });
    }

    let first_id = merger.ids()[0];
    let second_id = merger.ids()[1];

    // Both ids were just listed; removal cannot fail.
    let second = merger
        .remove(second_id, events)
        .expect("merger holds the listed card");
    events.publish(&CardEvent::CardBurned { card: second_id });

    let mut first = merger
        .remove(first_id, events)
        .expect("merger holds the listed card");

    first.set_state(CardState::Normal, events);
    first.set_token(first.token() + second.token(), events);
    first.mark_merged();

    debug!(
        survivor = %first.id(),
        burned = %second_id,
        token = first.token(),
        "merged cards"
    );
    Ok(first)
}

/// Enforce the merger's placement rule.
///
/// Only single-digit numerals may sit in the merger; a most recently
/// placed card of any other kind is burned. Returns the burned id, if
/// any.
pub fn validate_placement(merger: &mut CardContainer, events: &mut EventHub) -> Option<CardId> {
    let &last = merger.ids().last()?;
    let kind = merger.get(last)?.kind();

    if kind == TokenKind::SingleDigit {
        return None;
    }

    debug!(card = %last, ?kind, "burning invalid merger placement");
    merger.remove(last, events);
    events.publish(&CardEvent::CardBurned { card: last });
    Some(last)
}
