//! The card entity: identity, token-derived properties, and state.
//!
//! A `Card` binds one token to a reusable display object. Its semantic
//! properties (`kind`, `weight`) are derived from the token and never set
//! directly. Mutations the display layer must react to — state changes,
//! rejected tokens, duplicate badges — publish through the `EventHub`.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::{CardId, ContainerKey, IdIssuer};
use crate::events::{CardEvent, EventHub};

use super::token::{self, TokenKind};

/// Visual/interaction state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Pickable, default coloring.
    #[default]
    Normal,
    /// Under the selection cursor.
    Highlighted,
    /// Not selectable (face-down deck cards, mid-animation).
    NonPickable,
    /// Placed on the table for the current move.
    Placed,
    /// Held face-down in the enemy hand.
    EnemyHand,
}

/// Current owner of a card.
///
/// A card is owned by exactly one of these at any time; the pool and the
/// containers retag on every transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    /// In flight: claimed from the pool but not yet placed anywhere.
    #[default]
    None,
    /// In the shared free pool.
    Pool,
    /// Held by the named container.
    Container(ContainerKey),
}

/// A card instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    token: i32,
    kind: TokenKind,
    weight: u32,
    state: CardState,
    duplicates: u32,
    token_visible: bool,
    active: bool,
    merged: bool,
    owner: Owner,
}

impl Card {
    /// Create a card with a fresh id from the issuer.
    ///
    /// An illegal initial token leaves the card in the errored-but-
    /// consistent default (token 0 face showing "Error", weight 1) and
    /// publishes the rejection, exactly as a later `set_token` would.
    pub fn new(
        issuer: &IdIssuer,
        token: i32,
        token_visible: bool,
        state: CardState,
        duplicates: u32,
        events: &mut EventHub,
    ) -> Self {
        let mut card = Self {
            id: issuer.issue(),
            token: 0,
            kind: TokenKind::IllegalToken,
            weight: 1,
            state: CardState::Normal,
            duplicates: 0,
            token_visible,
            active: true,
            merged: false,
            owner: Owner::None,
        };
        card.set_token(token, events);
        card.set_state(state, events);
        card.set_duplicates(duplicates, events);
        card
    }

    /// Assign a new token, re-deriving kind and weight.
    ///
    /// All-or-nothing: a value that is neither an operator code nor a
    /// numeral in `[-99, 99]` flips the kind to `IllegalToken` but leaves
    /// the prior token and weight untouched, publishes a non-fatal
    /// `TokenRejected`, and returns false.
    pub fn set_token(&mut self, token: i32, events: &mut EventHub) -> bool {
        let derived = token::classify(token);
        if derived == TokenKind::IllegalToken {
            self.kind = TokenKind::IllegalToken;
            error!(card = %self.id, token, "invalid token value");
            events.publish(&CardEvent::TokenRejected {
                card: self.id,
                token,
            });
            return false;
        }

        // A multi-digit merge product reports ManyDigits, not DoubleDigit.
        self.kind = if self.merged && derived == TokenKind::DoubleDigit {
            TokenKind::ManyDigits
        } else {
            derived
        };
        self.weight = token::weight(token);
        self.token = token;
        true
    }

    /// Transition to a new visual state and notify subscribers.
    pub fn set_state(&mut self, state: CardState, events: &mut EventHub) {
        self.state = state;
        events.publish(&CardEvent::StateChanged {
            card: self.id,
            state,
        });
    }

    /// Update the duplicate-count badge and notify subscribers.
    pub fn set_duplicates(&mut self, duplicates: u32, events: &mut EventHub) {
        self.duplicates = duplicates;
        events.publish(&CardEvent::DuplicatesChanged {
            card: self.id,
            duplicates,
        });
    }

    /// Tag this card as a merge product.
    ///
    /// Merge products with multi-digit values report `ManyDigits` and are
    /// swept by the forced merged-card burn; single-digit results keep
    /// their ordinary classification.
    pub fn mark_merged(&mut self) {
        self.merged = true;
        if self.kind == TokenKind::DoubleDigit {
            self.kind = TokenKind::ManyDigits;
        }
    }

    /// Unique id. Never reused, even after the card is burned.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Current token value.
    #[must_use]
    pub fn token(&self) -> i32 {
        self.token
    }

    /// Derived token classification.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Derived sampling weight. Always positive for a legal token.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Current visual state.
    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Duplicate count; meaningful only on a consolidation representative.
    #[must_use]
    pub fn duplicates(&self) -> u32 {
        self.duplicates
    }

    /// Is the token face visible?
    #[must_use]
    pub fn is_token_visible(&self) -> bool {
        self.token_visible
    }

    /// Show or hide the token face.
    pub fn set_token_visible(&mut self, visible: bool) {
        self.token_visible = visible;
    }

    /// Is this card shown? Consolidation hides duplicate group members.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Was this card produced by a merge?
    #[must_use]
    pub fn is_merge_product(&self) -> bool {
        self.merged
    }

    /// Current owner tag.
    #[must_use]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Owner) {
        self.owner = owner;
    }

    /// Face text: the token glyph, or "Error" after a rejected token.
    #[must_use]
    pub fn face_text(&self) -> String {
        if self.kind == TokenKind::IllegalToken {
            "Error".to_string()
        } else {
            token::display(self.token)
        }
    }

    /// Roman-numeral badge shown when the card represents duplicates.
    #[must_use]
    pub fn duplicates_badge(&self) -> Option<&'static str> {
        if self.duplicates > 1 {
            token::roman_badge(self.duplicates)
        } else {
            None
        }
    }
}
