//! Card event hub.
//!
//! Components outside the engine (rendering, audio, AI knowledge) react
//! to card mutations through an explicit publish/subscribe hub instead of
//! scattered delegate fields. Two guarantees the delegate fan-out never
//! gave:
//!
//! - delivery order is subscription order, deterministically;
//! - subscription lifecycle is explicit — a subscriber exists exactly
//!   between `subscribe` and `unsubscribe`, never tied to object
//!   destruction order.

use serde::{Deserialize, Serialize};

use crate::cards::CardState;
use crate::core::CardId;

/// Handle for a registered subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Observable card mutations.
///
/// These are the side effects the display layer renders: state recolors,
/// the error face on a rejected token, the duplicate badge, and the
/// dissolve on a burned card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEvent {
    /// A card transitioned to a new visual state.
    StateChanged { card: CardId, state: CardState },
    /// A token assignment was rejected; the card keeps its prior token.
    TokenRejected { card: CardId, token: i32 },
    /// A consolidation updated a card's duplicate badge.
    DuplicatesChanged { card: CardId, duplicates: u32 },
    /// A card was permanently eliminated.
    CardBurned { card: CardId },
}

type Subscriber = Box<dyn FnMut(&CardEvent)>;

/// Publish/subscribe hub for card events.
#[derive(Default)]
pub struct EventHub {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u32,
}

impl EventHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Subscribers are invoked in subscription
    /// order on every publish until unsubscribed.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CardEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if the id is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver an event to every subscriber, in subscription order.
    pub fn publish(&mut self, event: &CardEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn burn_event(id: u32) -> CardEvent {
        CardEvent::CardBurned {
            card: CardId::new(id),
        }
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let mut hub = EventHub::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            hub.subscribe(move |_| log.borrow_mut().push(tag));
        }

        hub.publish(&burn_event(1));

        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut hub = EventHub::new();
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let id = hub.subscribe(move |_| *counter.borrow_mut() += 1);

        hub.publish(&burn_event(1));
        assert!(hub.unsubscribe(id));
        hub.publish(&burn_event(2));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut hub = EventHub::new();
        assert!(!hub.unsubscribe(SubscriptionId(99)));
    }

    #[test]
    fn test_subscribers_see_payload() {
        let mut hub = EventHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        hub.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let event = CardEvent::TokenRejected {
            card: CardId::new(3),
            token: 250,
        };
        hub.publish(&event);

        assert_eq!(*seen.borrow(), vec![event]);
    }

    #[test]
    fn test_event_serde() {
        let event = CardEvent::StateChanged {
            card: CardId::new(5),
            state: CardState::Highlighted,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: CardEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
