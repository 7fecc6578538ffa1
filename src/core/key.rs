//! Container identity.
//!
//! A `ContainerKey` names a gameplay zone: which kind of zone it is and
//! whose side it belongs to. Containers dispatch their per-zone behavior
//! by matching on the key, replacing a subclass hierarchy with a tagged
//! variant.

use serde::{Deserialize, Serialize};

/// The kind of gameplay zone a container represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// Face-down draw pile.
    Deck,
    /// A player's hand; subject to consolidation and weighted burns.
    Hand,
    /// Two-card merging zone.
    Merger,
    /// Cards placed on the table for the current move.
    Table,
}

/// Which side a container belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnerKind {
    Player,
    Enemy,
}

/// Identifies a concrete container: which zone, whose side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerKey {
    pub kind: ContainerKind,
    pub owner: OwnerKind,
}

impl ContainerKey {
    /// Create a container key.
    #[must_use]
    pub const fn new(kind: ContainerKind, owner: OwnerKind) -> Self {
        Self { kind, owner }
    }
}

impl std::fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let key = ContainerKey::new(ContainerKind::Hand, OwnerKind::Enemy);
        assert_eq!(format!("{}", key), "Hand(Enemy)");
    }

    #[test]
    fn test_serialization() {
        let key = ContainerKey::new(ContainerKind::Deck, OwnerKind::Player);
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: ContainerKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
