//! Player mats: places outside the deck where cards and coin tokens wait.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry};
use crate::zones::Deck;

/// Which mat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatKind {
    NativeVillage,
    PirateShip,
}

impl std::fmt::Display for MatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatKind::NativeVillage => write!(f, "Native Village"),
            MatKind::PirateShip => write!(f, "Pirate Ship"),
        }
    }
}

/// A multiset of cards plus a coin token count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mat {
    pub cards: Vec<CardId>,
    pub coin_tokens: u32,
}

impl Mat {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.coin_tokens == 0
    }

    /// Remove and return every card on the mat.
    pub fn take_all(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }

    /// `2 Copper T C0|T1|V0; 3 coin tokens`, or `0 cards; ...` when bare.
    #[must_use]
    pub fn describe(&self, registry: &CardRegistry, deck: &Deck) -> String {
        let cards = if self.cards.is_empty() {
            "0 cards".to_string()
        } else {
            registry.describe(&self.cards, deck)
        };
        format!("{}; {} coin tokens", cards, self.coin_tokens)
    }
}
