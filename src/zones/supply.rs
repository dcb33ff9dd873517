//! Supply piles.
//!
//! Piles are keyed by `CardId` and iterate in id order, which is the order the
//! cards were registered in. A pile that runs out stays in the supply with a
//! count of zero.

use std::collections::BTreeMap;

use crate::cards::{CardId, CardRegistry};

/// Remaining cards per pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Supply {
    piles: BTreeMap<CardId, u32>,
}

impl Supply {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pile, or add `count` cards to an existing one.
    pub fn add_pile(&mut self, card: CardId, count: u32) {
        *self.piles.entry(card).or_insert(0) += count;
    }

    /// Cards left in `card`'s pile; `None` if there is no such pile.
    #[must_use]
    pub fn remaining(&self, card: CardId) -> Option<u32> {
        self.piles.get(&card).copied()
    }

    /// Does the supply contain a non-empty pile of `card`?
    #[must_use]
    pub fn has(&self, card: CardId) -> bool {
        self.remaining(card).is_some_and(|n| n > 0)
    }

    /// Take one card off `card`'s pile.
    ///
    /// Panics if there is no such pile or it is empty.
    pub fn take(&mut self, card: CardId) {
        match self.piles.get_mut(&card) {
            Some(n) if *n > 0 => *n -= 1,
            Some(_) => panic!("{card} pile is empty"),
            None => panic!("{card} is not in the supply"),
        }
    }

    /// Every pile in supply order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.piles.iter().map(|(&c, &n)| (c, n))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Non-empty piles costing at most `coins`, in supply order.
    #[must_use]
    pub fn affordable(&self, coins: u32, registry: &CardRegistry) -> Vec<CardId> {
        self.iter()
            .filter(|&(card, n)| n > 0 && registry[card].cost <= coins)
            .map(|(card, _)| card)
            .collect()
    }

    /// Non-empty piles matching `criteria`, in supply order.
    pub fn matching<F>(&self, criteria: F) -> Vec<CardId>
    where
        F: Fn(CardId) -> bool,
    {
        self.iter()
            .filter(|&(card, n)| n > 0 && criteria(card))
            .map(|(card, _)| card)
            .collect()
    }

    /// `Piles: 30 Gold ..., 40 Silver ...`.
    #[must_use]
    pub fn describe(&self, registry: &CardRegistry) -> String {
        if self.piles.is_empty() {
            return "No piles".to_string();
        }
        let piles: Vec<String> = self
            .iter()
            .map(|(card, n)| format!("{} {}", n, registry[card]))
            .collect();
        format!("Piles: {}", piles.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn setup() -> (CardRegistry, Supply, CardId, CardId) {
        let mut registry = CardRegistry::new();
        let cheap = registry.register(Card::new("Cheap", 2));
        let dear = registry.register(Card::new("Dear", 6));
        let mut supply = Supply::new();
        supply.add_pile(dear, 1);
        supply.add_pile(cheap, 3);
        (registry, supply, cheap, dear)
    }

    #[test]
    fn test_affordable_in_supply_order() {
        let (registry, supply, cheap, dear) = setup();

        assert_eq!(supply.affordable(1, &registry), vec![]);
        assert_eq!(supply.affordable(2, &registry), vec![cheap]);
        assert_eq!(supply.affordable(6, &registry), vec![cheap, dear]);
    }

    #[test]
    fn test_empty_piles_are_kept_but_not_affordable() {
        let (registry, mut supply, cheap, dear) = setup();

        supply.take(dear);

        assert_eq!(supply.remaining(dear), Some(0));
        assert!(!supply.has(dear));
        assert_eq!(supply.len(), 2);
        assert_eq!(supply.affordable(6, &registry), vec![cheap]);
    }

    #[test]
    fn test_matching() {
        let (registry, supply, _, dear) = setup();

        assert_eq!(supply.matching(|c| registry[c].cost > 4), vec![dear]);
    }

    #[test]
    #[should_panic(expected = "pile is empty")]
    fn test_take_from_empty_pile_panics() {
        let (_, mut supply, _, dear) = setup();
        supply.take(dear);
        supply.take(dear);
    }

    #[test]
    #[should_panic(expected = "is not in the supply")]
    fn test_take_missing_pile_panics() {
        let (_, mut supply, _, _) = setup();
        supply.take(CardId::new(9));
    }
}
