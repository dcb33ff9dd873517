//! Card registry for definition lookup.
//!
//! The `CardRegistry` owns every card of a game. Ids are assigned in
//! registration order, so a registry doubles as the supply order.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, Tag};
use crate::zones::Deck;

/// Arena of card definitions addressed by `CardId`.
///
/// ## Example
///
/// ```
/// use kingdom_engine::cards::{Card, CardRegistry, Tag};
///
/// let mut registry = CardRegistry::new();
/// let copper = registry.register(Card::new("Copper", 0).with_tags(&[Tag::Treasure]).with_treasure(1));
///
/// assert_eq!(registry[copper].name, "Copper");
/// assert_eq!(registry.by_name("Copper"), Some(copper));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    names: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card and return its assigned id.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, mut card: Card) -> CardId {
        if self.names.contains_key(&card.name) {
            panic!("Card named {:?} already registered", card.name);
        }
        let id = CardId::new(self.cards.len() as u32);
        card.id = id;
        self.names.insert(card.name.clone(), id);
        self.cards.push(card);
        id
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.raw() as usize)
    }

    /// Look a card up by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<CardId> {
        self.names.get(name).copied()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        (id.raw() as usize) < self.cards.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards carrying `tag`, in registration order.
    pub fn with_tag(&self, tag: Tag) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.is(tag))
    }

    /// Does card `id` carry `tag`?
    #[must_use]
    pub fn is(&self, id: CardId, tag: Tag) -> bool {
        self[id].is(tag)
    }

    /// Ids in `cards` that carry `tag`, keeping order and duplicates.
    #[must_use]
    pub fn filter_tag(&self, cards: &[CardId], tag: Tag) -> Vec<CardId> {
        cards.iter().copied().filter(|&c| self.is(c, tag)).collect()
    }

    /// Grouped listing like `2 Copper T C0|T1|V0, 1 Estate V C2|T0|V1`.
    ///
    /// Groups appear in order of first occurrence.
    #[must_use]
    pub fn describe(&self, cards: &[CardId], deck: &Deck) -> String {
        let mut groups: Vec<(CardId, usize)> = Vec::new();
        for &card in cards {
            match groups.iter_mut().find(|(c, _)| *c == card) {
                Some((_, n)) => *n += 1,
                None => groups.push((card, 1)),
            }
        }
        groups
            .iter()
            .map(|&(card, n)| format!("{} {}", n, self[card].label(deck)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::ops::Index<CardId> for CardRegistry {
    type Output = Card;

    fn index(&self, id: CardId) -> &Card {
        match self.get(id) {
            Some(card) => card,
            None => panic!("{id} not found in registry"),
        }
    }
}
