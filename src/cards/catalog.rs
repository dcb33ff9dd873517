//! The standard card set.
//!
//! ## Catalog
//!
//! A `Catalog` is a registry plus the list of cards that may be dealt as
//! kingdom piles. Base cards (treasures, victory cards, Curse) are always
//! registered first, so kingdom effects can refer to them by id.
//!
//! Extra cards can be added before a game is built, which is how tests bring
//! in cards with instrumented effects.

use super::definition::{Card, CardId, Tag};
use super::kingdom;
use super::registry::CardRegistry;
use crate::effects::Action;
use crate::zones::Deck;

/// Ids of the cards every game has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseCards {
    pub copper: CardId,
    pub silver: CardId,
    pub gold: CardId,
    pub estate: CardId,
    pub duchy: CardId,
    pub province: CardId,
    pub curse: CardId,
}

/// Cards available to a game.
#[derive(Clone, Debug)]
pub struct Catalog {
    registry: CardRegistry,
    base: BaseCards,
    kingdom: Vec<CardId>,
}

/// 1 VP per 10 cards owned, mats included.
fn gardens_vp(deck: &Deck, on_mats: usize) -> i32 {
    ((deck.size() + on_mats) / 10) as i32
}

fn register_base(registry: &mut CardRegistry) -> BaseCards {
    let treasure = |name: &str, cost, value| {
        Card::new(name, cost)
            .with_tags(&[Tag::Treasure])
            .with_treasure(value)
    };
    let victory = |name: &str, cost, vp| Card::new(name, cost).with_tags(&[Tag::Victory]).with_victory(vp);

    BaseCards {
        copper: registry.register(treasure("Copper", 0, 1)),
        gold: registry.register(treasure("Gold", 6, 3)),
        silver: registry.register(treasure("Silver", 3, 2)),
        duchy: registry.register(victory("Duchy", 5, 3)),
        estate: registry.register(victory("Estate", 2, 1)),
        province: registry.register(victory("Province", 8, 6)),
        curse: registry.register(Card::new("Curse", 0).with_tags(&[Tag::Curse]).with_victory(-1)),
    }
}

fn kingdom_cards(base: &BaseCards) -> Vec<Card> {
    use Tag::{Action as A, Attack, Block, Duration, Reaction};

    let card = |name: &str, cost: u32, tags: &[Tag], action: Action| {
        Card::new(name, cost).with_tags(tags).with_action(action)
    };

    vec![
        card("Artisan", 6, &[A], kingdom::artisan()),
        card("Bandit", 5, &[A, Attack], kingdom::bandit(base.gold, base.copper)),
        card("Bureaucrat", 4, &[A, Attack], kingdom::bureaucrat(base.silver)),
        card("Cellar", 2, &[A], kingdom::cellar()),
        card("Chapel", 2, &[A], kingdom::chapel()),
        card("Council Room", 5, &[A], kingdom::council_room()),
        card("Enchantress", 3, &[A, Attack, Duration], kingdom::enchantress()),
        card("Festival", 5, &[A], kingdom::festival()),
        Card::new("Gardens", 4)
            .with_tags(&[Tag::Victory])
            .with_computed_victory(gardens_vp)
            .with_action(Action::descriptive("Worth 1 VP per 10 cards you have (round down)")),
        card("Harbinger", 3, &[A], kingdom::harbinger()),
        card("Horse Traders", 4, &[A, Reaction], kingdom::horse_traders())
            .with_reaction(kingdom::horse_traders_reaction()),
        card("Laboratory", 5, &[A], kingdom::laboratory()),
        card("Library", 5, &[A], kingdom::library()),
        card("Market", 5, &[A], kingdom::market()),
        card("Merchant", 3, &[A], kingdom::merchant(base.silver)),
        card("Militia", 4, &[A, Attack], kingdom::militia()),
        card("Mine", 5, &[A], kingdom::mine()),
        card("Moat", 2, &[A, Reaction, Block], kingdom::moat()).with_reaction(kingdom::moat_reaction()),
        card("Moneylender", 4, &[A], kingdom::moneylender(base.copper)),
        card("Native Village", 2, &[A], kingdom::native_village()),
        card("Pirate Ship", 4, &[A, Attack], kingdom::pirate_ship()),
        card("Poacher", 4, &[A], kingdom::poacher()),
        card("Remodel", 4, &[A], kingdom::remodel()),
        card("Sentry", 5, &[A], kingdom::sentry()),
        card("Smithy", 4, &[A], kingdom::smithy()),
        card("Throne Room", 4, &[A], kingdom::throne_room()),
        card("Vassal", 3, &[A], kingdom::vassal()),
        card("Village", 3, &[A], kingdom::village()),
        card("Witch", 5, &[A, Attack], kingdom::witch(base.curse)),
        card("Workshop", 3, &[A], kingdom::workshop()),
    ]
}

impl Catalog {
    /// Base cards only; no kingdom.
    #[must_use]
    pub fn base() -> Self {
        let mut registry = CardRegistry::new();
        let base = register_base(&mut registry);
        Self {
            registry,
            base,
            kingdom: Vec::new(),
        }
    }

    /// Base cards and every kingdom card.
    ///
    /// ```
    /// use kingdom_engine::cards::{Catalog, Tag};
    ///
    /// let catalog = Catalog::standard();
    /// let witch = catalog.registry().by_name("Witch").unwrap();
    ///
    /// assert!(catalog.kingdom().contains(&witch));
    /// assert!(catalog.registry()[witch].is(Tag::Attack));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::base();
        for card in kingdom_cards(&catalog.base) {
            catalog.add_kingdom(card);
        }
        catalog
    }

    /// Register a card that can be dealt as a kingdom pile.
    pub fn add_kingdom(&mut self, card: Card) -> CardId {
        let id = self.registry.register(card);
        self.kingdom.push(id);
        id
    }

    /// Register a card that is never dealt, only named in configuration.
    pub fn add(&mut self, card: Card) -> CardId {
        self.registry.register(card)
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn base_cards(&self) -> BaseCards {
        self.base
    }

    #[must_use]
    pub fn kingdom(&self) -> &[CardId] {
        &self.kingdom
    }

    #[must_use]
    pub fn is_kingdom(&self, card: CardId) -> bool {
        self.kingdom.contains(&card)
    }

    #[must_use]
    pub fn into_registry(self) -> CardRegistry {
        self.registry
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
