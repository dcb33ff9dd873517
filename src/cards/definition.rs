//! Card definitions - static card data.
//!
//! A `Card` is registered once and never changes. Decks, piles and mats hold
//! `CardId`s, so the same card can sit in many decks at once and two cards are
//! equal exactly when their ids are.
//!
//! ## Tags
//!
//! Cards carry a tag set rather than a single category. A card is usually an
//! Action, Treasure or Victory card, but the categories overlap and finer
//! distinctions (Attack, Reaction, Block) matter to the rules.

use serde::{Deserialize, Serialize};

use crate::effects::Action;
use crate::zones::Deck;

/// Identifier of a registered card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A capability or category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Playable in the action phase.
    Action,
    /// Played automatically in the buy phase for its treasure value.
    Treasure,
    Victory,
    Attack,
    /// Can be revealed from hand when another player attacks.
    Reaction,
    /// Revealing it makes its holder immune to the attack.
    Block,
    Curse,
    /// Has an effect on a later turn.
    Duration,
}

impl Tag {
    /// Every tag, in label order.
    pub const ALL: [Tag; 8] = [
        Tag::Action,
        Tag::Treasure,
        Tag::Victory,
        Tag::Attack,
        Tag::Reaction,
        Tag::Curse,
        Tag::Block,
        Tag::Duration,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Single-letter code used in card labels.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Tag::Action => 'A',
            Tag::Treasure => 'T',
            Tag::Victory => 'V',
            Tag::Attack => 'K',
            Tag::Reaction => 'R',
            Tag::Curse => 'C',
            Tag::Block => 'B',
            Tag::Duration => 'D',
        }
    }
}

/// Set of tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tags(u8);

impl Tags {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a list of tags.
    #[must_use]
    pub fn of(tags: &[Tag]) -> Self {
        tags.iter().fold(Self::empty(), |set, &t| set.with(t))
    }

    #[must_use]
    pub const fn with(self, tag: Tag) -> Self {
        Self(self.0 | tag.bit())
    }

    #[must_use]
    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |&t| self.contains(t))
    }
}

impl std::fmt::Display for Tags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.iter().try_for_each(|t| write!(f, "{}", t.letter()))
    }
}

/// How a card scores at the end of the game.
#[derive(Clone, Copy)]
pub enum VictoryPoints {
    Fixed(i32),
    /// Depends on the holder's deck and the number of cards they keep on mats.
    Computed(fn(&Deck, usize) -> i32),
}

impl VictoryPoints {
    /// Points this card is worth to a holder of `deck` with `on_mats` more
    /// cards set out on mats.
    #[must_use]
    pub fn evaluate(&self, deck: &Deck, on_mats: usize) -> i32 {
        match self {
            VictoryPoints::Fixed(vp) => *vp,
            VictoryPoints::Computed(f) => f(deck, on_mats),
        }
    }
}

impl std::fmt::Debug for VictoryPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VictoryPoints::Fixed(vp) => write!(f, "Fixed({vp})"),
            VictoryPoints::Computed(_) => write!(f, "Computed"),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use kingdom_engine::cards::{Card, Tag};
/// use kingdom_engine::effects::primitives;
///
/// let village = Card::new("Village", 3)
///     .with_tags(&[Tag::Action])
///     .with_action(primitives::add_cards(1).then(primitives::add_actions(2)));
///
/// assert!(village.is(Tag::Action));
/// assert_eq!(village.action.description(), "+1 Card; +2 Actions");
/// ```
#[derive(Clone, Debug)]
pub struct Card {
    /// Assigned by the registry.
    pub id: CardId,
    pub name: String,
    pub cost: u32,
    pub treasure: u32,
    pub victory: VictoryPoints,
    pub tags: Tags,

    /// Effect when played from hand. Only meaningful for Action cards.
    pub action: Action,

    /// Effect when revealed in response to an attack.
    pub reaction: Option<Action>,
}

impl Card {
    /// Create a card with no tags and no effect.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: CardId::new(u32::MAX),
            name: name.into(),
            cost,
            treasure: 0,
            victory: VictoryPoints::Fixed(0),
            tags: Tags::empty(),
            action: Action::noop(),
            reaction: None,
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.tags = Tags::of(tags);
        self
    }

    #[must_use]
    pub fn with_treasure(mut self, treasure: u32) -> Self {
        self.treasure = treasure;
        self
    }

    #[must_use]
    pub fn with_victory(mut self, vp: i32) -> Self {
        self.victory = VictoryPoints::Fixed(vp);
        self
    }

    #[must_use]
    pub fn with_computed_victory(mut self, f: fn(&Deck, usize) -> i32) -> Self {
        self.victory = VictoryPoints::Computed(f);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    #[must_use]
    pub fn with_reaction(mut self, reaction: Action) -> Self {
        self.reaction = Some(reaction);
        self
    }

    #[must_use]
    pub fn is(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Victory points of this card held in `deck`.
    #[must_use]
    pub fn victory_points(&self, deck: &Deck) -> i32 {
        self.victory.evaluate(deck, 0)
    }

    /// Victory points of this card for a holder of `deck` who also has
    /// `on_mats` cards on mats.
    #[must_use]
    pub fn victory_points_holding(&self, deck: &Deck, on_mats: usize) -> i32 {
        self.victory.evaluate(deck, on_mats)
    }

    /// One-line label: `Name TAGS C<cost>|T<treasure>|V<vp>`.
    ///
    /// Victory points are computed against `deck`.
    #[must_use]
    pub fn label(&self, deck: &Deck) -> String {
        format!(
            "{} {} C{}|T{}|V{}",
            self.name,
            self.tags,
            self.cost,
            self.treasure,
            self.victory_points(deck)
        )
    }

    /// Label followed by the card's effect text.
    #[must_use]
    pub fn details(&self, deck: &Deck) -> String {
        let mut text = self.label(deck);
        if !self.action.description().is_empty() {
            text.push(' ');
            text.push_str(self.action.description());
        }
        if let Some(reaction) = &self.reaction {
            text.push_str(" | Reaction: ");
            text.push_str(reaction.description());
        }
        text
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(&Deck::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_set_operations() {
        let tags = Tags::of(&[Tag::Action, Tag::Attack]);

        assert!(tags.contains(Tag::Action));
        assert!(tags.contains(Tag::Attack));
        assert!(!tags.contains(Tag::Treasure));
        assert_eq!(tags.iter().count(), 2);
    }

    #[test]
    fn test_tags_display_in_label_order() {
        let tags = Tags::of(&[Tag::Reaction, Tag::Action, Tag::Block]);
        assert_eq!(tags.to_string(), "ARB");
    }

    #[test]
    fn test_label_format() {
        let gold = Card::new("Gold", 6)
            .with_tags(&[Tag::Treasure])
            .with_treasure(3);

        assert_eq!(gold.label(&Deck::empty()), "Gold T C6|T3|V0");
        assert_eq!(gold.to_string(), "Gold T C6|T3|V0");
    }

    #[test]
    fn test_computed_victory() {
        let per_card = Card::new("Counter", 4)
            .with_tags(&[Tag::Victory])
            .with_computed_victory(|deck, on_mats| (deck.size() + on_mats) as i32);

        let mut deck = Deck::empty();
        deck.put_on_top(&[CardId::new(0), CardId::new(1)]);

        assert_eq!(per_card.victory_points(&deck), 2);
        assert_eq!(per_card.victory_points(&Deck::empty()), 0);
        assert_eq!(per_card.victory_points_holding(&deck, 3), 5);
    }

    #[test]
    fn test_equality_is_id_equality() {
        let mut a = Card::new("Copper", 0);
        let mut b = Card::new("Not Copper", 9);
        a.id = CardId::new(3);
        b.id = CardId::new(3);

        assert_eq!(a, b);
    }
}
