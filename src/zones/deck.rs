//! A player's cards and the mechanics that move them.
//!
//! ## Partitions
//!
//! Every card a player owns is in exactly one of five partitions:
//!
//! - `hand`
//! - `draw_pile`: a stack, the last element is the top card
//! - `discard_pile`
//! - `in_play`: cards played this turn
//! - `aside`: cards set aside by an effect until a later turn
//!
//! Moving cards between partitions never changes `size()`; only trashing
//! does.
//!
//! ## Reshuffling
//!
//! When a draw needs a card and the draw pile is empty, the discard pile is
//! shuffled into a new draw pile. The reshuffle is lazy: it happens only when
//! a card is actually needed.

use smallvec::SmallVec;

use crate::cards::{CardId, CardRegistry};
use crate::core::GameRng;

/// Cards in a hand after cleanup.
pub const HAND_SIZE: usize = 5;

/// Top cards of a draw pile, top first.
pub type Reveal = SmallVec<[CardId; 4]>;

/// One player's cards.
///
/// ```
/// use kingdom_engine::cards::CardId;
/// use kingdom_engine::core::GameRng;
/// use kingdom_engine::zones::Deck;
///
/// let (a, b, c) = (CardId::new(0), CardId::new(1), CardId::new(2));
/// let mut deck = Deck::new(GameRng::new(1));
/// deck.draw_pile = vec![a, b, c];
///
/// deck.draw(2);
/// assert_eq!(deck.hand, vec![c, b]);
/// assert_eq!(deck.draw_pile, vec![a]);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    pub hand: Vec<CardId>,
    pub draw_pile: Vec<CardId>,
    pub discard_pile: Vec<CardId>,
    pub in_play: Vec<CardId>,
    pub aside: Vec<CardId>,
    rng: GameRng,
}

fn remove_one(from: &mut Vec<CardId>, card: CardId, partition: &str) {
    match from.iter().position(|&c| c == card) {
        Some(i) => {
            from.remove(i);
        }
        None => panic!("{card} is not in the {partition}"),
    }
}

/// Remove the copy of `card` nearest the top of a draw pile.
fn remove_from_top(draw_pile: &mut Vec<CardId>, card: CardId) {
    match draw_pile.iter().rposition(|&c| c == card) {
        Some(i) => {
            draw_pile.remove(i);
        }
        None => panic!("{card} is not in the draw pile"),
    }
}

impl Deck {
    /// Create an empty deck that shuffles with `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            hand: Vec::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            in_play: Vec::new(),
            aside: Vec::new(),
            rng,
        }
    }

    /// An empty deck, for evaluating cards outside any game.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(GameRng::new(0))
    }

    fn reshuffle(&mut self) {
        log::trace!("reshuffling {} discarded cards", self.discard_pile.len());
        self.draw_pile.append(&mut self.discard_pile);
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Draw up to `n` cards into the hand.
    ///
    /// Stops early, without error, when both draw and discard piles run out.
    pub fn draw(&mut self, n: usize) {
        for _ in 0..n {
            match self.next() {
                Some(card) => self.hand.push(card),
                None => break,
            }
        }
    }

    /// Remove and return the top card, reshuffling if the draw pile is empty.
    pub fn next(&mut self) -> Option<CardId> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return None;
            }
            self.reshuffle();
        }
        self.draw_pile.pop()
    }

    /// Up to `n` top cards of the draw pile, top first. Never reshuffles.
    #[must_use]
    pub fn peek(&self, n: usize) -> Reveal {
        self.draw_pile.iter().rev().take(n).copied().collect()
    }

    /// Move `card` from hand to play.
    pub fn play(&mut self, card: CardId) {
        remove_one(&mut self.hand, card, "hand");
        self.in_play.push(card);
    }

    /// Move cards from hand to the discard pile.
    pub fn discard(&mut self, cards: &[CardId]) {
        for &card in cards {
            remove_one(&mut self.hand, card, "hand");
            self.discard_pile.push(card);
        }
    }

    /// Remove cards from hand permanently.
    pub fn trash(&mut self, cards: &[CardId]) {
        for &card in cards {
            remove_one(&mut self.hand, card, "hand");
        }
    }

    /// Discard revealed cards. Each removes the topmost copy.
    pub fn discard_from_draw_pile(&mut self, cards: &[CardId]) {
        for &card in cards {
            remove_from_top(&mut self.draw_pile, card);
            self.discard_pile.push(card);
        }
    }

    pub fn trash_from_draw_pile(&mut self, cards: &[CardId]) {
        for &card in cards {
            remove_from_top(&mut self.draw_pile, card);
        }
    }

    /// Take `card` out of the hand without discarding or trashing it.
    ///
    /// The caller is responsible for putting it somewhere.
    pub fn take_from_hand(&mut self, card: CardId) -> CardId {
        remove_one(&mut self.hand, card, "hand");
        card
    }

    pub fn remove_from_discard_pile(&mut self, card: CardId) -> CardId {
        remove_one(&mut self.discard_pile, card, "discard pile");
        card
    }

    pub fn take_from_aside(&mut self, card: CardId) -> CardId {
        remove_one(&mut self.aside, card, "aside");
        card
    }

    /// Push cards onto the draw pile; the last one ends up on top.
    pub fn put_on_top(&mut self, cards: &[CardId]) {
        self.draw_pile.extend_from_slice(cards);
    }

    /// Cleanup: shuffle everything but `aside` into a fresh draw pile and
    /// draw a new hand.
    pub fn end_turn(&mut self) {
        let mut pile = std::mem::take(&mut self.draw_pile);
        pile.append(&mut self.discard_pile);
        pile.append(&mut self.hand);
        pile.append(&mut self.in_play);
        self.rng.shuffle(&mut pile);
        self.draw_pile = pile;
        self.draw(HAND_SIZE);
    }

    /// Total number of cards in all partitions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.aside.len()
            + self.draw_pile.len()
            + self.discard_pile.len()
            + self.hand.len()
            + self.in_play.len()
    }

    /// Every card, in partition order: aside, draw, discard, hand, in play.
    #[must_use]
    pub fn whole(&self) -> Vec<CardId> {
        let mut all = Vec::with_capacity(self.size());
        all.extend_from_slice(&self.aside);
        all.extend_from_slice(&self.draw_pile);
        all.extend_from_slice(&self.discard_pile);
        all.extend_from_slice(&self.hand);
        all.extend_from_slice(&self.in_play);
        all
    }

    /// Sum of every card's victory points in this deck, plus `set_out` cards
    /// the owner keeps outside it. Computed values see both.
    #[must_use]
    pub fn victory_points(&self, registry: &CardRegistry, set_out: &[CardId]) -> i32 {
        self.whole()
            .iter()
            .chain(set_out)
            .map(|&c| registry[c].victory_points_holding(self, set_out.len()))
            .sum()
    }

    /// How many copies of `card` this deck holds.
    #[must_use]
    pub fn count(&self, card: CardId) -> usize {
        self.whole().iter().filter(|&&c| c == card).count()
    }

    /// Human-readable contents, partition by partition.
    #[must_use]
    pub fn describe(&self, registry: &CardRegistry) -> String {
        format!(
            "Hand: {}; Aside: {}; In Play: {}; Draw: {}; Discard: {}",
            registry.describe(&self.hand, self),
            registry.describe(&self.aside, self),
            registry.describe(&self.in_play, self),
            registry.describe(&self.draw_pile, self),
            registry.describe(&self.discard_pile, self),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<CardId> {
        raw.iter().copied().map(CardId::new).collect()
    }

    fn deck() -> Deck {
        Deck::new(GameRng::new(7))
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = deck();
        deck.draw_pile = ids(&[0, 1, 2]);

        deck.draw(2);

        assert_eq!(deck.hand, ids(&[2, 1]));
        assert_eq!(deck.draw_pile, ids(&[0]));
    }

    #[test]
    fn test_draw_reshuffles_discards_when_needed() {
        let mut deck = deck();
        deck.draw_pile = ids(&[0]);
        deck.discard_pile = ids(&[1, 2, 3]);

        deck.draw(3);

        assert_eq!(deck.hand.len(), 3);
        assert_eq!(deck.hand[0], CardId::new(0));
        assert!(deck.discard_pile.is_empty());
        assert_eq!(deck.draw_pile.len(), 1);
        assert_eq!(deck.size(), 4);
    }

    #[test]
    fn test_draw_does_not_reshuffle_early() {
        let mut deck = deck();
        deck.draw_pile = ids(&[0]);
        deck.discard_pile = ids(&[1]);

        deck.draw(1);

        assert!(deck.draw_pile.is_empty());
        assert_eq!(deck.discard_pile, ids(&[1]));
    }

    #[test]
    fn test_draw_stops_when_exhausted() {
        let mut deck = deck();
        deck.draw_pile = ids(&[0]);
        deck.discard_pile = ids(&[1]);

        deck.draw(10);

        assert_eq!(deck.hand.len(), 2);
        assert_eq!(deck.next(), None);
    }

    #[test]
    fn test_peek_is_top_first_and_short() {
        let mut deck = deck();
        deck.draw_pile = ids(&[0, 1, 2]);
        assert_eq!(deck.peek(2).as_slice(), &ids(&[2, 1])[..]);

        deck.draw_pile = ids(&[5]);
        deck.discard_pile = ids(&[6]);
        assert_eq!(deck.peek(2).as_slice(), &ids(&[5])[..]);
    }

    #[test]
    fn test_play_discard_trash() {
        let mut deck = deck();
        deck.hand = ids(&[0, 1, 2, 1]);

        deck.play(CardId::new(1));
        deck.discard(&ids(&[2]));
        deck.trash(&ids(&[1]));

        assert_eq!(deck.hand, ids(&[0]));
        assert_eq!(deck.in_play, ids(&[1]));
        assert_eq!(deck.discard_pile, ids(&[2]));
        assert_eq!(deck.size(), 3);
    }

    #[test]
    fn test_draw_pile_sourced_moves() {
        let mut deck = deck();
        deck.draw_pile = ids(&[0, 1, 2]);

        deck.discard_from_draw_pile(&ids(&[2]));
        deck.trash_from_draw_pile(&ids(&[0]));

        assert_eq!(deck.draw_pile, ids(&[1]));
        assert_eq!(deck.discard_pile, ids(&[2]));
    }

    #[test]
    fn test_draw_pile_moves_take_topmost_copy() {
        let mut deck = deck();
        deck.draw_pile = ids(&[2, 1, 0, 2, 0]);

        deck.trash_from_draw_pile(&ids(&[2]));
        deck.discard_from_draw_pile(&ids(&[0]));

        assert_eq!(deck.draw_pile, ids(&[2, 1, 0]));
        assert_eq!(deck.discard_pile, ids(&[0]));
    }

    #[test]
    fn test_put_on_top_last_is_top() {
        let mut deck = deck();
        deck.put_on_top(&ids(&[3, 4]));

        assert_eq!(deck.next(), Some(CardId::new(4)));
    }

    #[test]
    fn test_end_turn_keeps_aside() {
        let mut deck = deck();
        deck.hand = ids(&[0, 1]);
        deck.in_play = ids(&[2, 3]);
        deck.discard_pile = ids(&[4, 5, 6]);
        deck.draw_pile = ids(&[7]);
        deck.aside = ids(&[8]);

        deck.end_turn();

        assert_eq!(deck.hand.len(), HAND_SIZE);
        assert!(deck.in_play.is_empty());
        assert!(deck.discard_pile.is_empty());
        assert_eq!(deck.draw_pile.len(), 3);
        assert_eq!(deck.aside, ids(&[8]));
        assert_eq!(deck.size(), 9);
    }

    #[test]
    fn test_end_turn_small_deck() {
        let mut deck = deck();
        deck.in_play = ids(&[0, 1, 2]);

        deck.end_turn();

        assert_eq!(deck.hand.len(), 3);
        assert!(deck.draw_pile.is_empty());
    }

    #[test]
    fn test_take_and_remove() {
        let mut deck = deck();
        deck.hand = ids(&[0]);
        deck.discard_pile = ids(&[1]);

        let a = deck.take_from_hand(CardId::new(0));
        let b = deck.remove_from_discard_pile(CardId::new(1));
        deck.aside.push(a);
        deck.aside.push(b);

        assert_eq!(deck.aside, ids(&[0, 1]));
        assert_eq!(deck.whole(), ids(&[0, 1]));
    }

    #[test]
    #[should_panic(expected = "is not in the hand")]
    fn test_play_absent_card_panics() {
        deck().play(CardId::new(0));
    }

    #[test]
    #[should_panic(expected = "is not in the draw pile")]
    fn test_trash_absent_from_draw_pile_panics() {
        deck().trash_from_draw_pile(&ids(&[0]));
    }
}
