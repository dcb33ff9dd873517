//! Deck mechanics tests.
//!
//! These tests check the card-conservation and drawing rules of `Deck`:
//! - Moving cards between partitions never changes the deck size
//! - Only trashing removes cards
//! - Drawing reshuffles the discard pile lazily
//! - Cleanup draws a fresh hand and leaves set-aside cards alone

use proptest::prelude::*;

use kingdom_engine::cards::CardId;
use kingdom_engine::core::GameRng;
use kingdom_engine::zones::{Deck, HAND_SIZE};

fn cards(ids: impl IntoIterator<Item = u32>) -> Vec<CardId> {
    ids.into_iter().map(CardId::new).collect()
}

fn sorted(mut cards: Vec<CardId>) -> Vec<CardId> {
    cards.sort();
    cards
}

/// Draw order is top of the pile first.
#[test]
fn test_draw_takes_from_top() {
    let mut deck = Deck::new(GameRng::new(1));
    deck.draw_pile = cards([0, 1, 2]);

    deck.draw(2);

    assert_eq!(deck.hand, cards([2, 1]));
    assert_eq!(deck.draw_pile, cards([0]));
}

/// An empty draw pile is refilled from the discard pile only when needed.
#[test]
fn test_reshuffle_is_lazy() {
    let mut deck = Deck::new(GameRng::new(2));
    deck.draw_pile = cards([0]);
    deck.discard_pile = cards([1, 2, 3]);

    deck.draw(1);
    assert_eq!(deck.discard_pile.len(), 3, "no reshuffle while cards remain");

    deck.draw(2);
    assert_eq!(deck.hand.len(), 3);
    assert!(deck.discard_pile.is_empty());
    assert_eq!(deck.draw_pile.len(), 1);
}

/// Drawing more than the deck holds stops quietly.
#[test]
fn test_draw_past_exhaustion() {
    let mut deck = Deck::new(GameRng::new(3));
    deck.draw_pile = cards([0, 1]);
    deck.discard_pile = cards([2]);

    deck.draw(10);

    assert_eq!(sorted(deck.hand.clone()), cards([0, 1, 2]));
    assert_eq!(deck.next(), None);
}

/// Peeking never reshuffles and shows what is there.
#[test]
fn test_peek_short_pile() {
    let mut deck = Deck::new(GameRng::new(4));
    deck.draw_pile = cards([7]);
    deck.discard_pile = cards([8, 9]);

    assert_eq!(deck.peek(2).to_vec(), cards([7]));
    assert_eq!(deck.discard_pile.len(), 2);
}

/// Cleanup keeps aside cards and draws five.
#[test]
fn test_end_turn_keeps_aside() {
    let mut deck = Deck::new(GameRng::new(5));
    deck.hand = cards([0, 1]);
    deck.in_play = cards([2, 3]);
    deck.discard_pile = cards([4, 5, 6]);
    deck.draw_pile = cards([7, 8]);
    deck.aside = cards([9]);

    deck.end_turn();

    assert_eq!(deck.hand.len(), HAND_SIZE);
    assert!(deck.in_play.is_empty());
    assert!(deck.discard_pile.is_empty());
    assert_eq!(deck.aside, cards([9]));
    assert_eq!(deck.size(), 10);
}

/// Same seed, same shuffle.
#[test]
fn test_shuffles_are_reproducible() {
    let build = || {
        let mut deck = Deck::new(GameRng::new(99));
        deck.discard_pile = cards(0..20);
        deck.end_turn();
        deck
    };

    assert_eq!(build().hand, build().hand);
    assert_eq!(build().draw_pile, build().draw_pile);
}

/// Removing a card that is not there is a bug in the caller.
#[test]
#[should_panic(expected = "is not in the hand")]
fn test_play_absent_card_panics() {
    let mut deck = Deck::new(GameRng::new(6));
    deck.hand = cards([1]);
    deck.play(CardId::new(2));
}

#[derive(Clone, Debug)]
enum Move {
    Draw(usize),
    Play,
    Discard,
    PutOnTop,
    EndTurn,
}

fn moves() -> impl Strategy<Value = Move> {
    prop_oneof![
        (0usize..8).prop_map(Move::Draw),
        Just(Move::Play),
        Just(Move::Discard),
        Just(Move::PutOnTop),
        Just(Move::EndTurn),
    ]
}

proptest! {
    /// Draws, plays, discards, put-on-top and cleanup never lose or create cards.
    #[test]
    fn prop_moves_conserve_cards(
        seed in any::<u64>(),
        size in 1u32..30,
        script in prop::collection::vec(moves(), 0..40),
    ) {
        let mut deck = Deck::new(GameRng::new(seed));
        deck.discard_pile = cards(0..size);
        let before = sorted(deck.whole());

        for m in script {
            match m {
                Move::Draw(n) => deck.draw(n),
                Move::Play => {
                    if let Some(&card) = deck.hand.first() {
                        deck.play(card);
                    }
                }
                Move::Discard => {
                    let hand = deck.hand.clone();
                    deck.discard(&hand);
                }
                Move::PutOnTop => {
                    if let Some(card) = deck.hand.pop() {
                        deck.put_on_top(&[card]);
                    }
                }
                Move::EndTurn => deck.end_turn(),
            }
            prop_assert_eq!(deck.size(), size as usize);
        }

        prop_assert_eq!(sorted(deck.whole()), before);
    }

    /// `draw(n)` grows the hand by exactly `min(n, draw + discard)`.
    #[test]
    fn prop_draw_count(
        seed in any::<u64>(),
        draw in 0u32..10,
        discard in 0u32..10,
        n in 0usize..25,
    ) {
        let mut deck = Deck::new(GameRng::new(seed));
        deck.draw_pile = cards(0..draw);
        deck.discard_pile = cards(100..100 + discard);

        deck.draw(n);

        prop_assert_eq!(deck.hand.len(), n.min((draw + discard) as usize));
        prop_assert_eq!(deck.size(), (draw + discard) as usize);
    }

    /// Trashing is the only way to shrink a deck.
    #[test]
    fn prop_trash_shrinks(seed in any::<u64>(), size in 1u32..20, k in 0usize..20) {
        let mut deck = Deck::new(GameRng::new(seed));
        deck.draw_pile = cards(0..size);
        deck.draw(size as usize);

        let k = k.min(deck.hand.len());
        let trashed: Vec<CardId> = deck.hand[..k].to_vec();
        deck.trash(&trashed);

        prop_assert_eq!(deck.size(), size as usize - k);
    }

    /// After cleanup the hand holds `min(5, cards outside aside)`.
    #[test]
    fn prop_end_turn_hand_size(seed in any::<u64>(), size in 0u32..15, aside in 0u32..3) {
        let mut deck = Deck::new(GameRng::new(seed));
        deck.discard_pile = cards(0..size);
        deck.aside = cards(50..50 + aside);

        deck.end_turn();

        prop_assert_eq!(deck.hand.len(), HAND_SIZE.min(size as usize));
        prop_assert!(deck.in_play.is_empty());
        prop_assert_eq!(deck.aside.len(), aside as usize);
    }
}
