//! How a player makes choices.
//!
//! Every decision the rules ask of a player is one of two shapes:
//!
//! - pick one of several `Action`s
//! - pick between `at_least` and `at_most` cards from a candidate list
//!
//! Playing a card and buying a card are single-card picks. They have their own
//! methods so an interactive strategy can show the right context, but by
//! default they are ordinary `choose_cards` calls.
//!
//! Strategies only see `&GameState`. The game validates every answer and
//! panics on an illegal one: a strategy that breaks the rules is a bug.

use crate::cards::CardId;
use crate::core::{GameState, PlayerId};
use crate::effects::Action;

/// A player's decision maker.
pub trait Strategy {
    /// Index of the action to perform. `actions` is never empty.
    fn choose_action(&mut self, state: &GameState, player: PlayerId, actions: &[Action]) -> usize;

    /// Between `at_least` and `at_most` cards out of `cards`.
    ///
    /// The game guarantees `at_least <= at_most <= cards.len()` and
    /// `at_least < cards.len()`.
    fn choose_cards(
        &mut self,
        state: &GameState,
        player: PlayerId,
        cards: &[CardId],
        at_least: usize,
        at_most: usize,
    ) -> Vec<CardId>;

    /// Action card to play from hand, or `None` to end the action phase.
    fn choose_play(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) -> Option<CardId> {
        self.choose_cards(state, player, cards, 0, 1).first().copied()
    }

    /// Supply card to buy, or `None` to stop buying.
    fn choose_buy(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) -> Option<CardId> {
        self.choose_cards(state, player, cards, 0, 1).first().copied()
    }
}

/// Is `selection` a sub-multiset of `cards` with an allowed size?
#[must_use]
pub fn is_valid_selection(cards: &[CardId], selection: &[CardId], at_least: usize, at_most: usize) -> bool {
    if selection.len() < at_least || selection.len() > at_most {
        return false;
    }
    let mut remaining = cards.to_vec();
    selection.iter().all(|c| match remaining.iter().position(|r| r == c) {
        Some(i) => {
            remaining.swap_remove(i);
            true
        }
        None => false,
    })
}
