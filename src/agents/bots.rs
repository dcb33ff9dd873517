//! Computer players.
//!
//! None of these play well. They exist to fill seats, drive benchmarks and
//! make tests deterministic.

use std::collections::VecDeque;

use super::strategy::Strategy;
use crate::cards::CardId;
use crate::core::{GameRng, GameState, PlayerId};
use crate::effects::Action;

/// Picks uniformly at random.
///
/// Optional picks are declined one time in twenty; otherwise at least one
/// card is chosen.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose_action(&mut self, _state: &GameState, _player: PlayerId, actions: &[Action]) -> usize {
        self.rng.roll(actions.len())
    }

    fn choose_cards(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        cards: &[CardId],
        at_least: usize,
        at_most: usize,
    ) -> Vec<CardId> {
        let at_most = at_most.min(cards.len());
        if at_most == 0 {
            return Vec::new();
        }
        if at_least == 0 && self.rng.roll(20) == 0 {
            return Vec::new();
        }
        let at_least = at_least.max(1);
        let n = at_least + self.rng.roll(at_most - at_least + 1);
        self.rng.deal(n, cards)
    }
}

/// Always takes as many of the most expensive cards as allowed.
///
/// Ties at the cutoff are broken at random. Action choices are random.
#[derive(Clone, Debug)]
pub struct BigSpender {
    rng: GameRng,
}

impl BigSpender {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for BigSpender {
    fn choose_action(&mut self, _state: &GameState, _player: PlayerId, actions: &[Action]) -> usize {
        self.rng.roll(actions.len())
    }

    fn choose_cards(
        &mut self,
        state: &GameState,
        _player: PlayerId,
        cards: &[CardId],
        _at_least: usize,
        at_most: usize,
    ) -> Vec<CardId> {
        let at_most = at_most.min(cards.len());
        let mut costs: Vec<u32> = cards.iter().map(|&c| state.card(c).cost).collect();
        costs.sort_unstable_by(|a, b| b.cmp(a));
        costs.dedup();

        let mut chosen = Vec::with_capacity(at_most);
        for cost in costs {
            if chosen.len() == at_most {
                break;
            }
            let group: Vec<CardId> = cards
                .iter()
                .copied()
                .filter(|&c| state.card(c).cost == cost)
                .collect();
            let room = at_most - chosen.len();
            if group.len() <= room {
                chosen.extend(group);
            } else {
                chosen.extend(self.rng.deal(room, &group));
            }
        }
        chosen
    }
}

/// Replays a fixed script of answers, then makes minimal choices.
///
/// Card answers are given as card ids and returned verbatim, so a script that
/// names a card the player cannot pick is caught by the game's validation.
#[derive(Clone, Debug, Default)]
pub struct ScriptedStrategy {
    actions: VecDeque<usize>,
    cards: VecDeque<Vec<CardId>>,
}

impl ScriptedStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `choose_action`.
    #[must_use]
    pub fn then_action(mut self, index: usize) -> Self {
        self.actions.push_back(index);
        self
    }

    /// Queue an answer for the next card choice (plays and buys included).
    #[must_use]
    pub fn then_cards(mut self, cards: Vec<CardId>) -> Self {
        self.cards.push_back(cards);
        self
    }

    /// Queue a single-card answer.
    #[must_use]
    pub fn then_card(self, card: CardId) -> Self {
        self.then_cards(vec![card])
    }

    /// Queue a decline.
    #[must_use]
    pub fn then_none(self) -> Self {
        self.then_cards(Vec::new())
    }

    /// Answers not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len() + self.cards.len()
    }
}

impl Strategy for ScriptedStrategy {
    fn choose_action(&mut self, _state: &GameState, _player: PlayerId, _actions: &[Action]) -> usize {
        self.actions.pop_front().unwrap_or(0)
    }

    fn choose_cards(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        cards: &[CardId],
        at_least: usize,
        _at_most: usize,
    ) -> Vec<CardId> {
        self.cards
            .pop_front()
            .unwrap_or_else(|| cards[..at_least].to_vec())
    }
}
