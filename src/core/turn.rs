//! Per-turn counters.
//!
//! A `Turn` is reset by `Turn::begin` at the start of every player's turn.
//! The counter `count` is the only field that survives the reset: it grows by
//! one per turn across the whole game and is what delayed events use to tell
//! "this turn" from "a later turn".

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// Phase of the active player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Action,
    Buy,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Action => write!(f, "ACTION"),
            Phase::Buy => write!(f, "BUY"),
        }
    }
}

/// State of the turn in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub phase: Phase,
    pub actions: u32,
    pub buys: u32,
    pub coins: u32,

    /// Turns begun so far, including this one.
    pub count: u32,

    /// Last card put into play this turn.
    pub played: Option<CardId>,

    /// Whose turn it is.
    pub player: PlayerId,

    /// Action cards put into play this turn.
    pub actions_played: u32,

    /// When set, the next action card put into play has no effect.
    /// The turn loop clears it when it skips that effect.
    pub suppress_next_action: bool,
}

impl Turn {
    /// Start a new turn for `player`.
    pub fn begin(&mut self, player: PlayerId) {
        self.count += 1;
        self.phase = Phase::Action;
        self.actions = 1;
        self.buys = 1;
        self.coins = 0;
        self.played = None;
        self.player = player;
        self.actions_played = 0;
        self.suppress_next_action = false;
    }

    /// Record that `card` went into play.
    pub fn record_play(&mut self, card: CardId, is_action: bool) {
        self.played = Some(card);
        if is_action {
            self.actions_played += 1;
        }
    }

    /// Consume the suppression flag, returning whether it was set.
    pub fn take_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_next_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_resets_counters() {
        let mut turn = Turn {
            phase: Phase::Buy,
            actions: 0,
            buys: 3,
            coins: 9,
            count: 4,
            played: Some(CardId::new(2)),
            player: PlayerId::new(1),
            actions_played: 2,
            suppress_next_action: true,
        };

        turn.begin(PlayerId::new(0));

        assert_eq!(turn.count, 5);
        assert_eq!(turn.phase, Phase::Action);
        assert_eq!((turn.actions, turn.buys, turn.coins), (1, 1, 0));
        assert_eq!(turn.played, None);
        assert_eq!(turn.player, PlayerId::new(0));
        assert_eq!(turn.actions_played, 0);
        assert!(!turn.suppress_next_action);
    }

    #[test]
    fn test_default_turn() {
        let turn = Turn::default();

        assert_eq!(turn.player, PlayerId::default());
        assert_eq!(turn.player, PlayerId::new(0));
        assert_eq!((turn.count, turn.phase), (0, Phase::Action));
    }

    #[test]
    fn test_record_play_counts_actions_only() {
        let mut turn = Turn::default();
        turn.begin(PlayerId::new(0));

        turn.record_play(CardId::new(1), true);
        turn.record_play(CardId::new(2), false);

        assert_eq!(turn.played, Some(CardId::new(2)));
        assert_eq!(turn.actions_played, 1);
    }

    #[test]
    fn test_take_suppression_clears_flag() {
        let mut turn = Turn::default();
        turn.suppress_next_action = true;

        assert!(turn.take_suppression());
        assert!(!turn.take_suppression());
    }
}
