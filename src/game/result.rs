//! Game outcome.

use crate::core::{GameState, PlayerId};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every player tied.
    Draw,
    /// Several players share the lead, but not all of them.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Winners by victory points.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let standings = standings(state);
        let best = standings.first().map_or(0, |&(_, vp)| vp);
        let leaders: Vec<PlayerId> = standings
            .iter()
            .filter(|&&(_, vp)| vp == best)
            .map(|&(p, _)| p)
            .collect();

        match leaders.len() {
            1 => GameResult::Winner(leaders[0]),
            n if n == state.player_count() => GameResult::Draw,
            _ => GameResult::Winners(leaders),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Players with their victory points, best first. Ties keep turn order.
#[must_use]
pub fn standings(state: &GameState) -> Vec<(PlayerId, i32)> {
    let mut standings: Vec<(PlayerId, i32)> = state
        .players
        .player_ids()
        .map(|p| (p, state.victory_points(p)))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1));
    standings
}
