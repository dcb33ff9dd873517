//! Game state visible to strategies and observers.
//!
//! ## GameState
//!
//! Everything about a game except the players' decision makers and the
//! pending events:
//! - the card registry
//! - players in turn order, each with a deck and mats
//! - the supply
//! - the turn in progress
//!
//! Strategies receive `&GameState` so the only way they can influence a game
//! is through the choices they return.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use super::turn::Turn;
use crate::cards::{Card, CardId, CardRegistry, Tag};
use crate::zones::{Deck, Mat, MatKind, Supply};

/// A player's cards.
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub name: String,
    pub deck: Deck,
    pub mats: FxHashMap<MatKind, Mat>,
}

impl PlayerState {
    #[must_use]
    pub fn new(name: impl Into<String>, deck: Deck) -> Self {
        Self {
            name: name.into(),
            deck,
            mats: FxHashMap::default(),
        }
    }

    /// The mat of `kind`, if anything was ever put on it.
    #[must_use]
    pub fn mat(&self, kind: MatKind) -> Option<&Mat> {
        self.mats.get(&kind)
    }

    /// The mat of `kind`, created empty on first use.
    pub fn mat_mut(&mut self, kind: MatKind) -> &mut Mat {
        self.mats.entry(kind).or_default()
    }

    /// Cards in hand carrying `tag`.
    #[must_use]
    pub fn hand_with(&self, registry: &CardRegistry, tag: Tag) -> Vec<CardId> {
        registry.filter_tag(&self.deck.hand, tag)
    }

    /// Victory points of the deck plus any cards waiting on mats.
    #[must_use]
    pub fn victory_points(&self, registry: &CardRegistry) -> i32 {
        let on_mats: Vec<CardId> = self
            .mats
            .values()
            .flat_map(|m| m.cards.iter().copied())
            .collect();
        self.deck.victory_points(registry, &on_mats)
    }
}

/// Complete shared game state.
#[derive(Clone, Debug)]
pub struct GameState {
    registry: Rc<CardRegistry>,
    pub config: GameConfig,
    pub players: PlayerMap<PlayerState>,
    pub supply: Supply,
    pub turn: Turn,
}

impl GameState {
    /// Create a state with no turn begun yet.
    #[must_use]
    pub fn new(
        registry: Rc<CardRegistry>,
        config: GameConfig,
        players: PlayerMap<PlayerState>,
        supply: Supply,
    ) -> Self {
        Self {
            registry,
            config,
            players,
            supply,
            turn: Turn::default(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// A shared handle to the registry, for holding across mutations.
    #[must_use]
    pub fn registry_handle(&self) -> Rc<CardRegistry> {
        Rc::clone(&self.registry)
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.registry[id]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &Deck {
        &self.players[player].deck
    }

    pub fn deck_mut(&mut self, player: PlayerId) -> &mut Deck {
        &mut self.players[player].deck
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.player
    }

    /// Every player except `player`, in turn order.
    pub fn others(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> {
        self.players.others(player)
    }

    /// Supply cards buyable with `coins`, in supply order.
    #[must_use]
    pub fn affordable(&self, coins: u32) -> Vec<CardId> {
        self.supply.affordable(coins, &self.registry)
    }

    #[must_use]
    pub fn victory_points(&self, player: PlayerId) -> i32 {
        self.players[player].victory_points(&self.registry)
    }

    /// Has any player reached the victory threshold, or the turn limit been hit?
    #[must_use]
    pub fn is_over(&self) -> bool {
        let threshold = self.config.victory_threshold;
        let scored = self
            .players
            .player_ids()
            .any(|p| self.victory_points(p) >= threshold);
        let out_of_turns = self
            .config
            .max_turns
            .is_some_and(|max| self.turn.count >= max);
        scored || out_of_turns
    }

    /// Multi-line dump of supply, decks, mats and the current turn.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = self.supply.describe(&self.registry);
        out.push_str("\nPlayers:\n");
        let width = self.players.values().map(|p| p.name.len()).max().unwrap_or(0);
        for player in self.players.values() {
            out.push_str(&format!(
                "{:<width$}: {}\n",
                player.name,
                player.deck.describe(&self.registry)
            ));
            for (kind, mat) in &player.mats {
                out.push_str(&format!(
                    "    {}: {}\n",
                    mat.describe(&self.registry, &player.deck),
                    kind
                ));
            }
        }
        out.push_str(&format!(
            "Current turn: {} {} actions={} buys={} coins={}\n",
            self.turn.count, self.turn.phase, self.turn.actions, self.turn.buys, self.turn.coins
        ));
        out
    }
}
