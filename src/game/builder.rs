//! Game setup.
//!
//! `GameBuilder` turns a seed, a catalog, a configuration and a list of
//! seats into a ready-to-run `Game`:
//!
//! 1. base piles are looked up by name
//! 2. required kingdom cards are placed, the remaining kingdom slots are dealt
//!    at random from the catalog
//! 3. seats are shuffled into turn order (unless asked not to)
//! 4. every deck gets the starting cards and a cleanup, which draws the
//!    first hand
//!
//! Problems with the configuration are reported as `SetupError`s.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;

use super::engine::{Game, Seat};
use crate::agents::{Observer, Strategy};
use crate::cards::{CardId, CardRegistry, Catalog};
use crate::core::{GameConfig, GameRng, GameState, PlayerMap, PlayerState};
use crate::zones::{Deck, Supply};

/// Why a game could not be set up.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("{count} players is more than a table can seat")]
    TooManyPlayers { count: usize },
    #[error("unknown card {0:?}")]
    UnknownCard(String),
    #[error("{0:?} cannot be dealt as a kingdom pile")]
    NotKingdom(String),
    #[error("{requested} kingdom piles requested but only {available} kingdom cards exist")]
    NotEnoughKingdomCards { requested: usize, available: usize },
    #[error("cannot read configuration {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

/// Read a JSON `GameConfig`; absent fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, SetupError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SetupError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&text)?;
    debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Collects everything a game needs before it starts.
pub struct GameBuilder {
    rng: GameRng,
    config: GameConfig,
    catalog: Catalog,
    seats: Vec<(String, Seat)>,
    shuffle_seats: bool,
}

impl GameBuilder {
    /// Standard catalog, default configuration, no players yet.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            config: GameConfig::default(),
            catalog: Catalog::standard(),
            seats: Vec::new(),
            shuffle_seats: true,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// A fresh random stream for a bot, derived from the game seed.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    #[must_use]
    pub fn with_player(
        self,
        name: impl Into<String>,
        strategy: impl Strategy + 'static,
        observer: impl Observer + 'static,
    ) -> Self {
        self.with_seat(name, Seat::new(strategy, observer))
    }

    #[must_use]
    pub fn with_seat(mut self, name: impl Into<String>, seat: Seat) -> Self {
        self.seats.push((name.into(), seat));
        self
    }

    /// Play in the order players were added instead of a random one.
    #[must_use]
    pub fn keep_seat_order(mut self) -> Self {
        self.shuffle_seats = false;
        self
    }

    pub fn build(mut self) -> Result<Game, SetupError> {
        match self.seats.len() {
            0 => return Err(SetupError::NoPlayers),
            n if n > usize::from(u8::MAX) => return Err(SetupError::TooManyPlayers { count: n }),
            _ => {}
        }

        let supply = self.build_supply()?;
        let starting_deck = self.starting_deck()?;

        if self.shuffle_seats {
            self.rng.shuffle(&mut self.seats);
        }

        let mut players = Vec::with_capacity(self.seats.len());
        let mut seats = Vec::with_capacity(self.seats.len());
        for (name, seat) in self.seats {
            let mut deck = Deck::new(self.rng.fork());
            deck.put_on_top(&starting_deck);
            deck.end_turn();
            players.push(PlayerState::new(name, deck));
            seats.push(seat);
        }

        let registry = Rc::new(self.catalog.into_registry());
        let state = GameState::new(registry, self.config, PlayerMap::from_vec(players), supply);
        info!(
            "set up {} players with {} supply piles",
            state.player_count(),
            state.supply.len()
        );
        Ok(Game::new(state, PlayerMap::from_vec(seats)))
    }

    fn lookup(registry: &CardRegistry, name: &str) -> Result<CardId, SetupError> {
        registry
            .by_name(name)
            .ok_or_else(|| SetupError::UnknownCard(name.to_string()))
    }

    fn build_supply(&mut self) -> Result<Supply, SetupError> {
        let registry = self.catalog.registry();
        let mut supply = Supply::new();
        for pile in &self.config.base_piles {
            supply.add_pile(Self::lookup(registry, &pile.card)?, pile.count);
        }

        let mut kingdom = Vec::with_capacity(self.config.kingdom_piles);
        for name in &self.config.required_kingdom {
            let card = Self::lookup(registry, name)?;
            if !self.catalog.is_kingdom(card) {
                return Err(SetupError::NotKingdom(name.clone()));
            }
            if !kingdom.contains(&card) {
                kingdom.push(card);
            }
        }

        let pool: Vec<CardId> = self
            .catalog
            .kingdom()
            .iter()
            .copied()
            .filter(|c| !kingdom.contains(c))
            .collect();
        let missing = self.config.kingdom_piles.saturating_sub(kingdom.len());
        if missing > pool.len() {
            return Err(SetupError::NotEnoughKingdomCards {
                requested: self.config.kingdom_piles,
                available: self.catalog.kingdom().len(),
            });
        }
        kingdom.extend(self.rng.deal(missing, &pool));

        for card in kingdom {
            debug!("kingdom pile: {}", registry[card].name);
            supply.add_pile(card, self.config.kingdom_depth);
        }
        Ok(supply)
    }

    fn starting_deck(&self) -> Result<Vec<CardId>, SetupError> {
        let registry = self.catalog.registry();
        let mut cards = Vec::with_capacity(self.config.starting_deck_size() as usize);
        for pile in &self.config.starting_deck {
            let card = Self::lookup(registry, &pile.card)?;
            cards.extend(std::iter::repeat(card).take(pile.count as usize));
        }
        Ok(cards)
    }
}

impl std::fmt::Debug for GameBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameBuilder")
            .field("config", &self.config)
            .field("players", &self.seats.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::ScriptedStrategy;
    use crate::zones::HAND_SIZE;

    fn two_players(seed: u64) -> GameBuilder {
        GameBuilder::new(seed)
            .with_seat("Ann", Seat::bot(ScriptedStrategy::new()))
            .with_seat("Bob", Seat::bot(ScriptedStrategy::new()))
    }

    #[test]
    fn test_default_setup() {
        let game = two_players(7).build().unwrap();
        let state = &game.state;

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.supply.len(), 17);
        for player in state.players.values() {
            assert_eq!(player.deck.size(), 10);
            assert_eq!(player.deck.hand.len(), HAND_SIZE);
            assert_eq!(player.deck.draw_pile.len(), 5);
        }
        assert_eq!(state.turn.count, 0);
    }

    #[test]
    fn test_required_kingdom_cards_are_dealt() {
        let config = GameConfig::default()
            .with_kingdom_piles(2)
            .with_kingdom_card("Witch")
            .with_kingdom_card("Moat");
        let game = two_players(1).with_config(config).build().unwrap();
        let registry = game.state.registry();

        assert_eq!(game.state.supply.len(), 9);
        assert_eq!(game.state.supply.remaining(registry.by_name("Witch").unwrap()), Some(10));
        assert!(game.state.supply.has(registry.by_name("Moat").unwrap()));
    }

    #[test]
    fn test_same_seed_same_setup() {
        let a = two_players(42).build().unwrap();
        let b = two_players(42).build().unwrap();

        let kingdom = |g: &Game| g.state.supply.iter().map(|(c, _)| c).collect::<Vec<_>>();
        assert_eq!(kingdom(&a), kingdom(&b));
        for p in a.state.players.player_ids() {
            assert_eq!(a.state.player(p).name, b.state.player(p).name);
            assert_eq!(a.state.deck(p).hand, b.state.deck(p).hand);
        }
    }

    #[test]
    fn test_keep_seat_order() {
        let game = two_players(3).keep_seat_order().build().unwrap();
        let names: Vec<&str> = game.state.players.values().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_setup_errors() {
        assert!(matches!(GameBuilder::new(0).build(), Err(SetupError::NoPlayers)));

        let unknown = GameConfig::default().with_kingdom_card("Dragon");
        assert!(matches!(
            two_players(0).with_config(unknown).build(),
            Err(SetupError::UnknownCard(name)) if name == "Dragon"
        ));

        let base = GameConfig::default().with_kingdom_card("Copper");
        assert!(matches!(
            two_players(0).with_config(base).build(),
            Err(SetupError::NotKingdom(_))
        ));

        let greedy = GameConfig::default().with_kingdom_piles(31);
        assert!(matches!(
            two_players(0).with_config(greedy).build(),
            Err(SetupError::NotEnoughKingdomCards { requested: 31, available: 30 })
        ));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config("/nonexistent/kingdom.json").unwrap_err();

        assert!(matches!(err, SetupError::ConfigIo { .. }));
        assert!(err.to_string().contains("/nonexistent/kingdom.json"));
    }
}
