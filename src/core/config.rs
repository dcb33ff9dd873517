//! Game configuration.
//!
//! Everything a table needs to know before the first shuffle: how many
//! kingdom piles to deal, how deep the base piles are, what every deck starts
//! with, and when the game is over. Defaults follow the classic rules.
//!
//! The binary can load a `GameConfig` from JSON; missing fields fall back to
//! the defaults.
//!
//! ```
//! use kingdom_engine::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "victory_threshold": 10 }"#).unwrap();
//! assert_eq!(config.victory_threshold, 10);
//! assert_eq!(config.kingdom_piles, 10);
//! ```

use serde::{Deserialize, Serialize};

/// A named pile size, e.g. `("Copper", 46)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileConfig {
    pub card: String,
    pub count: u32,
}

impl PileConfig {
    #[must_use]
    pub fn new(card: impl Into<String>, count: u32) -> Self {
        Self {
            card: card.into(),
            count,
        }
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A player holding at least this many victory points ends the game.
    pub victory_threshold: i32,

    /// Number of kingdom piles dealt from the catalog.
    pub kingdom_piles: usize,

    /// Cards in each kingdom pile.
    pub kingdom_depth: u32,

    /// Treasure, victory and curse piles, in supply order.
    pub base_piles: Vec<PileConfig>,

    /// Cards every deck starts with.
    pub starting_deck: Vec<PileConfig>,

    /// Kingdom cards that must be in the supply, by name.
    ///
    /// Remaining kingdom slots are dealt at random.
    pub required_kingdom: Vec<String>,

    /// Stop after this many turns even if nobody reached the threshold.
    pub max_turns: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            victory_threshold: 20,
            kingdom_piles: 10,
            kingdom_depth: 10,
            base_piles: vec![
                PileConfig::new("Gold", 30),
                PileConfig::new("Silver", 40),
                PileConfig::new("Copper", 46),
                PileConfig::new("Curse", 10),
                PileConfig::new("Estate", 8),
                PileConfig::new("Duchy", 8),
                PileConfig::new("Province", 8),
            ],
            starting_deck: vec![PileConfig::new("Copper", 7), PileConfig::new("Estate", 3)],
            required_kingdom: Vec::new(),
            max_turns: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the victory point threshold.
    #[must_use]
    pub fn with_victory_threshold(mut self, threshold: i32) -> Self {
        self.victory_threshold = threshold;
        self
    }

    /// Set the number of kingdom piles.
    #[must_use]
    pub fn with_kingdom_piles(mut self, piles: usize) -> Self {
        self.kingdom_piles = piles;
        self
    }

    /// Require a kingdom card to be in the supply.
    #[must_use]
    pub fn with_kingdom_card(mut self, name: impl Into<String>) -> Self {
        self.required_kingdom.push(name.into());
        self
    }

    /// Replace the starting deck.
    #[must_use]
    pub fn with_starting_deck(mut self, deck: Vec<PileConfig>) -> Self {
        self.starting_deck = deck;
        self
    }

    /// Cap the game length.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Number of cards in a starting deck.
    #[must_use]
    pub fn starting_deck_size(&self) -> u32 {
        self.starting_deck.iter().map(|p| p.count).sum()
    }
}
