//! # kingdom-engine
//!
//! A turn-based deck-building card game engine.
//!
//! ## Design Principles
//!
//! 1. **Effects are values**: every card effect is an `Action`, a described
//!    closure built from a few primitives and combinators (`sequence`,
//!    `choice`, `for_each_other`, `attack`).
//!
//! 2. **Deferred effects are data**: anything that happens "later this turn"
//!    or "at the start of your next turn" is an `Event` in a queue, checked at
//!    fixed points of the turn loop.
//!
//! 3. **Decisions go through one door**: players answer only through the
//!    `Strategy` trait and see only `&GameState`. Humans and bots are
//!    interchangeable.
//!
//! 4. **Deterministic**: a seed fixes the supply, seat order, every shuffle
//!    and every bot decision.
//!
//! ## Modules
//!
//! - `core`: Players, per-seat storage, RNG, turn counters, configuration, state
//! - `zones`: Decks, mats and the supply
//! - `cards`: Card definitions, registry and the standard catalog
//! - `effects`: Actions, combinators, primitives, reactions
//! - `triggers`: Events and the event queue
//! - `agents`: Strategies (bots, scripted, interactive) and observers
//! - `game`: The game object, turn loop, setup and results

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod triggers;
pub mod agents;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameState, Phase, PileConfig, PlayerId, PlayerMap, PlayerState, Turn};

pub use crate::zones::{Deck, Mat, MatKind, Supply, HAND_SIZE};

pub use crate::cards::{BaseCards, Card, CardId, CardRegistry, Catalog, Tag, Tags};

pub use crate::effects::{attack, choice, for_each_other, sequence, Action, Placement};

pub use crate::triggers::{Event, EventQueue};

pub use crate::agents::{
    BigSpender, CliStrategy, ConsoleObserver, Notice, Observer, RandomStrategy,
    ScriptedStrategy, SilentObserver, Strategy, Transcript,
};

pub use crate::game::{Game, GameBuilder, GameResult, Seat, SetupError};
