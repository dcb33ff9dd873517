//! Core engine types: players, turn counters, state, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;
pub mod turn;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, PileConfig};
pub use turn::{Phase, Turn};
pub use state::{GameState, PlayerState};
