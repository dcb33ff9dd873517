//! Running a game.
//!
//! ## Key Types
//!
//! - `Game`: state, seats and pending events, plus the services card
//!   effects call (choices, gains, trashing, notifications)
//! - `Seat`: a player's strategy and observer
//! - `GameBuilder`: setup from a seed, catalog and configuration
//! - `GameResult`: who won
//!
//! The turn loop lives in `turn_loop` as further `impl Game` blocks.

pub mod engine;
pub mod turn_loop;
pub mod result;
pub mod builder;

pub use builder::{load_config, GameBuilder, SetupError};
pub use engine::{Game, Seat};
pub use result::{standings, GameResult};
