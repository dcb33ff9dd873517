//! Players' decision makers and observers.
//!
//! ## Key Types
//!
//! - `Strategy`: answers the game's questions (which card, which option)
//! - `Observer`: hears about everything that happens
//!
//! Bots (`RandomStrategy`, `BigSpender`, `ScriptedStrategy`) and the terminal
//! player (`CliStrategy`) implement `Strategy`. `SilentObserver`,
//! `ConsoleObserver` and `Transcript` implement `Observer`.

pub mod strategy;
pub mod bots;
pub mod interactive;
pub mod observer;
pub mod console;

pub use strategy::{is_valid_selection, Strategy};
pub use bots::{BigSpender, RandomStrategy, ScriptedStrategy};
pub use interactive::{CliStrategy, SelectionError};
pub use observer::{Notice, Observer, SilentObserver, Transcript};
pub use console::ConsoleObserver;
