//! Where cards live.
//!
//! ## Key Types
//!
//! - `Deck`: a player's hand, draw pile, discard pile, play area and set-aside cards
//! - `Mat`: cards and coin tokens a player keeps outside the deck
//! - `Supply`: the piles cards are bought and gained from

pub mod deck;
pub mod mat;
pub mod supply;

pub use deck::{Deck, Reveal, HAND_SIZE};
pub use mat::{Mat, MatKind};
pub use supply::Supply;
