//! Card system: definitions, registry and the standard catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Tag` / `Tags`: Card capabilities (Action, Treasure, Attack, ...)
//! - `Card`: Static card data with its effects
//! - `CardRegistry`: Arena of definitions, looked up by id or name
//! - `Catalog`: A registry plus the cards that may be dealt as kingdom piles
//!
//! Cards are shared by every player; a deck holds `CardId`s, never cards.

pub mod definition;
pub mod registry;
pub mod kingdom;
pub mod catalog;

pub use catalog::{BaseCards, Catalog};
pub use definition::{Card, CardId, Tag, Tags, VictoryPoints};
pub use registry::CardRegistry;
