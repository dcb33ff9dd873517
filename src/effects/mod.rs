//! Card effects.
//!
//! ## Key Types
//!
//! - `Action`: a described, shareable effect over the game
//! - `Placement`: where a gained card goes
//!
//! Effects are assembled from the primitives in `primitives` with the
//! combinators in `action`. `reactions` holds the protocol that runs
//! before an attack lands.

pub mod action;
pub mod reactions;
pub mod primitives;

pub use action::{attack, choice, for_each_other, sequence, Action};
pub use reactions::resolve_reactions;
pub use primitives::Placement;
