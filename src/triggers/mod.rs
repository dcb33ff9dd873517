//! Event scheduling.
//!
//! Effects that reach past the current moment (a bonus for the first Silver
//! played this turn, a card returning to hand next turn) are queued as
//! `Event`s and checked at fixed checkpoints of the turn loop.
//!
//! ## Key Types
//!
//! - `Event`: description, origin card, expiry and trigger predicates, effect
//! - `EventQueue`: pending events in scheduling order

pub mod event;
pub mod scheduler;

pub use event::Event;
pub use scheduler::EventQueue;
