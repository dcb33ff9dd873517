//! Deferred effects.
//!
//! An `Event` is an effect waiting for a condition. It carries two predicates
//! over the game state:
//!
//! - `expire`: once true, the event is dropped without firing
//! - `trigger`: once true (and not expired), the event fires and is dropped
//!
//! Either way an event leaves the queue at most once, so it fires at most once.
//! An event that must keep working after it fires schedules a fresh copy of
//! itself from its `fire` effect.
//!
//! ## Example
//!
//! ```
//! use kingdom_engine::triggers::Event;
//!
//! // Fires at the first checkpoint of any later turn.
//! let scheduled_on = 3;
//! let event = Event::new("+1 Coin next turn", |game| game.state.turn.coins += 1)
//!     .triggers_when(move |state| state.turn.count > scheduled_on);
//!
//! assert_eq!(event.description(), "+1 Coin next turn");
//! ```

use crate::cards::CardId;
use crate::core::GameState;
use crate::game::Game;

type Predicate = Box<dyn Fn(&GameState) -> bool>;
type Fire = Box<dyn FnOnce(&mut Game)>;

/// A conditionally-triggered, expiring effect.
pub struct Event {
    origin: Option<CardId>,
    description: String,
    expire: Predicate,
    trigger: Predicate,
    fire: Fire,
}

impl Event {
    /// Create an event that never expires and fires at the next checkpoint.
    pub fn new<F>(description: impl Into<String>, fire: F) -> Self
    where
        F: FnOnce(&mut Game) + 'static,
    {
        Self {
            origin: None,
            description: description.into(),
            expire: Box::new(|_| false),
            trigger: Box::new(|_| true),
            fire: Box::new(fire),
        }
    }

    /// Record the card that created this event.
    #[must_use]
    pub fn with_origin(mut self, card: CardId) -> Self {
        self.origin = Some(card);
        self
    }

    /// Drop the event unfired once `expire` holds.
    #[must_use]
    pub fn expires_when<P>(mut self, expire: P) -> Self
    where
        P: Fn(&GameState) -> bool + 'static,
    {
        self.expire = Box::new(expire);
        self
    }

    /// Fire the event once `trigger` holds.
    #[must_use]
    pub fn triggers_when<P>(mut self, trigger: P) -> Self
    where
        P: Fn(&GameState) -> bool + 'static,
    {
        self.trigger = Box::new(trigger);
        self
    }

    #[must_use]
    pub fn origin(&self) -> Option<CardId> {
        self.origin
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_expired(&self, state: &GameState) -> bool {
        (self.expire)(state)
    }

    #[must_use]
    pub fn is_triggered(&self, state: &GameState) -> bool {
        (self.trigger)(state)
    }

    /// Run the effect, consuming the event.
    pub fn fire(self, game: &mut Game) {
        (self.fire)(game);
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("origin", &self.origin)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} event", self.description)?;
        if let Some(card) = self.origin {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}
