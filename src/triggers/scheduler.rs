//! Queue of pending events.
//!
//! The queue keeps events in scheduling order. At every checkpoint the game
//! calls `take_due`, which first discards expired events and then splits off
//! the triggered ones. Events scheduled while those fire land in the queue and
//! wait for the next checkpoint.

use log::trace;

use super::event::Event;
use crate::core::GameState;

/// Pending events in scheduling order.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, event: Event) {
        trace!("scheduled {event}");
        self.events.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Descriptions of pending events, in scheduling order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(Event::description)
    }

    /// Drop expired events, then remove and return the triggered ones in
    /// scheduling order.
    ///
    /// An event that expires in this pass is never checked for triggering.
    pub fn take_due(&mut self, state: &GameState) -> Vec<Event> {
        self.events.retain(|e| {
            let expired = e.is_expired(state);
            if expired {
                trace!("expired {e}");
            }
            !expired
        });

        let (due, waiting): (Vec<Event>, Vec<Event>) = std::mem::take(&mut self.events)
            .into_iter()
            .partition(|e| e.is_triggered(state));
        self.events = waiting;
        due
    }
}
