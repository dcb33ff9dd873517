//! Game notifications.
//!
//! Every seat has an `Observer`. The game broadcasts what happens (plays,
//! buys, gains, reactions, fired events) to all of them; each decides what to
//! show its player. All methods default to doing nothing.
//!
//! `viewer` is the seat the observer belongs to, for observers that show more
//! to their own player than to others.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cards::CardId;
use crate::core::{GameState, PlayerId};

/// Receives game notifications.
#[allow(unused_variables)]
pub trait Observer {
    fn begin_game(&mut self, state: &GameState) {}

    fn begin_turn(&mut self, state: &GameState, viewer: PlayerId) {}

    /// `player` put `card` into play.
    fn play(&mut self, state: &GameState, player: PlayerId, card: CardId) {}

    fn buy(&mut self, state: &GameState, player: PlayerId, card: CardId) {}

    fn gain(&mut self, state: &GameState, player: PlayerId, card: CardId) {}

    /// `player` tried to gain `card` but its pile is empty.
    fn no_more(&mut self, state: &GameState, player: PlayerId, card: CardId) {}

    /// `player` revealed reaction `card`.
    fn react(&mut self, state: &GameState, player: PlayerId, card: CardId) {}

    /// `player` revealed `cards`.
    fn show_cards(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) {}

    fn trash(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) {}

    /// The active player finished resolving an action card.
    fn complete_action(&mut self, state: &GameState, viewer: PlayerId) {}

    fn end_game(&mut self, state: &GameState) {}

    /// Free-form message about `player`, e.g. a fired event.
    fn notify(&mut self, state: &GameState, player: PlayerId, message: &str) {}
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentObserver;

impl Observer for SilentObserver {}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    BeginGame,
    BeginTurn { player: PlayerId, turn: u32 },
    Play { player: PlayerId, card: CardId },
    Buy { player: PlayerId, card: CardId },
    Gain { player: PlayerId, card: CardId },
    NoMore { player: PlayerId, card: CardId },
    React { player: PlayerId, card: CardId },
    ShowCards { player: PlayerId, cards: Vec<CardId> },
    Trash { player: PlayerId, cards: Vec<CardId> },
    CompleteAction { player: PlayerId },
    EndGame,
    Notify { player: PlayerId, message: String },
}

/// Records every notification.
///
/// Clones share one log, so a test can keep a handle while the game owns the
/// observer.
///
/// ```
/// use kingdom_engine::agents::Transcript;
///
/// let transcript = Transcript::new();
/// let handle = transcript.clone();
/// assert!(handle.notices().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    log: Rc<RefCell<Vec<Notice>>>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.log.borrow().clone()
    }

    /// Number of recorded notices matching `predicate`.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Notice) -> bool,
    {
        self.log.borrow().iter().filter(|n| predicate(n)).count()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    fn record(&self, notice: Notice) {
        self.log.borrow_mut().push(notice);
    }
}

impl Observer for Transcript {
    fn begin_game(&mut self, _state: &GameState) {
        self.record(Notice::BeginGame);
    }

    fn begin_turn(&mut self, state: &GameState, _viewer: PlayerId) {
        self.record(Notice::BeginTurn {
            player: state.turn.player,
            turn: state.turn.count,
        });
    }

    fn play(&mut self, _state: &GameState, player: PlayerId, card: CardId) {
        self.record(Notice::Play { player, card });
    }

    fn buy(&mut self, _state: &GameState, player: PlayerId, card: CardId) {
        self.record(Notice::Buy { player, card });
    }

    fn gain(&mut self, _state: &GameState, player: PlayerId, card: CardId) {
        self.record(Notice::Gain { player, card });
    }

    fn no_more(&mut self, _state: &GameState, player: PlayerId, card: CardId) {
        self.record(Notice::NoMore { player, card });
    }

    fn react(&mut self, _state: &GameState, player: PlayerId, card: CardId) {
        self.record(Notice::React { player, card });
    }

    fn show_cards(&mut self, _state: &GameState, player: PlayerId, cards: &[CardId]) {
        self.record(Notice::ShowCards {
            player,
            cards: cards.to_vec(),
        });
    }

    fn trash(&mut self, _state: &GameState, player: PlayerId, cards: &[CardId]) {
        self.record(Notice::Trash {
            player,
            cards: cards.to_vec(),
        });
    }

    fn complete_action(&mut self, state: &GameState, _viewer: PlayerId) {
        self.record(Notice::CompleteAction {
            player: state.turn.player,
        });
    }

    fn end_game(&mut self, _state: &GameState) {
        self.record(Notice::EndGame);
    }

    fn notify(&mut self, _state: &GameState, player: PlayerId, message: &str) {
        self.record(Notice::Notify {
            player,
            message: message.to_string(),
        });
    }
}
