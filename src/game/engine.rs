//! The game object and the services effects use.
//!
//! `Game` owns the shared `GameState`, one `Seat` (strategy + observer) per
//! player, and the queue of pending events. Effects receive `&mut Game` and go
//! through the methods here to ask players for decisions, gain and trash
//! cards, notify observers, and schedule events.
//!
//! ## Decisions
//!
//! The `choose_*` wrappers clamp the request to what is possible, skip the
//! question when every candidate must be taken, and check the answer. A
//! strategy that answers illegally panics the game.

use log::{debug, info};

use crate::agents::{is_valid_selection, Observer, SilentObserver, Strategy};
use crate::cards::{CardId, Tag};
use crate::core::{GameState, PlayerId, PlayerMap};
use crate::effects::{Action, Placement};
use crate::triggers::{Event, EventQueue};

/// A player's decision maker and observer.
pub struct Seat {
    pub strategy: Box<dyn Strategy>,
    pub observer: Box<dyn Observer>,
}

impl Seat {
    pub fn new(strategy: impl Strategy + 'static, observer: impl Observer + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            observer: Box::new(observer),
        }
    }

    /// A seat that makes choices but shows nothing.
    pub fn bot(strategy: impl Strategy + 'static) -> Self {
        Self::new(strategy, SilentObserver)
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat").finish_non_exhaustive()
    }
}

/// A game in progress.
pub struct Game {
    pub state: GameState,
    seats: PlayerMap<Seat>,
    events: EventQueue,
}

impl Game {
    /// Assemble a game. `seats` must be in the same order as `state.players`.
    pub fn new(state: GameState, seats: PlayerMap<Seat>) -> Self {
        assert_eq!(
            state.player_count(),
            seats.player_count(),
            "every player needs exactly one seat"
        );
        Self {
            state,
            seats,
            events: EventQueue::new(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn schedule(&mut self, event: Event) {
        self.events.schedule(event);
    }

    /// Checkpoint: drop expired events, then fire the triggered ones in the
    /// order they were scheduled.
    pub fn process_events(&mut self) {
        let due = self.events.take_due(&self.state);
        for event in due {
            let player = self.state.turn.player;
            let message = event.description().to_string();
            debug!("firing {event}");
            self.broadcast(|o, s, _| o.notify(s, player, &message));
            event.fire(self);
        }
    }

    /// Call `f` with every seat's observer, in turn order.
    pub fn broadcast<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut dyn Observer, &GameState, PlayerId),
    {
        for (viewer, seat) in self.seats.iter_mut() {
            f(seat.observer.as_mut(), &self.state, viewer);
        }
    }

    /// Send `message` to `player`'s observer only.
    pub fn notify_player(&mut self, player: PlayerId, message: &str) {
        self.seats[player].observer.notify(&self.state, player, message);
    }

    /// Ask `player` to pick one of `actions`; returns its index.
    pub fn choose_action(&mut self, player: PlayerId, actions: &[Action]) -> usize {
        assert!(!actions.is_empty(), "no actions to choose from");
        let chosen = self.seats[player]
            .strategy
            .choose_action(&self.state, player, actions);
        if chosen >= actions.len() {
            panic!(
                "{} chose action {} of {}",
                self.state.player(player).name,
                chosen,
                actions.len()
            );
        }
        chosen
    }

    /// Ask `player` for between `at_least` and `at_most` of `cards`.
    ///
    /// `at_most` is clamped to the number of candidates. If every candidate
    /// must be chosen, the player is not asked.
    pub fn choose_cards(
        &mut self,
        player: PlayerId,
        cards: &[CardId],
        at_least: usize,
        at_most: usize,
    ) -> Vec<CardId> {
        let at_most = at_most.min(cards.len());
        assert!(
            at_least <= at_most,
            "cannot choose {} of {} cards",
            at_least,
            cards.len()
        );
        if at_least == cards.len() {
            return cards.to_vec();
        }

        let chosen = self.seats[player]
            .strategy
            .choose_cards(&self.state, player, cards, at_least, at_most);
        if !is_valid_selection(cards, &chosen, at_least, at_most) {
            panic!(
                "{} chose {:?} from {:?}, allowed {}..={}",
                self.state.player(player).name,
                chosen,
                cards,
                at_least,
                at_most
            );
        }
        chosen
    }

    /// Zero or one card.
    pub fn choose_card(&mut self, player: PlayerId, cards: &[CardId]) -> Option<CardId> {
        self.choose_cards(player, cards, 0, 1).first().copied()
    }

    /// Any number of cards.
    pub fn choose_any(&mut self, player: PlayerId, cards: &[CardId]) -> Vec<CardId> {
        self.choose_cards(player, cards, 0, cards.len())
    }

    pub fn choose_up_to(&mut self, player: PlayerId, cards: &[CardId], n: usize) -> Vec<CardId> {
        self.choose_cards(player, cards, 0, n)
    }

    pub fn choose_exactly(&mut self, player: PlayerId, cards: &[CardId], n: usize) -> Vec<CardId> {
        self.choose_cards(player, cards, n, n)
    }

    fn check_single(&self, player: PlayerId, cards: &[CardId], chosen: Option<CardId>) {
        if let Some(card) = chosen {
            if !cards.contains(&card) {
                panic!(
                    "{} chose {} which was not offered",
                    self.state.player(player).name,
                    card
                );
            }
        }
    }

    /// Ask the active player which action card to play next.
    pub fn choose_play(&mut self, player: PlayerId, cards: &[CardId]) -> Option<CardId> {
        if cards.is_empty() {
            return None;
        }
        let chosen = self.seats[player].strategy.choose_play(&self.state, player, cards);
        self.check_single(player, cards, chosen);
        chosen
    }

    /// Ask the active player which card to buy next.
    pub fn choose_buy(&mut self, player: PlayerId, cards: &[CardId]) -> Option<CardId> {
        if cards.is_empty() {
            return None;
        }
        let chosen = self.seats[player].strategy.choose_buy(&self.state, player, cards);
        self.check_single(player, cards, chosen);
        chosen
    }

    /// Take `card` from the supply and put it where `placement` says.
    ///
    /// Returns `false`, after telling everyone, if the pile is empty.
    pub fn gain(&mut self, player: PlayerId, card: CardId, placement: Placement) -> bool {
        if !self.state.supply.has(card) {
            debug!("no {} left for {}", self.state.card(card).name, self.state.player(player).name);
            self.broadcast(|o, s, _| o.no_more(s, player, card));
            return false;
        }

        self.state.supply.take(card);
        let deck = self.state.deck_mut(player);
        match placement {
            Placement::DiscardPile => deck.discard_pile.push(card),
            Placement::DrawPile => deck.put_on_top(&[card]),
            Placement::Hand => deck.hand.push(card),
        }
        info!(
            "{} gains {} to {:?}",
            self.state.player(player).name,
            self.state.card(card).name,
            placement
        );
        self.broadcast(|o, s, _| o.gain(s, player, card));
        true
    }

    /// Trash cards from `player`'s hand and tell everyone.
    pub fn trash_from_hand(&mut self, player: PlayerId, cards: &[CardId]) {
        if cards.is_empty() {
            return;
        }
        self.state.deck_mut(player).trash(cards);
        self.broadcast(|o, s, _| o.trash(s, player, cards));
    }

    /// Run `card`'s primary effect for `player`.
    ///
    /// Panics unless `card` is an Action card.
    pub fn perform_action(&mut self, player: PlayerId, card: CardId) {
        let registry = self.state.registry_handle();
        let def = &registry[card];
        assert!(def.is(Tag::Action), "{} is not an Action card", def.name);
        def.action.perform(self, player, Some(card));
    }

    /// Run `card`'s reaction for `player`.
    ///
    /// Panics unless `card` is a Reaction card.
    pub fn perform_reaction(&mut self, player: PlayerId, card: CardId) {
        let registry = self.state.registry_handle();
        let def = &registry[card];
        assert!(def.is(Tag::Reaction), "{} is not a Reaction card", def.name);
        if let Some(reaction) = &def.reaction {
            reaction.perform(self, player, Some(card));
        }
    }

    /// Every player except `player`, in turn order.
    #[must_use]
    pub fn others(&self, player: PlayerId) -> Vec<PlayerId> {
        self.state.others(player).collect()
    }

    /// Supply cards buyable with the active player's coins.
    #[must_use]
    pub fn affordable(&self) -> Vec<CardId> {
        self.state.affordable(self.state.turn.coins)
    }

    #[must_use]
    pub fn victory_points(&self, player: PlayerId) -> i32 {
        self.state.victory_points(player)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.state.turn)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
