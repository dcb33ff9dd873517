//! The turn state machine.
//!
//! A turn runs in this order, with an event checkpoint at every `*`:
//!
//! 1. reset the turn counters, `*`
//! 2. action phase: while the player has actions and action cards, they
//!    pick one (or stop); it moves to play, `*`, its effect runs unless
//!    suppressed, and an action is spent
//! 3. buy phase: every treasure in hand is played, `*` after each
//! 4. while coins, buys and affordable cards remain, the player picks one
//!    (or stops), `*`, it goes to the discard pile and is paid for
//! 5. `*`, cleanup draws a new hand, and play passes to the next seat

use log::{debug, info};

use super::engine::Game;
use super::result::GameResult;
use crate::cards::Tag;
use crate::core::{Phase, PlayerId};

impl Game {
    /// Start `player`'s turn: bump the counter and reset actions, buys, coins.
    pub fn init_turn(&mut self, player: PlayerId) {
        self.state.turn.begin(player);
    }

    /// Who plays the next turn.
    #[must_use]
    pub fn upcoming_player(&self) -> PlayerId {
        if self.state.turn.count == 0 {
            PlayerId::new(0)
        } else {
            self.state.turn.player.next(self.state.player_count())
        }
    }

    /// Play one full turn for the upcoming player.
    pub fn play_turn(&mut self) {
        let player = self.upcoming_player();
        self.init_turn(player);
        info!(
            "turn {} begins for {}",
            self.state.turn.count,
            self.state.player(player).name
        );
        self.broadcast(|o, s, viewer| o.begin_turn(s, viewer));
        self.process_events();

        self.action_phase(player);
        self.buy_phase(player);

        self.process_events();
        self.state.deck_mut(player).end_turn();
    }

    fn action_phase(&mut self, player: PlayerId) {
        let registry = self.state.registry_handle();
        while self.state.turn.actions > 0 {
            let playable = self.state.player(player).hand_with(&registry, Tag::Action);
            let Some(card) = self.choose_play(player, &playable) else {
                break;
            };

            self.state.turn.record_play(card, true);
            self.state.deck_mut(player).play(card);
            debug!("{} plays {}", self.state.player(player).name, registry[card].name);
            self.broadcast(|o, s, _| o.play(s, player, card));
            self.process_events();

            if self.state.turn.take_suppression() {
                debug!("effect of {} suppressed", registry[card].name);
            } else {
                self.perform_action(player, card);
            }
            self.broadcast(|o, s, viewer| o.complete_action(s, viewer));
            self.state.turn.actions = self.state.turn.actions.saturating_sub(1);
        }
    }

    fn buy_phase(&mut self, player: PlayerId) {
        let registry = self.state.registry_handle();
        self.state.turn.phase = Phase::Buy;

        let treasures = self.state.player(player).hand_with(&registry, Tag::Treasure);
        for card in treasures {
            self.state.turn.record_play(card, false);
            self.state.deck_mut(player).play(card);
            self.broadcast(|o, s, _| o.play(s, player, card));
            self.process_events();
            self.state.turn.coins += registry[card].treasure;
        }

        while self.state.turn.coins > 0 && self.state.turn.buys > 0 {
            let affordable = self.affordable();
            let Some(card) = self.choose_buy(player, &affordable) else {
                break;
            };

            info!(
                "{} buys {} with {} coins",
                self.state.player(player).name,
                registry[card].name,
                self.state.turn.coins
            );
            self.broadcast(|o, s, _| o.buy(s, player, card));
            self.process_events();

            self.state.deck_mut(player).discard_pile.push(card);
            self.state.supply.take(card);
            self.state.turn.coins = self.state.turn.coins.saturating_sub(registry[card].cost);
            self.state.turn.buys -= 1;
        }
    }

    /// Play turns until the game is over and return the outcome.
    pub fn run(&mut self) -> GameResult {
        info!("game begins with {} players", self.state.player_count());
        self.broadcast(|o, s, _| o.begin_game(s));

        while !self.is_over() {
            self.play_turn();
        }

        self.broadcast(|o, s, _| o.end_game(s));
        let result = GameResult::from_state(&self.state);
        info!("game over after {} turns: {:?}", self.state.turn.count, result);
        result
    }
}
