//! Terminal rendering of game notifications.

use std::io::Write;

use crossterm::style::{style, Color, Stylize};
use log::warn;

use super::observer::Observer;
use crate::cards::{CardId, Tag};
use crate::core::{GameState, PlayerId};

/// Foreground and 256-color background of a notification line.
type Shade = Option<(Color, Color)>;

const PLAIN: Shade = None;
const DARK_RED: Shade = Some((Color::Grey, Color::AnsiValue(88)));
const LIGHT_BLUE: Shade = Some((Color::Black, Color::AnsiValue(195)));
const LIGHT_GRAY: Shade = Some((Color::Black, Color::AnsiValue(254)));
const LIGHT_GREEN: Shade = Some((Color::Black, Color::AnsiValue(193)));
const LIGHT_ORANGE: Shade = Some((Color::Black, Color::AnsiValue(202)));
const LIGHT_PURPLE: Shade = Some((Color::Black, Color::AnsiValue(201)));
const LIGHT_RED: Shade = Some((Color::Black, Color::AnsiValue(196)));
const YELLOW: Shade = Some((Color::Black, Color::AnsiValue(229)));

/// Prints notifications for a human player.
///
/// The player's own hand is shown at the start of their turns and after each
/// action they resolve.
pub struct ConsoleObserver<W> {
    out: W,
    colors: bool,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, colors: true }
    }

    /// Print plain text without ANSI colors.
    #[must_use]
    pub fn without_colors(mut self) -> Self {
        self.colors = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, shade: Shade, text: &str) {
        let result = match shade {
            Some((fg, bg)) if self.colors => writeln!(self.out, "{}", style(text).with(fg).on(bg)),
            _ => writeln!(self.out, "{text}"),
        };
        if let Err(e) = result {
            warn!("cannot write to console: {e}");
        }
    }

    fn label(state: &GameState, player: PlayerId, card: CardId) -> String {
        state.card(card).label(state.deck(player))
    }

    fn gain_shade(state: &GameState, card: CardId) -> Shade {
        if state.card(card).is(Tag::Victory) {
            LIGHT_ORANGE
        } else {
            LIGHT_BLUE
        }
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn begin_game(&mut self, state: &GameState) {
        let piles = state.supply.describe(state.registry());
        self.line(PLAIN, &piles);
        let width = state.players.values().map(|p| p.name.len()).max().unwrap_or(0);
        for player in state.players.values() {
            let cards = state.registry().describe(&player.deck.whole(), &player.deck);
            self.line(PLAIN, &format!("{:<width$}: {}", player.name, cards));
        }
    }

    fn begin_turn(&mut self, state: &GameState, viewer: PlayerId) {
        let active = state.turn.player;
        let name = &state.player(active).name;
        let mut text = format!("{}'s ({}VP) turn", name, state.victory_points(active));
        if viewer == active {
            let deck = state.deck(active);
            text.push_str(": ");
            text.push_str(&state.registry().describe(&deck.hand, deck));
        }
        self.line(PLAIN, &text);
    }

    fn play(&mut self, state: &GameState, player: PlayerId, card: CardId) {
        let def = state.card(card);
        let shade = match (def.is(Tag::Action), def.is(Tag::Attack)) {
            (true, true) => LIGHT_RED,
            (true, false) => LIGHT_GREEN,
            _ => PLAIN,
        };
        let mut text = format!(
            "    {} plays {}",
            state.player(player).name,
            Self::label(state, player, card)
        );
        if !def.action.description().is_empty() {
            text.push_str(": ");
            text.push_str(def.action.description());
        }
        self.line(shade, &text);
    }

    fn buy(&mut self, state: &GameState, player: PlayerId, card: CardId) {
        let text = format!(
            "    {} buys {}",
            state.player(player).name,
            Self::label(state, player, card)
        );
        self.line(Self::gain_shade(state, card), &text);
    }

    fn gain(&mut self, state: &GameState, player: PlayerId, card: CardId) {
        let text = format!(
            "    {} gains a {}",
            state.player(player).name,
            Self::label(state, player, card)
        );
        self.line(Self::gain_shade(state, card), &text);
    }

    fn no_more(&mut self, state: &GameState, player: PlayerId, card: CardId) {
        let text = format!(
            "    ! There are no more {} cards",
            Self::label(state, player, card)
        );
        self.line(DARK_RED, &text);
    }

    fn react(&mut self, state: &GameState, player: PlayerId, card: CardId) {
        let text = format!(
            "    {} reveals {}",
            state.player(player).name,
            Self::label(state, player, card)
        );
        self.line(LIGHT_GRAY, &text);
    }

    fn show_cards(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) {
        let deck = state.deck(player);
        let text = format!(
            "    {} has {}",
            state.player(player).name,
            state.registry().describe(cards, deck)
        );
        self.line(YELLOW, &text);
    }

    fn trash(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) {
        let deck = state.deck(player);
        let text = format!(
            "    {} trashed {}",
            state.player(player).name,
            state.registry().describe(cards, deck)
        );
        self.line(LIGHT_PURPLE, &text);
    }

    fn complete_action(&mut self, state: &GameState, viewer: PlayerId) {
        if viewer != state.turn.player {
            return;
        }
        let player = state.player(viewer);
        let hand = state.registry().describe(&player.deck.hand, &player.deck);
        self.line(PLAIN, &format!("    New hand: {hand}"));
        for (kind, mat) in &player.mats {
            let text = format!(
                "    {} mat: {}",
                kind,
                mat.describe(state.registry(), &player.deck)
            );
            self.line(PLAIN, &text);
        }
    }

    fn end_game(&mut self, state: &GameState) {
        let mut standings: Vec<(String, i32)> = state
            .players
            .iter()
            .map(|(id, p)| (p.name.clone(), state.victory_points(id)))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));

        let Some(((winner, vp), rest)) = standings.split_first() else {
            return;
        };
        self.line(PLAIN, &format!("{winner}, with {vp} victory points, defeated"));
        if let Some(((last, last_vp), middle)) = rest.split_last() {
            for (name, vp) in middle {
                self.line(PLAIN, &format!("    {name} with {vp} victory points,"));
            }
            self.line(PLAIN, &format!("and {last} with {last_vp} victory points."));
        }
    }

    fn notify(&mut self, state: &GameState, player: PlayerId, message: &str) {
        let text = format!("    {}: {}", state.player(player).name, message);
        self.line(PLAIN, &text);
    }
}
