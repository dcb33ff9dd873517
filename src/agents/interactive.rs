//! A human player at a terminal.
//!
//! Card prompts list the candidates by index:
//!
//! ```text
//!     Select from 0 to 1 cards [p N for details; s to skip]:
//!         0|Copper T C0|T1|V0
//!         1|Silver T C3|T2|V0
//!     Selection:
//! ```
//!
//! The player answers with space-separated indices, `s` to skip, or `p N` to
//! print card N's rules text. Anything else is rejected and asked again.

use std::fmt;
use std::io::{BufRead, Write};

use log::{error, warn};
use thiserror::Error;

use super::strategy::Strategy;
use crate::cards::CardId;
use crate::core::{GameState, PlayerId};
use crate::effects::Action;

/// Why an answer was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please enter 0-{max} or s to skip")]
    NotAnIndex { max: usize },

    #[error("Please enter 0-{max}")]
    OutOfRange { max: usize },

    #[error("Please select from {at_least} to {at_most} cards")]
    WrongCount { at_least: usize, at_most: usize },

    #[error("Invalid selection.")]
    InvalidDetails,
}

/// A parsed line of card-prompt input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Skip,
    Details(usize),
    Select(Vec<usize>),
}

/// Parse an answer to a card prompt with `len` candidates.
pub fn parse_command(line: &str, len: usize) -> Result<Command, SelectionError> {
    let line = line.trim();
    let max = len.saturating_sub(1);

    if line.starts_with('s') {
        return Ok(Command::Skip);
    }
    if let Some(rest) = line.strip_prefix('p') {
        return match rest.trim().parse::<usize>() {
            Ok(n) if n < len => Ok(Command::Details(n)),
            _ => Err(SelectionError::InvalidDetails),
        };
    }
    if !line.is_empty() && !line.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(SelectionError::NotAnIndex { max });
    }

    line.split_whitespace()
        .map(|word| match word.parse::<usize>() {
            Ok(n) if n < len => Ok(n),
            _ => Err(SelectionError::NotAnIndex { max }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Command::Select)
}

/// Check an index selection against the allowed count.
pub fn check_count(indices: &[usize], at_least: usize, at_most: usize) -> Result<(), SelectionError> {
    let mut unique = indices.to_vec();
    unique.sort_unstable();
    unique.dedup();
    if unique.len() != indices.len() || indices.len() < at_least || indices.len() > at_most {
        return Err(SelectionError::WrongCount { at_least, at_most });
    }
    Ok(())
}

/// Parse an answer to an action prompt with `len` alternatives.
pub fn parse_action(line: &str, len: usize) -> Result<usize, SelectionError> {
    match line.trim().parse::<usize>() {
        Ok(n) if n < len => Ok(n),
        _ => Err(SelectionError::OutOfRange {
            max: len.saturating_sub(1),
        }),
    }
}

/// Reads answers from `input` and writes prompts to `output`.
///
/// When input runs out, every prompt gets the smallest legal answer.
pub struct CliStrategy<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> CliStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Give back the output, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(text).and_then(|()| self.output.flush()) {
            warn!("cannot write prompt: {e}");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                error!("input closed; making minimal choices from now on");
                self.closed = true;
                None
            }
            Ok(_) => Some(line),
            Err(e) => {
                error!("cannot read input: {e}");
                self.closed = true;
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for CliStrategy<R, W> {
    fn choose_action(&mut self, _state: &GameState, _player: PlayerId, actions: &[Action]) -> usize {
        if actions.len() == 1 {
            return 0;
        }
        self.say(format_args!("    Choose one action to perform:\n"));
        for (i, action) in actions.iter().enumerate() {
            self.say(format_args!("        {i}|{action}\n"));
        }
        self.say(format_args!("    Selection: "));
        loop {
            let Some(line) = self.read_line() else {
                return 0;
            };
            match parse_action(&line, actions.len()) {
                Ok(n) => return n,
                Err(e) => self.say(format_args!("    ! {e}: ")),
            }
        }
    }

    fn choose_cards(
        &mut self,
        state: &GameState,
        player: PlayerId,
        cards: &[CardId],
        at_least: usize,
        at_most: usize,
    ) -> Vec<CardId> {
        let deck = state.deck(player);
        self.say(format_args!(
            "    Select from {at_least} to {at_most} cards [p N for details; s to skip]:\n"
        ));
        for (i, &card) in cards.iter().enumerate() {
            let label = state.card(card).label(deck);
            self.say(format_args!("        {i}|{label}\n"));
        }
        self.say(format_args!("    Selection: "));

        loop {
            let Some(line) = self.read_line() else {
                return cards[..at_least].to_vec();
            };
            let indices = match parse_command(&line, cards.len()) {
                Ok(Command::Skip) => Vec::new(),
                Ok(Command::Details(n)) => {
                    let details = state.card(cards[n]).details(deck);
                    self.say(format_args!("        {details}\n    Selection: "));
                    continue;
                }
                Ok(Command::Select(indices)) => indices,
                Err(e) => {
                    self.say(format_args!("    ! {e}: "));
                    continue;
                }
            };
            match check_count(&indices, at_least, at_most) {
                Ok(()) => return indices.into_iter().map(|i| cards[i]).collect(),
                Err(e) => self.say(format_args!("    ! {e}: ")),
            }
        }
    }

    fn choose_play(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) -> Option<CardId> {
        self.say(format_args!("  Actions: {}\n", state.turn.actions));
        let card = self.choose_cards(state, player, cards, 0, 1).first().copied();
        if card.is_none() {
            self.say(format_args!("    Skip...\n"));
        }
        card
    }

    fn choose_buy(&mut self, state: &GameState, player: PlayerId, cards: &[CardId]) -> Option<CardId> {
        self.say(format_args!(
            "  Buys: {}  Coins: {}\n",
            state.turn.buys, state.turn.coins
        ));
        let card = self.choose_cards(state, player, cards, 0, 1).first().copied();
        if card.is_none() {
            self.say(format_args!("    Skip...\n"));
        }
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skip_and_details() {
        assert_eq!(parse_command("s", 3), Ok(Command::Skip));
        assert_eq!(parse_command("skip\n", 3), Ok(Command::Skip));
        assert_eq!(parse_command("p 2", 3), Ok(Command::Details(2)));
        assert_eq!(parse_command("p2", 3), Ok(Command::Details(2)));
        assert_eq!(parse_command("p 3", 3), Err(SelectionError::InvalidDetails));
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(parse_command("0 2\n", 3), Ok(Command::Select(vec![0, 2])));
        assert_eq!(parse_command("", 3), Ok(Command::Select(vec![])));
        assert_eq!(parse_command("5", 3), Err(SelectionError::NotAnIndex { max: 2 }));
        assert_eq!(parse_command("x", 3), Err(SelectionError::NotAnIndex { max: 2 }));
    }

    #[test]
    fn test_check_count() {
        assert!(check_count(&[0], 0, 1).is_ok());
        assert!(check_count(&[], 0, 1).is_ok());
        assert_eq!(
            check_count(&[], 1, 1),
            Err(SelectionError::WrongCount { at_least: 1, at_most: 1 })
        );
        assert!(check_count(&[0, 0], 0, 2).is_err());
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("1\n", 2), Ok(1));
        assert_eq!(parse_action("2", 2), Err(SelectionError::OutOfRange { max: 1 }));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SelectionError::NotAnIndex { max: 4 }.to_string(),
            "Please enter 0-4 or s to skip"
        );
        assert_eq!(
            SelectionError::WrongCount { at_least: 2, at_most: 2 }.to_string(),
            "Please select from 2 to 2 cards"
        );
    }
}
