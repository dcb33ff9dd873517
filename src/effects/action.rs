//! Composable card effects.
//!
//! An `Action` pairs a human-readable description with an effect over the
//! game. Actions are cheap to clone (the effect is shared) and may be run any
//! number of times.
//!
//! ## Combinators
//!
//! - `sequence`: run several actions in order
//! - `choice`: let the acting player pick exactly one alternative
//! - `for_each_other`: apply an action to every other player
//! - `attack`: resolve reactions, then reward the attacker and hit the victims
//!
//! Combinators only route control; all state changes happen in the actions
//! they wrap.

use std::rc::Rc;

use super::reactions::resolve_reactions;
use crate::cards::CardId;
use crate::core::PlayerId;
use crate::game::Game;

type Effect = dyn Fn(&mut Game, PlayerId, Option<CardId>);

/// A described effect.
///
/// The effect receives the game, the player performing it, and the card it
/// comes from, if any.
#[derive(Clone)]
pub struct Action {
    description: String,
    effect: Rc<Effect>,
}

impl Action {
    /// Create an action from a description and an effect.
    pub fn new<F>(description: impl Into<String>, effect: F) -> Self
    where
        F: Fn(&mut Game, PlayerId, Option<CardId>) + 'static,
    {
        Self {
            description: description.into(),
            effect: Rc::new(effect),
        }
    }

    /// An action that does nothing and says nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new("", |_, _, _| {})
    }

    /// An action that does nothing but carries rules text.
    #[must_use]
    pub fn descriptive(text: impl Into<String>) -> Self {
        Self::new(text, |_, _, _| {})
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the effect for `player`.
    pub fn perform(&self, game: &mut Game, player: PlayerId, source: Option<CardId>) {
        (self.effect)(game, player, source);
    }

    /// `self` followed by `next`.
    #[must_use]
    pub fn then(self, next: Action) -> Action {
        sequence(vec![self, next])
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Action").field(&self.description).finish()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

fn join(actions: &[Action], separator: &str) -> String {
    actions
        .iter()
        .map(Action::description)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Run each action in order against the same player.
///
/// Panics if `actions` is empty.
#[must_use]
pub fn sequence(actions: Vec<Action>) -> Action {
    assert!(!actions.is_empty(), "sequence needs at least one action");

    Action::new(join(&actions, "; "), move |game, player, source| {
        for action in &actions {
            action.perform(game, player, source);
        }
    })
}

/// Ask the acting player to pick one alternative, then run it once.
///
/// Panics if `alternatives` is empty.
#[must_use]
pub fn choice(alternatives: Vec<Action>) -> Action {
    assert!(!alternatives.is_empty(), "choice needs at least one alternative");

    let description = format!("Choose one: {}", join(&alternatives, "; or "));
    Action::new(description, move |game, player, source| {
        let chosen = game.choose_action(player, &alternatives);
        alternatives[chosen].perform(game, player, source);
    })
}

/// Run `action` for every other player, in turn order.
#[must_use]
pub fn for_each_other(action: Action) -> Action {
    let description = format!("Each other player: {}", action.description());
    Action::new(description, move |game, player, source| {
        let others: Vec<PlayerId> = game.state.others(player).collect();
        for other in others {
            action.perform(game, other, source);
        }
    })
}

/// Let the other players react, then run `gain` for the attacker and `hit`
/// for every player who did not block.
#[must_use]
pub fn attack(gain: Action, hit: Action) -> Action {
    let description = format!("{}; {}", gain.description(), hit.description());
    Action::new(description, move |game, player, source| {
        let victims = resolve_reactions(game, player);
        gain.perform(game, player, source);
        for victim in victims {
            hit.perform(game, victim, source);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_description() {
        let a = Action::descriptive("first");
        let b = Action::descriptive("second");

        assert_eq!(sequence(vec![a, b]).description(), "first; second");
    }

    #[test]
    fn test_then_flattens_descriptions() {
        let action = Action::descriptive("a")
            .then(Action::descriptive("b"))
            .then(Action::descriptive("c"));

        assert_eq!(action.description(), "a; b; c");
    }

    #[test]
    fn test_choice_description() {
        let action = choice(vec![Action::descriptive("x"), Action::descriptive("y")]);

        assert_eq!(action.description(), "Choose one: x; or y");
    }

    #[test]
    fn test_attack_description() {
        let action = attack(Action::descriptive("+2 Cards"), Action::descriptive("gains a Curse"));

        assert_eq!(action.description(), "+2 Cards; gains a Curse");
    }

    #[test]
    fn test_noop_is_silent() {
        assert_eq!(Action::noop().description(), "");
        assert_eq!(format!("{:?}", Action::descriptive("x")), "Action(\"x\")");
    }

    #[test]
    #[should_panic(expected = "at least one action")]
    fn test_empty_sequence_panics() {
        let _ = sequence(Vec::new());
    }

    #[test]
    #[should_panic(expected = "at least one alternative")]
    fn test_empty_choice_panics() {
        let _ = choice(Vec::new());
    }
}
