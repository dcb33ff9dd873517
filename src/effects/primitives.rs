//! Primitive actions that card effects are built from.
//!
//! Counter primitives (`add_actions`, `add_buys`, `add_coins`) change the turn
//! in progress. Card primitives act on the deck of the player performing the
//! action, which is not necessarily the player whose turn it is.

use serde::{Deserialize, Serialize};

use super::action::Action;
use crate::cards::{Card, CardId};
use crate::core::PlayerId;
use crate::game::Game;

/// Where a gained card goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    DiscardPile,
    /// On top of the draw pile.
    DrawPile,
    Hand,
}

/// `+1 Card`, `+3 Cards`.
fn describe_add(n: u32, thing: &str) -> String {
    if n == 1 {
        format!("+{n} {thing}")
    } else {
        format!("+{n} {thing}s")
    }
}

#[must_use]
pub fn add_actions(n: u32) -> Action {
    Action::new(describe_add(n, "Action"), move |game, _, _| {
        game.state.turn.actions += n;
    })
}

#[must_use]
pub fn add_buys(n: u32) -> Action {
    Action::new(describe_add(n, "Buy"), move |game, _, _| {
        game.state.turn.buys += n;
    })
}

#[must_use]
pub fn add_coins(n: u32) -> Action {
    Action::new(describe_add(n, "Coin"), move |game, _, _| {
        game.state.turn.coins += n;
    })
}

/// Draw `n` cards.
#[must_use]
pub fn add_cards(n: u32) -> Action {
    Action::new(describe_add(n, "Card"), move |game, player, _| {
        game.state.deck_mut(player).draw(n as usize);
    })
}

/// Gain a specific card from the supply.
#[must_use]
pub fn gain_card(card: CardId, description: impl Into<String>, placement: Placement) -> Action {
    Action::new(description, move |game, player, _| {
        game.gain(player, card, placement);
    })
}

/// Gain a supply card of the player's choosing among those matching `criteria`.
#[must_use]
pub fn gain_choice<F>(description: impl Into<String>, criteria: F, placement: Placement) -> Action
where
    F: Fn(&Card) -> bool + 'static,
{
    Action::new(description, move |game, player, _| {
        choose_and_gain(game, player, &criteria, placement);
    })
}

/// Offer every non-empty supply pile matching `criteria` and gain the pick.
///
/// Returns the gained card, or `None` if nothing matched or the player declined.
pub fn choose_and_gain(
    game: &mut Game,
    player: PlayerId,
    criteria: &dyn Fn(&Card) -> bool,
    placement: Placement,
) -> Option<CardId> {
    let registry = game.state.registry_handle();
    let gainable = game.state.supply.matching(|c| criteria(&registry[c]));
    let chosen = game.choose_card(player, &gainable)?;
    game.gain(player, chosen, placement).then_some(chosen)
}

/// Trash up to `n` cards from hand.
#[must_use]
pub fn trash_up_to(n: usize) -> Action {
    let description = format!("Trash up to {n} cards from your hand");
    Action::new(description, move |game, player, _| {
        let hand = game.state.deck(player).hand.clone();
        let chosen = game.choose_up_to(player, &hand, n);
        game.trash_from_hand(player, &chosen);
    })
}

/// Discard until `n` cards remain in hand.
#[must_use]
pub fn discard_down_to(n: usize) -> Action {
    let description = format!("Discard down to {n} cards in hand");
    Action::new(description, move |game, player, _| {
        let hand = game.state.deck(player).hand.clone();
        if hand.len() > n {
            let chosen = game.choose_exactly(player, &hand, hand.len() - n);
            game.state.deck_mut(player).discard(&chosen);
        }
    })
}

/// Rules text with no effect of its own.
#[must_use]
pub fn descriptive(text: impl Into<String>) -> Action {
    Action::descriptive(text)
}

#[must_use]
pub fn noop() -> Action {
    Action::noop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(add_actions(1).description(), "+1 Action");
        assert_eq!(add_actions(2).description(), "+2 Actions");
        assert_eq!(add_buys(1).description(), "+1 Buy");
        assert_eq!(add_coins(3).description(), "+3 Coins");
        assert_eq!(add_cards(1).description(), "+1 Card");
        assert_eq!(trash_up_to(4).description(), "Trash up to 4 cards from your hand");
        assert_eq!(discard_down_to(3).description(), "Discard down to 3 cards in hand");
        assert_eq!(descriptive("text").description(), "text");
    }
}
