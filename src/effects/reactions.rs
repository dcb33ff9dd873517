//! Attack/reaction resolution.
//!
//! Before an attack lands, every other player gets one chance, in turn order,
//! to reveal reaction cards from hand. Each revealed card's reaction runs
//! immediately. Revealing a Block card makes its holder immune to this attack.

use log::debug;

use crate::cards::Tag;
use crate::core::PlayerId;
use crate::game::Game;

/// Prompt for reactions and return the players the attack still hits, in
/// turn order.
pub fn resolve_reactions(game: &mut Game, attacker: PlayerId) -> Vec<PlayerId> {
    let registry = game.state.registry_handle();
    let others: Vec<PlayerId> = game.state.others(attacker).collect();
    let mut victims = Vec::with_capacity(others.len());

    for other in others {
        let reactions = game.state.player(other).hand_with(&registry, Tag::Reaction);
        if reactions.is_empty() {
            victims.push(other);
            continue;
        }

        game.notify_player(other, "Choose reaction(s)");
        let revealed = game.choose_any(other, &reactions);
        for &card in &revealed {
            game.broadcast(|o, s, _| o.react(s, other, card));
            game.perform_reaction(other, card);
        }

        if revealed.iter().any(|&c| registry.is(c, Tag::Block)) {
            debug!("{} blocks the attack", game.state.player(other).name);
        } else {
            victims.push(other);
        }
    }

    debug!(
        "attack by {} hits {:?}",
        game.state.player(attacker).name,
        victims
    );
    victims
}
