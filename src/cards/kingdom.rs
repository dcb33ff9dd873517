//! Effects of the kingdom cards.
//!
//! Simple cards are one-liners over the combinators in `effects`. Cards that
//! need to look at or rearrange cards get a hand-written `Action`; cards that
//! act on later turns schedule `Event`s.

use std::rc::Rc;

use log::debug;

use super::definition::{Card, CardId, Tag};
use crate::core::{Phase, PlayerId};
use crate::effects::primitives::{
    add_actions, add_buys, add_cards, add_coins, choose_and_gain, discard_down_to, gain_card,
    gain_choice, trash_up_to,
};
use crate::effects::{attack, choice, for_each_other, resolve_reactions, sequence, Action, Placement};
use crate::game::Game;
use crate::triggers::Event;
use crate::zones::MatKind;

fn originating(event: Event, origin: Option<CardId>) -> Event {
    match origin {
        Some(card) => event.with_origin(card),
        None => event,
    }
}

/// Trash at most one card matching `criteria` from hand.
fn trash_one(game: &mut Game, player: PlayerId, criteria: impl Fn(&Card) -> bool) -> Option<CardId> {
    let registry = game.state.registry_handle();
    let trashable: Vec<CardId> = game
        .state
        .deck(player)
        .hand
        .iter()
        .copied()
        .filter(|&c| criteria(&registry[c]))
        .collect();
    let chosen = game.choose_card(player, &trashable)?;
    game.trash_from_hand(player, &[chosen]);
    Some(chosen)
}

/// `cards` minus one copy of `card`.
fn without_one(cards: &[CardId], card: CardId) -> Vec<CardId> {
    let mut rest = cards.to_vec();
    if let Some(i) = rest.iter().position(|&c| c == card) {
        rest.remove(i);
    }
    rest
}

#[must_use]
pub fn artisan() -> Action {
    sequence(vec![
        gain_choice(
            "Gain a card to your hand costing up to 5 Coins",
            |c| c.cost <= 5,
            Placement::Hand,
        ),
        Action::new(
            "Put a card from your hand onto your deck",
            |game, player, _| {
                let hand = game.state.deck(player).hand.clone();
                if let Some(&card) = game.choose_exactly(player, &hand, 1).first() {
                    let deck = game.state.deck_mut(player);
                    deck.take_from_hand(card);
                    deck.put_on_top(&[card]);
                }
            },
        ),
    ])
}

/// A revealed draw pile shorter than two cards only shows what it has.
#[must_use]
pub fn bandit(gold: CardId, copper: CardId) -> Action {
    attack(
        gain_card(gold, "Gain a Gold", Placement::DiscardPile),
        Action::new(
            "Each other player reveals the top 2 cards of their deck, trashes a revealed \
             Treasure other than Copper, and discards the rest",
            move |game, victim, _| {
                let registry = game.state.registry_handle();
                let top = game.state.deck(victim).peek(2);
                game.broadcast(|o, s, _| o.show_cards(s, victim, &top));

                let targets: Vec<CardId> = top
                    .iter()
                    .copied()
                    .filter(|&c| c != copper && registry.is(c, Tag::Treasure))
                    .collect();
                if targets.is_empty() {
                    game.state.deck_mut(victim).discard_from_draw_pile(&top);
                    return;
                }

                let chosen = game.choose_exactly(victim, &targets, 1)[0];
                game.state.deck_mut(victim).trash_from_draw_pile(&[chosen]);
                game.broadcast(|o, s, _| o.trash(s, victim, &[chosen]));
                let rest = without_one(&top, chosen);
                game.state.deck_mut(victim).discard_from_draw_pile(&rest);
            },
        ),
    )
}

#[must_use]
pub fn bureaucrat(silver: CardId) -> Action {
    attack(
        gain_card(silver, "Gain a Silver onto your deck", Placement::DrawPile),
        Action::new(
            "Each other player reveals a Victory card from their hand and puts it onto \
             their deck (or reveals a hand with no Victory cards)",
            |game, victim, _| {
                let registry = game.state.registry_handle();
                let victory = game.state.player(victim).hand_with(&registry, Tag::Victory);
                if victory.is_empty() {
                    let hand = game.state.deck(victim).hand.clone();
                    game.broadcast(|o, s, _| o.show_cards(s, victim, &hand));
                    return;
                }

                let card = game.choose_exactly(victim, &victory, 1)[0];
                game.broadcast(|o, s, _| o.show_cards(s, victim, &[card]));
                let deck = game.state.deck_mut(victim);
                deck.take_from_hand(card);
                deck.put_on_top(&[card]);
            },
        ),
    )
}

#[must_use]
pub fn cellar() -> Action {
    Action::new(
        "+1 Action; Discard any number of cards, then draw that many",
        |game, player, _| {
            game.state.turn.actions += 1;
            let hand = game.state.deck(player).hand.clone();
            let discarded = game.choose_any(player, &hand);
            let deck = game.state.deck_mut(player);
            deck.discard(&discarded);
            deck.draw(discarded.len());
        },
    )
}

#[must_use]
pub fn chapel() -> Action {
    trash_up_to(4)
}

#[must_use]
pub fn council_room() -> Action {
    sequence(vec![add_cards(4), add_buys(1), for_each_other(add_cards(1))])
}

const ENCHANTRESS_TEXT: &str = "Until your next turn, the first time each other player plays an \
     Action card on their turn, they get +1 Card and +1 Action instead of following its \
     instructions. At the start of your next turn, +2 Cards.";

/// Replaces the first action of each victim's turn until `owner` plays
/// again. Each firing reschedules a copy that ignores the rest of the
/// current turn.
fn enchantress_event(
    origin: Option<CardId>,
    owner: PlayerId,
    since: u32,
    victims: Rc<[PlayerId]>,
) -> Event {
    let hit = Rc::clone(&victims);
    let event = Event::new(
        "[Enchantress] the first time each other player plays an Action card on their turn, \
         they get +1 Card and +1 Action instead of following its instructions",
        move |game: &mut Game| {
            let active = game.state.turn.player;
            game.state.deck_mut(active).draw(1);
            game.state.turn.actions += 1;
            game.state.turn.suppress_next_action = true;
            let now = game.state.turn.count;
            game.schedule(enchantress_event(origin, owner, now, victims));
        },
    )
    .expires_when(move |s| s.turn.count > since && s.turn.player == owner)
    .triggers_when(move |s| {
        s.turn.count > since
            && hit.contains(&s.turn.player)
            && s.turn.phase == Phase::Action
            && s.turn.actions_played == 1
            && s.turn.played.is_some()
    });
    originating(event, origin)
}

fn enchantress_completion_event(origin: Option<CardId>, owner: PlayerId, since: u32) -> Event {
    let event = Event::new(
        "[Enchantress] At the start of your next turn, +2 Cards",
        move |game: &mut Game| game.state.deck_mut(owner).draw(2),
    )
    .triggers_when(move |s| s.turn.count > since && s.turn.player == owner);
    originating(event, origin)
}

#[must_use]
pub fn enchantress() -> Action {
    Action::new(ENCHANTRESS_TEXT, |game, player, source| {
        let victims: Rc<[PlayerId]> = resolve_reactions(game, player).into();
        let now = game.state.turn.count;
        game.schedule(enchantress_event(source, player, now, victims));
        game.schedule(enchantress_completion_event(source, player, now));
    })
}

#[must_use]
pub fn festival() -> Action {
    sequence(vec![add_actions(2), add_buys(1), add_coins(2)])
}

#[must_use]
pub fn harbinger() -> Action {
    sequence(vec![
        add_cards(1),
        add_actions(1),
        Action::new(
            "Look through your discard pile. You may put a card from it onto your deck",
            |game, player, _| {
                let discards = game.state.deck(player).discard_pile.clone();
                if let Some(card) = game.choose_card(player, &discards) {
                    let deck = game.state.deck_mut(player);
                    deck.remove_from_discard_pile(card);
                    deck.put_on_top(&[card]);
                }
            },
        ),
    ])
}

#[must_use]
pub fn horse_traders() -> Action {
    sequence(vec![
        add_buys(1),
        add_coins(3),
        Action::new("Discard 2 cards", |game, player, _| {
            let hand = game.state.deck(player).hand.clone();
            let n = hand.len().min(2);
            let chosen = game.choose_exactly(player, &hand, n);
            game.state.deck_mut(player).discard(&chosen);
        }),
    ])
}

fn horse_traders_event(owner: PlayerId, card: CardId) -> Event {
    Event::new(
        "[Horse Traders] At the start of your next turn, +1 Card and return your Horse \
         Traders card to your hand",
        move |game: &mut Game| {
            let deck = game.state.deck_mut(owner);
            deck.draw(1);
            deck.take_from_aside(card);
            deck.hand.push(card);
        },
    )
    .with_origin(card)
    .triggers_when(move |s| s.turn.player == owner)
}

/// Sets the card aside until the reacting player's next turn.
#[must_use]
pub fn horse_traders_reaction() -> Action {
    Action::new(
        "When another player plays an Attack card, you may first set this aside from your \
         hand. If you do, then at the start of your next turn, +1 Card and return this to \
         your hand",
        |game, player, source| {
            let Some(card) = source else {
                debug!("horse traders reaction without a card to set aside");
                return;
            };
            let deck = game.state.deck_mut(player);
            deck.take_from_hand(card);
            deck.aside.push(card);
            game.schedule(horse_traders_event(player, card));
        },
    )
}

#[must_use]
pub fn laboratory() -> Action {
    add_cards(1).then(add_actions(1))
}

/// Skipped Action cards wait in `aside` and are discarded at the end.
#[must_use]
pub fn library() -> Action {
    Action::new(
        "Draw until you have 7 cards in hand, skipping any Action cards you choose to; set \
         those aside, discarding them afterwards",
        |game, player, _| {
            let registry = game.state.registry_handle();
            let mut skipped = Vec::new();
            while game.state.deck(player).hand.len() < 7 {
                let Some(card) = game.state.deck_mut(player).next() else {
                    break;
                };
                let keep = !registry.is(card, Tag::Action)
                    || game.choose_card(player, &[card]).is_some();
                let deck = game.state.deck_mut(player);
                if keep {
                    deck.hand.push(card);
                } else {
                    deck.aside.push(card);
                    skipped.push(card);
                }
            }

            let deck = game.state.deck_mut(player);
            for card in skipped {
                deck.take_from_aside(card);
                deck.discard_pile.push(card);
            }
        },
    )
}

#[must_use]
pub fn market() -> Action {
    sequence(vec![add_cards(1), add_actions(1), add_buys(1), add_coins(1)])
}

fn merchant_event(origin: Option<CardId>, turn: u32, silver: CardId) -> Event {
    let event = Event::new(
        format!("[Merchant] The first time you play a Silver this turn ({turn}), +1 Coin"),
        |game: &mut Game| game.state.turn.coins += 1,
    )
    .expires_when(move |s| s.turn.count > turn)
    .triggers_when(move |s| s.turn.played == Some(silver));
    originating(event, origin)
}

#[must_use]
pub fn merchant(silver: CardId) -> Action {
    sequence(vec![
        add_cards(1),
        add_actions(1),
        Action::new(
            "The first time you play a Silver this turn, +1 Coin",
            move |game, _, source| {
                let now = game.state.turn.count;
                game.schedule(merchant_event(source, now, silver));
            },
        ),
    ])
}

#[must_use]
pub fn militia() -> Action {
    attack(add_coins(2), discard_down_to(3))
}

#[must_use]
pub fn mine() -> Action {
    Action::new(
        "You may trash a Treasure card from your hand and gain a Treasure card to your hand \
         costing up to 3 Coins more than it",
        |game, player, _| {
            let Some(trashed) = trash_one(game, player, |c| c.is(Tag::Treasure)) else {
                return;
            };
            let limit = game.state.card(trashed).cost + 3;
            choose_and_gain(
                game,
                player,
                &|c: &Card| c.is(Tag::Treasure) && c.cost <= limit,
                Placement::Hand,
            );
        },
    )
}

#[must_use]
pub fn moat() -> Action {
    add_cards(2)
}

#[must_use]
pub fn moat_reaction() -> Action {
    Action::descriptive(
        "When another player plays an Attack card, you may first reveal this from your hand, \
         to be unaffected by it.",
    )
}

#[must_use]
pub fn moneylender(copper: CardId) -> Action {
    Action::new(
        "You may trash a Copper from your hand for +3 Coins",
        move |game, player, _| {
            if !game.state.deck(player).hand.contains(&copper) {
                return;
            }
            if game.choose_card(player, &[copper]).is_some() {
                game.trash_from_hand(player, &[copper]);
                game.state.turn.coins += 3;
            }
        },
    )
}

#[must_use]
pub fn native_village() -> Action {
    let to_mat = Action::new(
        "Put the top card of your deck face down on your Native Village mat (you may look \
         at those cards at any time)",
        |game, player, _| {
            let owner = game.state.player_mut(player);
            if let Some(card) = owner.deck.next() {
                owner.mat_mut(MatKind::NativeVillage).cards.push(card);
            }
        },
    );
    let to_hand = Action::new(
        "put all the cards from your mat into your hand",
        |game, player, _| {
            let owner = game.state.player_mut(player);
            let cards = owner.mat_mut(MatKind::NativeVillage).take_all();
            owner.deck.hand.extend(cards);
        },
    );
    sequence(vec![add_actions(2), choice(vec![to_mat, to_hand])])
}

fn pirate_ship_coins() -> Action {
    Action::new(
        "+1 Coin per Coin token on your Pirate Ship mat",
        |game, player, _| {
            let tokens = game
                .state
                .player(player)
                .mat(MatKind::PirateShip)
                .map_or(0, |m| m.coin_tokens);
            game.state.turn.coins += tokens;
        },
    )
}

/// Only revealed Treasures can be trashed.
fn pirate_ship_raid(victims: Vec<PlayerId>) -> Action {
    Action::new(
        "Each other player reveals the top 2 cards of their deck, trashes one of those \
         Treasures that you choose, and discards the rest, and then if anyone trashed a \
         Treasure you add a Coin token to your Pirate Ship mat",
        move |game, player, _| {
            let registry = game.state.registry_handle();
            let mut plundered = false;
            for &victim in &victims {
                let top = game.state.deck(victim).peek(2);
                game.broadcast(|o, s, _| o.show_cards(s, victim, &top));

                let treasures = registry.filter_tag(&top, Tag::Treasure);
                if treasures.is_empty() {
                    game.state.deck_mut(victim).discard_from_draw_pile(&top);
                    continue;
                }

                plundered = true;
                let chosen = game.choose_exactly(player, &treasures, 1)[0];
                game.state.deck_mut(victim).trash_from_draw_pile(&[chosen]);
                game.broadcast(|o, s, _| o.trash(s, victim, &[chosen]));
                let rest = without_one(&top, chosen);
                game.state.deck_mut(victim).discard_from_draw_pile(&rest);
            }
            if plundered {
                game.state
                    .player_mut(player)
                    .mat_mut(MatKind::PirateShip)
                    .coin_tokens += 1;
            }
        },
    )
}

/// Reactions happen before the choice, so even the coin option can be
/// answered with a reaction.
#[must_use]
pub fn pirate_ship() -> Action {
    let description = format!(
        "Choose one: {}; or {}",
        pirate_ship_coins().description(),
        pirate_ship_raid(Vec::new()).description()
    );
    Action::new(description, |game, player, source| {
        let victims = resolve_reactions(game, player);
        choice(vec![pirate_ship_coins(), pirate_ship_raid(victims)]).perform(game, player, source);
    })
}

#[must_use]
pub fn poacher() -> Action {
    sequence(vec![
        add_cards(1),
        add_actions(1),
        add_coins(1),
        Action::new("Discard a card per empty Supply pile", |game, player, _| {
            let empty = game.state.supply.iter().filter(|&(_, n)| n == 0).count();
            let hand = game.state.deck(player).hand.clone();
            let n = empty.min(hand.len());
            let chosen = game.choose_exactly(player, &hand, n);
            game.state.deck_mut(player).discard(&chosen);
        }),
    ])
}

#[must_use]
pub fn remodel() -> Action {
    Action::new(
        "Trash a card from your hand; gain a card costing up to 2 Coins more than it",
        |game, player, _| {
            let Some(trashed) = trash_one(game, player, |_| true) else {
                return;
            };
            let limit = game.state.card(trashed).cost + 2;
            choose_and_gain(game, player, &|c: &Card| c.cost <= limit, Placement::DiscardPile);
        },
    )
}

#[must_use]
pub fn sentry() -> Action {
    sequence(vec![
        add_cards(1),
        add_actions(1),
        Action::new(
            "Look at the top 2 cards of your deck. Trash and/or discard any number of them. \
             Put the rest back on top in any order.",
            |game, player, _| {
                let top = game.state.deck(player).peek(2).to_vec();

                game.notify_player(player, "Which cards would you like to trash?");
                let trashed = game.choose_any(player, &top);
                if !trashed.is_empty() {
                    game.state.deck_mut(player).trash_from_draw_pile(&trashed);
                    game.broadcast(|o, s, _| o.trash(s, player, &trashed));
                }
                let mut rest = top;
                for &card in &trashed {
                    rest = without_one(&rest, card);
                }
                if rest.is_empty() {
                    return;
                }

                game.notify_player(player, "Which cards would you like to discard?");
                let discarded = game.choose_any(player, &rest);
                game.state.deck_mut(player).discard_from_draw_pile(&discarded);
                for &card in &discarded {
                    rest = without_one(&rest, card);
                }

                if let [a, b] = rest[..] {
                    game.notify_player(player, "Which card do you want to put on top first?");
                    let first = game.choose_exactly(player, &[a, b], 1)[0];
                    let second = if first == a { b } else { a };
                    // both are still the top two cards
                    let deck = game.state.deck_mut(player);
                    let keep = deck.draw_pile.len() - 2;
                    deck.draw_pile.truncate(keep);
                    deck.put_on_top(&[first, second]);
                }
            },
        ),
    ])
}

#[must_use]
pub fn smithy() -> Action {
    add_cards(3)
}

/// The doubled card is not recorded as a new play of the turn.
#[must_use]
pub fn throne_room() -> Action {
    Action::new(
        "You may play an Action card from your hand twice",
        |game, player, _| {
            let registry = game.state.registry_handle();
            let actions = game.state.player(player).hand_with(&registry, Tag::Action);
            let Some(card) = game.choose_card(player, &actions) else {
                return;
            };
            game.state.deck_mut(player).play(card);
            for _ in 0..2 {
                game.broadcast(|o, s, _| o.play(s, player, card));
                game.perform_action(player, card);
            }
        },
    )
}

#[must_use]
pub fn vassal() -> Action {
    add_coins(2).then(Action::new(
        "Discard the top card of your deck. If it's an Action card, you may play it.",
        |game, player, _| {
            let Some(card) = game.state.deck_mut(player).next() else {
                return;
            };
            game.broadcast(|o, s, _| o.show_cards(s, player, &[card]));
            let play = game.state.card(card).is(Tag::Action)
                && game.choose_card(player, &[card]).is_some();
            if play {
                game.state.deck_mut(player).in_play.push(card);
                game.broadcast(|o, s, _| o.play(s, player, card));
                game.perform_action(player, card);
            } else {
                game.state.deck_mut(player).discard_pile.push(card);
            }
        },
    ))
}

#[must_use]
pub fn village() -> Action {
    add_cards(1).then(add_actions(2))
}

#[must_use]
pub fn witch(curse: CardId) -> Action {
    attack(
        add_cards(2),
        gain_card(curse, "Each other player gains a Curse", Placement::DiscardPile),
    )
}

#[must_use]
pub fn workshop() -> Action {
    gain_choice(
        "Gain a card costing up to 4 Coins",
        |c| c.cost <= 4,
        Placement::DiscardPile,
    )
}
