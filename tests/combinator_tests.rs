//! Action combinator tests.
//!
//! These tests run combinators against a real game:
//! - `sequence` runs its parts in order against the updated state
//! - `choice` asks the acting player and runs only the pick
//! - `for_each_other` visits every other player in turn order
//! - Gain primitives respect placements and empty piles

use std::cell::RefCell;
use std::rc::Rc;

use kingdom_engine::agents::{Notice, ScriptedStrategy, Transcript};
use kingdom_engine::cards::Catalog;
use kingdom_engine::core::{GameConfig, PlayerId};
use kingdom_engine::effects::primitives::{add_cards, add_coins, gain_card, gain_choice, trash_up_to};
use kingdom_engine::effects::{choice, for_each_other, sequence, Action, Placement};
use kingdom_engine::game::{Game, GameBuilder};

fn game_with(scripts: Vec<ScriptedStrategy>) -> (Game, Transcript) {
    let transcript = Transcript::new();
    let config = GameConfig::default().with_kingdom_piles(0);
    let mut builder = GameBuilder::new(11).with_config(config).keep_seat_order();
    for (i, script) in scripts.into_iter().enumerate() {
        builder = builder.with_player(format!("P{i}"), script, transcript.clone());
    }
    let mut game = builder.build().unwrap();
    game.init_turn(PlayerId::new(0));
    (game, transcript)
}

fn p(n: u8) -> PlayerId {
    PlayerId::new(n)
}

/// The second action sees what the first one did.
#[test]
fn test_sequence_runs_in_order() {
    let (mut game, _) = game_with(vec![ScriptedStrategy::new()]);
    let double_coins = Action::new("double coins", |game, _, _| game.state.turn.coins *= 2);

    sequence(vec![add_coins(3), double_coins]).perform(&mut game, p(0), None);

    assert_eq!(game.state.turn.coins, 6);
}

/// Only the chosen alternative runs, every time.
#[test]
fn test_choice_runs_only_the_pick() {
    let script = ScriptedStrategy::new().then_action(1).then_action(1).then_action(1);
    let (mut game, _) = game_with(vec![script]);
    let ran = Rc::new(RefCell::new(Vec::new()));

    let first = {
        let ran = Rc::clone(&ran);
        Action::new("first", move |_, _, _| ran.borrow_mut().push("first"))
    };
    let second = {
        let ran = Rc::clone(&ran);
        Action::new("second", move |_, _, _| ran.borrow_mut().push("second"))
    };
    let action = choice(vec![first, second]);

    for _ in 0..3 {
        action.perform(&mut game, p(0), None);
    }

    assert_eq!(*ran.borrow(), vec!["second"; 3]);
}

/// Other players are visited in turn order, skipping the actor.
#[test]
fn test_for_each_other_order() {
    let scripts = vec![ScriptedStrategy::new(); 4];
    let (mut game, _) = game_with(scripts);
    let visited = Rc::new(RefCell::new(Vec::new()));

    let record = {
        let visited = Rc::clone(&visited);
        Action::new("record", move |_, player, _| visited.borrow_mut().push(player))
    };
    for_each_other(record).perform(&mut game, p(2), None);

    assert_eq!(*visited.borrow(), vec![p(0), p(1), p(3)]);
}

/// Card primitives act on the performing player, not the active one.
#[test]
fn test_add_cards_draws_for_performer() {
    let (mut game, _) = game_with(vec![ScriptedStrategy::new(), ScriptedStrategy::new()]);
    let before = game.state.deck(p(1)).hand.len();

    add_cards(2).perform(&mut game, p(1), None);

    assert_eq!(game.state.deck(p(1)).hand.len(), before + 2);
    assert_eq!(game.state.deck(p(0)).hand.len(), 5);
}

/// Each placement puts the card where it says.
#[test]
fn test_gain_placements() {
    let (mut game, transcript) = game_with(vec![ScriptedStrategy::new()]);
    let silver = game.state.registry().by_name("Silver").unwrap();

    gain_card(silver, "gain", Placement::DrawPile).perform(&mut game, p(0), None);
    assert_eq!(game.state.deck(p(0)).draw_pile.last(), Some(&silver));

    gain_card(silver, "gain", Placement::Hand).perform(&mut game, p(0), None);
    assert!(game.state.deck(p(0)).hand.contains(&silver));

    gain_card(silver, "gain", Placement::DiscardPile).perform(&mut game, p(0), None);
    assert_eq!(game.state.deck(p(0)).discard_pile, vec![silver]);

    assert_eq!(game.state.supply.remaining(silver), Some(37));
    assert_eq!(transcript.count(|n| matches!(n, Notice::Gain { .. })), 3);
}

/// Gaining from an empty pile changes nothing but says so once.
#[test]
fn test_gain_from_empty_pile() {
    let (mut game, transcript) = game_with(vec![ScriptedStrategy::new()]);
    let curse = game.state.registry().by_name("Curse").unwrap();
    for _ in 0..10 {
        game.state.supply.take(curse);
    }
    let before = game.state.deck(p(0)).whole();

    gain_card(curse, "gain a Curse", Placement::DiscardPile).perform(&mut game, p(0), None);

    assert_eq!(game.state.supply.remaining(curse), Some(0));
    assert_eq!(game.state.deck(p(0)).whole(), before);
    assert_eq!(
        transcript.count(|n| matches!(n, Notice::NoMore { card, .. } if *card == curse)),
        1
    );
    assert_eq!(transcript.count(|n| matches!(n, Notice::Gain { .. })), 0);
}

/// Only piles matching the criteria are offered.
#[test]
fn test_gain_choice_offers_matching_piles() {
    let base = Catalog::standard().base_cards();
    let (mut game, _) = game_with(vec![ScriptedStrategy::new().then_card(base.silver)]);

    let offered = game.state.supply.matching(|c| game.state.registry()[c].cost <= 4);
    assert!(offered.contains(&base.silver));
    assert!(!offered.contains(&base.gold));

    let workshop = gain_choice("Gain a card costing up to 4 Coins", |c| c.cost <= 4, Placement::DiscardPile);
    workshop.perform(&mut game, p(0), None);

    assert_eq!(game.state.deck(p(0)).discard_pile, vec![base.silver]);
}

/// Trashing up to N lets the player pick fewer.
#[test]
fn test_trash_up_to() {
    let base = Catalog::standard().base_cards();
    let script = ScriptedStrategy::new().then_cards(vec![base.copper, base.estate]);
    let (mut game, transcript) = game_with(vec![script]);
    game.state.deck_mut(p(0)).hand = vec![base.copper, base.copper, base.estate, base.copper, base.estate];

    trash_up_to(4).perform(&mut game, p(0), None);

    assert_eq!(game.state.deck(p(0)).hand, vec![base.copper, base.copper, base.estate]);
    assert_eq!(
        transcript.notices().last(),
        Some(&Notice::Trash { player: p(0), cards: vec![base.copper, base.estate] })
    );
}
