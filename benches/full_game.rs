//! Benchmarks for whole games between computer players.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kingdom_engine::agents::{BigSpender, RandomStrategy, SilentObserver};
use kingdom_engine::core::{GameConfig, GameRng};
use kingdom_engine::game::GameBuilder;

/// Play one game to the end and return the number of turns it took.
fn play(seed: u64, players: usize) -> u32 {
    let config = GameConfig::default().with_max_turns(400);
    let mut builder = GameBuilder::new(seed).with_config(config);
    for i in 0..players {
        let rng = builder.fork_rng();
        builder = if i % 2 == 0 {
            builder.with_player(format!("Greedy {i}"), BigSpender::new(rng), SilentObserver)
        } else {
            builder.with_player(format!("Random {i}"), RandomStrategy::new(rng), SilentObserver)
        };
    }
    let mut game = builder.build().expect("default setup is valid");
    game.run();
    game.state.turn.count
}

fn benchmark_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full game");
    for players in [2, 4] {
        group.bench_with_input(BenchmarkId::new("players", players), &players, |b, &players| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(play(black_box(seed), players))
            });
        });
    }
    group.finish();
}

/// Setup alone: supply, starting decks, first hands.
fn benchmark_setup(c: &mut Criterion) {
    c.bench_function("setup", |b| {
        b.iter(|| {
            GameBuilder::new(black_box(7))
                .with_player("A", BigSpender::new(GameRng::new(1)), SilentObserver)
                .with_player("B", BigSpender::new(GameRng::new(2)), SilentObserver)
                .build()
                .expect("default setup is valid")
        });
    });
}

criterion_group!(benches, benchmark_full_game, benchmark_setup);
criterion_main!(benches);
