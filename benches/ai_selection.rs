//! Benchmarks for AI move selection.
//!
//! Lookahead scores every (card, slot) pair against every reply, so the
//! opening position with full hands is the worst case.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_triad::ai::{Difficulty, MoveSelector};
use rust_triad::core::{GameRng, Side};
use rust_triad::game::Engine;
use rust_triad::rules::RulesEngine;

fn bench_opening_move(c: &mut Criterion) {
    let engine = Engine::standard();
    let state = engine.new_match(Side::Opponent, None);

    let mut group = c.benchmark_group("opening_move");
    for difficulty in Difficulty::ALL {
        let selector = MoveSelector::new(difficulty);
        group.bench_with_input(BenchmarkId::from_parameter(difficulty), &state, |b, state| {
            let mut rng = GameRng::new(42);
            b.iter(|| black_box(selector.select(&engine, black_box(state), &mut rng)));
        });
    }
    group.finish();
}

fn bench_full_match(c: &mut Criterion) {
    let engine = Engine::standard();

    c.bench_function("hard_vs_hard_match", |b| {
        b.iter(|| {
            let mut state = engine.new_match_seeded(Side::Player, None, black_box(7));
            let mut rng = GameRng::new(7);
            let selector = MoveSelector::new(Difficulty::Hard);
            while let Some(mv) = selector.select_for(&engine, &state, state.current, &mut rng) {
                match engine.apply_move(&state, mv) {
                    Ok(next) => state = next,
                    Err(_) => break,
                }
            }
            black_box(state.outcome)
        });
    });
}

criterion_group!(benches, bench_opening_move, bench_full_match);
criterion_main!(benches);
