//! Random-legal-action rollouts: the hot loop of self-play.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use slave_engine::cards::{Card, Deck};
use slave_engine::core::GameRng;
use slave_engine::game::{GameState, Phase};
use slave_engine::rules::legal_plays;

fn rollout_round(seed: u64) -> usize {
    let Ok(mut game) = GameState::with_seed(seed) else {
        return 0;
    };
    let mut rng = GameRng::new(seed);
    let mut steps = 0;
    while game.phase() == Phase::Play {
        let Some(player) = game.current_player() else {
            break;
        };
        let plays = game.legal_plays(player);
        let Some(choice) = rng.choose(&plays).cloned() else {
            break;
        };
        if game.step(player, &choice).is_err() {
            break;
        }
        steps += 1;
    }
    steps
}

fn bench_rollout(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("random_round", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(rollout_round(seed))
        })
    });
}

fn bench_legal_plays(c: &mut Criterion) {
    let mut deck = Deck::new();
    deck.shuffle(7);
    let hand: Vec<Card> = deck.cards()[..13].to_vec();
    c.bench_function("legal_plays_leading", |b| {
        b.iter(|| black_box(legal_plays(black_box(&hand), None)))
    });
}

criterion_group!(benches, bench_rollout, bench_legal_plays);
criterion_main!(benches);
