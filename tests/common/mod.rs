//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use slave_engine::cards::{parse_cards, Card};
use slave_engine::core::{GameRng, PlayerId};
use slave_engine::game::{GameState, StepResult};
use slave_engine::round::ExchangePlan;
use slave_engine::rules::{classify, Play};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn cards(tokens: &str) -> Vec<Card> {
    parse_cards(tokens).unwrap()
}

pub fn play(tokens: &str) -> Play {
    classify(&cards(tokens)).unwrap()
}

pub fn p(seat: u8) -> PlayerId {
    PlayerId::new(seat)
}

/// Uniformly random legal action for whoever is to act.
pub fn random_step(game: &mut GameState, rng: &mut GameRng) -> StepResult {
    let player = game.current_player().expect("someone must be to act");
    let plays = game.legal_plays(player);
    let choice = rng.choose(&plays).cloned().expect("legal plays never empty");
    game.step(player, &choice).unwrap()
}

/// Play random legal actions until the round closes.
pub fn random_round(game: &mut GameState, rng: &mut GameRng) -> StepResult {
    loop {
        let result = random_step(game, rng);
        if result.round_closed {
            return result;
        }
    }
}

/// Deal the next round and let King and Queen give random cards.
pub fn random_exchange(game: &mut GameState, rng: &mut GameRng) -> ExchangePlan {
    let plan = game.start_next_round().unwrap();

    let mut king_hand = game.hand(plan.king).to_vec();
    rng.shuffle(&mut king_hand);
    let mut queen_hand = game.hand(plan.queen).to_vec();
    rng.shuffle(&mut queen_hand);

    game.apply_exchange(&king_hand[..2], &queen_hand[..1]).unwrap();
    plan
}
