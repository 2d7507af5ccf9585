//! Inter-round exchange through `GameState`.

mod common;

use common::{init_logging, random_round};
use slave_engine::cards::Card;
use slave_engine::core::{GameError, GameRng, PlayerId};
use slave_engine::game::{GameState, Phase};

fn game_after_round_one(seed: u64) -> GameState {
    let mut game = GameState::with_seed(seed).unwrap();
    random_round(&mut game, &mut GameRng::new(seed + 1));
    game
}

#[test]
fn test_slave_gives_two_highest_and_gets_king_choice() {
    init_logging();
    let mut game = game_after_round_one(31);
    let plan = game.start_next_round().unwrap();

    let mut slave_before = game.hand(plan.slave).to_vec();
    let king_before = game.hand(plan.king).to_vec();
    slave_before.sort_by(|a, b| b.cmp(a));
    assert_eq!(plan.slave_gives.to_vec(), slave_before[..2].to_vec());

    let king_gives = vec![king_before[0], king_before[5]];
    let queen_gives = vec![game.hand(plan.queen)[3]];
    game.apply_exchange(&king_gives, &queen_gives).unwrap();

    let slave_after = game.hand(plan.slave);
    for card in &plan.slave_gives {
        assert!(!slave_after.contains(card));
        assert!(game.hand(plan.king).contains(card));
    }
    for card in &king_gives {
        assert!(slave_after.contains(card));
        assert!(!game.hand(plan.king).contains(card));
    }
    assert!(game.hand(plan.queen).contains(&plan.commoner_gives[0]));
    assert!(game.hand(plan.commoner).contains(&queen_gives[0]));

    for player in PlayerId::all(4) {
        assert_eq!(game.hand(player).len(), 13);
        assert!(game.hand(player).windows(2).all(|w| w[0] < w[1]));
    }
    assert!(game.conserves_cards());
}

#[test]
fn test_bad_exchange_leaves_hands_untouched() {
    let mut game = game_after_round_one(8);
    let plan = game.start_next_round().unwrap();
    let before = game.snapshot();

    let king = game.hand(plan.king).to_vec();
    let queen = game.hand(plan.queen).to_vec();
    let slave = game.hand(plan.slave).to_vec();

    assert_eq!(
        game.apply_exchange(&king[..3], &queen[..1]),
        Err(GameError::WrongExchangeCount { expected: 2, got: 3 })
    );
    assert!(matches!(
        game.apply_exchange(&[king[0], king[0]], &queen[..1]),
        Err(GameError::IllegalAction(_))
    ));
    assert_eq!(
        game.apply_exchange(&king[..2], &queen[..2]),
        Err(GameError::WrongExchangeCount { expected: 1, got: 2 })
    );
    assert!(matches!(
        game.apply_exchange(&[king[0], slave[0]], &queen[..1]),
        Err(GameError::CardNotInHand { .. })
    ));
    assert!(matches!(
        game.apply_exchange(&king[..2], &king[2..3]),
        Err(GameError::CardNotInHand { .. })
    ));

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), Phase::Exchange);

    // The same plan is still there to answer.
    game.apply_exchange(&king[..2], &queen[..1]).unwrap();
    assert_eq!(game.phase(), Phase::Play);
}

#[test]
fn test_exchange_directly_from_round_over() {
    let mut game = game_after_round_one(12);
    let mut probe = game.clone();
    let plan = probe.start_next_round().unwrap();

    // Same deal whether or not the preview was requested first.
    let king_gives: Vec<Card> = probe.hand(plan.king)[..2].to_vec();
    let queen_gives: Vec<Card> = probe.hand(plan.queen)[..1].to_vec();
    probe.apply_exchange(&king_gives, &queen_gives).unwrap();
    game.apply_exchange(&king_gives, &queen_gives).unwrap();

    assert_eq!(game.snapshot(), probe.snapshot());
    assert_eq!(game.round_number(), 2);
}

#[test]
fn test_no_exchange_in_round_one() {
    let mut game = GameState::with_seed(1).unwrap();
    assert!(game.exchange_preview().is_none());
    assert_eq!(
        game.apply_exchange(&[], &[]),
        Err(GameError::RoundNotReadyForExchange)
    );
}
