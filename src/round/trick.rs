//! Trick engine: one action at a time.
//!
//! A trick opens with the leader's play (PASS is not allowed there). Each
//! following active player either beats the table or passes. The trick
//! closes once every active player other than whoever set the table has
//! passed since that play; the setter then leads the next trick, or, if they
//! have gone out, the next active seat after them.
//!
//! A player who empties their hand leaves the active set at once, but their
//! cards stay on the table until the trick closes. When only one active
//! player remains the round closes and that player is appended to the finish
//! order.
//!
//! [`apply_play`] validates everything before it touches any state, so a
//! rejected action leaves both the round and the hands unchanged.

use tracing::{debug, trace};

use super::state::{PlayerState, RoundState};
use crate::core::{GameError, PlayerId, PlayerMap};
use crate::rules::{beats, precedence, Play, Precedence};

/// What happened as a result of one accepted action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrickEvent {
    /// The table was cleared.
    pub trick_closed: bool,
    /// The acting player emptied their hand.
    pub player_finished: bool,
    /// Only one active player is left; the finish order is complete.
    pub round_closed: bool,
}

/// Reject `play` by `player` if it is not allowed right now.
pub fn validate(
    round: &RoundState,
    players: &PlayerMap<PlayerState>,
    player: PlayerId,
    play: &Play,
) -> Result<(), GameError> {
    let Some(current) = round.current_player else {
        return Err(GameError::RoundClosed);
    };
    if current != player {
        return Err(GameError::NotPlayersTurn {
            player,
            current: Some(current),
        });
    }

    if let Some(card) = players[player].missing(play.cards()) {
        return Err(GameError::CardNotInHand {
            player,
            card: card.to_string(),
        });
    }

    match &round.last_play {
        None if play.is_pass() => Err(GameError::illegal("cannot pass when leading a trick")),
        None => Ok(()),
        Some(_) if play.is_pass() => Ok(()),
        Some((_, reference)) if beats(play, reference) => Ok(()),
        Some((_, reference)) => {
            let reason = match precedence(play.kind(), reference.kind()) {
                Precedence::Illegal => format!("{} cannot answer {}", play.kind(), reference.kind()),
                _ => format!("{play} does not beat {reference}"),
            };
            Err(GameError::IllegalAction(reason))
        }
    }
}

/// Apply one action to the round.
pub fn apply_play(
    round: &mut RoundState,
    players: &mut PlayerMap<PlayerState>,
    player: PlayerId,
    play: &Play,
) -> Result<TrickEvent, GameError> {
    validate(round, players, player, play)?;

    let mut event = TrickEvent::default();

    if play.is_pass() {
        trace!(%player, round = round.round_number, "pass");
        round.passed[player] = true;
    } else {
        trace!(%player, round = round.round_number, %play, "play");
        let seat = &mut players[player];
        seat.remove_cards(play.cards());
        round.played_cards.extend_from_slice(play.cards());
        round.last_play = Some((player, play.clone()));
        round.passed = PlayerMap::with_value(round.player_count(), false);

        if seat.hand.is_empty() {
            finish_player(round, seat, player);
            event.player_finished = true;

            if round.is_game_over() {
                close_round(round, players);
                event.trick_closed = true;
                event.round_closed = true;
                return Ok(event);
            }
        }
    }

    if trick_settled(round) {
        close_trick(round);
        event.trick_closed = true;
    } else {
        round.current_player = round.next_active(player);
    }

    Ok(event)
}

fn finish_player(round: &mut RoundState, seat: &mut PlayerState, player: PlayerId) {
    let index = round.finish_order.len();
    round.finish_order.push(player);
    round.active[player] = false;
    seat.finished = true;
    seat.finish_index = Some(index);
    debug!(%player, round = round.round_number, finish_index = index, "player went out");
}

/// Every active player other than the setter has passed since the last play.
fn trick_settled(round: &RoundState) -> bool {
    let Some((setter, _)) = round.last_play else {
        return false;
    };
    round
        .active
        .iter()
        .filter(|(p, active)| **active && *p != setter)
        .all(|(p, _)| round.passed[p])
}

fn close_trick(round: &mut RoundState) {
    let Some((setter, winning)) = round.last_play.take() else {
        return;
    };
    round.passed = PlayerMap::with_value(round.player_count(), false);
    round.tricks_completed += 1;

    let leader = if round.active[setter] {
        Some(setter)
    } else {
        round.next_active(setter)
    };
    round.current_player = leader;
    if let Some(leader) = leader {
        round.leader = leader;
    }
    debug!(
        round = round.round_number,
        winner = %setter,
        play = %winning,
        leader = ?round.current_player,
        "trick closed"
    );
}

fn close_round(round: &mut RoundState, players: &mut PlayerMap<PlayerState>) {
    let remaining = round.active_players();
    for player in remaining {
        let index = round.finish_order.len();
        round.finish_order.push(player);
        round.active[player] = false;
        players[player].finish_index = Some(index);
    }
    round.last_play = None;
    round.current_player = None;
    round.tricks_completed += 1;
    debug!(
        round = round.round_number,
        finish_order = ?round.finish_order,
        "round closed"
    );
}
