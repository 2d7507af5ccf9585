//! Per-seat and per-round state.
//!
//! Both are plain owned values. `GameState` holds one `PlayerMap<PlayerState>`
//! and one `RoundState`; the trick and exchange engines receive them by
//! `&mut` and never keep references of their own.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::Play;

/// One seat's hand and standing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards in hand, sorted ascending.
    pub hand: Vec<Card>,

    /// Position currently held. `None` until the first round closes.
    pub position: Option<Position>,

    /// Emptied their hand this round.
    pub finished: bool,

    /// Index in this round's finish order.
    pub finish_index: Option<usize>,
}

impl PlayerState {
    /// Fresh seat for a new round with a dealt hand; keeps the position.
    pub fn deal(&mut self, mut hand: Vec<Card>) {
        hand.sort_unstable();
        self.hand = hand;
        self.finished = false;
        self.finish_index = None;
    }

    /// First card of `cards` missing from the hand, if any.
    #[must_use]
    pub fn missing(&self, cards: &[Card]) -> Option<Card> {
        cards.iter().copied().find(|c| !self.hand.contains(c))
    }

    /// Remove cards known to be in hand.
    pub(crate) fn remove_cards(&mut self, cards: &[Card]) {
        self.hand.retain(|c| !cards.contains(c));
    }

    /// Add cards and restore sort order.
    pub(crate) fn add_cards(&mut self, cards: &[Card]) {
        self.hand.extend_from_slice(cards);
        self.hand.sort_unstable();
    }
}

/// State of one round: the table, the turn cursor and the finish order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Starts at 1.
    pub round_number: u32,

    pub(crate) last_play: Option<(PlayerId, Play)>,

    /// `None` once the round has closed.
    pub(crate) current_player: Option<PlayerId>,

    /// Leader of the trick in progress.
    pub(crate) leader: PlayerId,

    pub(crate) active: PlayerMap<bool>,

    /// Players who have passed since the last non-PASS play.
    pub(crate) passed: PlayerMap<bool>,

    pub(crate) finish_order: Vec<PlayerId>,

    /// Every card played this round, in play order.
    pub(crate) played_cards: Vec<Card>,

    pub(crate) tricks_completed: u32,
}

impl RoundState {
    /// A new round with every seat active and `leader` to open.
    #[must_use]
    pub fn new(round_number: u32, player_count: usize, leader: PlayerId) -> Self {
        Self {
            round_number,
            last_play: None,
            current_player: Some(leader),
            leader,
            active: PlayerMap::with_value(player_count, true),
            passed: PlayerMap::with_value(player_count, false),
            finish_order: Vec::with_capacity(player_count),
            played_cards: Vec::new(),
            tricks_completed: 0,
        }
    }

    /// A dealt round whose exchange has not happened yet: nobody may act.
    #[must_use]
    pub fn awaiting_exchange(round_number: u32, player_count: usize) -> Self {
        Self {
            current_player: None,
            ..Self::new(round_number, player_count, PlayerId::new(0))
        }
    }

    /// Hand the opening lead to `leader`.
    pub(crate) fn open(&mut self, leader: PlayerId) {
        self.leader = leader;
        self.current_player = Some(leader);
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.active.player_count()
    }

    /// Current table: who set it and with what.
    #[must_use]
    pub fn last_play(&self) -> Option<(PlayerId, &Play)> {
        self.last_play.as_ref().map(|(p, play)| (*p, play))
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    #[must_use]
    pub fn leader(&self) -> PlayerId {
        self.leader
    }

    #[must_use]
    pub fn trick_in_progress(&self) -> bool {
        self.last_play.is_some()
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active[player]
    }

    /// Players still holding cards, in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.active
            .iter()
            .filter(|(_, active)| **active)
            .map(|(p, _)| p)
            .collect()
    }

    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    #[must_use]
    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    #[must_use]
    pub fn tricks_completed(&self) -> u32 {
        self.tricks_completed
    }

    /// All but one player have gone out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.finish_order.len() + 1 >= self.player_count()
    }

    /// Next active seat after `from`, in seat order. `from` itself is only
    /// returned when it is the sole active seat.
    #[must_use]
    pub fn next_active(&self, from: PlayerId) -> Option<PlayerId> {
        let count = self.player_count();
        let mut seat = from;
        for _ in 0..count {
            seat = seat.next(count);
            if self.active[seat] {
                return Some(seat);
            }
        }
        None
    }
}
