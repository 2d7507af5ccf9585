//! Game state machine: one match, round after round.
//!
//! ## Lifecycle
//!
//! ```text
//! reset ──> Play ──(round closes)──> RoundOver ──start_next_round──> Exchange
//!            ^                                                         │
//!            └──────────────────────── apply_exchange ─────────────────┘
//! ```
//!
//! `GameState` exclusively owns the RNG, every hand and the round in
//! progress. Independent matches share nothing, so parallel rollouts just
//! build one `GameState` each.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::public::{ActionRecord, Phase, PublicState, StepResult};
use super::snapshot::GameSnapshot;
use crate::cards::{Card, Deck, DECK_SIZE};
use crate::core::{GameError, GameRng, LeaderPolicy, PlayerId, PlayerMap, SlaveConfig};
use crate::round::{
    apply_play, demoted_king, determine_positions, ExchangePlan, PlayerState, Position, RoundState,
};
use crate::rules::{self, Play};

/// Complete state of one match.
///
/// ```
/// use slave_engine::core::SlaveConfig;
/// use slave_engine::game::GameState;
///
/// let mut game = GameState::new(SlaveConfig::default().with_seed(7)).unwrap();
/// let leader = game.current_player().unwrap();
/// let opening = game.legal_plays(leader)[0].clone();
/// let result = game.step(leader, &opening).unwrap();
/// assert!(!result.round_closed);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: SlaveConfig,
    rng: GameRng,
    players: PlayerMap<PlayerState>,
    round: RoundState,
    phase: Phase,
    exchange: Option<ExchangePlan>,
    history: Vector<ActionRecord>,
}

/// Shuffle a full deck from `rng` and deal it into sorted seats.
fn deal(rng: &mut GameRng, player_count: usize) -> Result<Vec<Vec<Card>>, GameError> {
    let mut deck = Deck::new();
    deck.shuffle_with(rng);
    deck.deal(player_count)
}

impl GameState {
    /// Validate `config` and deal round 1.
    pub fn new(config: SlaveConfig) -> Result<Self, GameError> {
        config.validate()?;
        let count = config.player_count;
        let mut state = Self {
            rng: GameRng::new(0),
            players: PlayerMap::with_default(count),
            round: RoundState::new(1, count, PlayerId::new(0)),
            phase: Phase::Play,
            exchange: None,
            history: Vector::new(),
            config,
        };
        state.reset(None)?;
        Ok(state)
    }

    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Result<Self, GameError> {
        Self::new(SlaveConfig::default().with_seed(seed))
    }

    /// Start a new match at round 1.
    ///
    /// `None` falls back to the configured seed, then to OS entropy. The
    /// seed actually used is reported in the returned state.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<PublicState, GameError> {
        let mut rng = match seed.or(self.config.default_seed) {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let count = self.config.player_count;
        let hands = deal(&mut rng, count)?;

        let players = PlayerMap::from_vec(
            hands
                .into_iter()
                .map(|hand| {
                    let mut seat = PlayerState::default();
                    seat.deal(hand);
                    seat
                })
                .collect(),
        );
        let leader = players
            .find(|s| s.hand.contains(&Card::LOWEST))
            .unwrap_or(PlayerId::new(0));

        self.rng = rng;
        self.players = players;
        self.round = RoundState::new(1, count, leader);
        self.phase = Phase::Play;
        self.exchange = None;
        self.history = Vector::new();

        debug!(seed = self.rng.seed(), %leader, "match reset");
        Ok(self.public_state(leader))
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SlaveConfig {
        &self.config
    }

    /// Seed of the match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round.round_number
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.round.current_player()
    }

    /// Cards held by `player`.
    ///
    /// # Panics
    ///
    /// If `player` is not a seat at this table.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.players[player].hand
    }

    /// # Panics
    ///
    /// If `player` is not a seat at this table.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<Position> {
        self.players[player].position
    }

    #[must_use]
    pub fn positions(&self) -> PlayerMap<Option<Position>> {
        self.players.map(|_, s| s.position)
    }

    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        self.round.finish_order()
    }

    /// Every accepted action since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The pending exchange, once the next round has been dealt.
    #[must_use]
    pub fn exchange_preview(&self) -> Option<&ExchangePlan> {
        self.exchange.as_ref()
    }

    /// What `viewer` may observe. Other seats' hands are reduced to counts.
    ///
    /// # Panics
    ///
    /// If `viewer` is not a seat at this table; see [`GameState::view`].
    #[must_use]
    pub fn public_state(&self, viewer: PlayerId) -> PublicState {
        PublicState {
            viewer,
            hand: self.players[viewer].hand.clone(),
            hand_sizes: self.players.map(|_, s| s.hand.len()),
            played_cards: self.round.played_cards().to_vec(),
            last_play: self.round.last_play().map(|(p, play)| (p, play.clone())),
            positions: self.positions(),
            round_number: self.round.round_number,
            active_players: self.round.active_players(),
            current_player: self.round.current_player(),
            finish_order: self.round.finish_order().to_vec(),
            phase: self.phase,
            seed: self.rng.seed(),
        }
    }

    /// Checked [`GameState::public_state`] for seat ids from outside.
    pub fn view(&self, viewer: PlayerId) -> Result<PublicState, GameError> {
        if viewer.index() >= self.player_count() {
            return Err(GameError::UnknownPlayer(viewer));
        }
        Ok(self.public_state(viewer))
    }

    /// Every play `player` may submit right now; PASS first when allowed.
    ///
    /// Empty when it is not `player`'s turn.
    #[must_use]
    pub fn legal_plays(&self, player: PlayerId) -> Vec<Play> {
        if self.phase != Phase::Play || self.round.current_player() != Some(player) {
            return Vec::new();
        }
        let table = self.round.last_play().map(|(_, play)| play);
        rules::legal_plays(&self.players[player].hand, table)
    }

    /// Hands plus the cards played this round form exactly one deck.
    #[must_use]
    pub fn conserves_cards(&self) -> bool {
        let mut seen: FxHashSet<Card> = FxHashSet::default();
        let cards = self
            .players
            .values()
            .flat_map(|s| s.hand.iter())
            .chain(self.round.played_cards());
        for &card in cards {
            if !seen.insert(card) {
                return false;
            }
        }
        seen.len() == DECK_SIZE
    }

    // === Transitions ===

    /// Submit `play` for `player`.
    ///
    /// On error nothing changes and the same call can be retried with a
    /// different play.
    pub fn step(&mut self, player: PlayerId, play: &Play) -> Result<StepResult, GameError> {
        match self.phase {
            Phase::Play => {}
            Phase::RoundOver => return Err(GameError::RoundClosed),
            Phase::Exchange => return Err(GameError::ExchangePending),
        }

        let event = apply_play(&mut self.round, &mut self.players, player, play)?;

        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push_back(ActionRecord::new(
            player,
            play.clone(),
            self.round.round_number,
            sequence,
        ));

        let finish_positions = if event.round_closed {
            self.close_round()
        } else {
            None
        };

        Ok(StepResult {
            state: self.public_state(player),
            trick_closed: event.trick_closed,
            player_finished: event.player_finished,
            round_closed: event.round_closed,
            finish_positions,
        })
    }

    /// Assign positions from the completed finish order.
    fn close_round(&mut self) -> Option<PlayerMap<Position>> {
        let previous_king = self.players.find(|s| s.position == Some(Position::King));
        let order = self.round.finish_order();

        if let Some(king) = demoted_king(order, previous_king) {
            debug!(round = self.round.round_number, %king, "king demoted to slave");
        }
        let positions = determine_positions(order, previous_king)?;
        for (player, &position) in positions.iter() {
            self.players[player].position = Some(position);
        }
        self.phase = Phase::RoundOver;

        debug!(round = self.round.round_number, positions = ?positions, "positions assigned");
        Some(positions)
    }

    /// Deal the next round and compute its exchange, without committing.
    fn prepare_next_round(
        &self,
    ) -> Result<(GameRng, PlayerMap<PlayerState>, ExchangePlan), GameError> {
        let mut rng = self.rng.clone();
        let hands = deal(&mut rng, self.config.player_count)?;
        let mut players = self.players.clone();
        for ((_, seat), hand) in players.iter_mut().zip(hands) {
            seat.deal(hand);
        }
        let plan = ExchangePlan::compute(&players)?;
        Ok((rng, players, plan))
    }

    fn commit_next_round(&mut self, rng: GameRng, players: PlayerMap<PlayerState>) {
        self.rng = rng;
        self.players = players;
        self.round =
            RoundState::awaiting_exchange(self.round.round_number + 1, self.config.player_count);
        self.phase = Phase::Exchange;
        debug!(round = self.round.round_number, "next round dealt");
    }

    /// Deal the next round after a round has closed.
    ///
    /// Returns the exchange the King and Queen now have to answer. Calling
    /// it again before `apply_exchange` returns the same plan.
    pub fn start_next_round(&mut self) -> Result<ExchangePlan, GameError> {
        match self.phase {
            Phase::Play => Err(GameError::RoundNotReadyForExchange),
            Phase::Exchange => self
                .exchange
                .clone()
                .ok_or(GameError::RoundNotReadyForExchange),
            Phase::RoundOver => {
                let (rng, players, plan) = self.prepare_next_round()?;
                self.commit_next_round(rng, players);
                self.exchange = Some(plan.clone());
                Ok(plan)
            }
        }
    }

    /// Perform the King/Slave and Queen/Commoner exchanges and open the
    /// next round.
    ///
    /// `king_gives` must be exactly two cards from the King's hand and
    /// `queen_gives` exactly one from the Queen's. In `RoundOver` the next
    /// round is dealt first; a rejected call leaves the round closed.
    pub fn apply_exchange(
        &mut self,
        king_gives: &[Card],
        queen_gives: &[Card],
    ) -> Result<(), GameError> {
        match self.phase {
            Phase::Play => return Err(GameError::RoundNotReadyForExchange),
            Phase::RoundOver => {
                let (rng, mut players, plan) = self.prepare_next_round()?;
                plan.apply(&mut players, king_gives, queen_gives)?;
                self.commit_next_round(rng, players);
            }
            Phase::Exchange => {
                let plan = self
                    .exchange
                    .as_ref()
                    .ok_or(GameError::RoundNotReadyForExchange)?;
                plan.apply(&mut self.players, king_gives, queen_gives)?;
            }
        }

        let leader = self.next_round_leader();
        self.round.open(leader);
        self.phase = Phase::Play;
        self.exchange = None;
        debug!(round = self.round.round_number, %leader, "round opened");
        Ok(())
    }

    fn next_round_leader(&self) -> PlayerId {
        let holder = match self.config.leader_policy {
            LeaderPolicy::PreviousSlave => {
                self.players.find(|s| s.position == Some(Position::Slave))
            }
            LeaderPolicy::PreviousKing => self.players.find(|s| s.position == Some(Position::King)),
            LeaderPolicy::LowestCardHolder => {
                self.players.find(|s| s.hand.contains(&Card::LOWEST))
            }
        };
        holder.unwrap_or(PlayerId::new(0))
    }

    // === Checkpointing ===

    /// Capture the full state, RNG position included.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            rng: self.rng.state(),
            players: self.players.clone(),
            round: self.round.clone(),
            phase: self.phase,
            exchange: self.exchange.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a match from a snapshot. Continuing it replays identically.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, GameError> {
        snapshot.config.validate()?;
        let count = snapshot.config.player_count;
        if snapshot.players.player_count() != count || snapshot.round.player_count() != count {
            return Err(GameError::Snapshot(format!(
                "seat count does not match configured {count} players"
            )));
        }
        if snapshot.round.passed.player_count() != count {
            return Err(GameError::Snapshot("pass flags do not cover every seat".into()));
        }
        if let Some(seat) = seat_out_of_range(&snapshot, count) {
            return Err(GameError::Snapshot(format!(
                "{seat} is not a seat at a {count}-player table"
            )));
        }
        if snapshot.phase == Phase::Exchange && snapshot.exchange.is_none() {
            return Err(GameError::Snapshot("exchange phase without a plan".into()));
        }

        let state = Self {
            config: snapshot.config,
            rng: GameRng::from_state(&snapshot.rng),
            players: snapshot.players,
            round: snapshot.round,
            phase: snapshot.phase,
            exchange: snapshot.exchange,
            history: snapshot.history,
        };
        if !state.conserves_cards() {
            return Err(GameError::Snapshot("cards are not a single deck".into()));
        }
        Ok(state)
    }
}

/// First seat id in the snapshot's round or exchange that does not exist.
fn seat_out_of_range(snapshot: &GameSnapshot, count: usize) -> Option<PlayerId> {
    let round = &snapshot.round;
    let plan_seats = snapshot
        .exchange
        .iter()
        .flat_map(|plan| [plan.king, plan.queen, plan.commoner, plan.slave]);
    round
        .current_player()
        .into_iter()
        .chain([round.leader()])
        .chain(round.last_play().map(|(setter, _)| setter))
        .chain(round.finish_order().iter().copied())
        .chain(plan_seats)
        .find(|seat| seat.index() >= count)
}
