//! Positions and the King demotion rule.
//!
//! Finish order maps to positions by index: first out is King, then Queen,
//! Commoner, Slave. One override: a King from the previous round who does
//! not go out first is demoted to Slave. Everybody else keeps their
//! index-based label, and whoever finished last takes over the label the
//! demoted King would have had.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{PlayerId, PlayerMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    King,
    Queen,
    Commoner,
    Slave,
}

impl Position {
    /// Labels by finish index.
    pub const BY_FINISH: [Position; 4] = [
        Position::King,
        Position::Queen,
        Position::Commoner,
        Position::Slave,
    ];

    /// Index-based label for the `index`-th player out.
    #[must_use]
    pub fn from_finish_index(index: usize) -> Option<Position> {
        Self::BY_FINISH.get(index).copied()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::King => "King",
            Position::Queen => "Queen",
            Position::Commoner => "Commoner",
            Position::Slave => "Slave",
        };
        f.write_str(name)
    }
}

/// The previous King, if this finish order demotes them.
#[must_use]
pub fn demoted_king(finish_order: &[PlayerId], previous_king: Option<PlayerId>) -> Option<PlayerId> {
    let king = previous_king?;
    let first = *finish_order.first()?;
    (first != king).then_some(king)
}

/// Positions for a complete finish order, demotion applied.
///
/// Returns `None` unless `finish_order` names every seat exactly once.
#[must_use]
pub fn determine_positions(
    finish_order: &[PlayerId],
    previous_king: Option<PlayerId>,
) -> Option<PlayerMap<Position>> {
    let count = Position::BY_FINISH.len();
    if finish_order.len() != count {
        return None;
    }

    let mut labels: PlayerMap<Option<Position>> = PlayerMap::with_value(count, None);
    for (index, &player) in finish_order.iter().enumerate() {
        if player.index() >= count || labels[player].is_some() {
            return None;
        }
        labels[player] = Position::from_finish_index(index);
    }

    if let Some(king) = demoted_king(finish_order, previous_king) {
        let vacated = labels[king];
        let last = finish_order[count - 1];
        labels[king] = Some(Position::Slave);
        if last != king {
            labels[last] = vacated;
        }
    }

    let positions: Vec<Position> = labels.values().copied().collect::<Option<_>>()?;
    Some(PlayerMap::from_vec(positions))
}
