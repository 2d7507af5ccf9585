//! Legal-play enumeration.
//!
//! The output of [`legal_plays`] is the authoritative action set; any
//! action mask built on top of this crate has to mirror it exactly.
//!
//! Enumeration is exhaustive over suits: a hand holding three Kings offers
//! three single Kings, three pairs and one three-of-a-kind. Order is stable:
//! PASS first (when allowed), then by play type, then by rank, then by suit
//! combination.

use smallvec::SmallVec;

use super::combination::{beats, classify, Play, PlayType};
use crate::cards::Card;

/// Every non-PASS combination that can be formed from `hand`.
#[must_use]
pub fn combinations(hand: &[Card]) -> Vec<Play> {
    let mut sorted = hand.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let groups = rank_groups(&sorted);
    let mut out = Vec::new();

    for kind in PlayType::COMBINATIONS {
        let size = kind.card_count();
        for group in &groups {
            if group.len() < size {
                continue;
            }
            for mask in 0u8..(1 << group.len()) {
                if mask.count_ones() as usize != size {
                    continue;
                }
                let cards: SmallVec<[Card; 4]> = group
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, c)| *c)
                    .collect();
                // Same-rank, distinct, 1..=4 cards: always classifies.
                if let Ok(play) = classify(&cards) {
                    out.push(play);
                }
            }
        }
    }

    out
}

/// Plays available from `hand` against the current table.
///
/// With an empty table (`None`) every combination is legal and PASS is not.
/// Otherwise PASS plus every combination that beats the table.
#[must_use]
pub fn legal_plays(hand: &[Card], last_play: Option<&Play>) -> Vec<Play> {
    match last_play {
        None => combinations(hand),
        Some(reference) => std::iter::once(Play::pass())
            .chain(
                combinations(hand)
                    .into_iter()
                    .filter(|candidate| beats(candidate, reference)),
            )
            .collect(),
    }
}

/// Split a sorted hand into runs of equal rank.
fn rank_groups(sorted: &[Card]) -> Vec<&[Card]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=sorted.len() {
        if i == sorted.len() || sorted[i].rank != sorted[start].rank {
            groups.push(&sorted[start..i]);
            start = i;
        }
    }
    groups
}
