//! Combination classification and precedence.
//!
//! A play is 0-4 cards of one rank: PASS, SINGLE, PAIR, THREE_OF_KIND or
//! FOUR_OF_KIND. Which play types may answer which is a fixed 4x4 table
//! (`PRECEDENCE_TABLE`), so the whole rule set can be checked exhaustively:
//!
//! | candidate \ reference | Single  | Pair    | Three   | Four    |
//! |-----------------------|---------|---------|---------|---------|
//! | Single                | Compare | Illegal | Illegal | Illegal |
//! | Pair                  | Illegal | Compare | Illegal | Illegal |
//! | Three                 | Always  | Illegal | Compare | Illegal |
//! | Four                  | Illegal | Always  | Illegal | Compare |
//!
//! `Compare` means same type: higher rank wins, equal rank falls back to the
//! highest suit in each play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::cards::{Card, Rank, Suit};
use crate::core::GameError;

/// Combination type of a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayType {
    Pass,
    Single,
    Pair,
    ThreeOfKind,
    FourOfKind,
}

impl PlayType {
    /// The four card-carrying types, by card count.
    pub const COMBINATIONS: [PlayType; 4] = [
        PlayType::Single,
        PlayType::Pair,
        PlayType::ThreeOfKind,
        PlayType::FourOfKind,
    ];

    /// Type for a same-rank set of `count` cards.
    #[must_use]
    pub const fn from_count(count: usize) -> Option<PlayType> {
        match count {
            0 => Some(PlayType::Pass),
            1 => Some(PlayType::Single),
            2 => Some(PlayType::Pair),
            3 => Some(PlayType::ThreeOfKind),
            4 => Some(PlayType::FourOfKind),
            _ => None,
        }
    }

    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            PlayType::Pass => 0,
            PlayType::Single => 1,
            PlayType::Pair => 2,
            PlayType::ThreeOfKind => 3,
            PlayType::FourOfKind => 4,
        }
    }

    /// Cardinality group. PASS belongs to neither.
    #[must_use]
    pub const fn parity(self) -> Option<Parity> {
        match self {
            PlayType::Pass => None,
            PlayType::Single | PlayType::ThreeOfKind => Some(Parity::Odd),
            PlayType::Pair | PlayType::FourOfKind => Some(Parity::Even),
        }
    }

    const fn table_index(self) -> Option<usize> {
        match self {
            PlayType::Pass => None,
            PlayType::Single => Some(0),
            PlayType::Pair => Some(1),
            PlayType::ThreeOfKind => Some(2),
            PlayType::FourOfKind => Some(3),
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayType::Pass => "PASS",
            PlayType::Single => "SINGLE",
            PlayType::Pair => "PAIR",
            PlayType::ThreeOfKind => "THREE_OF_KIND",
            PlayType::FourOfKind => "FOUR_OF_KIND",
        };
        f.write_str(name)
    }
}

/// Odd (1 and 3 cards) or even (2 and 4 cards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Odd,
    Even,
}

/// How a candidate type relates to the reference type on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precedence {
    /// Same type: decided by rank, then suit.
    Compare,
    /// Override: the candidate wins regardless of rank.
    Always,
    /// The candidate may not be played on this reference at all.
    Illegal,
}

use Precedence::{Always, Compare, Illegal};

/// Rows: candidate type. Columns: reference type. Order: Single, Pair, Three, Four.
const PRECEDENCE_TABLE: [[Precedence; 4]; 4] = [
    [Compare, Illegal, Illegal, Illegal],
    [Illegal, Compare, Illegal, Illegal],
    [Always, Illegal, Compare, Illegal],
    [Illegal, Always, Illegal, Compare],
];

/// Look up the precedence rule for `candidate` played onto `reference`.
///
/// PASS on either side is `Illegal`: a pass is never compared, and nobody is
/// asked to beat a pass.
#[must_use]
pub fn precedence(candidate: PlayType, reference: PlayType) -> Precedence {
    match (candidate.table_index(), reference.table_index()) {
        (Some(c), Some(r)) => PRECEDENCE_TABLE[c][r],
        _ => Illegal,
    }
}

/// A classified play. Cards are kept sorted ascending.
///
/// Only [`classify`] and [`Play::pass`] build plays, so a non-PASS play
/// always holds 1-4 distinct cards of one rank. Deserialization goes
/// through `classify` as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedPlay")]
pub struct Play {
    kind: PlayType,
    cards: SmallVec<[Card; 4]>,
}

/// Wire form of a [`Play`] before classification.
#[derive(Deserialize)]
struct UncheckedPlay {
    kind: PlayType,
    cards: Vec<Card>,
}

impl TryFrom<UncheckedPlay> for Play {
    type Error = GameError;

    fn try_from(raw: UncheckedPlay) -> Result<Self, Self::Error> {
        let play = classify(&raw.cards)?;
        if play.kind != raw.kind {
            return Err(GameError::invalid_combination(format!(
                "{} cards labelled {}",
                play.kind, raw.kind
            )));
        }
        Ok(play)
    }
}

impl Play {
    /// The zero-card sentinel.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            kind: PlayType::Pass,
            cards: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PlayType {
        self.kind
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.kind == PlayType::Pass
    }

    /// Rank-key: the shared rank. `None` for PASS.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.cards.first().map(|c| c.rank)
    }

    /// Suit-key: the highest suit among the cards. `None` for PASS.
    #[must_use]
    pub fn suit_key(&self) -> Option<Suit> {
        self.cards.last().map(|c| c.suit)
    }

    /// Highest card of the play.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.cards.is_empty() {
            f.write_str("[")?;
            for (i, card) in self.cards.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{card}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Classify a card set. Empty is PASS; otherwise 1-4 distinct cards of one rank.
pub fn classify(cards: &[Card]) -> Result<Play, GameError> {
    let kind = PlayType::from_count(cards.len()).ok_or_else(|| {
        GameError::invalid_combination(format!("{} cards (at most 4)", cards.len()))
    })?;

    let mut sorted: SmallVec<[Card; 4]> = cards.iter().copied().collect();
    sorted.sort_unstable();

    if let Some(first) = sorted.first() {
        if sorted.iter().any(|c| c.rank != first.rank) {
            return Err(GameError::invalid_combination("cards of differing ranks"));
        }
    }
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(GameError::invalid_combination("duplicate card"));
    }

    Ok(Play {
        kind,
        cards: sorted,
    })
}

/// Does `candidate` take the table from `reference`?
///
/// False both when the candidate loses and when the pairing is illegal;
/// use [`precedence`] to tell the two apart.
#[must_use]
pub fn beats(candidate: &Play, reference: &Play) -> bool {
    match precedence(candidate.kind, reference.kind) {
        Always => true,
        Illegal => false,
        Compare => {
            let key = |p: &Play| (p.rank(), p.suit_key());
            key(candidate) > key(reference)
        }
    }
}
