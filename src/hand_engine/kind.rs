use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Poker hand category.
///
/// Strength is defined by the explicit [`Kind::ALL`] table rather than by
/// variant declaration order, so reordering the variants cannot change how
/// hands compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
    HighCard,
}

impl Kind {
    /// Every kind, weakest first.
    pub const ALL: [Kind; 9] = [
        Kind::HighCard,
        Kind::Pair,
        Kind::TwoPair,
        Kind::ThreeOfAKind,
        Kind::Straight,
        Kind::Flush,
        Kind::FullHouse,
        Kind::FourOfAKind,
        Kind::StraightFlush,
    ];

    /// Position in [`Kind::ALL`]; 0 is high card, 8 is straight flush.
    pub fn strength(self) -> usize {
        Kind::ALL
            .iter()
            .position(|&k| k == self)
            .unwrap_or_default()
    }
}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::HighCard      => "high card",
            Kind::Pair          => "pair",
            Kind::TwoPair       => "two pair",
            Kind::ThreeOfAKind  => "three of a kind",
            Kind::Straight      => "straight",
            Kind::Flush         => "flush",
            Kind::FullHouse     => "full house",
            Kind::FourOfAKind   => "four of a kind",
            Kind::StraightFlush => "straight flush",
        };
        write!(f, "{}", s)
    }
}
