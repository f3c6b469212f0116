//! Five-card hand and its category predicates.
//!
//! The predicates are deliberately loose:
//!
//! - [`Hand::has_n_kind`] never resets its run counter between ranks, so it
//!   answers "have at least `n - 1` neighbouring equal ranks been seen".
//! - [`Hand::is_straight`] only fails past the fifth card, which a five-card
//!   hand never reaches.
//! - [`Hand::is_two_pair`] is not implemented and always answers `false`.
//!
//! As a result [`Hand::kind`] only ever yields straight flush, four of a
//! kind, full house or straight for a well-formed hand.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::hand_engine::{
    errors::ParseError,
    kind::Kind,
    models::Card,
};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// An immutable five-card hand, sorted ascending by rank.
///
/// Ordering and equality compare the hands' [`Kind`] only: two different
/// flushes are equal.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Build a hand from five cards. Cards are stably sorted by rank, so
    /// cards of equal rank keep their given order. Duplicates are allowed.
    pub fn from_cards(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_by_key(|c| c.rank());
        Hand { cards }
    }

    /// Cards in ascending rank order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True once `n` neighbouring cards of equal rank have been counted.
    ///
    /// The counter starts at zero and is bumped for every card matching the
    /// tracked rank (the first card always matches). On a new rank only the
    /// tracked rank moves; the counter carries over.
    pub fn has_n_kind(&self, n: usize) -> bool {
        let mut rank = self.cards[0].rank();
        let mut count = 0;
        for card in &self.cards {
            if card.rank() == rank {
                count += 1;
            } else {
                rank = card.rank();
            }
            if count == n {
                return true;
            }
        }
        false
    }

    /// Not implemented: always `false`.
    pub fn is_two_pair(&self) -> bool {
        false
    }

    pub fn is_straight(&self) -> bool {
        let mut n = 0;
        for card in &self.cards {
            n += 1;
            let next = card.rank().next();
            let has_next = self.cards.iter().any(|c| c.rank() == next);
            if !has_next && n > HAND_SIZE {
                return false;
            }
        }
        true
    }

    /// Every card shares the suit of the lowest card.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// Category of this hand, first matching rule wins. Recomputed per call.
    pub fn kind(&self) -> Kind {
        let kind = if self.is_straight() && self.is_flush() {
            Kind::StraightFlush
        } else if self.has_n_kind(4) {
            Kind::FourOfAKind
        } else if self.has_n_kind(3) && self.has_n_kind(2) {
            Kind::FullHouse
        } else if self.is_flush() {
            Kind::Flush
        } else if self.is_straight() {
            Kind::Straight
        } else if self.has_n_kind(3) {
            Kind::ThreeOfAKind
        } else if self.is_two_pair() {
            Kind::TwoPair
        } else if self.has_n_kind(2) {
            Kind::Pair
        } else {
            Kind::HighCard
        };
        trace!("classified {} as {}", self, kind);
        kind
    }

    /// Compare by category only; no kicker tiebreak.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.kind().cmp(&other.kind())
    }
}

/// Parse a space-separated hand such as `"5C TD AH QS 2D"`.
impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = if s.is_empty() { Vec::new() } else { s.split(' ').collect() };
        if tokens.len() != HAND_SIZE {
            return Err(ParseError::CardCount(tokens.len()));
        }

        let cards = tokens
            .iter()
            .map(|t| t.parse::<Card>())
            .collect::<Result<Vec<Card>, ParseError>>()?;
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|v: Vec<Card>| ParseError::CardCount(v.len()))?;

        let hand = Hand::from_cards(cards);
        debug!("parsed hand {:?} -> {}", s, hand);
        Ok(hand)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", cards.join(" "))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_engine::models::{Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn cards_are_sorted_by_rank() {
        let h = hand("5C TD AH QS 2D");
        let ranks: Vec<Rank> = h.cards().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Two, Rank::Five, Rank::Ten, Rank::Queen, Rank::Ace]);
        assert_eq!(h.to_string(), "2D 5C TD QS AH");
    }

    #[test]
    fn sort_keeps_input_order_for_equal_ranks() {
        let h = hand("4C 2S 2D 2H 4D");
        let suits: Vec<Suit> = h.cards().iter().map(|c| c.suit()).collect();
        assert_eq!(
            suits,
            vec![Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Diamonds]
        );
    }

    #[test]
    fn n_kind_on_full_house_shape() {
        let h = hand("2S 2D 2H 4D 4C");
        assert!(h.has_n_kind(1));
        assert!(h.has_n_kind(2));
        assert!(h.has_n_kind(3));
        // counter carries over from the twos into the fours
        assert!(h.has_n_kind(4));
        assert!(!h.has_n_kind(5));
    }

    #[test]
    fn n_kind_counter_is_not_reset_between_ranks() {
        // two separate pairs reach a count of 3
        let h = hand("3C 3D 7H 7S KD");
        assert!(h.has_n_kind(2));
        assert!(h.has_n_kind(3));
        assert!(!h.has_n_kind(4));
    }

    #[test]
    fn n_kind_on_distinct_ranks() {
        let h = hand("2C 4D 6H 8S TD");
        assert!(h.has_n_kind(1));
        assert!(!h.has_n_kind(2));
        assert!(!h.has_n_kind(0));
    }

    #[test]
    fn flush_detection() {
        assert!(hand("2D 3D 5D 4D 6D").is_flush());
        assert!(!hand("2D 3D 5D 4D 6C").is_flush());
    }

    #[test]
    fn straight_holds_for_any_five_cards() {
        assert!(hand("2D 3D 5D 4D 6D").is_straight());
        assert!(hand("2D 3D 5D 9D KD").is_straight());
        assert!(hand("2S 2D 2H 4D 4C").is_straight());
    }

    #[test]
    fn two_pair_is_never_detected() {
        assert!(!hand("3C 3D 7H 7S KD").is_two_pair());
        assert!(!hand("2C 4D 6H 8S TD").is_two_pair());
    }

    #[test]
    fn kinds_of_sample_hands() {
        assert_eq!(hand("2D 3D 5D 4D 6D").kind(), Kind::StraightFlush);
        assert_eq!(hand("2D 3D 5D 9D KD").kind(), Kind::StraightFlush);
        assert_eq!(hand("2S 2D 2H 4D 4C").kind(), Kind::FourOfAKind);
        assert_eq!(hand("9S 9D 9H 9C 4C").kind(), Kind::FourOfAKind);
        assert_eq!(hand("3C 3D 7H 7S KD").kind(), Kind::FullHouse);
        assert_eq!(hand("3C 3D 3H 7S KD").kind(), Kind::FullHouse);
        assert_eq!(hand("3C 3D 5H 7S KD").kind(), Kind::Straight);
        assert_eq!(hand("5C TD AH QS 2D").kind(), Kind::Straight);
    }

    #[test]
    fn compare_uses_kind_only() {
        let sf = hand("2D 3D 5D 4D 6D");
        let other_sf = hand("7H 9H JH KH AH");
        let quads = hand("2S 2D 2H 4D 4C");
        assert_eq!(sf.compare(&other_sf), Ordering::Equal);
        assert_eq!(sf, other_sf);
        assert_eq!(sf.compare(&quads), Ordering::Greater);
        assert_eq!(quads.compare(&sf), Ordering::Less);
        assert!(quads < sf);
    }

    #[test]
    fn rejects_wrong_card_count() {
        assert_eq!("".parse::<Hand>().unwrap_err(), ParseError::CardCount(0));
        assert_eq!("2D 3D 5D 4D".parse::<Hand>().unwrap_err(), ParseError::CardCount(4));
        assert_eq!(
            "2D 3D 5D 4D 6D 7D".parse::<Hand>().unwrap_err(),
            ParseError::CardCount(6)
        );
    }

    #[test]
    fn rejects_bad_cards() {
        assert_eq!(
            "2D 3D XZ 4D 6D".parse::<Hand>().unwrap_err(),
            ParseError::UnknownRank("X".into())
        );
        assert_eq!(
            "2D 3D 5D  6D".parse::<Hand>().unwrap_err(),
            ParseError::MalformedCard("".into())
        );
    }

    #[test]
    fn duplicate_cards_are_accepted() {
        let h = hand("AS AS AS AS AS");
        assert_eq!(h.kind(), Kind::StraightFlush);
    }
}
