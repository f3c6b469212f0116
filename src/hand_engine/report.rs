use serde::{Deserialize, Serialize};

use crate::hand_engine::{hand::Hand, kind::Kind, models::Card};

/// Snapshot of every predicate the evaluator computes for one hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandReport {
    /// Canonical notation in sorted order, e.g. `"2D 3D 4D 5D 6D"`.
    pub hand: String,
    pub cards: Vec<Card>,
    pub pair: bool,
    pub three_of_a_kind: bool,
    pub four_of_a_kind: bool,
    pub two_pair: bool,
    pub straight: bool,
    pub flush: bool,
    pub kind: Kind,
    /// Position of `kind` in [`Kind::ALL`].
    pub strength: usize,
}

impl HandReport {
    pub fn from_hand(hand: &Hand) -> Self {
        let kind = hand.kind();
        HandReport {
            hand: hand.to_string(),
            cards: hand.cards().to_vec(),
            pair: hand.has_n_kind(2),
            three_of_a_kind: hand.has_n_kind(3),
            four_of_a_kind: hand.has_n_kind(4),
            two_pair: hand.is_two_pair(),
            straight: hand.is_straight(),
            flush: hand.is_flush(),
            kind,
            strength: kind.strength(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
