//! Card identity and the rank ladder.
//!
//! Sequencing uses a single numeric key, the **rank value**: Atlas = 0,
//! number cards 2..=10 keep their value, Jester = 11, Queen = 12, King = 13.
//! There is no rank-1 card; Atlas fills the ace slot, so on the ladder it
//! sits directly under the 2. A full run is the 13 ranks King down to Atlas.
//! Suit never enters the ladder; suit constraints are a separate, optional
//! rule (see [`crate::rules::SuitMatching`]).

use serde::{Deserialize, Serialize};

/// What kind of card this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Atlas,
    Jester,
    Queen,
    King,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamond,
    Club,
    Heart,
    Spade,
}

impl Suit {
    /// All four suits, in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];
}

/// Immutable identity of a single card.
///
/// The numeric value is only meaningful for `Number` cards and runs 2..=10;
/// face cards carry their rank through their kind alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInfo {
    kind: CardKind,
    numeric_value: u8,
    suit: Suit,
}

impl CardInfo {
    /// Create a number card.
    ///
    /// Panics if `value` is outside 2..=10.
    #[must_use]
    pub fn number(value: u8, suit: Suit) -> Self {
        assert!((2..=10).contains(&value), "number cards run 2..=10, got {value}");
        Self {
            kind: CardKind::Number,
            numeric_value: value,
            suit,
        }
    }

    /// Create a face card (Atlas, Jester, Queen, or King).
    ///
    /// Panics if `kind` is `Number`; number cards need a value.
    #[must_use]
    pub fn face(kind: CardKind, suit: Suit) -> Self {
        assert!(kind != CardKind::Number, "use CardInfo::number for number cards");
        Self {
            kind,
            numeric_value: 0,
            suit,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The numeric value (2..=10) for number cards, 0 otherwise.
    #[must_use]
    pub fn numeric_value(&self) -> u8 {
        self.numeric_value
    }

    /// The ordering key used for sequencing.
    #[must_use]
    pub fn rank_value(&self) -> u8 {
        match self.kind {
            CardKind::Atlas => 0,
            CardKind::Number => self.numeric_value,
            CardKind::Jester => 11,
            CardKind::Queen => 12,
            CardKind::King => 13,
        }
    }

    /// True when this card continues a descending sequence directly on
    /// `base`.
    ///
    /// The ladder has no rank 1, so Atlas (rank 0) follows a 2.
    #[must_use]
    pub fn follows(&self, base: &CardInfo) -> bool {
        match (self.rank_value(), base.rank_value()) {
            (0, 2) => true,
            (upper, lower) => upper + 1 == lower,
        }
    }
}

impl std::fmt::Display for CardInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Number => write!(f, "{} of {:?}s", self.numeric_value, self.suit),
            kind => write!(f, "{kind:?} of {:?}s", self.suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(CardInfo::face(CardKind::Atlas, Suit::Spade).rank_value(), 0);
        assert_eq!(CardInfo::number(2, Suit::Heart).rank_value(), 2);
        assert_eq!(CardInfo::number(10, Suit::Club).rank_value(), 10);
        assert_eq!(CardInfo::face(CardKind::Jester, Suit::Diamond).rank_value(), 11);
        assert_eq!(CardInfo::face(CardKind::Queen, Suit::Spade).rank_value(), 12);
        assert_eq!(CardInfo::face(CardKind::King, Suit::Heart).rank_value(), 13);
    }

    #[test]
    fn test_follows_walks_the_ladder() {
        let king = CardInfo::face(CardKind::King, Suit::Spade);
        let queen = CardInfo::face(CardKind::Queen, Suit::Heart);
        let jester = CardInfo::face(CardKind::Jester, Suit::Club);
        let ten = CardInfo::number(10, Suit::Diamond);

        assert!(queen.follows(&king));
        assert!(jester.follows(&queen));
        assert!(ten.follows(&jester));
        assert!(!ten.follows(&queen));
        assert!(!king.follows(&queen));
    }

    #[test]
    fn test_atlas_follows_a_two() {
        let two = CardInfo::number(2, Suit::Heart);
        let three = CardInfo::number(3, Suit::Heart);
        let atlas = CardInfo::face(CardKind::Atlas, Suit::Spade);

        assert!(atlas.follows(&two));
        assert!(!atlas.follows(&three));
        assert!(!two.follows(&atlas));
    }

    #[test]
    fn test_follows_ignores_suit() {
        let six_hearts = CardInfo::number(6, Suit::Heart);
        let five_spades = CardInfo::number(5, Suit::Spade);
        assert!(five_spades.follows(&six_hearts));
    }

    #[test]
    #[should_panic(expected = "number cards run 2..=10")]
    fn test_number_one_is_rejected() {
        let _ = CardInfo::number(1, Suit::Club);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardInfo::number(7, Suit::Heart)), "7 of Hearts");
        assert_eq!(
            format!("{}", CardInfo::face(CardKind::King, Suit::Spade)),
            "King of Spades"
        );
    }

    #[test]
    fn test_serialization() {
        let card = CardInfo::face(CardKind::Queen, Suit::Diamond);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
