//! Deck composition and shuffling.
//!
//! Spider is played with two identical 52-card sets: number cards 2..=10 in
//! four suits plus Atlas, Jester, Queen, and King in four suits, 13 kinds in
//! all. The deck is shuffled once at game start and never reordered again;
//! from then on a card is referenced purely by its index into this sequence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ids::CardId;
use crate::core::rng::GameRng;

use super::info::{CardInfo, CardKind, Suit};

/// Total number of cards in play: two 52-card sets.
pub const DECK_SIZE: usize = 104;

/// The full card sequence for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardInfo>,
}

impl Deck {
    /// The canonical, unshuffled doubled-deck composition.
    #[must_use]
    pub fn sorted() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..2 {
            for value in 2..=10 {
                for suit in Suit::ALL {
                    cards.push(CardInfo::number(value, suit));
                }
            }
            for kind in [CardKind::Atlas, CardKind::Jester, CardKind::Queen, CardKind::King] {
                for suit in Suit::ALL {
                    cards.push(CardInfo::face(kind, suit));
                }
            }
        }
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// A uniformly shuffled deck.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::sorted();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck with a pre-arranged order, for rigged test layouts and
    /// replays.
    ///
    /// Panics unless `cards` is exactly the doubled-deck composition (104
    /// cards, every kind/value/suit combination twice). A wrong composition
    /// is a configuration error, not a recoverable condition.
    #[must_use]
    pub fn from_cards(cards: Vec<CardInfo>) -> Self {
        assert_eq!(cards.len(), DECK_SIZE, "a spider deck holds {DECK_SIZE} cards");

        let mut counts: FxHashMap<CardInfo, u32> = FxHashMap::default();
        for card in &cards {
            *counts.entry(*card).or_default() += 1;
        }
        for card in &Self::sorted().cards {
            let count = counts.get(card).copied().unwrap_or(0);
            assert_eq!(count, 2, "expected exactly two copies of {card}, found {count}");
        }

        Self { cards }
    }

    /// The identity of a card by its deck index.
    #[must_use]
    pub fn get(&self, card: CardId) -> &CardInfo {
        &self.cards[card.index()]
    }

    /// Number of cards in the deck (always [`DECK_SIZE`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the deck in index order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInfo> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count_by_identity(deck: &Deck) -> FxHashMap<CardInfo, u32> {
        let mut counts = FxHashMap::default();
        for card in deck.iter() {
            *counts.entry(*card).or_default() += 1;
        }
        counts
    }

    #[test]
    fn test_sorted_composition() {
        let deck = Deck::sorted();
        assert_eq!(deck.len(), DECK_SIZE);

        let counts = count_by_identity(&deck);
        // 13 kinds x 4 suits distinct identities, two copies each
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&count| count == 2));
    }

    #[test]
    fn test_shuffled_reorders_but_keeps_composition() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        assert_ne!(deck, Deck::sorted());
        assert_eq!(count_by_identity(&deck), count_by_identity(&Deck::sorted()));
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let deck1 = Deck::shuffled(&mut GameRng::new(7));
        let deck2 = Deck::shuffled(&mut GameRng::new(7));
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_from_cards_accepts_reordering() {
        let mut cards: Vec<_> = Deck::sorted().iter().copied().collect();
        cards.reverse();
        let deck = Deck::from_cards(cards);
        assert_eq!(deck.get(CardId(0)).kind(), CardKind::King);
    }

    #[test]
    #[should_panic(expected = "104 cards")]
    fn test_from_cards_rejects_short_deck() {
        let _ = Deck::from_cards(vec![CardInfo::number(2, Suit::Heart); 10]);
    }

    #[test]
    #[should_panic(expected = "exactly two copies")]
    fn test_from_cards_rejects_wrong_multiset() {
        let _ = Deck::from_cards(vec![CardInfo::number(2, Suit::Heart); DECK_SIZE]);
    }

    proptest! {
        #[test]
        fn prop_any_seed_deals_a_legal_deck(seed in any::<u64>()) {
            let deck = Deck::shuffled(&mut GameRng::new(seed));
            prop_assert_eq!(deck.len(), DECK_SIZE);

            let counts = count_by_identity(&deck);
            prop_assert_eq!(counts.len(), 52);
            prop_assert!(counts.values().all(|&count| count == 2));
        }
    }
}
