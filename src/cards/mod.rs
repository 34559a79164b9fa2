//! Card identity and deck composition.
//!
//! ## Key Types
//!
//! - `CardKind` / `Suit`: closed vocabularies
//! - `CardInfo`: immutable identity of one card, with its rank value
//! - `Deck`: the shuffled 104-card sequence that card ids index into

pub mod info;
pub mod deck;

pub use info::{CardInfo, CardKind, Suit};
pub use deck::{Deck, DECK_SIZE};
