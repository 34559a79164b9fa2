//! Identifier newtypes.
//!
//! A card is referenced by its **deck index**: the position of its
//! [`CardInfo`](crate::cards::CardInfo) in the shuffled deck, stable for the
//! life of the game. Columns are referenced by their tableau position.

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 10;

/// Unique identifier for a card: its index into the shuffled deck (0..103).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID from a deck index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The deck index as a `usize`, for direct indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for CardId {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier for one of the ten tableau columns (0..9, left to right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnId(pub u8);

impl ColumnId {
    /// Create a column ID by tableau position.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The column position as a `usize`, for direct indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all column IDs, left to right.
    pub fn all() -> impl Iterator<Item = ColumnId> {
        (0..COLUMN_COUNT as u8).map(ColumnId::new)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_index() {
        let id = CardId::new(17);
        assert_eq!(id.index(), 17);
        assert_eq!(id.raw(), 17);
        assert_eq!(CardId::from(17u8), id);
    }

    #[test]
    fn test_column_all() {
        let all: Vec<_> = ColumnId::all().collect();
        assert_eq!(all.len(), COLUMN_COUNT);
        assert_eq!(all[0], ColumnId::new(0));
        assert_eq!(all[9], ColumnId::new(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", ColumnId(3)), "Column(3)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(103);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
