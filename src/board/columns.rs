//! Board model: column membership and per-card state.
//!
//! The board is a pure data structure. It tracks which cards sit in which
//! column and whether each is face-up, and it performs structural moves
//! atomically. It enforces no game rules: callers (the move executor and the
//! deal orchestrator) are responsible for only making structurally valid
//! calls, and rule legality is decided elsewhere.
//!
//! Columns are ordered bottom to top: index 0 is the deepest card, the last
//! element is the topmost and the only card new cards can land on.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::events::MovedCards;
use crate::core::ids::{CardId, ColumnId, COLUMN_COUNT};

/// Mutable state of one dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    /// Face-up? Only revealed cards can be selected.
    pub revealed: bool,
    /// The column currently holding the card.
    pub column: ColumnId,
}

/// The ten-column tableau.
///
/// A card id appears in exactly one column's sequence or in none (undealt,
/// or collected into a completed run). Per-card state lives in a map keyed
/// by the card's deck index, so cards and columns never reference each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: [Vec<CardId>; COLUMN_COUNT],
    cards: FxHashMap<CardId, CardState>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: std::array::from_fn(|_| Vec::new()),
            cards: FxHashMap::default(),
        }
    }

    // === Structural queries ===

    /// The cards of a column, bottom to top.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> &[CardId] {
        &self.columns[column.index()]
    }

    /// All columns, left to right.
    pub fn columns(&self) -> impl Iterator<Item = &[CardId]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// The topmost card of a column, if any.
    #[must_use]
    pub fn top_of(&self, column: ColumnId) -> Option<CardId> {
        self.columns[column.index()].last().copied()
    }

    /// Position of a card within its column (0 = bottom).
    #[must_use]
    pub fn position_in_column(&self, card: CardId) -> Option<usize> {
        let state = self.cards.get(&card)?;
        self.columns[state.column.index()]
            .iter()
            .position(|&c| c == card)
    }

    /// True iff the card is the last element of its column.
    #[must_use]
    pub fn is_topmost(&self, card: CardId) -> bool {
        self.cards
            .get(&card)
            .map_or(false, |state| self.top_of(state.column) == Some(card))
    }

    /// The state of a dealt card.
    #[must_use]
    pub fn state(&self, card: CardId) -> Option<&CardState> {
        self.cards.get(&card)
    }

    /// True iff the card is dealt and face-up.
    #[must_use]
    pub fn is_revealed(&self, card: CardId) -> bool {
        self.cards.get(&card).map_or(false, |state| state.revealed)
    }

    /// Is the card tracked on the board?
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains_key(&card)
    }

    #[must_use]
    pub fn is_column_empty(&self, column: ColumnId) -> bool {
        self.columns[column.index()].is_empty()
    }

    /// True iff every column holds at least one card.
    #[must_use]
    pub fn all_columns_occupied(&self) -> bool {
        self.columns.iter().all(|column| !column.is_empty())
    }

    /// Number of cards currently tracked.
    #[must_use]
    pub fn total_tracked(&self) -> usize {
        self.cards.len()
    }

    // === Mutation ===

    /// Deal a card onto the top of a column.
    ///
    /// Panics if the card is already on the board.
    pub fn place(&mut self, card: CardId, column: ColumnId, revealed: bool) {
        if self.cards.contains_key(&card) {
            panic!("{card} is already on the board");
        }
        self.cards.insert(card, CardState { revealed, column });
        self.columns[column.index()].push(card);
    }

    /// Turn a card face-up.
    ///
    /// Idempotent; returns whether the flag actually transitioned, so the
    /// caller can emit a reveal notification only on a real change.
    pub fn reveal(&mut self, card: CardId) -> bool {
        match self.cards.get_mut(&card) {
            Some(state) if !state.revealed => {
                state.revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Move the contiguous suffix of `from` starting at `start` onto the end
    /// of `to`, order preserved, and reassign each moved card's column.
    ///
    /// Returns the moved ids. The removal and append happen as one step;
    /// no observer can see a half-moved board.
    pub fn transfer(&mut self, from: ColumnId, start: usize, to: ColumnId) -> MovedCards {
        debug_assert_ne!(from, to, "transfer within a single column");

        let moved: MovedCards = self.columns[from.index()].drain(start..).collect();
        self.columns[to.index()].extend(moved.iter().copied());
        for &card in &moved {
            if let Some(state) = self.cards.get_mut(&card) {
                state.column = to;
            }
        }
        moved
    }

    /// Remove the suffix of a column from the board entirely.
    ///
    /// The removed cards leave tracking permanently (a collected run).
    /// Returns the removed ids, bottom to top.
    pub fn remove_suffix(&mut self, column: ColumnId, start: usize) -> MovedCards {
        let removed: MovedCards = self.columns[column.index()].drain(start..).collect();
        for &card in &removed {
            self.cards.remove(&card);
        }
        removed
    }
}
