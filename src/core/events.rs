//! Engine notifications.
//!
//! The engine reports the *logical* outcome of every operation the moment it
//! completes; the presentation layer is free to animate the result over time.
//! Collaborators receive events through the [`EventSink`] trait, which a
//! no-op stub satisfies for headless use.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::errors::Refusal;
use super::ids::{CardId, ColumnId};

/// Cards that travel together in one operation. A completed run is 13 cards,
/// so the common case never allocates.
pub type MovedCards = SmallVec<[CardId; 13]>;

/// Something observable happened on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card left the stock and landed on a column.
    CardDealt {
        card: CardId,
        column: ColumnId,
        revealed: bool,
    },
    /// The 54-card opening tableau is laid out and the column tops are up.
    InitialDealComplete,
    /// A face-down card was turned face-up.
    CardRevealed { card: CardId },
    /// A contiguous stack changed columns. `cards[i]` now sits at stack
    /// position `dest_start + i` of `to`.
    CardsMoved {
        cards: MovedCards,
        from: ColumnId,
        to: ColumnId,
        dest_start: usize,
    },
    /// A King-to-Atlas run left the board. `slot` is the 1-based value of
    /// the completed-run counter after collection.
    RunCompleted { slot: u8, cards: MovedCards },
    /// All eight runs have been collected.
    GameWon,
    /// A player action was refused; nothing changed.
    ActionRefused { reason: Refusal },
}

/// Receiver for [`GameEvent`]s.
///
/// The presentation layer implements this to drive animation and display.
/// Events arrive in the order the engine applied the underlying mutations.
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Sink that discards every event, for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Sink that keeps every event it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<GameEvent>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and return everything received so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn notify(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
