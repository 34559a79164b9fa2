//! Deal orchestration: the opening tableau and supplemental rows.
//!
//! Two sequential state machines. The opening deal places 54 face-down
//! cards round-robin, one per tick, then turns up every column top; pacing
//! between ticks belongs to the presentation layer (one tick per timer
//! firing, typically). The supplemental deal places one face-up card on
//! every column at once, and only while every column is occupied and at
//! least a full row remains undealt.

use crate::core::errors::{GameError, Refusal};
use crate::core::events::{EventSink, GameEvent};
use crate::core::ids::{CardId, ColumnId, COLUMN_COUNT};
use crate::cards::DECK_SIZE;

use super::table::{Game, PlayerAction};

/// Cards in the opening tableau: four columns of six and six of five.
pub const INITIAL_DEAL_COUNT: usize = 54;

impl Game {
    /// Advance the opening deal by one card.
    ///
    /// The tick after the 54th card performs the finish step instead:
    /// every column's top card is turned face-up and
    /// [`GameEvent::InitialDealComplete`] fires. Returns whether the tick
    /// did anything; once the deal is complete this is a no-op returning
    /// `false`.
    pub fn deal_tick(&mut self, sink: &mut dyn EventSink) -> bool {
        if self.initial_deal_done {
            return false;
        }

        if self.deal_cursor < INITIAL_DEAL_COUNT {
            let card = CardId::new(self.deal_cursor as u8);
            let column = ColumnId::new(self.next_deal_column as u8);
            self.board_mut().place(card, column, false);
            self.deal_cursor += 1;
            self.next_deal_column = (self.next_deal_column + 1) % COLUMN_COUNT;
            sink.notify(GameEvent::CardDealt {
                card,
                column,
                revealed: false,
            });
            return true;
        }

        for column in ColumnId::all() {
            if let Some(top) = self.board().top_of(column) {
                if self.board_mut().reveal(top) {
                    sink.notify(GameEvent::CardRevealed { card: top });
                }
            }
        }
        self.initial_deal_done = true;
        sink.notify(GameEvent::InitialDealComplete);
        true
    }

    /// Drive the opening deal to completion in one call, for headless use.
    pub fn run_initial_deal(&mut self, sink: &mut dyn EventSink) {
        while self.deal_tick(sink) {}
    }

    /// Deal one face-up card onto every column, in column order.
    ///
    /// Refused while the opening deal is still running, while any column is
    /// empty, or once fewer than a full row of cards remains undealt; the
    /// last refusal is permanent. A pending selection survives the deal.
    pub fn request_supplemental_deal(&mut self, sink: &mut dyn EventSink) -> Result<(), GameError> {
        if !self.initial_deal_done {
            return Err(self.refuse(Refusal::DealInProgress.into(), sink));
        }
        if self.stock_exhausted {
            return Err(self.refuse(Refusal::StockExhausted.into(), sink));
        }
        if let Some(column) = ColumnId::all().find(|&c| self.board().is_column_empty(c)) {
            return Err(self.refuse(Refusal::ColumnEmpty(column).into(), sink));
        }
        if DECK_SIZE - self.deal_cursor < COLUMN_COUNT {
            self.stock_exhausted = true;
            return Err(self.refuse(Refusal::StockExhausted.into(), sink));
        }

        for column in ColumnId::all() {
            let card = CardId::new(self.deal_cursor as u8);
            self.board_mut().place(card, column, true);
            self.deal_cursor += 1;
            sink.notify(GameEvent::CardDealt {
                card,
                column,
                revealed: true,
            });
        }
        self.record(PlayerAction::SupplementalDeal);
        Ok(())
    }
}
