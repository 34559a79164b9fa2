//! Completed-run detection.
//!
//! A run is complete when a column ends in exactly thirteen cards that step
//! down the rank ladder from a King: King, Queen, Jester, 10 .. 2, Atlas.
//! The scan is pure; removal and the win counter live on the engine facade.

use crate::board::Board;
use crate::cards::{CardKind, Deck};
use crate::core::ids::ColumnId;

use super::config::RuleConfig;

/// Cards in a complete King-to-Atlas run.
pub const RUN_LENGTH: usize = 13;

/// Index at which a completed run starts in the column, if one has formed.
///
/// The run must be the column's suffix: exactly [`RUN_LENGTH`] cards remain
/// from the returned index to the top, the card there is a King, and every
/// adjacent pair steps down by one rank (which forces the topmost card to be
/// an Atlas). Under [`SuitMatching::Required`](super::SuitMatching::Required)
/// the run must also be single-suit. At most one run can complete per check.
#[must_use]
pub fn completed_run_start(
    deck: &Deck,
    board: &Board,
    rules: &RuleConfig,
    column: ColumnId,
) -> Option<usize> {
    let cards = board.column(column);
    let start = cards.len().checked_sub(RUN_LENGTH)?;

    if deck.get(cards[start]).kind() != CardKind::King {
        return None;
    }
    for pair in cards[start..].windows(2) {
        let below = deck.get(pair[0]);
        let above = deck.get(pair[1]);
        if !rules.sequence_step(above, below) {
            return None;
        }
    }
    Some(start)
}
