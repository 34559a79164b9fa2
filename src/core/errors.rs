//! Error taxonomy.
//!
//! Two failure families, kept distinct on purpose:
//!
//! - [`Refusal`]: the player asked for something the rules forbid. Non-fatal;
//!   the engine reports it through the notification sink and the game
//!   continues with state untouched.
//! - [`GameError::UntrackedCard`]: the caller passed a card id that is not on
//!   the board. That is a bug in the calling layer, not a rule violation, so
//!   it is never forwarded to the presentation sink.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CardId, ColumnId};

/// Reason code for a refused player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refusal {
    /// The pressed card is still face-down.
    CardHidden(CardId),
    /// The cards stacked on the pressed card do not form a descending
    /// sequence, so they cannot travel together.
    SequenceBroken(CardId),
    /// The destination card has other cards on top of it.
    DestinationBuried(CardId),
    /// The moved card is not one rank below the destination.
    RankMismatch { moved: CardId, destination: CardId },
    /// A placement was attempted while nothing was selected.
    NoPendingSelection,
    /// Supplemental dealing requires every column to be occupied.
    ColumnEmpty(ColumnId),
    /// The opening deal has not finished yet.
    DealInProgress,
    /// Fewer than a full row of undealt cards remains.
    StockExhausted,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::CardHidden(card) => {
                write!(f, "{card} has not been revealed")
            }
            Refusal::SequenceBroken(card) => {
                write!(f, "the cards on top of {card} are not in sequence")
            }
            Refusal::DestinationBuried(card) => {
                write!(f, "{card} is buried and cannot take more cards")
            }
            Refusal::RankMismatch { moved, destination } => {
                write!(f, "{moved} does not continue the sequence on {destination}")
            }
            Refusal::NoPendingSelection => {
                write!(f, "no card is selected")
            }
            Refusal::ColumnEmpty(column) => {
                write!(f, "{column} is empty; more cards need every column occupied")
            }
            Refusal::DealInProgress => {
                write!(f, "the opening deal has not finished")
            }
            Refusal::StockExhausted => {
                write!(f, "not enough undealt cards remain for a full row")
            }
        }
    }
}

/// Error returned by the mutating operations on [`Game`](crate::game::Game).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// An illegal player action; reported to the sink, game continues.
    Illegal(Refusal),
    /// The card id is not tracked on the board (caller bug). The operation
    /// was aborted without mutating anything.
    UntrackedCard(CardId),
}

impl From<Refusal> for GameError {
    fn from(refusal: Refusal) -> Self {
        GameError::Illegal(refusal)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Illegal(refusal) => write!(f, "illegal action: {refusal}"),
            GameError::UntrackedCard(card) => {
                write!(f, "{card} is not tracked on the board")
            }
        }
    }
}

impl std::error::Error for GameError {}
