//! Rule variant configuration.
//!
//! The game family disagrees on one point: whether a sequence that moves
//! together (and a completed run) must stay in one suit. The richest variant
//! ignores suit everywhere, an older one requires it. The difference is this
//! single predicate; nothing else in the engine changes between variants.

use serde::{Deserialize, Serialize};

use crate::cards::CardInfo;

/// Whether in-sequence cards must share a suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitMatching {
    /// Rank contiguity alone forms a sequence (default).
    #[default]
    Ignore,
    /// Sequences and completed runs must be single-suit.
    Required,
}

/// Variant knobs for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Applied to selection chains and completed-run detection. Placement
    /// onto a destination card never checks suit in either variant.
    pub suit_matching: SuitMatching,
}

impl RuleConfig {
    /// True when `upper` may sit directly on `base` within a held or
    /// completed sequence.
    #[must_use]
    pub fn sequence_step(&self, upper: &CardInfo, base: &CardInfo) -> bool {
        if !upper.follows(base) {
            return false;
        }
        match self.suit_matching {
            SuitMatching::Ignore => true,
            SuitMatching::Required => upper.suit() == base.suit(),
        }
    }
}
