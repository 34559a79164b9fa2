//! # spider-core
//!
//! Rule engine for a two-deck spider solitaire card game.
//!
//! The crate owns deck composition, column layout, move legality, cascading
//! multi-card moves, completed-run detection, and supplemental dealing.
//! Rendering, animation, input capture, and timer pacing are external
//! collaborators: they call the operations on [`Game`] and react to the
//! [`GameEvent`]s pushed into an [`EventSink`].
//!
//! ## Design Principles
//!
//! 1. **Index identity**: a card is its deck index ([`CardId`], 0..103).
//!    Column membership is an ordered list of indices and per-card state
//!    lives in a separate map, so there are no card/column reference cycles.
//!
//! 2. **Pure rules, mutating facade**: the legality checks and the run scan
//!    in [`rules`] never mutate; all mutation funnels through [`Game`],
//!    which applies one operation at a time, to completion.
//!
//! 3. **Deterministic**: dealing is driven by a seedable ChaCha8 RNG. The
//!    same seed always produces the same game.
//!
//! ## Modules
//!
//! - `core`: identifiers, RNG, events, error taxonomy
//! - `cards`: card identity, the rank ladder, deck generation
//! - `board`: the ten-column tableau and per-card state
//! - `rules`: selection/destination legality and completed-run detection
//! - `game`: the engine facade (mode state machine, executor, dealing)

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, ColumnId, COLUMN_COUNT,
    GameRng,
    GameEvent, EventSink, NullSink, RecordingSink, MovedCards,
    Refusal, GameError,
};

pub use crate::cards::{CardInfo, CardKind, Suit, Deck, DECK_SIZE};

pub use crate::board::{Board, CardState};

pub use crate::rules::{RuleConfig, SuitMatching, RUN_LENGTH};

pub use crate::game::{
    Game, GameBuilder, Mode, Press,
    PlayerAction, ActionRecord,
    INITIAL_DEAL_COUNT, RUNS_TO_WIN,
};
