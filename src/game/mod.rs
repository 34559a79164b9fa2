//! The engine facade.
//!
//! [`Game`] is the single entry point collaborators drive: it owns the deck,
//! the board, the `Idle`/`Moving` press state machine, the completed-run
//! counter, and the dealing cursors. Every operation runs to completion
//! before the next one is accepted; there is no background work.

pub mod table;
pub mod deal;

pub use deal::INITIAL_DEAL_COUNT;
pub use table::{ActionRecord, Game, GameBuilder, Mode, PlayerAction, Press, RUNS_TO_WIN};
