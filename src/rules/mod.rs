//! Move legality and run detection.
//!
//! Everything in this module is pure: the checks read the deck, the board,
//! and the rule configuration, and mutate nothing. The mutating halves of
//! each operation live on [`Game`](crate::game::Game).

pub mod config;
pub mod validator;
pub mod runs;

pub use config::{RuleConfig, SuitMatching};
pub use runs::{completed_run_start, RUN_LENGTH};
pub use validator::{check_destination, check_selection};
