//! Core engine types: identifiers, RNG, events, errors.
//!
//! Everything here is game-structure-agnostic plumbing; the actual solitaire
//! rules live in `rules` and `game`.

pub mod ids;
pub mod rng;
pub mod events;
pub mod errors;

pub use ids::{CardId, ColumnId, COLUMN_COUNT};
pub use rng::GameRng;
pub use events::{EventSink, GameEvent, MovedCards, NullSink, RecordingSink};
pub use errors::{GameError, Refusal};
