//! The tableau: ten ordered columns and per-card state.
//!
//! ## Key Types
//!
//! - `Board`: column membership and movement
//! - `CardState`: revealed flag and current column for one dealt card

pub mod columns;

pub use columns::{Board, CardState};
