//! The mutable game: state plus the engine that drives it.

mod game;
mod state;

pub use game::GameEngine;
pub use state::{BoardRow, GameState, GuessRecord, SnapshotError};
