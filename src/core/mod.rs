//! Core types: symbols, rows, board dimensions, RNG, configuration.
//!
//! Everything here is plain data. Game rules live in `rules`, and the
//! mutable game lives in `engine`.

pub mod symbol;
pub mod code;
pub mod config;
pub mod rng;

pub use symbol::Symbol;
pub use code::{Cells, Code, CodeError};
pub use config::{GameConfig, CODE_LENGTH, MAX_GUESSES, PALETTE_SIZE};
pub use rng::GameRng;
